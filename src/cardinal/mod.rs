//! Cardinal 模块
//!
//! 英文基数词处理：分词、词表、求值、整篇文本规范化

pub mod config;
pub mod converter;
pub mod evaluator;
pub mod normalizer;
pub mod tables;
pub mod tokenizer;

// 导出核心类型
pub use config::{NormalizerConfig, NormalizerMode};
pub use converter::CardinalConverter;
pub use evaluator::{Accumulator, Evaluator};
pub use normalizer::{NormalizeChange, NormalizeResult, NumberNormalizer};
pub use tables::{WordClass, WordTables};
pub use tokenizer::Tokenizer;

use crate::error::WordnumResult;

/// 将英文基数词短语转换为其表示的整数
///
/// 对外的唯一核心操作，等价于 [`CardinalConverter::convert`]。
///
/// # 示例
/// ```
/// let n = wordnum_core::words_to_number("two hundred forty-six").unwrap();
/// assert_eq!(n, 246);
/// ```
pub fn words_to_number(text: &str) -> WordnumResult<u64> {
    CardinalConverter::convert(text)
}

/// 检查文本是否为有效的英文基数词短语
pub fn is_cardinal_phrase(text: &str) -> bool {
    CardinalConverter::is_cardinal_phrase(text)
}
