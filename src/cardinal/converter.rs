//! 英文基数词转换模块
//!
//! 将英文基数词短语转换为其表示的整数
//!
//! 支持：zero ~ nineteen, twenty, thirty, ..., ninety, hundred, thousand, million，
//! 可选连接词 "and"，连字符复合词（"eighty-three"），大小写不敏感。
//! 取值范围 [0, 1000000]。

use crate::cardinal::evaluator::Evaluator;
use crate::cardinal::tables::WordTables;
use crate::cardinal::tokenizer::Tokenizer;
use crate::error::{WordnumError, WordnumResult};

/// 英文基数词转换器
pub struct CardinalConverter;

impl CardinalConverter {
    /// 将英文基数词短语转换为整数
    ///
    /// # 参数
    /// - `text`: 基数词短语（例如："seven hundred eighty-three thousand nine hundred and nineteen"）
    ///
    /// # 返回
    /// - `Ok(u64)`: 短语表示的整数
    /// - `Err`: 输入为空或含有未知词
    pub fn convert(text: &str) -> WordnumResult<u64> {
        let words = Tokenizer::tokenize(text);
        if words.is_empty() {
            return Err(WordnumError::EmptyPhrase);
        }

        Evaluator::evaluate(&words)
    }

    /// 检查文本是否为有效的英文基数词短语
    pub fn is_cardinal_phrase(text: &str) -> bool {
        let words = Tokenizer::tokenize(text);
        !words.is_empty() && words.iter().all(|word| WordTables::classify(word).is_some())
    }
}
