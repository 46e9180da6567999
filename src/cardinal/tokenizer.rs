//! Tokenizer - 短语规范化分词器
//!
//! 将原始短语规范化为小写词序列，为求值做准备
//!
//! 规则：
//! - 全文小写
//! - 连字符视为空格（"eighty-three" 拆成两个独立词）
//! - 剔除连接词 "and"（无数值含义）
//! - 按空白分词，丢弃空词

/// 短语分词器
pub struct Tokenizer;

impl Tokenizer {
    /// 将输入短语规范化为词序列
    ///
    /// 输出的每个词都是非空小写字符串，且不含 "and"。
    /// 幂等：对输出重新分词得到相同序列。
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .replace('-', " ")
            .split_whitespace()
            .filter(|word| *word != "and")
            .map(str::to_string)
            .collect()
    }
}
