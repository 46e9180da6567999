//! 求值模块
//!
//! 将词序列折叠为其表示的整数
//!
//! 状态机：`current` 累积当前组（下一个 thousand/million 之下的部分），
//! `total` 累积已冲刷的组。任意时刻已处理部分的数值恒等于 `total + current`。

use crate::cardinal::tables::{WordClass, WordTables};
use crate::error::{WordnumError, WordnumResult};

/// 累加器状态
///
/// 字段公开，便于单独验证冲刷不变量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    /// 当前组的值（尚未冲刷进 total 的部分）
    pub current: u64,
    /// 已完成组的和
    pub total: u64,
}

impl Accumulator {
    /// 创建空累加器
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一个词
    ///
    /// - 基础数字 / 十位数：加进 `current`（语法保证十位词后不会再跟十位词，
    ///   跟随的个位词作为独立 token 到达，普通加法即正确："twenty" "one" → 21）
    /// - 倍率词：`current` 乘以倍率。thousand/million 是组边界，
    ///   冲刷进 `total` 并清零 `current`；hundred 不冲刷，
    ///   留在组内以便后续十位/个位继续累加
    pub fn push(&mut self, class: WordClass) {
        match class {
            WordClass::Unit(value) | WordClass::Tens(value) => {
                self.current += value;
            }
            WordClass::Scale(scale) => {
                self.current *= scale;
                if scale >= 1_000 {
                    self.total += self.current;
                    self.current = 0;
                }
            }
        }
    }

    /// 当前表示的数值（含未冲刷的组）
    pub fn value(&self) -> u64 {
        self.total + self.current
    }
}

/// 词序列求值器
pub struct Evaluator;

impl Evaluator {
    /// 从左到右求值整个词序列
    ///
    /// 词必须已由 Tokenizer 规范化。不在词表中的词返回
    /// `WordnumError::UnknownWord`；越界组合（如连续倍率词）不做校验。
    pub fn evaluate(words: &[String]) -> WordnumResult<u64> {
        let mut acc = Accumulator::new();

        for word in words {
            let class = WordTables::classify(word)
                .ok_or_else(|| WordnumError::UnknownWord(word.clone()))?;
            acc.push(class);
        }

        Ok(acc.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cardinal::tokenizer::Tokenizer;

    fn eval(text: &str) -> u64 {
        Evaluator::evaluate(&Tokenizer::tokenize(text)).unwrap()
    }

    #[test]
    fn test_units() {
        assert_eq!(eval("zero"), 0);
        assert_eq!(eval("one"), 1);
        assert_eq!(eval("nineteen"), 19);
    }

    #[test]
    fn test_tens_and_compounds() {
        assert_eq!(eval("twenty"), 20);
        assert_eq!(eval("twenty one"), 21);
        assert_eq!(eval("ninety nine"), 99);
    }

    #[test]
    fn test_hundreds_stay_in_group() {
        // hundred 不冲刷：后续十位/个位继续加进同一组
        assert_eq!(eval("two hundred forty six"), 246);
        assert_eq!(eval("nine hundred ninety nine"), 999);
    }

    #[test]
    fn test_thousand_flushes() {
        assert_eq!(eval("one thousand"), 1_000);
        assert_eq!(eval("one thousand two hundred thirty four"), 1_234);
        assert_eq!(
            eval("seven hundred eighty three thousand nine hundred nineteen"),
            783_919
        );
    }

    #[test]
    fn test_million_boundary() {
        assert_eq!(eval("one million"), 1_000_000);
    }

    #[test]
    fn test_unknown_word() {
        let words = Tokenizer::tokenize("twenty splendid");
        let err = Evaluator::evaluate(&words).unwrap_err();
        assert!(matches!(err, WordnumError::UnknownWord(w) if w == "splendid"));
    }

    #[test]
    fn test_accumulator_invariant() {
        // 每一步之后 total + current 都等于已处理前缀的数值
        let words = Tokenizer::tokenize("seven hundred eighty three thousand nine hundred nineteen");
        let expected_prefix = [7, 700, 780, 783, 783_000, 783_009, 783_900, 783_919];
        assert_eq!(words.len(), expected_prefix.len());

        let mut acc = Accumulator::new();
        for (word, expected) in words.iter().zip(expected_prefix) {
            acc.push(WordTables::classify(word).unwrap());
            assert_eq!(acc.value(), expected);
        }
    }

    #[test]
    fn test_accumulator_flush_state() {
        // thousand 之后组已冲刷：current 清零，total 持有组值
        let mut acc = Accumulator::new();
        for word in Tokenizer::tokenize("seven hundred eighty three thousand") {
            acc.push(WordTables::classify(&word).unwrap());
        }
        assert_eq!(acc.total, 783_000);
        assert_eq!(acc.current, 0);

        // hundred 之后组未冲刷：值仍全部在 current
        let mut acc = Accumulator::new();
        for word in Tokenizer::tokenize("two hundred") {
            acc.push(WordTables::classify(&word).unwrap());
        }
        assert_eq!(acc.total, 0);
        assert_eq!(acc.current, 200);
    }

    #[test]
    fn test_empty_sequence_is_zero() {
        assert_eq!(Evaluator::evaluate(&[]).unwrap(), 0);
    }
}
