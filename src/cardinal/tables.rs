//! 词表模块
//!
//! 三张固定词表：基础数字（0-19）、十位数（20-90）、倍率词（hundred/thousand/million）
//!
//! 词表不相交，进程启动后不可变

/// 词类
///
/// 每个合法的数字词恰好属于一张词表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// 基础数字 0-19（含 teen 词）
    Unit(u64),
    /// 十位数 20, 30, ..., 90
    Tens(u64),
    /// 倍率词 100 / 1000 / 1000000
    Scale(u64),
}

impl WordClass {
    /// 词的数值
    pub fn value(self) -> u64 {
        match self {
            WordClass::Unit(v) | WordClass::Tens(v) | WordClass::Scale(v) => v,
        }
    }
}

/// 词表查询器
pub struct WordTables;

impl WordTables {
    /// 查询一个已规范化（小写）的词属于哪张词表
    ///
    /// 连接词 "and" 不属于任何词表，由 Tokenizer 在上游剔除
    pub fn classify(word: &str) -> Option<WordClass> {
        let class = match word {
            // 基础数字 0-19
            "zero" => WordClass::Unit(0),
            "one" => WordClass::Unit(1),
            "two" => WordClass::Unit(2),
            "three" => WordClass::Unit(3),
            "four" => WordClass::Unit(4),
            "five" => WordClass::Unit(5),
            "six" => WordClass::Unit(6),
            "seven" => WordClass::Unit(7),
            "eight" => WordClass::Unit(8),
            "nine" => WordClass::Unit(9),
            "ten" => WordClass::Unit(10),
            "eleven" => WordClass::Unit(11),
            "twelve" => WordClass::Unit(12),
            "thirteen" => WordClass::Unit(13),
            "fourteen" => WordClass::Unit(14),
            "fifteen" => WordClass::Unit(15),
            "sixteen" => WordClass::Unit(16),
            "seventeen" => WordClass::Unit(17),
            "eighteen" => WordClass::Unit(18),
            "nineteen" => WordClass::Unit(19),

            // 十位数 20-90
            "twenty" => WordClass::Tens(20),
            "thirty" => WordClass::Tens(30),
            "forty" => WordClass::Tens(40),
            "fifty" => WordClass::Tens(50),
            "sixty" => WordClass::Tens(60),
            "seventy" => WordClass::Tens(70),
            "eighty" => WordClass::Tens(80),
            "ninety" => WordClass::Tens(90),

            // 倍率词
            "hundred" => WordClass::Scale(100),
            "thousand" => WordClass::Scale(1_000),
            "million" => WordClass::Scale(1_000_000),

            _ => return None,
        };

        Some(class)
    }
}
