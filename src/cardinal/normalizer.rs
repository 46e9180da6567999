//! 文本规范化器
//!
//! 在自由文本中定位英文数字短语并替换为阿拉伯数字，
//! 每处替换产生一条变更记录

use std::ops::Range;

use crate::cardinal::config::{NormalizerConfig, NormalizerMode};
use crate::cardinal::converter::CardinalConverter;
use crate::cardinal::tables::WordTables;
use crate::cardinal::tokenizer::Tokenizer;

/// 变更记录
#[derive(Debug, Clone)]
pub struct NormalizeChange {
    /// 在原始文本中的字节范围
    pub original_span: Range<usize>,
    /// 原始短语
    pub original_text: String,
    /// 替换后的数字
    pub normalized_text: String,
}

/// 规范化结果
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    /// 规范化后的文本
    pub text: String,
    /// 变更记录列表
    pub changes: Vec<NormalizeChange>,
}

/// 文本中的一个词及其字节范围
#[derive(Debug, Clone, Copy)]
struct WordSpan {
    start: usize,
    end: usize,
}

/// 数字短语规范化器
pub struct NumberNormalizer {
    config: NormalizerConfig,
}

impl NumberNormalizer {
    /// 使用给定配置创建规范化器
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// 处理文本
    ///
    /// 找出所有由数字词组成的最长连续短语（允许短语内部的 "and" 和连字符），
    /// 逐一转换为数字。转换失败或短于 `min_words` 的短语保持原文。
    /// 词与词之间只有行内空白时才属于同一短语；标点或换行结束当前短语。
    pub fn process(&self, text: &str) -> NormalizeResult {
        // 原始模式：直接返回
        if self.config.mode == NormalizerMode::Raw {
            return NormalizeResult {
                text: text.to_string(),
                changes: Vec::new(),
            };
        }

        let words = Self::split_words(text);

        let mut result = String::with_capacity(text.len());
        let mut changes = Vec::new();
        let mut copied_up_to = 0;

        let mut i = 0;
        while i < words.len() {
            if !Self::is_numeric_word(word_text(text, &words[i])) {
                i += 1;
                continue;
            }

            // 从 words[i] 开始扩展数字短语：
            // 后续的数字词直接并入；"and" 仅当其后还有数字词时并入。
            // 相邻两词必须仅以行内空白分隔，否则是两个独立短语
            let mut last = i;
            let mut j = i + 1;
            while j < words.len() {
                if !Self::joinable(text, &words[j - 1], &words[j]) {
                    break;
                }
                let word = word_text(text, &words[j]);
                if Self::is_numeric_word(word) {
                    last = j;
                    j += 1;
                } else if word.eq_ignore_ascii_case("and")
                    && j + 1 < words.len()
                    && Self::joinable(text, &words[j], &words[j + 1])
                    && Self::is_numeric_word(word_text(text, &words[j + 1]))
                {
                    last = j + 1;
                    j += 2;
                } else {
                    break;
                }
            }

            let span = words[i].start..words[last].end;
            let phrase = &text[span.clone()];

            // 守卫：过短的短语多半是日常用语（"one day"），保持原文
            if Tokenizer::tokenize(phrase).len() >= self.config.min_words {
                if let Ok(value) = CardinalConverter::convert(phrase) {
                    let digits = value.to_string();
                    tracing::debug!("数字短语转换: \"{}\" → \"{}\"", phrase, digits);

                    result.push_str(&text[copied_up_to..span.start]);
                    result.push_str(&digits);
                    copied_up_to = span.end;

                    changes.push(NormalizeChange {
                        original_span: span,
                        original_text: phrase.to_string(),
                        normalized_text: digits,
                    });
                }
            }

            i = last + 1;
        }

        result.push_str(&text[copied_up_to..]);

        NormalizeResult {
            text: result,
            changes,
        }
    }

    /// 当前配置
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// 设置模式
    pub fn set_mode(&mut self, mode: NormalizerMode) {
        self.config.mode = mode;
    }

    /// 按词切分文本（词 = ASCII 字母与连字符的最长连续段）
    fn split_words(text: &str) -> Vec<WordSpan> {
        let mut words = Vec::new();
        let mut start = None;

        for (pos, ch) in text.char_indices() {
            let is_word_char = ch.is_ascii_alphabetic() || ch == '-';
            match (start, is_word_char) {
                (None, true) => start = Some(pos),
                (Some(s), false) => {
                    words.push(WordSpan { start: s, end: pos });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            words.push(WordSpan {
                start: s,
                end: text.len(),
            });
        }

        words
    }

    /// 相邻两词能否并入同一短语：间隔必须全为行内空白（不含换行）
    fn joinable(text: &str, prev: &WordSpan, next: &WordSpan) -> bool {
        text[prev.end..next.start]
            .chars()
            .all(|ch| ch.is_whitespace() && ch != '\n' && ch != '\r')
    }

    /// 检查一个词是否为纯数字词（连字符复合词要求每一段都是数字词）
    fn is_numeric_word(word: &str) -> bool {
        let mut any = false;
        for part in word.split('-').filter(|part| !part.is_empty()) {
            if WordTables::classify(&part.to_lowercase()).is_none() {
                return false;
            }
            any = true;
        }
        any
    }
}

impl Default for NumberNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

fn word_text<'a>(text: &'a str, span: &WordSpan) -> &'a str {
    &text[span.start..span.end]
}
