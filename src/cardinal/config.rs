//! 规范化器配置

use serde::{Deserialize, Serialize};

/// 规范化模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerMode {
    /// 自动模式 - 转换文本中的数字短语
    Auto,
    /// 原始模式 - 跳过全部转换
    Raw,
}

/// 文本规范化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// 规范化模式
    pub mode: NormalizerMode,
    /// 最小词数：分词后短于此的数字短语保持原文
    /// （保护 "one day"、"ten minutes" 这类日常表达中的孤立数字词）
    pub min_words: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            mode: NormalizerMode::Auto,
            min_words: 2,
        }
    }
}
