//! Wordnum Core Engine
//!
//! 英文基数词转阿拉伯数字核心库

#![warn(rust_2018_idioms)]

pub mod cardinal;
pub mod error;

// Re-export key types
pub use cardinal::{
    is_cardinal_phrase, words_to_number, Accumulator, CardinalConverter, NormalizeChange,
    NormalizeResult, NormalizerConfig, NormalizerMode, NumberNormalizer, Tokenizer, WordClass,
    WordTables,
};
pub use error::{WordnumError, WordnumResult};

/// 初始化日志系统
///
/// 生产模式: 静默运行
/// 调试模式 (--features debug-logs): 完整日志，级别由 WORDNUM_LOG 控制
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_env("WORDNUM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 生产模式: 不启用日志
        // 如需日志，请使用 --features debug-logs 编译
    }
}
