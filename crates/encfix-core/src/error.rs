//! 错误类型
use std::path::PathBuf;

use thiserror::Error;

/// 库内统一错误。歧义编码不是错误，见 `FileOutcome::Ambiguous`。
#[derive(Debug, Error)]
pub enum FixError {
    /// 运行时不认识旧式编码标签（启动期致命）
    #[error("unknown encoding label: {0}")]
    EncodingUnavailable(String),

    /// 旧式编码不是单字节编码（UTF-16、replacement 等；启动期致命）
    #[error("legacy encoding {0} is not a single-byte encoding")]
    NotSingleByte(&'static str),

    /// 字符在指定编码下无法表示（启动期致命）
    #[error("character {ch:?} cannot be represented in {encoding}")]
    Unrepresentable { ch: char, encoding: &'static str },

    #[error("invalid config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory traversal failed")]
    Walk(#[from] walkdir::Error),

    #[error("failed to write report")]
    Report(#[from] serde_json::Error),

    #[error("failed to write output")]
    Output(#[source] std::io::Error),
}

impl FixError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixError::Io { path: path.into(), source }
    }
}
