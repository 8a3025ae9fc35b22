//! # 统一错误处理模块
//!
//! 定义 Wfnkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Wfnkit 统一错误类型
#[derive(Error, Debug)]
pub enum WfnError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while reading record: {0}")]
    IoError(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 记录流格式错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed record stream: {0}")]
    FormatError(String),

    // ─────────────────────────────────────────────────────────────
    // 电子组态错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid electron configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, WfnError>;
