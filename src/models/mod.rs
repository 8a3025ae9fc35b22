//! # 数据模型模块
//!
//! 定义波函数文件内容的统一内存模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `spin/` 使用
//! - 子模块: wavefunction

pub mod wavefunction;

pub use wavefunction::{SpinChannel, Wavefunction};
