//! # 自旋派生操作模块
//!
//! 对已有 [`crate::models::Wavefunction`] 的两个原位派生操作：
//! 电子占据推导与开壳层扩展。
//!
//! ## 依赖关系
//! - 使用 `models/` 数据模型
//! - 子模块: occupation, openshell

pub mod occupation;
pub mod openshell;

pub use occupation::derive_occupations;
pub use openshell::make_open_shell;
