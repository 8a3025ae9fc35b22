//! # Wfnkit - CP2K 波函数文件工具箱
//!
//! 读取 CP2K 的 .wfn 重启文件（Fortran 顺序无格式记录），重建基组结构、
//! 分子轨道、占据数与展开系数的内存模型，并提供电子占据推导与
//! 开壳层扩展两个派生操作。
//!
//! ## 功能
//! - `parsers::wfn` - .wfn 二进制重启文件解析
//! - `parsers::ks_log` - Kohn-Sham 矩阵日志按自旋拆分
//! - `spin::occupation` - 由电荷/多重度推导各通道电子数与占据
//! - `spin::openshell` - 限制性波函数扩展为开壳层表示
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── models/     (波函数数据模型)
//!   ├── parsers/    (二进制与文本解析器)
//!   │     └── fortran  (顺序记录读取)
//!   ├── spin/       (自旋相关派生操作)
//!   └── error.rs    (错误处理)
//! ```

pub mod error;
pub mod models;
pub mod parsers;
pub mod spin;

pub use error::{Result, WfnError};
pub use models::{SpinChannel, Wavefunction};
pub use parsers::{parse_wfn, parse_wfn_file};
pub use spin::{derive_occupations, make_open_shell};
