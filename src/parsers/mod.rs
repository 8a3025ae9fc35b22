//! # 解析器模块
//!
//! 提供 .wfn 二进制重启文件与 Kohn-Sham 矩阵文本日志的解析器。
//!
//! ## 依赖关系
//! - 使用 `models/` 数据模型
//! - 子模块: fortran, wfn, ks_log

pub mod fortran;
pub mod ks_log;
pub mod wfn;

pub use fortran::FortranRecordReader;
pub use ks_log::{
    detect_spin_polarization, split_spin_blocks, split_spin_blocks_file, SpinPolarization,
};
pub use wfn::{parse_wfn, parse_wfn_file};
