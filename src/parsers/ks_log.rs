//! # Kohn-Sham 矩阵日志拆分器
//!
//! CP2K 自旋极化计算打印的 Kohn-Sham 矩阵日志里，alpha 与 beta
//! 两块分别跟在各自的标记行之后。本模块按标记行扫描文本，把
//! 两块拆开，并提供按固定行距的分块工具。
//!
//! ```text
//!  KOHN-SHAM MATRIX FOR ALPHA SPIN
//!  <alpha 矩阵行 ...>
//!  KOHN-SHAM MATRIX FOR BETA SPIN
//!  <beta 矩阵行 ...>
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 无外部模块依赖

use std::fs;
use std::path::Path;

use crate::error::{Result, WfnError};

/// alpha 自旋块的标记行
const ALPHA_MARKER: &str = "KOHN-SHAM MATRIX FOR ALPHA SPIN";

/// beta 自旋块的标记行
const BETA_MARKER: &str = "KOHN-SHAM MATRIX FOR BETA SPIN";

/// 日志的自旋极化类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPolarization {
    /// alpha 与 beta 标记都出现
    SpinPolarized,
    /// 只出现一种标记
    Unpolarized,
}

/// 检查日志的自旋极化类型；两种标记都不出现时返回 None
pub fn detect_spin_polarization(content: &str) -> Option<SpinPolarization> {
    match (content.contains(ALPHA_MARKER), content.contains(BETA_MARKER)) {
        (true, true) => Some(SpinPolarization::SpinPolarized),
        (false, false) => None,
        _ => Some(SpinPolarization::Unpolarized),
    }
}

/// 按自旋标记把日志拆成 alpha/beta 两块
///
/// alpha 块是 alpha 标记行之后、beta 标记行之前的非空行；
/// beta 块是 beta 标记行之后的非空行。标记行本身不计入。
pub fn split_spin_blocks(content: &str) -> (Vec<String>, Vec<String>) {
    let mut alpha = Vec::new();
    let mut beta = Vec::new();

    // 0 = 标记前, 1 = alpha 块, 2 = beta 块
    let mut section = 0;
    for line in content.lines() {
        if line.contains(ALPHA_MARKER) {
            section = 1;
            continue;
        }
        if line.contains(BETA_MARKER) {
            section = 2;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        match section {
            1 => alpha.push(line.to_string()),
            2 => beta.push(line.to_string()),
            _ => {}
        }
    }

    (alpha, beta)
}

/// 从文件读取并按自旋拆分
pub fn split_spin_blocks_file(path: &Path) -> Result<(Vec<String>, Vec<String>)> {
    let content = fs::read_to_string(path).map_err(|e| WfnError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(split_spin_blocks(&content))
}

/// 从 start 行起按 stride 行分块；最后一块可以不足 stride 行
///
/// 矩阵按 "最大壳层数 + 1" 的固定行距打印，用本函数切回逐块。
pub fn chunk_lines(lines: &[String], stride: usize, start: usize) -> Vec<Vec<String>> {
    if stride == 0 {
        return Vec::new();
    }

    lines[start.min(lines.len())..]
        .chunks(stride)
        .map(|chunk| chunk.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLARIZED_LOG: &str = "\
 SCF WAVEFUNCTION OPTIMIZATION

 KOHN-SHAM MATRIX FOR ALPHA SPIN
 1 2 C 2s 0.1 0.2
 2 2 C 2p 0.3 0.4

 KOHN-SHAM MATRIX FOR BETA SPIN
 1 2 C 2s 0.5 0.6
 2 2 C 2p 0.7 0.8
";

    #[test]
    fn test_detect_spin_polarization() {
        assert_eq!(
            detect_spin_polarization(POLARIZED_LOG),
            Some(SpinPolarization::SpinPolarized)
        );
        assert_eq!(
            detect_spin_polarization(" KOHN-SHAM MATRIX FOR ALPHA SPIN\n 0.1\n"),
            Some(SpinPolarization::Unpolarized)
        );
        assert_eq!(detect_spin_polarization("no matrix dump here\n"), None);
    }

    #[test]
    fn test_split_spin_blocks() {
        let (alpha, beta) = split_spin_blocks(POLARIZED_LOG);

        // 标记行与空行不计入，标记前的行丢弃
        assert_eq!(alpha, vec![" 1 2 C 2s 0.1 0.2", " 2 2 C 2p 0.3 0.4"]);
        assert_eq!(beta, vec![" 1 2 C 2s 0.5 0.6", " 2 2 C 2p 0.7 0.8"]);
    }

    #[test]
    fn test_split_without_beta_block() {
        let (alpha, beta) =
            split_spin_blocks(" KOHN-SHAM MATRIX FOR ALPHA SPIN\n row a\n row b\n");

        assert_eq!(alpha.len(), 2);
        assert!(beta.is_empty());
    }

    #[test]
    fn test_chunk_lines() {
        let lines: Vec<String> = (0..7).map(|i| format!("line {}", i)).collect();

        let chunks = chunk_lines(&lines, 3, 0);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], vec!["line 0", "line 1", "line 2"]);
        // 最后一块不足 stride
        assert_eq!(chunks[2], vec!["line 6"]);

        let chunks = chunk_lines(&lines, 3, 1);
        assert_eq!(chunks[0], vec!["line 1", "line 2", "line 3"]);

        assert!(chunk_lines(&lines, 0, 0).is_empty());
        assert!(chunk_lines(&lines, 3, 10).is_empty());
    }
}
