//! # CP2K .wfn 重启文件解析器
//!
//! 按固定的记录顺序驱动 [`FortranRecordReader`]，把平铺的记录内容
//! 散布进 [`Wavefunction`] 模型。前面记录里的计数决定后面记录的
//! 长度，因此任何长度不符都在对应记录处立刻报 `FormatError`，
//! 不返回半成品模型。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `parsers/fortran.rs`, `models/wavefunction.rs`

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, WfnError};
use crate::models::Wavefunction;
use crate::parsers::fortran::FortranRecordReader;

/// 解析 .wfn 重启文件
pub fn parse_wfn_file(path: &Path) -> Result<Wavefunction> {
    let file = File::open(path).map_err(|e| WfnError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    // 文件句柄随 BufReader 在本次解析结束（含出错）时释放
    parse_wfn(BufReader::new(file))
}

/// 从任意字节流解析 .wfn 记录序列
pub fn parse_wfn<R: Read>(reader: R) -> Result<Wavefunction> {
    let mut records = FortranRecordReader::new(reader);

    // 形状记录: natom nspin nao_tot nset_max nshell_max
    let shape = records.read_int_record()?;
    expect_len(shape.len(), 5, "shape record")?;
    let natom = to_count(shape[0], "atom count")?;
    let nspin = to_count(shape[1], "spin channel count")?;
    let nao_tot = to_count(shape[2], "total atomic orbital count")?;
    let nset_max = to_count(shape[3], "max basis set count")?;
    let nshell_max = to_count(shape[4], "max shell count")?;
    let mut wfn = Wavefunction::new(natom, nspin, nao_tot, nset_max, nshell_max)?;

    // 每原子基组数
    let nset = records.read_int_record()?;
    expect_len(nset.len(), natom, "basis set count record")?;
    for (iatom, &v) in nset.iter().enumerate() {
        wfn.set_nset(iatom, to_count(v, "basis set count")?);
    }

    // 每 (原子, 基组) 壳层数
    let nshell = records.read_int_record()?;
    expect_len(nshell.len(), natom * nset_max, "shell count record")?;
    for (i, &v) in nshell.iter().enumerate() {
        let (iatom, iset) = wfn.unflatten_shell_index(i);
        wfn.set_nshell(iatom, iset, to_count(v, "shell count")?);
    }

    // 每 (原子, 基组, 壳层) 轨道数
    let nao = records.read_int_record()?;
    expect_len(
        nao.len(),
        natom * nset_max * nshell_max,
        "orbital count record",
    )?;
    for (i, &v) in nao.iter().enumerate() {
        let (iatom, iset, ishell) = wfn.unflatten_ao_index(i);
        wfn.set_nao(iatom, iset, ishell, to_count(v, "orbital count")?);
    }

    // 每个自旋通道：计数记录 + 本征值/占据数记录 + 逐轨道系数记录
    for ispin in 0..nspin {
        let counts = records.read_int_record()?;
        expect_len(counts.len(), 4, "spin channel count record")?;
        let nmo = to_count(counts[0], "molecular orbital count")?;
        let nocc = to_count(counts[1], "occupied orbital count")?;
        let nvirt = to_count(counts[2], "virtual orbital count")?;
        let nel = to_count(counts[3], "electron count")?;
        wfn.init_channel(ispin, nmo, nocc, nvirt, nel)?;

        // 前半本征值，后半占据数——这是格式约定
        let eig_occ = records.read_real_record()?;
        expect_len(eig_occ.len(), 2 * nmo, "eigenvalue/occupation record")?;
        let ch = &mut wfn.channels[ispin];
        ch.eigenvalues.copy_from_slice(&eig_occ[..nmo]);
        ch.occupations.copy_from_slice(&eig_occ[nmo..]);

        for imo in 0..nmo {
            let coeff = records.read_real_record()?;
            expect_len(coeff.len(), nao_tot, "coefficient record")?;
            wfn.coeff_row_mut(ispin, imo).copy_from_slice(&coeff);
        }
    }

    Ok(wfn)
}

/// 记录长度必须与前文计数一致
fn expect_len(got: usize, want: usize, what: &str) -> Result<()> {
    if got != want {
        return Err(WfnError::FormatError(format!(
            "{} has {} values, expected {}",
            what, got, want
        )));
    }
    Ok(())
}

/// 记录里的计数必须非负
fn to_count(value: i32, what: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| WfnError::FormatError(format!("negative {}: {}", what, value)))
}
