//! # 波函数数据模型
//!
//! 对应 CP2K .wfn 重启文件内容的内存模型：标量形状、每原子基组结构、
//! 每自旋通道的分子轨道数据。
//!
//! ## .wfn 记录布局
//! ```text
//! natom nspin nao_tot nset_max nshell_max   # 形状记录 (5 个整数)
//! nset[natom]                               # 每原子基组数
//! nshell[natom*nset_max]                    # 每 (原子,基组) 壳层数
//! nao[natom*nset_max*nshell_max]            # 每 (原子,基组,壳层) 轨道数
//! 对每个自旋通道:
//!   nmo nocc nvirt nel                      # 通道计数 (4 个整数)
//!   eigen[nmo] ++ occup[nmo]                # 本征值与占据数合并记录
//!   coeff[nao_tot] × nmo                    # 每个轨道一条系数记录
//! ```
//!
//! 基组结构与系数都用连续平铺数组存储，索引分解（divmod）集中在
//! 本模块的访问器里完成。
//!
//! ## 依赖关系
//! - 被 `parsers/wfn.rs`, `spin/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

use crate::error::{Result, WfnError};

/// 单个自旋通道的分子轨道数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinChannel {
    /// 分子轨道数
    pub nmo: usize,

    /// 占据轨道数
    pub nocc: usize,

    /// 虚轨道数
    pub nvirt: usize,

    /// 电子数
    pub nel: usize,

    /// 每个分子轨道的本征值 (长度 = nmo)
    pub eigenvalues: Vec<f64>,

    /// 每个分子轨道的占据数 (长度 = nmo)
    pub occupations: Vec<f64>,

    /// 展开系数，按轨道逐行平铺 (长度 = nmo * nao_tot)
    pub coefficients: Vec<f64>,
}

/// 波函数内存模型
///
/// 标量形状在构造时固定；基组结构数组随构造零初始化，
/// 自旋通道经 [`Wavefunction::init_channel`] 按序分配。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wavefunction {
    /// 原子数
    pub natom: usize,

    /// 自旋通道数 (1 = 限制性, 2 = 非限制性)
    pub nspin: usize,

    /// 原子轨道总数
    pub nao_tot: usize,

    /// 每原子最大基组数
    pub nset_max: usize,

    /// 每基组最大壳层数
    pub nshell_max: usize,

    /// 每原子基组数 (长度 = natom)
    nset: Vec<usize>,

    /// 每 (原子, 基组) 壳层数，平铺 (长度 = natom * nset_max)
    nshell: Vec<usize>,

    /// 每 (原子, 基组, 壳层) 轨道数，平铺
    /// (长度 = natom * nset_max * nshell_max)
    nao: Vec<usize>,

    /// 自旋通道数据，按通道序填充 (长度 <= nspin)
    pub channels: Vec<SpinChannel>,
}

impl Wavefunction {
    /// 由形状记录的五个标量构造模型，基组结构数组零初始化
    pub fn new(
        natom: usize,
        nspin: usize,
        nao_tot: usize,
        nset_max: usize,
        nshell_max: usize,
    ) -> Result<Self> {
        if nspin != 1 && nspin != 2 {
            return Err(WfnError::FormatError(format!(
                "spin channel count must be 1 or 2, got {}",
                nspin
            )));
        }

        Ok(Wavefunction {
            natom,
            nspin,
            nao_tot,
            nset_max,
            nshell_max,
            nset: vec![0; natom],
            nshell: vec![0; natom * nset_max],
            nao: vec![0; natom * nset_max * nshell_max],
            channels: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────
    // 基组结构访问器
    // ─────────────────────────────────────────────────────────────

    /// 某原子的基组数
    pub fn nset(&self, iatom: usize) -> usize {
        self.nset[iatom]
    }

    pub fn set_nset(&mut self, iatom: usize, n: usize) {
        self.nset[iatom] = n;
    }

    /// 某 (原子, 基组) 的壳层数
    pub fn nshell(&self, iatom: usize, iset: usize) -> usize {
        self.nshell[iatom * self.nset_max + iset]
    }

    pub fn set_nshell(&mut self, iatom: usize, iset: usize, n: usize) {
        self.nshell[iatom * self.nset_max + iset] = n;
    }

    /// 某 (原子, 基组, 壳层) 的原子轨道数
    pub fn nao(&self, iatom: usize, iset: usize, ishell: usize) -> usize {
        self.nao[(iatom * self.nset_max + iset) * self.nshell_max + ishell]
    }

    pub fn set_nao(&mut self, iatom: usize, iset: usize, ishell: usize, n: usize) {
        self.nao[(iatom * self.nset_max + iset) * self.nshell_max + ishell] = n;
    }

    /// 壳层计数记录的平铺索引分解: i -> (iatom, iset)
    pub fn unflatten_shell_index(&self, i: usize) -> (usize, usize) {
        (i / self.nset_max, i % self.nset_max)
    }

    /// 轨道计数记录的平铺索引分解: i -> (iatom, iset, ishell)
    ///
    /// 先按 nset_max * nshell_max 切出原子，再按 nshell_max 切出基组。
    pub fn unflatten_ao_index(&self, i: usize) -> (usize, usize, usize) {
        let per_atom = self.nset_max * self.nshell_max;
        let (iatom, rest) = (i / per_atom, i % per_atom);
        (iatom, rest / self.nshell_max, rest % self.nshell_max)
    }

    // ─────────────────────────────────────────────────────────────
    // 自旋通道
    // ─────────────────────────────────────────────────────────────

    /// 按序分配并零初始化一个自旋通道
    ///
    /// 每个通道只初始化一次，且必须在写入该通道数据之前调用。
    pub fn init_channel(
        &mut self,
        ispin: usize,
        nmo: usize,
        nocc: usize,
        nvirt: usize,
        nel: usize,
    ) -> Result<()> {
        if ispin >= self.nspin {
            return Err(WfnError::FormatError(format!(
                "spin channel {} out of range for nspin = {}",
                ispin, self.nspin
            )));
        }
        if ispin != self.channels.len() {
            return Err(WfnError::FormatError(format!(
                "spin channel {} initialized out of order (expected {})",
                ispin,
                self.channels.len()
            )));
        }
        if nocc + nvirt != nmo {
            return Err(WfnError::FormatError(format!(
                "occupied ({}) + virtual ({}) orbitals do not add up to nmo ({})",
                nocc, nvirt, nmo
            )));
        }

        self.channels.push(SpinChannel {
            nmo,
            nocc,
            nvirt,
            nel,
            eigenvalues: vec![0.0; nmo],
            occupations: vec![0.0; nmo],
            coefficients: vec![0.0; nmo * self.nao_tot],
        });
        Ok(())
    }

    /// 某通道某轨道的展开系数行 (长度 = nao_tot)
    pub fn coeff_row(&self, ispin: usize, imo: usize) -> &[f64] {
        let w = self.nao_tot;
        &self.channels[ispin].coefficients[imo * w..(imo + 1) * w]
    }

    pub fn coeff_row_mut(&mut self, ispin: usize, imo: usize) -> &mut [f64] {
        let w = self.nao_tot;
        &mut self.channels[ispin].coefficients[imo * w..(imo + 1) * w]
    }

    /// 单个展开系数
    pub fn coeff(&self, ispin: usize, imo: usize, iao: usize) -> f64 {
        self.channels[ispin].coefficients[imo * self.nao_tot + iao]
    }

    pub fn set_coeff(&mut self, ispin: usize, imo: usize, iao: usize, value: f64) {
        let w = self.nao_tot;
        self.channels[ispin].coefficients[imo * w + iao] = value;
    }
}
