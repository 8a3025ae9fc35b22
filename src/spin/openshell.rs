//! # 开壳层扩展
//!
//! 把限制性 (nspin = 1) 波函数原位扩展为物理等价的非限制性
//! (nspin = 2) 表示：通道 0 的电子数、本征值、占据数减半，再整体
//! 复制为通道 1。展开系数保持不变——alpha 与 beta 共用同一组轨道。
//!
//! ## 依赖关系
//! - 使用 `models/wavefunction.rs`

use crate::models::Wavefunction;

/// 限制性波函数原位扩展为开壳层表示
///
/// 已是两通道时为空操作，重复调用幂等。
pub fn make_open_shell(wfn: &mut Wavefunction) {
    if wfn.nspin == 2 {
        return;
    }

    wfn.nspin = 2;
    let Some(alpha) = wfn.channels.first_mut() else {
        // 尚未初始化任何通道，没有数据可以减半或复制
        return;
    };

    alpha.nel /= 2;
    for eigen in &mut alpha.eigenvalues {
        *eigen /= 2.0;
    }
    for occup in &mut alpha.occupations {
        *occup /= 2.0;
    }

    let beta = alpha.clone();
    wfn.channels.push(beta);
}
