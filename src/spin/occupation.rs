//! # 电子占据数推导
//!
//! 由几何给出的总电子数、净电荷与自旋多重度，推导每个自旋通道的
//! 电子数、轨道数与默认占据，并初始化模型里对应的通道。
//!
//! 限制性 (nspin = 1)：要求 multiplicity = 1 且电子数为偶，每轨道
//! 2 电子；非限制性 (nspin = 2)：按多重度把电子拆成 alpha/beta，
//! 每轨道 1 电子。
//!
//! ## 依赖关系
//! - 使用 `models/wavefunction.rs`
//! - 使用 `log` crate

use log::warn;

use crate::error::{Result, WfnError};
use crate::models::Wavefunction;

/// 推导各自旋通道的电子数与默认占据并初始化通道
///
/// 组态不一致时返回 `InvalidConfiguration` 且不改动模型。
pub fn derive_occupations(
    wfn: &mut Wavefunction,
    nel_geom: usize,
    charge: i64,
    multiplicity: u32,
) -> Result<()> {
    if multiplicity == 0 {
        return Err(WfnError::InvalidConfiguration(
            "multiplicity must be at least 1".to_string(),
        ));
    }

    let nel_total = nel_geom as i64 - charge;
    if nel_total < 0 {
        return Err(WfnError::InvalidConfiguration(format!(
            "charge {} removes more electrons than the geometry provides ({})",
            charge, nel_geom
        )));
    }

    match wfn.nspin {
        1 => {
            if multiplicity > 1 {
                return Err(WfnError::InvalidConfiguration(format!(
                    "a single spin channel cannot represent multiplicity {}",
                    multiplicity
                )));
            }
            if nel_total % 2 == 1 {
                return Err(WfnError::InvalidConfiguration(format!(
                    "a single spin channel requires an even electron count, got {}",
                    nel_total
                )));
            }

            // 每轨道 2 电子，全部占据，无虚轨道
            let nel = nel_total as usize;
            let nmo = nel / 2;
            wfn.init_channel(0, nmo, nmo, 0, nel)?;
            wfn.channels[0].occupations.fill(2.0);
            Ok(())
        }
        2 => {
            let mult = multiplicity as i64;

            // 电子数与多重度奇偶性不一致：物理上可疑但不致命
            if nel_total % 2 != (mult - 1) % 2 {
                warn!(
                    "electron count {} and multiplicity {} have inconsistent parity",
                    nel_total, multiplicity
                );
            }

            // nel/2 ± (mult-1)/2，合并成单次整除以保持向零截断
            let nel_alpha = (nel_total + mult - 1) / 2;
            let nel_beta = (nel_total - mult + 1) / 2;
            if nel_beta < 0 {
                return Err(WfnError::InvalidConfiguration(format!(
                    "multiplicity {} exceeds the available {} electrons",
                    multiplicity, nel_total
                )));
            }

            // 每轨道 1 电子，全部占据，无虚轨道
            for (ispin, nel) in [nel_alpha as usize, nel_beta as usize]
                .into_iter()
                .enumerate()
            {
                wfn.init_channel(ispin, nel, nel, 0, nel)?;
                wfn.channels[ispin].occupations.fill(1.0);
            }
            Ok(())
        }
        n => Err(WfnError::FormatError(format!(
            "spin channel count must be 1 or 2, got {}",
            n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restricted_model() -> Wavefunction {
        Wavefunction::new(1, 1, 8, 1, 1).unwrap()
    }

    fn unrestricted_model() -> Wavefunction {
        Wavefunction::new(1, 2, 8, 1, 1).unwrap()
    }

    #[test]
    fn test_restricted_derivation() {
        let mut wfn = restricted_model();
        derive_occupations(&mut wfn, 10, 0, 1).unwrap();

        let ch = &wfn.channels[0];
        assert_eq!(ch.nel, 10);
        assert_eq!(ch.nmo, 5);
        assert_eq!(ch.nocc, 5);
        assert_eq!(ch.nvirt, 0);
        assert_eq!(ch.eigenvalues, vec![0.0; 5]);
        assert_eq!(ch.occupations, vec![2.0; 5]);
    }

    #[test]
    fn test_restricted_respects_charge() {
        let mut wfn = restricted_model();
        derive_occupations(&mut wfn, 10, 2, 1).unwrap();

        assert_eq!(wfn.channels[0].nel, 8);
        assert_eq!(wfn.channels[0].nmo, 4);
    }

    #[test]
    fn test_restricted_rejects_odd_electrons() {
        let mut wfn = restricted_model();
        let err = derive_occupations(&mut wfn, 11, 0, 1).unwrap_err();

        assert!(matches!(err, WfnError::InvalidConfiguration(_)));
        // 模型保持未改动
        assert!(wfn.channels.is_empty());
    }

    #[test]
    fn test_restricted_rejects_high_multiplicity() {
        let mut wfn = restricted_model();
        let err = derive_occupations(&mut wfn, 10, 0, 3).unwrap_err();

        assert!(matches!(err, WfnError::InvalidConfiguration(_)));
        assert!(wfn.channels.is_empty());
    }

    #[test]
    fn test_unrestricted_triplet_split() {
        let mut wfn = unrestricted_model();
        derive_occupations(&mut wfn, 10, 0, 3).unwrap();

        // 总数 10，多重度 3 -> 6 alpha / 4 beta
        assert_eq!(wfn.channels[0].nel, 6);
        assert_eq!(wfn.channels[1].nel, 4);
        for ch in &wfn.channels {
            assert_eq!(ch.nmo, ch.nel);
            assert_eq!(ch.nocc, ch.nmo);
            assert_eq!(ch.nvirt, 0);
            assert_eq!(ch.occupations, vec![1.0; ch.nmo]);
            assert_eq!(ch.eigenvalues, vec![0.0; ch.nmo]);
        }
    }

    #[test]
    fn test_unrestricted_doublet_odd_total() {
        let mut wfn = unrestricted_model();
        derive_occupations(&mut wfn, 11, 0, 2).unwrap();

        // 11/2 ± 1/2 向零截断 -> 6 alpha / 5 beta
        assert_eq!(wfn.channels[0].nel, 6);
        assert_eq!(wfn.channels[1].nel, 5);
    }

    #[test]
    fn test_unrestricted_rejects_excess_multiplicity() {
        let mut wfn = unrestricted_model();
        let err = derive_occupations(&mut wfn, 1, 0, 4).unwrap_err();

        assert!(matches!(err, WfnError::InvalidConfiguration(_)));
        assert!(wfn.channels.is_empty());
    }

    #[test]
    fn test_rejects_zero_multiplicity() {
        let mut wfn = unrestricted_model();
        assert!(matches!(
            derive_occupations(&mut wfn, 10, 0, 0),
            Err(WfnError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_overcharged_geometry() {
        let mut wfn = restricted_model();
        assert!(matches!(
            derive_occupations(&mut wfn, 2, 4, 1),
            Err(WfnError::InvalidConfiguration(_))
        ));
    }
}
