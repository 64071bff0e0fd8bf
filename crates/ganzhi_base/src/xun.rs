//! Xun (decades) of the sexagenary cycle and their Kong Wang (void) branches.
//!
//! The cycle splits into six runs of ten pillars, each headed by a 甲 stem.
//! Ten stems cover only ten of the twelve branches, so every run leaves two
//! branches out; those are the run's void branches.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// The six Xun, named by their head pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Xun {
    /// 甲子旬, void 戌亥
    JiaZi,
    /// 甲戌旬, void 申酉
    JiaXu,
    /// 甲申旬, void 午未
    JiaShen,
    /// 甲午旬, void 辰巳
    JiaWu,
    /// 甲辰旬, void 寅卯
    JiaChen,
    /// 甲寅旬, void 子丑
    JiaYin,
}

/// All six Xun in cycle order.
pub const ALL_XUN: [Xun; 6] = [
    Xun::JiaZi,
    Xun::JiaXu,
    Xun::JiaShen,
    Xun::JiaWu,
    Xun::JiaChen,
    Xun::JiaYin,
];

impl Xun {
    pub const fn index(self) -> u8 {
        match self {
            Self::JiaZi => 0,
            Self::JiaXu => 1,
            Self::JiaShen => 2,
            Self::JiaWu => 3,
            Self::JiaChen => 4,
            Self::JiaYin => 5,
        }
    }

    /// The Xun containing `pillar`.
    pub const fn of(pillar: Pillar) -> Self {
        ALL_XUN[(pillar.sexagenary_index() / 10) as usize]
    }

    /// Head pillar (always a 甲 stem).
    pub const fn head(self) -> Pillar {
        Pillar::from_sexagenary_index(self.index() * 10)
    }

    /// The ten member pillars in order.
    pub fn members(self) -> [Pillar; 10] {
        std::array::from_fn(|k| Pillar::from_sexagenary_index(self.index() * 10 + k as u8))
    }

    /// The two branches absent from this Xun, in cycle order.
    pub const fn void_branches(self) -> [Branch; 2] {
        match self {
            Self::JiaZi => [Branch::Xu, Branch::Hai],
            Self::JiaXu => [Branch::Shen, Branch::You],
            Self::JiaShen => [Branch::Wu, Branch::Wei],
            Self::JiaWu => [Branch::Chen, Branch::Si],
            Self::JiaChen => [Branch::Yin, Branch::Mao],
            Self::JiaYin => [Branch::Zi, Branch::Chou],
        }
    }

    /// Chinese name, e.g. `"甲子旬"`.
    pub fn name(self) -> String {
        let head = self.head();
        debug_assert_eq!(head.stem(), Stem::Jia);
        format!("{head}旬")
    }
}
