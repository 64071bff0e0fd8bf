//! Rule tables for the symbolic stars.
//!
//! Every table is an exhaustive `match` over a closed enumeration, so a
//! missing entry is a compile error rather than a silent lookup miss.
//! Triad- and season-keyed stars read the group from
//! [`Branch::triad`] / [`Branch::season`] instead of re-listing members.
//!
//! The registries at the bottom pair each table with the label it emits;
//! the rule families in [`crate::rules`] iterate them.

use ganzhi_base::{Branch, BranchSet, Element, Pillar, PillarSet, Season, Stem, Triad};

use crate::label::StarLabel;

// ---------------------------------------------------------------------------
// Stem-keyed tables (source: day master and/or year stem)
// ---------------------------------------------------------------------------

/// Tian Yi Gui Ren: 甲戊庚 丑未, 乙己 子申, 丙丁 亥酉, 辛 寅午, 壬癸 卯巳.
pub fn tian_yi(stem: Stem) -> BranchSet {
    use Stem::*;
    match stem {
        Jia | Wu | Geng => BranchSet::of(&[Branch::Chou, Branch::Wei]),
        Yi | Ji => BranchSet::of(&[Branch::Zi, Branch::Shen]),
        Bing | Ding => BranchSet::of(&[Branch::Hai, Branch::You]),
        Xin => BranchSet::of(&[Branch::Yin, Branch::Wu]),
        Ren | Gui => BranchSet::of(&[Branch::Mao, Branch::Si]),
    }
}

/// Tai Ji Gui Ren.
pub fn tai_ji(stem: Stem) -> BranchSet {
    use Stem::*;
    match stem {
        Jia | Yi => BranchSet::of(&[Branch::Zi, Branch::Wu]),
        Bing | Ding => BranchSet::of(&[Branch::Mao, Branch::You]),
        Wu | Ji => BranchSet::of(&[Branch::Chen, Branch::Xu, Branch::Chou, Branch::Wei]),
        Geng | Xin => BranchSet::of(&[Branch::Yin, Branch::Hai]),
        Ren | Gui => BranchSet::of(&[Branch::Si, Branch::Shen]),
    }
}

/// Fu Xing Gui Ren. 甲丙 and 乙癸 carry two targets each.
pub fn fu_xing(stem: Stem) -> BranchSet {
    use Stem::*;
    match stem {
        Jia | Bing => BranchSet::of(&[Branch::Yin, Branch::Zi]),
        Yi | Gui => BranchSet::of(&[Branch::Chou, Branch::Mao]),
        Ding => BranchSet::single(Branch::Hai),
        Wu => BranchSet::single(Branch::Shen),
        Ji => BranchSet::single(Branch::Wei),
        Geng => BranchSet::single(Branch::Wu),
        Xin => BranchSet::single(Branch::Si),
        Ren => BranchSet::single(Branch::Chen),
    }
}

/// Wen Chang.
pub fn wen_chang(stem: Stem) -> BranchSet {
    use Stem::*;
    BranchSet::single(match stem {
        Jia => Branch::Si,
        Yi => Branch::Wu,
        Bing | Wu => Branch::Shen,
        Ding | Ji => Branch::You,
        Geng => Branch::Hai,
        Xin => Branch::Zi,
        Ren => Branch::Yin,
        Gui => Branch::Mao,
    })
}

/// Guo Yin.
pub fn guo_yin(stem: Stem) -> BranchSet {
    use Stem::*;
    BranchSet::single(match stem {
        Jia => Branch::Xu,
        Yi => Branch::Hai,
        Bing | Wu => Branch::Chou,
        Ding | Ji => Branch::Yin,
        Geng => Branch::Chen,
        Xin => Branch::Si,
        Ren => Branch::Wei,
        Gui => Branch::Shen,
    })
}

/// Lu Shen (Jian Lu) branch of a stem.
pub const fn lu_shen_branch(stem: Stem) -> Branch {
    use Stem::*;
    match stem {
        Jia => Branch::Yin,
        Yi => Branch::Mao,
        Bing | Wu => Branch::Si,
        Ding | Ji => Branch::Wu,
        Geng => Branch::Shen,
        Xin => Branch::You,
        Ren => Branch::Hai,
        Gui => Branch::Zi,
    }
}

pub fn lu_shen(stem: Stem) -> BranchSet {
    BranchSet::single(lu_shen_branch(stem))
}

/// An Lu: the He partner of the Lu Shen branch.
pub fn an_lu(stem: Stem) -> BranchSet {
    use Stem::*;
    BranchSet::single(match stem {
        Jia => Branch::Hai,
        Yi => Branch::Xu,
        Bing | Wu => Branch::Shen,
        Ding | Ji => Branch::Wei,
        Geng => Branch::Si,
        Xin => Branch::Chen,
        Ren => Branch::Yin,
        Gui => Branch::Chou,
    })
}

/// Jin Yu: two branches past Lu Shen.
pub fn jin_yu(stem: Stem) -> BranchSet {
    use Stem::*;
    BranchSet::single(match stem {
        Jia => Branch::Chen,
        Yi => Branch::Si,
        Bing | Wu => Branch::Wei,
        Ding | Ji => Branch::Shen,
        Geng => Branch::Xu,
        Xin => Branch::Hai,
        Ren => Branch::Chou,
        Gui => Branch::Yin,
    })
}

/// Liu Xia.
pub fn liu_xia(stem: Stem) -> BranchSet {
    use Stem::*;
    BranchSet::single(match stem {
        Jia => Branch::You,
        Yi => Branch::Xu,
        Bing => Branch::Wei,
        Ding => Branch::Shen,
        Wu => Branch::Si,
        Ji => Branch::Wu,
        Geng => Branch::Chen,
        Xin => Branch::Mao,
        Ren => Branch::Hai,
        Gui => Branch::Yin,
    })
}

/// Yang Ren: one branch past Lu Shen (yin stems included).
pub fn yang_ren(stem: Stem) -> BranchSet {
    BranchSet::single(lu_shen_branch(stem).offset(1))
}

/// Hong Yan: exactly one branch per day master.
pub const fn hong_yan(stem: Stem) -> Branch {
    use Stem::*;
    match stem {
        Jia | Yi => Branch::Wu,
        Bing => Branch::Yin,
        Ding => Branch::Wei,
        Wu | Ji => Branch::Chen,
        Geng => Branch::Xu,
        Xin => Branch::You,
        Ren => Branch::Zi,
        Gui => Branch::Shen,
    }
}

// ---------------------------------------------------------------------------
// Month-branch-keyed tables
// ---------------------------------------------------------------------------

/// Target of a virtue star: some months point at a stem, others at a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtueTarget {
    Stem(Stem),
    Branch(Branch),
}

impl VirtueTarget {
    /// He partner of the target, keeping its kind.
    pub const fn combine_partner(self) -> Self {
        match self {
            Self::Stem(s) => Self::Stem(s.combine_partner()),
            Self::Branch(b) => Self::Branch(b.combine_partner()),
        }
    }

    /// Stem targets compare against the pillar's stem, branch targets
    /// against its branch.
    pub fn matches(self, pillar: Pillar) -> bool {
        match self {
            Self::Stem(s) => pillar.stem() == s,
            Self::Branch(b) => pillar.branch() == b,
        }
    }
}

/// Tian De by month branch.
pub const fn tian_de(month: Branch) -> VirtueTarget {
    use VirtueTarget as T;
    match month {
        Branch::Yin => T::Stem(Stem::Ding),
        Branch::Mao => T::Branch(Branch::Shen),
        Branch::Chen => T::Stem(Stem::Ren),
        Branch::Si => T::Stem(Stem::Xin),
        Branch::Wu => T::Branch(Branch::Hai),
        Branch::Wei => T::Stem(Stem::Jia),
        Branch::Shen => T::Stem(Stem::Gui),
        Branch::You => T::Branch(Branch::Yin),
        Branch::Xu => T::Stem(Stem::Bing),
        Branch::Hai => T::Stem(Stem::Yi),
        Branch::Zi => T::Branch(Branch::Si),
        Branch::Chou => T::Stem(Stem::Geng),
    }
}

/// Yue De by the month branch's triad. Always a yang stem.
pub const fn yue_de(month: Branch) -> VirtueTarget {
    VirtueTarget::Stem(match month.triad() {
        Triad::Fire => Stem::Bing,
        Triad::Water => Stem::Ren,
        Triad::Wood => Stem::Jia,
        Triad::Metal => Stem::Geng,
    })
}

/// Tian Yi (heavenly doctor): the branch before the month branch.
pub const fn tian_yi_doctor(month: Branch) -> Branch {
    month.offset(-1)
}

// ---------------------------------------------------------------------------
// Branch-keyed tables (base: year branch and/or day branch)
// ---------------------------------------------------------------------------

/// Yi Ma: the branch clashing the triad's birth branch.
pub fn yi_ma(base: Branch) -> BranchSet {
    BranchSet::single(match base.triad() {
        Triad::Water => Branch::Yin,
        Triad::Fire => Branch::Shen,
        Triad::Metal => Branch::Hai,
        Triad::Wood => Branch::Si,
    })
}

/// Tao Hua (Xian Chi).
pub fn tao_hua(base: Branch) -> BranchSet {
    BranchSet::single(match base.triad() {
        Triad::Water => Branch::You,
        Triad::Fire => Branch::Mao,
        Triad::Metal => Branch::Wu,
        Triad::Wood => Branch::Zi,
    })
}

/// Hua Gai: the triad's tomb branch.
pub fn hua_gai(base: Branch) -> BranchSet {
    BranchSet::single(base.triad().members()[2])
}

/// Jiang Xing: the triad's peak branch.
pub fn jiang_xing(base: Branch) -> BranchSet {
    BranchSet::single(base.triad().members()[1])
}

pub fn jie_sha(base: Branch) -> BranchSet {
    BranchSet::single(match base.triad() {
        Triad::Water => Branch::Si,
        Triad::Fire => Branch::Hai,
        Triad::Metal => Branch::Yin,
        Triad::Wood => Branch::Shen,
    })
}

pub fn zai_sha(base: Branch) -> BranchSet {
    BranchSet::single(match base.triad() {
        Triad::Water => Branch::Wu,
        Triad::Fire => Branch::Zi,
        Triad::Metal => Branch::Mao,
        Triad::Wood => Branch::You,
    })
}

pub fn wang_shen(base: Branch) -> BranchSet {
    BranchSet::single(match base.triad() {
        Triad::Water => Branch::Hai,
        Triad::Fire => Branch::Si,
        Triad::Metal => Branch::Shen,
        Triad::Wood => Branch::Yin,
    })
}

/// Gou Jiao: three branches ahead and three behind.
pub fn gou_jiao(base: Branch) -> BranchSet {
    BranchSet::of(&[base.offset(3), base.offset(-3)])
}

/// Gu Chen: the branch after the base's seasonal group.
pub fn gu_chen(base: Branch) -> BranchSet {
    BranchSet::single(match base.season() {
        Season::Winter => Branch::Yin,
        Season::Spring => Branch::Si,
        Season::Summer => Branch::Shen,
        Season::Autumn => Branch::Hai,
    })
}

/// Gua Su: the branch before the base's seasonal group.
pub fn gua_su(base: Branch) -> BranchSet {
    BranchSet::single(match base.season() {
        Season::Winter => Branch::Xu,
        Season::Spring => Branch::Chou,
        Season::Summer => Branch::Chen,
        Season::Autumn => Branch::Wei,
    })
}

/// Hong Luan by year branch.
pub fn hong_luan(year: Branch) -> BranchSet {
    BranchSet::single(match year {
        Branch::Zi => Branch::Mao,
        Branch::Chou => Branch::Yin,
        Branch::Yin => Branch::Chou,
        Branch::Mao => Branch::Zi,
        Branch::Chen => Branch::Hai,
        Branch::Si => Branch::Xu,
        Branch::Wu => Branch::You,
        Branch::Wei => Branch::Shen,
        Branch::Shen => Branch::Wei,
        Branch::You => Branch::Wu,
        Branch::Xu => Branch::Si,
        Branch::Hai => Branch::Chen,
    })
}

/// Tian Xi by year branch (always opposite Hong Luan).
pub fn tian_xi(year: Branch) -> BranchSet {
    BranchSet::single(match year {
        Branch::Zi => Branch::You,
        Branch::Chou => Branch::Shen,
        Branch::Yin => Branch::Wei,
        Branch::Mao => Branch::Wu,
        Branch::Chen => Branch::Si,
        Branch::Si => Branch::Chen,
        Branch::Wu => Branch::Mao,
        Branch::Wei => Branch::Yin,
        Branch::Shen => Branch::Chou,
        Branch::You => Branch::Zi,
        Branch::Xu => Branch::Hai,
        Branch::Hai => Branch::Xu,
    })
}

pub fn sang_men(year: Branch) -> BranchSet {
    BranchSet::single(year.offset(2))
}

pub fn diao_ke(year: Branch) -> BranchSet {
    BranchSet::single(year.offset(-2))
}

// ---------------------------------------------------------------------------
// Tong Zi Sha
// ---------------------------------------------------------------------------

/// Tong Zi targets from the birth month's season.
pub fn tong_zi_by_season(season: Season) -> BranchSet {
    match season {
        Season::Spring | Season::Autumn => BranchSet::of(&[Branch::Yin, Branch::Zi]),
        Season::Summer | Season::Winter => BranchSet::of(&[Branch::Mao, Branch::Wei]),
    }
}

/// Tong Zi targets from a Na Yin phase element.
pub fn tong_zi_by_phase(element: Element) -> BranchSet {
    match element {
        Element::Metal | Element::Wood => BranchSet::of(&[Branch::Wu, Branch::Mao]),
        Element::Water | Element::Fire => BranchSet::of(&[Branch::You, Branch::Xu]),
        Element::Earth => BranchSet::of(&[Branch::Chen, Branch::Si]),
    }
}

// ---------------------------------------------------------------------------
// Pillar sets
// ---------------------------------------------------------------------------

pub const SHI_LING_RI: PillarSet = PillarSet::of(&[
    (Stem::Jia, Branch::Chen),
    (Stem::Yi, Branch::Hai),
    (Stem::Bing, Branch::Chen),
    (Stem::Ding, Branch::You),
    (Stem::Wu, Branch::Wu),
    (Stem::Geng, Branch::Xu),
    (Stem::Geng, Branch::Yin),
    (Stem::Xin, Branch::Hai),
    (Stem::Ren, Branch::Yin),
    (Stem::Gui, Branch::Wei),
]);

pub const KUI_GANG: PillarSet = PillarSet::of(&[
    (Stem::Geng, Branch::Chen),
    (Stem::Ren, Branch::Chen),
    (Stem::Wu, Branch::Xu),
    (Stem::Geng, Branch::Xu),
]);

pub const SHI_E_DA_BAI: PillarSet = PillarSet::of(&[
    (Stem::Jia, Branch::Chen),
    (Stem::Yi, Branch::Si),
    (Stem::Bing, Branch::Shen),
    (Stem::Ding, Branch::Hai),
    (Stem::Wu, Branch::Xu),
    (Stem::Ji, Branch::Chou),
    (Stem::Geng, Branch::Chen),
    (Stem::Xin, Branch::Si),
    (Stem::Ren, Branch::Shen),
    (Stem::Gui, Branch::Hai),
]);

pub const YIN_CHA_YANG_CUO: PillarSet = PillarSet::of(&[
    (Stem::Bing, Branch::Zi),
    (Stem::Ding, Branch::Chou),
    (Stem::Wu, Branch::Yin),
    (Stem::Xin, Branch::Mao),
    (Stem::Ren, Branch::Chen),
    (Stem::Gui, Branch::Si),
    (Stem::Bing, Branch::Wu),
    (Stem::Ding, Branch::Wei),
    (Stem::Wu, Branch::Shen),
    (Stem::Xin, Branch::You),
    (Stem::Ren, Branch::Xu),
    (Stem::Gui, Branch::Hai),
]);

pub const GU_LUAN_SHA: PillarSet = PillarSet::of(&[
    (Stem::Yi, Branch::Si),
    (Stem::Ding, Branch::Si),
    (Stem::Xin, Branch::Hai),
    (Stem::Wu, Branch::Shen),
    (Stem::Jia, Branch::Yin),
    (Stem::Ren, Branch::Zi),
    (Stem::Bing, Branch::Wu),
    (Stem::Wu, Branch::Wu),
]);

/// Jin Shen. Checked on any pillar, not only the day.
pub const JIN_SHEN: PillarSet = PillarSet::of(&[
    (Stem::Yi, Branch::Chou),
    (Stem::Ji, Branch::Si),
    (Stem::Gui, Branch::You),
]);

/// Tian She: one day pillar per season of the month branch.
pub fn tian_she_ri(month: Branch) -> PillarSet {
    match month.season() {
        Season::Spring => PillarSet::of(&[(Stem::Wu, Branch::Yin)]),
        Season::Summer => PillarSet::of(&[(Stem::Jia, Branch::Wu)]),
        Season::Autumn => PillarSet::of(&[(Stem::Wu, Branch::Shen)]),
        Season::Winter => PillarSet::of(&[(Stem::Jia, Branch::Zi)]),
    }
}

// ---------------------------------------------------------------------------
// Registries
// ---------------------------------------------------------------------------

pub type StemTable = fn(Stem) -> BranchSet;
pub type BranchTable = fn(Branch) -> BranchSet;

/// Nobleman stars looked up from both the day master and the year stem.
pub const DUAL_SOURCE_STEM_RULES: [(StarLabel, StemTable); 9] = [
    (StarLabel::TianYiGuiRen, tian_yi),
    (StarLabel::WenChang, wen_chang),
    (StarLabel::LuShen, lu_shen),
    (StarLabel::AnLu, an_lu),
    (StarLabel::GuoYin, guo_yin),
    (StarLabel::LiuXia, liu_xia),
    (StarLabel::FuXingGuiRen, fu_xing),
    (StarLabel::TaiJiGuiRen, tai_ji),
    (StarLabel::JinYu, jin_yu),
];

/// Stars looked up from both the year branch and the day branch.
pub const DUAL_BASE_BRANCH_RULES: [(StarLabel, BranchTable); 10] = [
    (StarLabel::YiMa, yi_ma),
    (StarLabel::TaoHua, tao_hua),
    (StarLabel::HuaGai, hua_gai),
    (StarLabel::JiangXing, jiang_xing),
    (StarLabel::JieSha, jie_sha),
    (StarLabel::ZaiSha, zai_sha),
    (StarLabel::WangShen, wang_shen),
    (StarLabel::GouJiao, gou_jiao),
    (StarLabel::GuChen, gu_chen),
    (StarLabel::GuaSu, gua_su),
];

/// Stars looked up from the year branch alone.
pub const YEAR_BRANCH_RULES: [(StarLabel, BranchTable); 4] = [
    (StarLabel::HongLuan, hong_luan),
    (StarLabel::TianXi, tian_xi),
    (StarLabel::SangMen, sang_men),
    (StarLabel::DiaoKe, diao_ke),
];

/// Fixed day-pillar sets; they attach only when the day column is queried.
pub const DAY_PILLAR_RULES: [(StarLabel, PillarSet); 5] = [
    (StarLabel::ShiLingRi, SHI_LING_RI),
    (StarLabel::KuiGang, KUI_GANG),
    (StarLabel::ShiEDaBai, SHI_E_DA_BAI),
    (StarLabel::YinChaYangCuo, YIN_CHA_YANG_CUO),
    (StarLabel::GuLuanSha, GU_LUAN_SHA),
];

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::{ALL_BRANCHES, ALL_STEMS};

    #[test]
    fn an_lu_is_lu_shen_combination_partner() {
        for s in ALL_STEMS {
            assert_eq!(
                an_lu(s),
                BranchSet::single(lu_shen_branch(s).combine_partner()),
                "{s}"
            );
        }
    }

    #[test]
    fn jin_yu_is_two_past_lu_shen() {
        for s in ALL_STEMS {
            assert_eq!(jin_yu(s), BranchSet::single(lu_shen_branch(s).offset(2)), "{s}");
        }
    }

    #[test]
    fn yang_ren_samples() {
        assert_eq!(yang_ren(Stem::Jia), BranchSet::single(Branch::Mao));
        assert_eq!(yang_ren(Stem::Ren), BranchSet::single(Branch::Zi));
        assert_eq!(yang_ren(Stem::Gui), BranchSet::single(Branch::Chou));
    }

    #[test]
    fn tian_yi_jia_includes_chou() {
        assert!(tian_yi(Stem::Jia).contains(Branch::Chou));
        assert!(tian_yi(Stem::Jia).contains(Branch::Wei));
        assert_eq!(tian_yi(Stem::Jia).len(), 2);
    }

    #[test]
    fn every_stem_has_a_target_in_every_stem_table() {
        for (label, table) in DUAL_SOURCE_STEM_RULES {
            for s in ALL_STEMS {
                assert!(!table(s).is_empty(), "{label:?} has no entry for {s}");
            }
        }
    }

    #[test]
    fn tian_de_yin_month_is_ding() {
        assert_eq!(tian_de(Branch::Yin), VirtueTarget::Stem(Stem::Ding));
        assert_eq!(
            tian_de(Branch::Yin).combine_partner(),
            VirtueTarget::Stem(Stem::Ren)
        );
    }

    #[test]
    fn tian_de_branch_targets() {
        assert_eq!(tian_de(Branch::Mao), VirtueTarget::Branch(Branch::Shen));
        assert_eq!(
            tian_de(Branch::Mao).combine_partner(),
            VirtueTarget::Branch(Branch::Si)
        );
    }

    #[test]
    fn yue_de_follows_triad() {
        assert_eq!(yue_de(Branch::Wu), VirtueTarget::Stem(Stem::Bing));
        assert_eq!(yue_de(Branch::Chen), VirtueTarget::Stem(Stem::Ren));
        assert_eq!(yue_de(Branch::Wei), VirtueTarget::Stem(Stem::Jia));
        assert_eq!(yue_de(Branch::Chou), VirtueTarget::Stem(Stem::Geng));
    }

    #[test]
    fn virtue_target_matches_by_kind() {
        let p: Pillar = "丁卯".parse().unwrap();
        assert!(VirtueTarget::Stem(Stem::Ding).matches(p));
        assert!(VirtueTarget::Branch(Branch::Mao).matches(p));
        assert!(!VirtueTarget::Branch(Branch::Chou).matches(p));
    }

    #[test]
    fn triad_stars_for_water_triad() {
        for base in [Branch::Shen, Branch::Zi, Branch::Chen] {
            assert_eq!(yi_ma(base), BranchSet::single(Branch::Yin));
            assert_eq!(tao_hua(base), BranchSet::single(Branch::You));
            assert_eq!(hua_gai(base), BranchSet::single(Branch::Chen));
            assert_eq!(jiang_xing(base), BranchSet::single(Branch::Zi));
            assert_eq!(jie_sha(base), BranchSet::single(Branch::Si));
            assert_eq!(zai_sha(base), BranchSet::single(Branch::Wu));
            assert_eq!(wang_shen(base), BranchSet::single(Branch::Hai));
        }
    }

    #[test]
    fn yi_ma_clashes_triad_birth_branch() {
        for b in ALL_BRANCHES {
            let birth = b.triad().members()[0];
            assert_eq!(yi_ma(b), BranchSet::single(birth.opposite()), "{b}");
        }
    }

    #[test]
    fn zai_sha_clashes_jiang_xing() {
        for b in ALL_BRANCHES {
            let peak = b.triad().members()[1];
            assert_eq!(zai_sha(b), BranchSet::single(peak.opposite()), "{b}");
        }
    }

    #[test]
    fn gou_jiao_has_two_targets() {
        let t = gou_jiao(Branch::Zi);
        assert_eq!(t, BranchSet::of(&[Branch::Mao, Branch::You]));
    }

    #[test]
    fn lone_and_widow_flank_the_season() {
        for b in ALL_BRANCHES {
            let [first, _, last] = b.season().members();
            assert_eq!(gu_chen(b), BranchSet::single(last.offset(1)), "{b}");
            assert_eq!(gua_su(b), BranchSet::single(first.offset(-1)), "{b}");
        }
    }

    #[test]
    fn tian_xi_opposes_hong_luan() {
        for b in ALL_BRANCHES {
            let luan = hong_luan(b).iter().next().unwrap();
            assert_eq!(tian_xi(b), BranchSet::single(luan.opposite()), "{b}");
        }
    }

    #[test]
    fn mourning_gate_and_hanging_guest() {
        assert_eq!(sang_men(Branch::Zi), BranchSet::single(Branch::Yin));
        assert_eq!(diao_ke(Branch::Zi), BranchSet::single(Branch::Xu));
    }

    #[test]
    fn pillar_set_sizes() {
        assert_eq!(SHI_LING_RI.len(), 10);
        assert_eq!(KUI_GANG.len(), 4);
        assert_eq!(SHI_E_DA_BAI.len(), 10);
        assert_eq!(YIN_CHA_YANG_CUO.len(), 12);
        assert_eq!(GU_LUAN_SHA.len(), 8);
        assert_eq!(JIN_SHEN.len(), 3);
    }

    #[test]
    fn tong_zi_tables() {
        assert_eq!(
            tong_zi_by_season(Season::Autumn),
            BranchSet::of(&[Branch::Yin, Branch::Zi])
        );
        assert_eq!(
            tong_zi_by_phase(Element::Earth),
            BranchSet::of(&[Branch::Chen, Branch::Si])
        );
        assert_eq!(tong_zi_by_phase(Element::Fire), tong_zi_by_phase(Element::Water));
    }

    #[test]
    fn tian_she_by_season() {
        let p: Pillar = "戊寅".parse().unwrap();
        assert!(tian_she_ri(Branch::Mao).contains(p));
        assert!(!tian_she_ri(Branch::Wu).contains(p));
    }
}
