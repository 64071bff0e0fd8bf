//! Rule families: each reads the chart from one angle and emits labels.
//!
//! A family only ever adds labels, and families never read each other's
//! output, so the union over any subset in any order is the same set.

use ganzhi_base::{Pillar, Polarity};
use serde::{Deserialize, Serialize};

use crate::chart::{Chart, Gender, PillarPosition};
use crate::engine_types::SanQiScope;
use crate::label::{ShenShaSet, StarLabel};
use crate::san_qi::find_san_qi;
use crate::tables::{
    DAY_PILLAR_RULES, DUAL_BASE_BRANCH_RULES, DUAL_SOURCE_STEM_RULES, JIN_SHEN, YEAR_BRANCH_RULES,
    hong_yan, tian_de, tian_she_ri, tian_yi_doctor, tong_zi_by_phase, tong_zi_by_season,
    yang_ren, yue_de,
};

/// Independent groups of rules, evaluated separately and unioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFamily {
    /// Kong Wang relative to the day pillar and to the year pillar.
    Void,
    /// Nobleman stars from the day master and the year stem.
    StemNobles,
    /// Yang Ren from the day master only.
    Blade,
    /// Hong Yan from the day master only.
    RedRadiance,
    /// Tian De, Yue De, their combinations, and Tian Yi (doctor).
    MonthVirtues,
    /// Triad/season stars from the year branch and the day branch.
    BranchStars,
    /// Hong Luan, Tian Xi, Sang Men, Diao Ke from the year branch.
    YearBranchStars,
    /// Yuan Chen; needs gender.
    YuanChen,
    /// Fixed day-pillar sets; day column only.
    DayPillarStars,
    /// Jin Shen on any pillar.
    MetalSpirit,
    /// Tong Zi Sha from month season and phase tags.
    ChildSpirit,
    /// San Qi over the whole stem sequence.
    ThreeWonders,
}

pub const ALL_RULE_FAMILIES: [RuleFamily; 12] = [
    RuleFamily::Void,
    RuleFamily::StemNobles,
    RuleFamily::Blade,
    RuleFamily::RedRadiance,
    RuleFamily::MonthVirtues,
    RuleFamily::BranchStars,
    RuleFamily::YearBranchStars,
    RuleFamily::YuanChen,
    RuleFamily::DayPillarStars,
    RuleFamily::MetalSpirit,
    RuleFamily::ChildSpirit,
    RuleFamily::ThreeWonders,
];

/// What a rule sees: the chart, the queried column and its pillar.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub chart: &'a Chart,
    pub position: PillarPosition,
    pub pillar: Pillar,
    pub san_qi_scope: SanQiScope,
}

impl RuleFamily {
    /// Labels this family attaches to the queried pillar.
    pub fn evaluate(self, ctx: &RuleContext<'_>) -> ShenShaSet {
        match self {
            Self::Void => void(ctx),
            Self::StemNobles => stem_nobles(ctx),
            Self::Blade => blade(ctx),
            Self::RedRadiance => red_radiance(ctx),
            Self::MonthVirtues => month_virtues(ctx),
            Self::BranchStars => branch_stars(ctx),
            Self::YearBranchStars => year_branch_stars(ctx),
            Self::YuanChen => yuan_chen(ctx),
            Self::DayPillarStars => day_pillar_stars(ctx),
            Self::MetalSpirit => metal_spirit(ctx),
            Self::ChildSpirit => child_spirit(ctx),
            Self::ThreeWonders => three_wonders(ctx),
        }
    }
}

fn when(hit: bool, label: StarLabel) -> ShenShaSet {
    hit.then_some(label).into_iter().collect()
}

fn void(ctx: &RuleContext<'_>) -> ShenShaSet {
    let branch = ctx.pillar.branch();
    let hit = [ctx.chart.day(), ctx.chart.year()]
        .iter()
        .any(|reference| reference.void_branches().contains(&branch));
    when(hit, StarLabel::KongWang)
}

fn stem_nobles(ctx: &RuleContext<'_>) -> ShenShaSet {
    let sources = [ctx.chart.day_master(), ctx.chart.year().stem()];
    let branch = ctx.pillar.branch();
    DUAL_SOURCE_STEM_RULES
        .iter()
        .filter(|(_, table)| sources.iter().any(|s| table(*s).contains(branch)))
        .map(|(label, _)| *label)
        .collect()
}

fn blade(ctx: &RuleContext<'_>) -> ShenShaSet {
    when(
        yang_ren(ctx.chart.day_master()).contains(ctx.pillar.branch()),
        StarLabel::YangRen,
    )
}

fn red_radiance(ctx: &RuleContext<'_>) -> ShenShaSet {
    when(
        hong_yan(ctx.chart.day_master()) == ctx.pillar.branch(),
        StarLabel::HongYan,
    )
}

fn month_virtues(ctx: &RuleContext<'_>) -> ShenShaSet {
    let month = ctx.chart.month().branch();
    let p = ctx.pillar;
    let tian = tian_de(month);
    let yue = yue_de(month);
    [
        (tian.matches(p), StarLabel::TianDe),
        (tian.combine_partner().matches(p), StarLabel::TianDeHe),
        (yue.matches(p), StarLabel::YueDe),
        (yue.combine_partner().matches(p), StarLabel::YueDeHe),
        (tian_yi_doctor(month) == p.branch(), StarLabel::TianYiDoctor),
    ]
    .into_iter()
    .filter_map(|(hit, label)| hit.then_some(label))
    .collect()
}

fn branch_stars(ctx: &RuleContext<'_>) -> ShenShaSet {
    let bases = [ctx.chart.year().branch(), ctx.chart.day().branch()];
    let branch = ctx.pillar.branch();
    DUAL_BASE_BRANCH_RULES
        .iter()
        .filter(|(_, table)| bases.iter().any(|b| table(*b).contains(branch)))
        .map(|(label, _)| *label)
        .collect()
}

fn year_branch_stars(ctx: &RuleContext<'_>) -> ShenShaSet {
    let year = ctx.chart.year().branch();
    let branch = ctx.pillar.branch();
    YEAR_BRANCH_RULES
        .iter()
        .filter(|(_, table)| table(year).contains(branch))
        .map(|(label, _)| *label)
        .collect()
}

fn yuan_chen(ctx: &RuleContext<'_>) -> ShenShaSet {
    let Some(gender) = ctx.chart.gender() else {
        return ShenShaSet::new();
    };
    let year = ctx.chart.year();
    let forward = (year.stem().polarity() == Polarity::Yang) == (gender == Gender::Male);
    let target = year.branch().opposite().offset(if forward { 1 } else { -1 });
    when(target == ctx.pillar.branch(), StarLabel::YuanChen)
}

fn day_pillar_stars(ctx: &RuleContext<'_>) -> ShenShaSet {
    if ctx.position != PillarPosition::Day {
        return ShenShaSet::new();
    }
    let day = ctx.pillar;
    let pardon = tian_she_ri(ctx.chart.month().branch());
    DAY_PILLAR_RULES
        .iter()
        .chain(std::iter::once(&(StarLabel::TianSheRi, pardon)))
        .filter(|(_, set)| set.contains(day))
        .map(|(label, _)| *label)
        .collect()
}

fn metal_spirit(ctx: &RuleContext<'_>) -> ShenShaSet {
    when(JIN_SHEN.contains(ctx.pillar), StarLabel::JinShen)
}

fn child_spirit(ctx: &RuleContext<'_>) -> ShenShaSet {
    let branch = ctx.pillar.branch();
    let by_season = tong_zi_by_season(ctx.chart.month().branch().season());
    let hit = by_season.contains(branch)
        || [ctx.chart.year_phase(), ctx.chart.day_phase()]
            .into_iter()
            .flatten()
            .any(|element| tong_zi_by_phase(element).contains(branch));
    when(hit, StarLabel::TongZiSha)
}

fn three_wonders(ctx: &RuleContext<'_>) -> ShenShaSet {
    let column = ctx.position.index();
    find_san_qi(&ctx.chart.stems())
        .into_iter()
        .filter(|m| match ctx.san_qi_scope {
            SanQiScope::WholeChart => true,
            SanQiScope::MatchedPillars => m.covers(column),
        })
        .map(|m| m.kind.label())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_for(chart: &Chart, position: PillarPosition) -> RuleContext<'_> {
        RuleContext {
            chart,
            position,
            pillar: chart.pillar(position).unwrap(),
            san_qi_scope: SanQiScope::WholeChart,
        }
    }

    fn chart(year: &str, month: &str, day: &str, hour: &str) -> Chart {
        Chart::parse(year, month, day, Some(hour)).unwrap()
    }

    #[test]
    fn void_relative_to_day() {
        // Day 甲子 → void 戌亥; hour 壬戌 sits in it.
        let c = chart("丙寅", "庚寅", "甲子", "壬戌");
        let hits = RuleFamily::Void.evaluate(&ctx_for(&c, PillarPosition::Hour));
        assert!(hits.contains(&StarLabel::KongWang));
    }

    #[test]
    fn void_relative_to_year() {
        // Year 甲戌 → void 申酉; day 甲子 → void 戌亥.
        // Hour 壬申 only hits the year's.
        let c = chart("甲戌", "丙寅", "甲子", "壬申");
        let hits = RuleFamily::Void.evaluate(&ctx_for(&c, PillarPosition::Hour));
        assert!(hits.contains(&StarLabel::KongWang));
    }

    #[test]
    fn no_void_outside_both_sets() {
        let c = chart("甲戌", "丙寅", "甲子", "甲午");
        assert!(RuleFamily::Void
            .evaluate(&ctx_for(&c, PillarPosition::Hour))
            .is_empty());
    }

    #[test]
    fn blade_ignores_year_stem() {
        // Year stem 甲 would give 卯, day master 庚 gives 酉.
        let c = chart("甲子", "丙寅", "庚午", "丁卯");
        assert!(RuleFamily::Blade
            .evaluate(&ctx_for(&c, PillarPosition::Hour))
            .is_empty());
        let c = chart("甲子", "丙寅", "庚午", "乙酉");
        assert!(RuleFamily::Blade
            .evaluate(&ctx_for(&c, PillarPosition::Hour))
            .contains(&StarLabel::YangRen));
    }

    #[test]
    fn noble_from_year_stem_alone() {
        // Day master 庚 → Tian Yi 丑未; year stem 乙 → 子申. Hour 丙子 hits via year.
        let c = chart("乙丑", "戊寅", "庚午", "丙子");
        let hits = RuleFamily::StemNobles.evaluate(&ctx_for(&c, PillarPosition::Hour));
        assert!(hits.contains(&StarLabel::TianYiGuiRen));
    }

    #[test]
    fn red_radiance_single_target() {
        // Day master 甲 → 午.
        let c = chart("乙丑", "戊寅", "甲午", "丙寅");
        assert!(RuleFamily::RedRadiance
            .evaluate(&ctx_for(&c, PillarPosition::Day))
            .contains(&StarLabel::HongYan));
        assert!(RuleFamily::RedRadiance
            .evaluate(&ctx_for(&c, PillarPosition::Hour))
            .is_empty());
    }

    #[test]
    fn red_radiance_ignores_year_stem() {
        // Year stem 丙 would give 寅; day master 甲 gives 午.
        let c = chart("丙寅", "庚寅", "甲子", "丙寅");
        for pos in [PillarPosition::Year, PillarPosition::Hour] {
            assert!(RuleFamily::RedRadiance
                .evaluate(&ctx_for(&c, pos))
                .is_empty());
        }
        let c = chart("丙寅", "庚寅", "甲子", "庚午");
        assert!(RuleFamily::RedRadiance
            .evaluate(&ctx_for(&c, PillarPosition::Hour))
            .contains(&StarLabel::HongYan));
    }

    #[test]
    fn month_virtue_branch_target_and_partner() {
        // Month 卯 → Tian De 申 (branch), partner 巳.
        let c = chart("甲子", "丁卯", "丙申", "己巳");
        let day = RuleFamily::MonthVirtues.evaluate(&ctx_for(&c, PillarPosition::Day));
        assert!(day.contains(&StarLabel::TianDe));
        assert!(!day.contains(&StarLabel::TianDeHe));
        let hour = RuleFamily::MonthVirtues.evaluate(&ctx_for(&c, PillarPosition::Hour));
        assert!(hour.contains(&StarLabel::TianDeHe));
        assert!(!hour.contains(&StarLabel::TianDe));
    }

    #[test]
    fn monthly_virtue_and_doctor() {
        // Month 午 → Yue De 丙, Yue De He 辛, doctor 巳.
        let c = chart("甲子", "庚午", "丙辰", "辛巳");
        let day = RuleFamily::MonthVirtues.evaluate(&ctx_for(&c, PillarPosition::Day));
        assert!(day.contains(&StarLabel::YueDe));
        let hour = RuleFamily::MonthVirtues.evaluate(&ctx_for(&c, PillarPosition::Hour));
        assert!(hour.contains(&StarLabel::YueDeHe));
        assert!(hour.contains(&StarLabel::TianYiDoctor));
    }

    #[test]
    fn branch_stars_from_day_base() {
        // Year 子 (water) → Yi Ma 寅; day 午 (fire) → Yi Ma 申.
        let c = chart("甲子", "丙寅", "戊午", "庚申");
        let hour = RuleFamily::BranchStars.evaluate(&ctx_for(&c, PillarPosition::Hour));
        assert!(hour.contains(&StarLabel::YiMa));
        let month = RuleFamily::BranchStars.evaluate(&ctx_for(&c, PillarPosition::Month));
        assert!(month.contains(&StarLabel::YiMa));
    }

    #[test]
    fn year_branch_stars_ignore_day_base() {
        // Year 子: Hong Luan 卯, Tian Xi 酉, Sang Men 寅, Diao Ke 戌.
        let c = chart("甲子", "丙寅", "己卯", "癸酉");
        let month = RuleFamily::YearBranchStars.evaluate(&ctx_for(&c, PillarPosition::Month));
        assert!(month.contains(&StarLabel::SangMen));
        let day = RuleFamily::YearBranchStars.evaluate(&ctx_for(&c, PillarPosition::Day));
        assert!(day.contains(&StarLabel::HongLuan));
        let hour = RuleFamily::YearBranchStars.evaluate(&ctx_for(&c, PillarPosition::Hour));
        assert!(hour.contains(&StarLabel::TianXi));
    }

    #[test]
    fn yuan_chen_needs_gender() {
        // Year 甲子: chong 午; yang male → 未, yang female → 巳.
        let c = chart("甲子", "丙寅", "丁未", "己巳");
        assert!(RuleFamily::YuanChen
            .evaluate(&ctx_for(&c, PillarPosition::Day))
            .is_empty());

        let male = c.clone().with_gender(Gender::Male);
        assert!(RuleFamily::YuanChen
            .evaluate(&ctx_for(&male, PillarPosition::Day))
            .contains(&StarLabel::YuanChen));
        assert!(RuleFamily::YuanChen
            .evaluate(&ctx_for(&male, PillarPosition::Hour))
            .is_empty());

        let female = c.with_gender(Gender::Female);
        assert!(RuleFamily::YuanChen
            .evaluate(&ctx_for(&female, PillarPosition::Hour))
            .contains(&StarLabel::YuanChen));
    }

    #[test]
    fn yuan_chen_yin_year_reverses() {
        // Year 乙丑: chong 未; yin male → backward → 午.
        let c = chart("乙丑", "戊寅", "丙午", "甲申").with_gender(Gender::Male);
        assert!(RuleFamily::YuanChen
            .evaluate(&ctx_for(&c, PillarPosition::Day))
            .contains(&StarLabel::YuanChen));
    }

    #[test]
    fn day_pillar_sets_need_day_column() {
        // 庚辰 is Kui Gang and Shi E Da Bai.
        let c = chart("庚辰", "戊寅", "庚辰", "庚辰");
        let day = RuleFamily::DayPillarStars.evaluate(&ctx_for(&c, PillarPosition::Day));
        assert!(day.contains(&StarLabel::KuiGang));
        assert!(day.contains(&StarLabel::ShiEDaBai));
        assert!(RuleFamily::DayPillarStars
            .evaluate(&ctx_for(&c, PillarPosition::Year))
            .is_empty());
        assert!(RuleFamily::DayPillarStars
            .evaluate(&ctx_for(&c, PillarPosition::Hour))
            .is_empty());
    }

    #[test]
    fn heavenly_pardon_day() {
        // Spring month 寅 with day 戊寅.
        let c = chart("甲子", "丙寅", "戊寅", "甲寅");
        let day = RuleFamily::DayPillarStars.evaluate(&ctx_for(&c, PillarPosition::Day));
        assert!(day.contains(&StarLabel::TianSheRi));
        assert!(day.contains(&StarLabel::YinChaYangCuo));
    }

    #[test]
    fn metal_spirit_on_any_pillar() {
        let c = chart("乙丑", "戊寅", "甲子", "癸酉");
        for pos in [PillarPosition::Year, PillarPosition::Hour] {
            assert!(RuleFamily::MetalSpirit
                .evaluate(&ctx_for(&c, pos))
                .contains(&StarLabel::JinShen));
        }
        assert!(RuleFamily::MetalSpirit
            .evaluate(&ctx_for(&c, PillarPosition::Day))
            .is_empty());
    }

    #[test]
    fn child_spirit_by_season_and_phase() {
        // Month 寅 (spring) → 寅子. Hour 丁卯 hits only through a metal/wood phase.
        let c = chart("甲子", "丙寅", "甲子", "丁卯");
        assert!(RuleFamily::ChildSpirit
            .evaluate(&ctx_for(&c, PillarPosition::Day))
            .contains(&StarLabel::TongZiSha));
        assert!(RuleFamily::ChildSpirit
            .evaluate(&ctx_for(&c, PillarPosition::Hour))
            .is_empty());
        let tagged = c.with_year_phase(ganzhi_base::Element::Metal);
        assert!(RuleFamily::ChildSpirit
            .evaluate(&ctx_for(&tagged, PillarPosition::Hour))
            .contains(&StarLabel::TongZiSha));
    }

    #[test]
    fn three_wonders_scope() {
        let c = chart("甲子", "戊辰", "庚午", "乙酉");
        let whole = RuleFamily::ThreeWonders.evaluate(&ctx_for(&c, PillarPosition::Hour));
        assert!(whole.contains(&StarLabel::SanQiHeaven));

        let mut ctx = ctx_for(&c, PillarPosition::Hour);
        ctx.san_qi_scope = SanQiScope::MatchedPillars;
        assert!(RuleFamily::ThreeWonders.evaluate(&ctx).is_empty());
        let mut ctx = ctx_for(&c, PillarPosition::Day);
        ctx.san_qi_scope = SanQiScope::MatchedPillars;
        assert!(RuleFamily::ThreeWonders
            .evaluate(&ctx)
            .contains(&StarLabel::SanQiHeaven));
    }
}
