//! The closed set of symbolic-star labels.
//!
//! Declaration order is display order: nobles first, then stem stars,
//! branch-interaction stars, day-pillar stars and the whole-chart motifs.
//! Sets of labels are [`ShenShaSet`]s, which iterate in that order.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A named symbolic star (Shen Sha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarLabel {
    TianYiGuiRen,
    TaiJiGuiRen,
    FuXingGuiRen,
    WenChang,
    GuoYin,
    TianDe,
    TianDeHe,
    YueDe,
    YueDeHe,
    TianYiDoctor,
    LuShen,
    AnLu,
    JinYu,
    YangRen,
    HongYan,
    LiuXia,
    YiMa,
    TaoHua,
    HuaGai,
    JiangXing,
    JieSha,
    ZaiSha,
    WangShen,
    GouJiao,
    GuChen,
    GuaSu,
    HongLuan,
    TianXi,
    SangMen,
    DiaoKe,
    YuanChen,
    KongWang,
    TongZiSha,
    JinShen,
    ShiLingRi,
    KuiGang,
    ShiEDaBai,
    TianSheRi,
    YinChaYangCuo,
    GuLuanSha,
    SanQiHeaven,
    SanQiEarth,
    SanQiHuman,
}

/// Labels attached to one pillar, in display order.
pub type ShenShaSet = BTreeSet<StarLabel>;

/// Every label in display order.
pub const ALL_STAR_LABELS: [StarLabel; 43] = [
    StarLabel::TianYiGuiRen,
    StarLabel::TaiJiGuiRen,
    StarLabel::FuXingGuiRen,
    StarLabel::WenChang,
    StarLabel::GuoYin,
    StarLabel::TianDe,
    StarLabel::TianDeHe,
    StarLabel::YueDe,
    StarLabel::YueDeHe,
    StarLabel::TianYiDoctor,
    StarLabel::LuShen,
    StarLabel::AnLu,
    StarLabel::JinYu,
    StarLabel::YangRen,
    StarLabel::HongYan,
    StarLabel::LiuXia,
    StarLabel::YiMa,
    StarLabel::TaoHua,
    StarLabel::HuaGai,
    StarLabel::JiangXing,
    StarLabel::JieSha,
    StarLabel::ZaiSha,
    StarLabel::WangShen,
    StarLabel::GouJiao,
    StarLabel::GuChen,
    StarLabel::GuaSu,
    StarLabel::HongLuan,
    StarLabel::TianXi,
    StarLabel::SangMen,
    StarLabel::DiaoKe,
    StarLabel::YuanChen,
    StarLabel::KongWang,
    StarLabel::TongZiSha,
    StarLabel::JinShen,
    StarLabel::ShiLingRi,
    StarLabel::KuiGang,
    StarLabel::ShiEDaBai,
    StarLabel::TianSheRi,
    StarLabel::YinChaYangCuo,
    StarLabel::GuLuanSha,
    StarLabel::SanQiHeaven,
    StarLabel::SanQiEarth,
    StarLabel::SanQiHuman,
];

impl StarLabel {
    /// Traditional Chinese name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::TianYiGuiRen => "天乙贵人",
            Self::TaiJiGuiRen => "太极贵人",
            Self::FuXingGuiRen => "福星贵人",
            Self::WenChang => "文昌贵人",
            Self::GuoYin => "国印贵人",
            Self::TianDe => "天德贵人",
            Self::TianDeHe => "天德合",
            Self::YueDe => "月德贵人",
            Self::YueDeHe => "月德合",
            Self::TianYiDoctor => "天医",
            Self::LuShen => "禄神",
            Self::AnLu => "暗禄",
            Self::JinYu => "金舆",
            Self::YangRen => "羊刃",
            Self::HongYan => "红艳煞",
            Self::LiuXia => "流霞",
            Self::YiMa => "驿马",
            Self::TaoHua => "桃花",
            Self::HuaGai => "华盖",
            Self::JiangXing => "将星",
            Self::JieSha => "劫煞",
            Self::ZaiSha => "灾煞",
            Self::WangShen => "亡神",
            Self::GouJiao => "勾绞煞",
            Self::GuChen => "孤辰",
            Self::GuaSu => "寡宿",
            Self::HongLuan => "红鸾",
            Self::TianXi => "天喜",
            Self::SangMen => "丧门",
            Self::DiaoKe => "吊客",
            Self::YuanChen => "元辰",
            Self::KongWang => "空亡",
            Self::TongZiSha => "童子煞",
            Self::JinShen => "金神",
            Self::ShiLingRi => "十灵日",
            Self::KuiGang => "魁罡",
            Self::ShiEDaBai => "十恶大败",
            Self::TianSheRi => "天赦日",
            Self::YinChaYangCuo => "阴差阳错",
            Self::GuLuanSha => "孤鸾煞",
            Self::SanQiHeaven => "天上三奇",
            Self::SanQiEarth => "地下三奇",
            Self::SanQiHuman => "人中三奇",
        }
    }

    /// English name.
    pub const fn english(self) -> &'static str {
        match self {
            Self::TianYiGuiRen => "Heavenly Noble",
            Self::TaiJiGuiRen => "Supreme Polarity Noble",
            Self::FuXingGuiRen => "Fortune Star",
            Self::WenChang => "Scholar",
            Self::GuoYin => "State Seal",
            Self::TianDe => "Heavenly Virtue",
            Self::TianDeHe => "Heavenly Virtue Combination",
            Self::YueDe => "Monthly Virtue",
            Self::YueDeHe => "Monthly Virtue Combination",
            Self::TianYiDoctor => "Heavenly Doctor",
            Self::LuShen => "Prosperity",
            Self::AnLu => "Hidden Prosperity",
            Self::JinYu => "Golden Carriage",
            Self::YangRen => "Blade",
            Self::HongYan => "Red Radiance",
            Self::LiuXia => "Flowing Haze",
            Self::YiMa => "Traveling Horse",
            Self::TaoHua => "Peach Blossom",
            Self::HuaGai => "Canopy",
            Self::JiangXing => "General Star",
            Self::JieSha => "Robbery Spirit",
            Self::ZaiSha => "Disaster Spirit",
            Self::WangShen => "Death Spirit",
            Self::GouJiao => "Hook-and-Snare",
            Self::GuChen => "Lone Star",
            Self::GuaSu => "Widow Star",
            Self::HongLuan => "Red Love Bird",
            Self::TianXi => "Heavenly Joy",
            Self::SangMen => "Mourning Gate",
            Self::DiaoKe => "Hanging Guest",
            Self::YuanChen => "Yuan Chen",
            Self::KongWang => "Void",
            Self::TongZiSha => "Child Spirit",
            Self::JinShen => "Metal Spirit",
            Self::ShiLingRi => "Ten Spirit Days",
            Self::KuiGang => "Leader Stars",
            Self::ShiEDaBai => "Ten Evils",
            Self::TianSheRi => "Heavenly Pardon Day",
            Self::YinChaYangCuo => "Yin-Yang Mismatch",
            Self::GuLuanSha => "Lone Phoenix",
            Self::SanQiHeaven => "Heavenly Three Wonders",
            Self::SanQiEarth => "Earthly Three Wonders",
            Self::SanQiHuman => "Human Three Wonders",
        }
    }
}

impl Display for StarLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.chinese(), self.english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_labels_sorted_and_distinct() {
        for pair in ALL_STAR_LABELS.windows(2) {
            assert!(pair[0] < pair[1], "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn names_nonempty_and_unique() {
        let chinese: BTreeSet<&str> = ALL_STAR_LABELS.iter().map(|l| l.chinese()).collect();
        let english: BTreeSet<&str> = ALL_STAR_LABELS.iter().map(|l| l.english()).collect();
        assert_eq!(chinese.len(), ALL_STAR_LABELS.len());
        assert_eq!(english.len(), ALL_STAR_LABELS.len());
    }

    #[test]
    fn display_shows_both_names() {
        assert_eq!(StarLabel::KongWang.to_string(), "空亡 (Void)");
    }
}
