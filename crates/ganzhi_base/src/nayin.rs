//! Na Yin elemental phases.
//!
//! Each consecutive pair of pillars (甲子乙丑, 丙寅丁卯, ...) shares one of 30
//! named phases. The element of a phase is the marker used by phase-based
//! rules; the name is presentation.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::pillar::Pillar;

/// The 30 Na Yin phases in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NaYin {
    HaiZhongJin,
    LuZhongHuo,
    DaLinMu,
    LuPangTu,
    JianFengJin,
    ShanTouHuo,
    JianXiaShui,
    ChengTouTu,
    BaiLaJin,
    YangLiuMu,
    QuanZhongShui,
    WuShangTu,
    PiLiHuo,
    SongBaiMu,
    ChangLiuShui,
    ShaZhongJin,
    ShanXiaHuo,
    PingDiMu,
    BiShangTu,
    JinBoJin,
    FuDengHuo,
    TianHeShui,
    DaYiTu,
    ChaiChuanJin,
    SangZheMu,
    DaXiShui,
    ShaZhongTu,
    TianShangHuo,
    ShiLiuMu,
    DaHaiShui,
}

/// All 30 phases (index 0 = 甲子乙丑 海中金).
pub const ALL_NAYIN: [NaYin; 30] = [
    NaYin::HaiZhongJin,
    NaYin::LuZhongHuo,
    NaYin::DaLinMu,
    NaYin::LuPangTu,
    NaYin::JianFengJin,
    NaYin::ShanTouHuo,
    NaYin::JianXiaShui,
    NaYin::ChengTouTu,
    NaYin::BaiLaJin,
    NaYin::YangLiuMu,
    NaYin::QuanZhongShui,
    NaYin::WuShangTu,
    NaYin::PiLiHuo,
    NaYin::SongBaiMu,
    NaYin::ChangLiuShui,
    NaYin::ShaZhongJin,
    NaYin::ShanXiaHuo,
    NaYin::PingDiMu,
    NaYin::BiShangTu,
    NaYin::JinBoJin,
    NaYin::FuDengHuo,
    NaYin::TianHeShui,
    NaYin::DaYiTu,
    NaYin::ChaiChuanJin,
    NaYin::SangZheMu,
    NaYin::DaXiShui,
    NaYin::ShaZhongTu,
    NaYin::TianShangHuo,
    NaYin::ShiLiuMu,
    NaYin::DaHaiShui,
];

const NAYIN_NAMES: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金", "杨柳木",
    "泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "沙中金", "山下火", "平地木", "壁上土", "金箔金",
    "覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

impl NaYin {
    /// Phase of `pillar`.
    pub const fn of(pillar: Pillar) -> Self {
        ALL_NAYIN[(pillar.sexagenary_index() / 2) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese name, e.g. `"海中金"`.
    pub const fn name(self) -> &'static str {
        NAYIN_NAMES[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        use NaYin::*;
        match self {
            HaiZhongJin | JianFengJin | BaiLaJin | ShaZhongJin | JinBoJin | ChaiChuanJin => {
                Element::Metal
            }
            LuZhongHuo | ShanTouHuo | PiLiHuo | ShanXiaHuo | FuDengHuo | TianShangHuo => {
                Element::Fire
            }
            DaLinMu | YangLiuMu | SongBaiMu | PingDiMu | SangZheMu | ShiLiuMu => Element::Wood,
            LuPangTu | ChengTouTu | WuShangTu | BiShangTu | DaYiTu | ShaZhongTu => Element::Earth,
            JianXiaShui | QuanZhongShui | ChangLiuShui | TianHeShui | DaXiShui | DaHaiShui => {
                Element::Water
            }
        }
    }
}
