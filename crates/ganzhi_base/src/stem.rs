//! Heavenly stems (Tian Gan), the 10-cycle.
//!
//! Element follows pairs of stems (甲乙 Wood, 丙丁 Fire, ...) and polarity
//! alternates starting with Yang at 甲.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::GanzhiError;
use crate::util::cycle_step;

/// The 10 heavenly stems starting from 甲 (Jia).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at `index`, taken modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> char {
        match self {
            Self::Jia => '甲',
            Self::Yi => '乙',
            Self::Bing => '丙',
            Self::Ding => '丁',
            Self::Wu => '戊',
            Self::Ji => '己',
            Self::Geng => '庚',
            Self::Xin => '辛',
            Self::Ren => '壬',
            Self::Gui => '癸',
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Stem whose glyph is `c`.
    pub fn from_glyph(c: char) -> Option<Self> {
        ALL_STEMS.into_iter().find(|s| s.glyph() == c)
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// Stem `offset` positions away (negative steps backwards).
    pub const fn offset(self, offset: i8) -> Self {
        Self::from_index(cycle_step(self.index(), offset, 10))
    }

    /// He (combination) partner: 甲己, 乙庚, 丙辛, 丁壬, 戊癸.
    pub const fn combine_partner(self) -> Self {
        self.offset(5)
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Stem {
    type Err = GanzhiError;

    /// Parse a single glyph (`"甲"`) or a pinyin name (`"jia"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(stem) = Self::from_glyph(c) {
                return Ok(stem);
            }
        }
        ALL_STEMS
            .into_iter()
            .find(|st| st.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| GanzhiError::UnknownStem(s.to_string()))
    }
}
