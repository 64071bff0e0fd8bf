//! Four-pillar chart: the input every rule reads.
//!
//! A chart is assembled once (usually by a calendar service) and never
//! mutated afterwards. Gender, phase tags and the hour pillar are optional;
//! rules needing a missing input stay silent instead of failing.

use std::str::FromStr;

use ganzhi_base::{Element, GanzhiError, Pillar, Stem};
use serde::{Deserialize, Serialize};

/// Column of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// 0-based column (Year=0 .. Hour=3).
    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }
}

impl FromStr for PillarPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_POSITIONS
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown pillar position: {s:?}"))
    }
}

/// Subject gender, used only by the Yuan Chen rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(format!("unknown gender: {s:?}")),
        }
    }
}

/// A four-pillar chart with its optional context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Option<Pillar>,
    gender: Option<Gender>,
    year_phase: Option<Element>,
    day_phase: Option<Element>,
}

impl Chart {
    /// Chart with no gender and no phase tags.
    pub fn new(year: Pillar, month: Pillar, day: Pillar, hour: Option<Pillar>) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            gender: None,
            year_phase: None,
            day_phase: None,
        }
    }

    /// Parse pillars from text (`"甲子"` or `"jia zi"`).
    ///
    /// Fails with the base [`GanzhiError`]; `?` in a function returning
    /// [`ShenShaError`](crate::error::ShenShaError) lifts it to
    /// `InvalidInput`.
    pub fn parse(
        year: &str,
        month: &str,
        day: &str,
        hour: Option<&str>,
    ) -> Result<Self, GanzhiError> {
        Ok(Self::new(
            year.parse()?,
            month.parse()?,
            day.parse()?,
            hour.map(|h| h.parse::<Pillar>()).transpose()?,
        ))
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_year_phase(mut self, element: Element) -> Self {
        self.year_phase = Some(element);
        self
    }

    pub fn with_day_phase(mut self, element: Element) -> Self {
        self.day_phase = Some(element);
        self
    }

    /// Attach phase tags given as text (`"海中金"`, `"metal"`, `"金"`).
    pub fn with_phase_tags(
        self,
        year: Option<&str>,
        day: Option<&str>,
    ) -> Result<Self, GanzhiError> {
        let mut chart = self;
        if let Some(tag) = year {
            chart = chart.with_year_phase(Element::from_phase_tag(tag)?);
        }
        if let Some(tag) = day {
            chart = chart.with_day_phase(Element::from_phase_tag(tag)?);
        }
        Ok(chart)
    }

    /// Fill missing year/day phase tags from the pillars' own Na Yin.
    ///
    /// Tags already supplied are kept.
    pub fn with_derived_phases(mut self) -> Self {
        self.year_phase = self.year_phase.or(Some(self.year.nayin().element()));
        self.day_phase = self.day_phase.or(Some(self.day.nayin().element()));
        self
    }

    pub fn year(&self) -> Pillar {
        self.year
    }

    pub fn month(&self) -> Pillar {
        self.month
    }

    pub fn day(&self) -> Pillar {
        self.day
    }

    pub fn hour(&self) -> Option<Pillar> {
        self.hour
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn year_phase(&self) -> Option<Element> {
        self.year_phase
    }

    pub fn day_phase(&self) -> Option<Element> {
        self.day_phase
    }

    /// Stem of the day pillar.
    pub fn day_master(&self) -> Stem {
        self.day.stem()
    }

    /// Pillar at `position`; `None` only for an absent hour.
    pub fn pillar(&self, position: PillarPosition) -> Option<Pillar> {
        match position {
            PillarPosition::Year => Some(self.year),
            PillarPosition::Month => Some(self.month),
            PillarPosition::Day => Some(self.day),
            PillarPosition::Hour => self.hour,
        }
    }

    /// Present pillars in Year → Month → Day → Hour order.
    pub fn pillars(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS
            .into_iter()
            .filter_map(|pos| self.pillar(pos).map(|p| (pos, p)))
    }

    /// Stems of the present pillars in chart order.
    pub fn stems(&self) -> Vec<Stem> {
        self.pillars().map(|(_, p)| p.stem()).collect()
    }
}
