//! Five elements (Wu Xing) and Yin/Yang polarity.

use serde::{Deserialize, Serialize};

use crate::error::GanzhiError;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (Wood → Fire → Earth → Metal → Water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese glyph used as the element marker in phase names.
    pub const fn glyph(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }

    /// Element whose glyph is `c`.
    pub const fn from_glyph(c: char) -> Option<Self> {
        match c {
            '木' => Some(Self::Wood),
            '火' => Some(Self::Fire),
            '土' => Some(Self::Earth),
            '金' => Some(Self::Metal),
            '水' => Some(Self::Water),
            _ => None,
        }
    }

    /// Extract the element from a phase tag.
    ///
    /// Accepts a bare English name (`"metal"`), a bare glyph (`"金"`), or a
    /// full Na Yin name such as `"海中金"`. Na Yin names end in their element
    /// glyph, so the last marker in the text wins (`"金箔金"`, `"天河水"`).
    pub fn from_phase_tag(tag: &str) -> Result<Self, GanzhiError> {
        let trimmed = tag.trim();
        if let Some(e) = ALL_ELEMENTS
            .iter()
            .find(|e| e.name().eq_ignore_ascii_case(trimmed))
        {
            return Ok(*e);
        }
        trimmed
            .chars()
            .rev()
            .find_map(Self::from_glyph)
            .ok_or_else(|| GanzhiError::UnknownPhase(tag.to_string()))
    }
}

/// Yin/Yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of the cycle position `index`: even positions are Yang.
    pub const fn of_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}
