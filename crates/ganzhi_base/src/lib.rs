//! Stem/branch cycle algebra for four-pillar charts.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches with element and polarity
//! - Chong (opposition), He (combination), San He triads and seasonal groups
//! - Validated pillars and the 60-pillar sexagenary cycle
//! - Xun decades and their Kong Wang (void) branches
//! - Na Yin elemental phases
//!
//! Everything here is a total function over closed enumerations; the only
//! fallible operations are the parsing and validation entry points.

pub mod branch;
pub mod element;
pub mod error;
pub mod nayin;
pub mod pillar;
pub mod stem;
pub mod util;
pub mod xun;

pub use branch::{
    ALL_BRANCHES, ALL_SEASONS, ALL_TRIADS, Branch, BranchSet, Season, Triad,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::GanzhiError;
pub use nayin::{ALL_NAYIN, NaYin};
pub use pillar::{Pillar, PillarSet, SEXAGENARY_LEN, sexagenary_cycle};
pub use stem::{ALL_STEMS, Stem};
pub use xun::{ALL_XUN, Xun};
