//! Shen Sha (symbolic star) classification for four-pillar charts.
//!
//! This crate provides:
//! - The chart model: four pillars plus optional gender and Na Yin phase tags
//! - Static rule tables for the nobleman, virtue, triad and day-pillar stars
//! - San Qi run detection over the chart's stem sequence
//! - A classification engine that unions independent rule families
//!
//! Classification is pure: the same chart and position always produce the
//! same label set, whatever order the families run in.

pub mod chart;
pub mod engine;
pub mod engine_types;
pub mod error;
pub mod label;
pub mod rules;
pub mod san_qi;
pub mod tables;

pub use chart::{ALL_POSITIONS, Chart, Gender, PillarPosition};
pub use engine::{classify, classify_chart, classify_with};
pub use engine_types::{Classification, SanQiScope, ShenShaConfig};
pub use error::ShenShaError;
pub use label::{ALL_STAR_LABELS, ShenShaSet, StarLabel};
pub use rules::{ALL_RULE_FAMILIES, RuleContext, RuleFamily};
pub use san_qi::{ALL_SAN_QI, SanQi, SanQiMatch, find_san_qi};
