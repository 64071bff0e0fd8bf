//! Types for chart classification: configuration and results.

use ganzhi_base::Pillar;
use serde::{Deserialize, Serialize};

use crate::chart::PillarPosition;
use crate::label::ShenShaSet;
use crate::rules::{ALL_RULE_FAMILIES, RuleFamily};

/// Which pillars a San Qi motif attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SanQiScope {
    /// The motif marks the whole chart: every queried pillar carries it.
    #[default]
    WholeChart,
    /// Only the pillars whose stems form the run carry it.
    MatchedPillars,
}

/// Classification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShenShaConfig {
    /// San Qi attachment semantics.
    pub san_qi_scope: SanQiScope,
    /// Rule families to run. Order does not affect the result.
    pub families: Vec<RuleFamily>,
}

impl Default for ShenShaConfig {
    fn default() -> Self {
        Self {
            san_qi_scope: SanQiScope::default(),
            families: ALL_RULE_FAMILIES.to_vec(),
        }
    }
}

impl ShenShaConfig {
    /// Default config restricted to `families`.
    pub fn with_families(families: &[RuleFamily]) -> Self {
        Self {
            families: families.to_vec(),
            ..Self::default()
        }
    }
}

/// Labels attached to one pillar of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub position: PillarPosition,
    pub pillar: Pillar,
    pub labels: ShenShaSet,
}
