//! Error types for chart classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_base::GanzhiError;

use crate::chart::PillarPosition;

/// Errors from building or classifying a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShenShaError {
    /// A stem, branch, pillar or phase tag failed validation.
    InvalidInput(GanzhiError),
    /// The queried pillar is absent from the chart (only the hour is optional).
    MissingPillar(PillarPosition),
}

impl Display for ShenShaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::MissingPillar(p) => write!(f, "chart has no {} pillar", p.name()),
        }
    }
}

impl Error for ShenShaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::MissingPillar(_) => None,
        }
    }
}

impl From<GanzhiError> for ShenShaError {
    fn from(e: GanzhiError) -> Self {
        Self::InvalidInput(e)
    }
}
