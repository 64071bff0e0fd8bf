//! Error types for cycle-symbol parsing and pillar validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors raised at the input boundary: unknown symbols or illegal pairings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GanzhiError {
    /// Text is neither a stem glyph nor a stem name.
    UnknownStem(String),
    /// Text is neither a branch glyph nor a branch name.
    UnknownBranch(String),
    /// Text could not be split into a stem and a branch.
    MalformedPillar(String),
    /// Stem and branch polarities differ, so the pair is not in the 60-cycle.
    IllegalPillar { stem: Stem, branch: Branch },
    /// Phase tag carries no recognizable element marker.
    UnknownPhase(String),
}

impl Display for GanzhiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStem(s) => write!(f, "unknown heavenly stem: {s:?}"),
            Self::UnknownBranch(s) => write!(f, "unknown earthly branch: {s:?}"),
            Self::MalformedPillar(s) => write!(f, "malformed pillar: {s:?}"),
            Self::IllegalPillar { stem, branch } => write!(
                f,
                "illegal pillar {}{}: {} stem cannot pair with {} branch",
                stem.glyph(),
                branch.glyph(),
                stem.polarity().name(),
                branch.polarity().name()
            ),
            Self::UnknownPhase(s) => write!(f, "no element marker in phase tag: {s:?}"),
        }
    }
}

impl Error for GanzhiError {}
