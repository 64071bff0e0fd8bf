//! San Qi (Three Wonders): three fixed stems appearing as a contiguous run
//! across the chart's stem sequence, read forward or backward.

use ganzhi_base::Stem;
use serde::{Deserialize, Serialize};

use crate::label::StarLabel;

/// The three San Qi motifs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SanQi {
    /// 甲戊庚
    Heaven,
    /// 乙丙丁
    Earth,
    /// 壬癸辛
    Human,
}

pub const ALL_SAN_QI: [SanQi; 3] = [SanQi::Heaven, SanQi::Earth, SanQi::Human];

impl SanQi {
    /// Canonical forward order.
    pub const fn stems(self) -> [Stem; 3] {
        match self {
            Self::Heaven => [Stem::Jia, Stem::Wu, Stem::Geng],
            Self::Earth => [Stem::Yi, Stem::Bing, Stem::Ding],
            Self::Human => [Stem::Ren, Stem::Gui, Stem::Xin],
        }
    }

    pub const fn label(self) -> StarLabel {
        match self {
            Self::Heaven => StarLabel::SanQiHeaven,
            Self::Earth => StarLabel::SanQiEarth,
            Self::Human => StarLabel::SanQiHuman,
        }
    }

    fn matches(self, window: &[Stem]) -> bool {
        let seq = self.stems();
        window == seq || window.iter().rev().eq(seq.iter())
    }
}

/// One occurrence of a motif: stems `start..start + 3` of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanQiMatch {
    pub kind: SanQi,
    pub start: usize,
}

impl SanQiMatch {
    /// Whether the stem at `column` is part of this run.
    pub fn covers(&self, column: usize) -> bool {
        (self.start..self.start + 3).contains(&column)
    }
}

/// Every San Qi run in `stems` (given in Year → Month → Day → Hour order).
pub fn find_san_qi(stems: &[Stem]) -> Vec<SanQiMatch> {
    stems
        .windows(3)
        .enumerate()
        .flat_map(|(start, window)| {
            ALL_SAN_QI
                .into_iter()
                .filter(move |kind| kind.matches(window))
                .map(move |kind| SanQiMatch { kind, start })
        })
        .collect()
}
