//! Pillars (stem + branch pairs) and the 60-pillar sexagenary cycle.
//!
//! Stem and branch advance together, so only pairs of equal polarity ever
//! occur: 60 of the 120 combinations. [`Pillar::new`] enforces this.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::GanzhiError;
use crate::nayin::NaYin;
use crate::stem::Stem;
use crate::xun::Xun;

/// Number of legal pillars.
pub const SEXAGENARY_LEN: u8 = 60;

/// A legal stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair `stem` with `branch`, rejecting mixed polarities.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, GanzhiError> {
        if stem.polarity() == branch.polarity() {
            Ok(Self { stem, branch })
        } else {
            Err(GanzhiError::IllegalPillar { stem, branch })
        }
    }

    /// Pillar at position `index` of the sexagenary cycle (0 = 甲子), mod 60.
    pub const fn from_sexagenary_index(index: u8) -> Self {
        let i = index % SEXAGENARY_LEN;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// 0-based position in the sexagenary cycle (甲子=0 .. 癸亥=59).
    pub const fn sexagenary_index(self) -> u8 {
        pair_index(self.stem, self.branch)
    }

    /// The Xun (decade) this pillar belongs to.
    pub const fn xun(self) -> Xun {
        Xun::of(self)
    }

    /// Kong Wang: the two branches missing from this pillar's Xun.
    pub const fn void_branches(self) -> [Branch; 2] {
        self.xun().void_branches()
    }

    /// Na Yin elemental phase.
    pub const fn nayin(self) -> NaYin {
        NaYin::of(self)
    }

    /// Next pillar in the cycle (癸亥 wraps to 甲子).
    pub const fn next(self) -> Self {
        Self::from_sexagenary_index(self.sexagenary_index() + 1)
    }
}

/// Sexagenary index of a same-polarity pair: the `n` with `n ≡ stem (mod 10)`
/// and `n ≡ branch (mod 12)`.
const fn pair_index(stem: Stem, branch: Branch) -> u8 {
    (6 * stem.index() as i16 - 5 * branch.index() as i16).rem_euclid(60) as u8
}

/// Iterator over all 60 pillars in cycle order.
pub fn sexagenary_cycle() -> impl Iterator<Item = Pillar> {
    (0..SEXAGENARY_LEN).map(Pillar::from_sexagenary_index)
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

impl FromStr for Pillar {
    type Err = GanzhiError;

    /// Parse `"甲子"` or a pinyin pair separated by a space or hyphen
    /// (`"jia zi"`, `"Jia-Zi"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let chars: Vec<char> = t.chars().collect();
        let (stem, branch) = if chars.len() == 2 && !chars[0].is_ascii() {
            (
                chars[0].to_string().parse::<Stem>()?,
                chars[1].to_string().parse::<Branch>()?,
            )
        } else {
            let mut parts = t
                .split(|c: char| c == '-' || c.is_whitespace())
                .filter(|p| !p.is_empty());
            match (parts.next(), parts.next(), parts.next()) {
                (Some(a), Some(b), None) => (a.parse::<Stem>()?, b.parse::<Branch>()?),
                _ => return Err(GanzhiError::MalformedPillar(s.to_string())),
            }
        };
        Self::new(stem, branch)
    }
}

impl From<Pillar> for String {
    fn from(p: Pillar) -> Self {
        p.to_string()
    }
}

impl TryFrom<String> for Pillar {
    type Error = GanzhiError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// PillarSet
// ---------------------------------------------------------------------------

/// Set of pillars stored as a 60-bit mask over the sexagenary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PillarSet(u64);

impl PillarSet {
    pub const EMPTY: Self = Self(0);

    /// Set built from literal pairs, for `const` rule tables.
    ///
    /// # Panics
    ///
    /// On a mixed-polarity pair. Inside a `const` item this surfaces as a
    /// compile error; runtime callers should use [`PillarSet::try_of`].
    pub const fn of(pairs: &[(Stem, Branch)]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < pairs.len() {
            let (stem, branch) = pairs[i];
            assert!(
                stem.index() % 2 == branch.index() % 2,
                "illegal stem-branch pair in pillar set"
            );
            bits |= 1 << pair_index(stem, branch);
            i += 1;
        }
        Self(bits)
    }

    /// Set built from pairs supplied at runtime.
    pub fn try_of(pairs: &[(Stem, Branch)]) -> Result<Self, GanzhiError> {
        pairs.iter().try_fold(Self::EMPTY, |set, &(stem, branch)| {
            let p = Pillar::new(stem, branch)?;
            Ok(Self(set.0 | 1 << p.sexagenary_index()))
        })
    }

    pub const fn contains(self, pillar: Pillar) -> bool {
        self.0 & (1 << pillar.sexagenary_index()) != 0
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in cycle order.
    pub fn iter(self) -> impl Iterator<Item = Pillar> {
        sexagenary_cycle().filter(move |p| self.contains(*p))
    }
}
