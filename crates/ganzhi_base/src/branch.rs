//! Earthly branches (Di Zhi), the 12-cycle, and their groupings.
//!
//! Besides the cycle itself this module carries the two 3-branch partitions
//! the symbolic-star rules are keyed on:
//! - [`Triad`] (San He): 申子辰, 寅午戌, 巳酉丑, 亥卯未
//! - [`Season`] (directional Fang): 寅卯辰, 巳午未, 申酉戌, 亥子丑
//!
//! and [`BranchSet`], a bitset used for rule targets.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::GanzhiError;
use crate::util::cycle_step;

/// The 12 earthly branches starting from 子 (Zi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at `index`, taken modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> char {
        match self {
            Self::Zi => '子',
            Self::Chou => '丑',
            Self::Yin => '寅',
            Self::Mao => '卯',
            Self::Chen => '辰',
            Self::Si => '巳',
            Self::Wu => '午',
            Self::Wei => '未',
            Self::Shen => '申',
            Self::You => '酉',
            Self::Xu => '戌',
            Self::Hai => '亥',
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// Branch whose glyph is `c`.
    pub fn from_glyph(c: char) -> Option<Self> {
        ALL_BRANCHES.into_iter().find(|b| b.glyph() == c)
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Wei | Self::Xu | Self::Chou => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// Branch `offset` positions away (negative steps backwards).
    pub const fn offset(self, offset: i8) -> Self {
        Self::from_index(cycle_step(self.index(), offset, 12))
    }

    /// Chong (opposition): the branch six positions away.
    pub const fn opposite(self) -> Self {
        self.offset(6)
    }

    /// Liu He (combination) partner: 子丑, 寅亥, 卯戌, 辰酉, 巳申, 午未.
    ///
    /// Partner indices always sum to 1 (mod 12).
    pub const fn combine_partner(self) -> Self {
        Self::from_index(cycle_step(1, -(self.index() as i8), 12))
    }

    pub const fn triad(self) -> Triad {
        match self {
            Self::Shen | Self::Zi | Self::Chen => Triad::Water,
            Self::Yin | Self::Wu | Self::Xu => Triad::Fire,
            Self::Si | Self::You | Self::Chou => Triad::Metal,
            Self::Hai | Self::Mao | Self::Wei => Triad::Wood,
        }
    }

    pub const fn season(self) -> Season {
        match self {
            Self::Yin | Self::Mao | Self::Chen => Season::Spring,
            Self::Si | Self::Wu | Self::Wei => Season::Summer,
            Self::Shen | Self::You | Self::Xu => Season::Autumn,
            Self::Hai | Self::Zi | Self::Chou => Season::Winter,
        }
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Branch {
    type Err = GanzhiError;

    /// Parse a single glyph (`"子"`) or a pinyin name (`"zi"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(branch) = Self::from_glyph(c) {
                return Ok(branch);
            }
        }
        ALL_BRANCHES
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| GanzhiError::UnknownBranch(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Triad (San He)
// ---------------------------------------------------------------------------

/// The four San He triads, named by the element they combine into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Triad {
    /// 申子辰
    Water,
    /// 寅午戌
    Fire,
    /// 巳酉丑
    Metal,
    /// 亥卯未
    Wood,
}

pub const ALL_TRIADS: [Triad; 4] = [Triad::Water, Triad::Fire, Triad::Metal, Triad::Wood];

impl Triad {
    /// Members in birth, peak, tomb order.
    pub const fn members(self) -> [Branch; 3] {
        match self {
            Self::Water => [Branch::Shen, Branch::Zi, Branch::Chen],
            Self::Fire => [Branch::Yin, Branch::Wu, Branch::Xu],
            Self::Metal => [Branch::Si, Branch::You, Branch::Chou],
            Self::Wood => [Branch::Hai, Branch::Mao, Branch::Wei],
        }
    }
}

// ---------------------------------------------------------------------------
// Season (directional group)
// ---------------------------------------------------------------------------

/// The four seasonal/directional branch groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// 寅卯辰
    Spring,
    /// 巳午未
    Summer,
    /// 申酉戌
    Autumn,
    /// 亥子丑
    Winter,
}

pub const ALL_SEASONS: [Season; 4] = [
    Season::Spring,
    Season::Summer,
    Season::Autumn,
    Season::Winter,
];

impl Season {
    pub const fn members(self) -> [Branch; 3] {
        match self {
            Self::Spring => [Branch::Yin, Branch::Mao, Branch::Chen],
            Self::Summer => [Branch::Si, Branch::Wu, Branch::Wei],
            Self::Autumn => [Branch::Shen, Branch::You, Branch::Xu],
            Self::Winter => [Branch::Hai, Branch::Zi, Branch::Chou],
        }
    }
}

// ---------------------------------------------------------------------------
// BranchSet
// ---------------------------------------------------------------------------

/// Set of branches stored as a 12-bit mask (bit `i` = branch index `i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BranchSet(u16);

impl BranchSet {
    pub const EMPTY: Self = Self(0);

    /// Set containing every branch in `branches`.
    pub const fn of(branches: &[Branch]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < branches.len() {
            bits |= 1 << branches[i].index();
            i += 1;
        }
        Self(bits)
    }

    pub const fn single(branch: Branch) -> Self {
        Self(1 << branch.index())
    }

    pub const fn contains(self, branch: Branch) -> bool {
        self.0 & (1 << branch.index()) != 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in cycle order.
    pub fn iter(self) -> impl Iterator<Item = Branch> {
        ALL_BRANCHES.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Branch> for BranchSet {
    fn from_iter<I: IntoIterator<Item = Branch>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |acc, b| acc.union(Self::single(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), *b);
        }
    }

    #[test]
    fn opposites() {
        assert_eq!(Branch::Zi.opposite(), Branch::Wu);
        assert_eq!(Branch::Yin.opposite(), Branch::Shen);
        assert_eq!(Branch::Hai.opposite(), Branch::Si);
    }

    #[test]
    fn opposite_is_involution() {
        for b in ALL_BRANCHES {
            assert_eq!(b.opposite().opposite(), b);
            assert_ne!(b.opposite(), b);
        }
    }

    #[test]
    fn combine_partners() {
        assert_eq!(Branch::Zi.combine_partner(), Branch::Chou);
        assert_eq!(Branch::Yin.combine_partner(), Branch::Hai);
        assert_eq!(Branch::Mao.combine_partner(), Branch::Xu);
        assert_eq!(Branch::Chen.combine_partner(), Branch::You);
        assert_eq!(Branch::Si.combine_partner(), Branch::Shen);
        assert_eq!(Branch::Wu.combine_partner(), Branch::Wei);
    }

    #[test]
    fn combine_partner_is_involution() {
        for b in ALL_BRANCHES {
            assert_eq!(b.combine_partner().combine_partner(), b);
        }
    }

    #[test]
    fn triads_partition_the_cycle() {
        let mut seen = BranchSet::EMPTY;
        for t in ALL_TRIADS {
            for b in t.members() {
                assert_eq!(b.triad(), t, "{b} should be in {t:?}");
                assert!(!seen.contains(b));
                seen = seen.union(BranchSet::single(b));
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn triad_members_are_four_apart() {
        for t in ALL_TRIADS {
            let [a, b, c] = t.members();
            assert_eq!(a.offset(4), b);
            assert_eq!(b.offset(4), c);
        }
    }

    #[test]
    fn seasons_partition_the_cycle() {
        let all: BranchSet = ALL_SEASONS.iter().flat_map(|s| s.members()).collect();
        assert_eq!(all.len(), 12);
        for s in ALL_SEASONS {
            for b in s.members() {
                assert_eq!(b.season(), s);
            }
        }
    }

    #[test]
    fn branch_set_ops() {
        let s = BranchSet::of(&[Branch::Zi, Branch::Wu, Branch::Zi]);
        assert_eq!(s.len(), 2);
        assert!(s.contains(Branch::Zi));
        assert!(!s.contains(Branch::Chou));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![Branch::Zi, Branch::Wu]);
        assert!(BranchSet::EMPTY.is_empty());
    }

    #[test]
    fn parse_glyph_and_name() {
        assert_eq!("亥".parse::<Branch>(), Ok(Branch::Hai));
        assert_eq!("chou".parse::<Branch>(), Ok(Branch::Chou));
        assert!("甲".parse::<Branch>().is_err());
    }
}
