//! Shared modular arithmetic for the stem and branch cycles.

/// Step `index` by `offset` positions around a cycle of length `modulus`.
///
/// Negative offsets wrap backwards: `cycle_step(0, -1, 12) == 11`.
pub const fn cycle_step(index: u8, offset: i8, modulus: u8) -> u8 {
    (index as i16 + offset as i16).rem_euclid(modulus as i16) as u8
}
