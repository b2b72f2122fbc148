// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

/// Returns the level of a single bit of a packed value, `true` meaning high.
#[inline]
pub fn bit(value: u16, idx: u8) -> bool {
    (value >> idx) & 1 > 0
}

/// Packs a slice of levels into a single value. The first level in the slice becomes bit 0
/// of the value, the second becomes bit 1, and so on. Anything past the sixteenth level is
/// ignored.
#[inline]
pub fn levels_to_value(levels: &[bool]) -> u16 {
    let mut value = 0;
    for (i, level) in levels.iter().take(16).enumerate() {
        value |= (*level as u16) << i;
    }
    value
}

/// Unpacks the lowest `N` bits of a value into an array of levels, bit 0 first.
#[inline]
pub fn value_to_levels<const N: usize>(value: u16) -> [bool; N] {
    let mut levels = [false; N];
    for (i, level) in levels.iter_mut().enumerate() {
        *level = bit(value, i as u8);
    }
    levels
}
