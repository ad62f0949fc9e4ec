//! Format and version information bits. Only drawn when
//! [`EncodeOptions::format_info`](crate::qrcode::EncodeOptions::format_info) is set.

use crate::mask::Mask;
use crate::matrix::ModuleGrid;
use crate::version::Version;

/// Error correction level indicator for the quartile level.
const ECL_QUARTILE_BITS: u32 = 0b11;

/// 15-bit format word: level and mask, BCH(15,5) remainder, then the fixed XOR mask.
pub fn format_bits(mask: Mask) -> u32 {
    let data = (ECL_QUARTILE_BITS << 3) | u32::from(mask.value());
    let mut rem: u32 = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * 0x537);
    }
    ((data << 10) | rem) ^ 0x5412
}

/// 18-bit version word: the version number followed by its BCH(18,6) remainder.
pub fn version_bits(version: Version) -> u32 {
    let ver = u32::from(version.value());
    let mut rem: u32 = ver;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * 0x1f25);
    }
    (ver << 12) | rem
}

/// Writes both copies of the format word and keeps the dark module set.
pub fn draw_format_bits(grid: &mut ModuleGrid, mask: Mask) {
    let bits = format_bits(mask);
    for i in 0..6 {
        grid.set(8, i, get_bit(bits, i as u8));
    }
    grid.set(8, 7, get_bit(bits, 6));
    grid.set(8, 8, get_bit(bits, 7));
    grid.set(7, 8, get_bit(bits, 8));
    for i in 9..15 {
        grid.set(14 - i, 8, get_bit(bits, i as u8));
    }
    let size = grid.size();
    for i in 0..8 {
        grid.set(size - 1 - i, 8, get_bit(bits, i as u8));
    }
    for i in 8..15 {
        grid.set(8, size - 15 + i, get_bit(bits, i as u8));
    }
    grid.set(8, size - 8, true);
}

/// Writes both 6x3 copies of the version word. Versions below 7 carry none.
pub fn draw_version_bits(grid: &mut ModuleGrid, version: Version) {
    if version.value() < 7 {
        return;
    }
    let bits = version_bits(version);
    let size = grid.size();
    for i in 0u8..18 {
        let bit: bool = get_bit(bits, i);
        let a = size - 11 + usize::from(i % 3);
        let b = usize::from(i / 3);
        grid.set(a, b, bit);
        grid.set(b, a, bit);
    }
}

fn get_bit(x: u32, i: u8) -> bool {
    ((x >> i) & 1) != 0
}
