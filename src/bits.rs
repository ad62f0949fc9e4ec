use core::convert::TryFrom;

use log::trace;

use crate::error::EncodeError;
use crate::version::Version;

/// Mode indicator for 8-bit byte data.
const MODE_BYTE: u32 = 0b0100;

/// Filler bytes repeated after the terminator until the data capacity is reached.
const PAD_BYTES: [u32; 2] = [0xec, 0x11];

/// An append-only sequence of bits, most significant bit first.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Appends the low `len` bits of `val`, high bit first.
    ///
    /// # Panics
    ///
    /// Panics if `len > 31` or `val` does not fit in `len` bits.
    pub fn append_bits(&mut self, val: u32, len: u8) {
        assert!(len <= 31 && (val >> len) == 0);
        self.bits.extend((0..len).rev().map(|i| get_bit(val, i)));
    }

    pub fn append_codeword(&mut self, codeword: u8) {
        self.append_bits(codeword.into(), 8);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Packs the buffer into 8-bit codewords. The length must be a multiple of 8.
    pub fn to_codewords(&self) -> Vec<u8> {
        debug_assert_eq!(self.bits.len() % 8, 0);
        self.bits
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
            .collect()
    }
}

/// Serializes `data` as a single byte-mode segment and pads it to the data capacity of `version`.
///
/// The result has exactly `total_data_codewords` entries for the version.
pub fn build_data_codewords(data: &[u8], version: Version) -> Result<Vec<u8>, EncodeError> {
    let layout = version.check_block_layout()?;
    let capacity_bits = usize::from(layout.total_data_codewords) * 8;
    let ccbits = version.char_count_bits();

    let count = u32::try_from(data.len())
        .ok()
        .filter(|&n| n >> ccbits == 0)
        .ok_or_else(|| {
            EncodeError::table(
                version.value(),
                format!("{} bytes do not fit a {}-bit count field", data.len(), ccbits),
            )
        })?;

    let mut bb = BitBuffer::with_capacity(capacity_bits);
    bb.append_bits(MODE_BYTE, 4);
    bb.append_bits(count, ccbits);
    for &byte in data {
        bb.append_codeword(byte);
    }
    if bb.len() > capacity_bits {
        return Err(EncodeError::table(
            version.value(),
            format!("{} data bits exceed capacity of {} bits", bb.len(), capacity_bits),
        ));
    }

    // Terminator, then pad up to a byte boundary
    let numzerobits = core::cmp::min(4, capacity_bits - bb.len());
    bb.append_bits(0, numzerobits as u8);
    let numzerobits = bb.len().wrapping_neg() & 7;
    bb.append_bits(0, numzerobits as u8);
    if bb.len() > capacity_bits {
        return Err(EncodeError::table(
            version.value(),
            format!("padding overruns capacity by {} bits", bb.len() - capacity_bits),
        ));
    }

    for &padbyte in PAD_BYTES.iter().cycle() {
        if bb.len() >= capacity_bits {
            break;
        }
        bb.append_bits(padbyte, 8);
    }
    trace!(
        "build_data_codewords len={} version={} bits={}",
        data.len(),
        version.value(),
        bb.len()
    );
    Ok(bb.to_codewords())
}

fn get_bit(x: u32, i: u8) -> bool {
    ((x >> i) & 1) != 0
}
