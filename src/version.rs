use log::trace;

use crate::error::EncodeError;
use crate::tables::{BlockLayout, ALIGNMENT_POSITIONS, BLOCK_LAYOUTS, CAPACITY, REMAINDER_BITS};

/// A QR code version (1–40).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported in the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported in the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is outside the range [1, 40].
    pub const fn new(ver: u8) -> Self {
        assert!(
            Version::MIN.value() <= ver && ver <= Version::MAX.value(),
            "Version number out of range"
        );
        Self(ver)
    }

    /// Returns the value, which is in the range [1, 40].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Picks the smallest version whose byte capacity holds `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::CapacityExceeded`] if `len` is above the capacity of
    /// [`Version::MAX`].
    pub fn for_byte_len(len: usize) -> Result<Self, EncodeError> {
        let index = CAPACITY.partition_point(|&cap| usize::from(cap) < len);
        if index == CAPACITY.len() {
            return Err(EncodeError::CapacityExceeded {
                len,
                capacity: Version::MAX.capacity(),
            });
        }
        let version = Version(index as u8 + 1);
        trace!("for_byte_len len={} version={}", len, version.value());
        Ok(version)
    }

    /// Side length of the symbol in modules, `21 + 4 * (version - 1)`.
    pub const fn size(self) -> usize {
        (self.0 as usize) * 4 + 17
    }

    /// Input bytes this version holds in byte mode.
    pub fn capacity(self) -> usize {
        CAPACITY[self.index()].into()
    }

    /// Width of the byte-mode character count field.
    pub fn char_count_bits(self) -> u8 {
        if self.0 < 10 {
            8
        } else {
            16
        }
    }

    pub fn block_layout(self) -> &'static BlockLayout {
        &BLOCK_LAYOUTS[self.index()]
    }

    pub fn alignment_positions(self) -> &'static [u8] {
        ALIGNMENT_POSITIONS[self.index()]
    }

    pub fn remainder_bits(self) -> u8 {
        REMAINDER_BITS[self.index()]
    }

    /// Checks that the block groups of this version add up to its data codeword total.
    pub fn check_block_layout(self) -> Result<&'static BlockLayout, EncodeError> {
        let layout = self.block_layout();
        let grouped = layout.grouped_data_codewords();
        if grouped != usize::from(layout.total_data_codewords) {
            return Err(EncodeError::table(
                self.0,
                format!(
                    "group sizes sum to {}, expected {}",
                    grouped, layout.total_data_codewords
                ),
            ));
        }
        Ok(layout)
    }

    /// Number of modules left for data once every function pattern is placed.
    pub fn raw_data_modules(self) -> usize {
        let ver = usize::from(self.0);
        let mut result: usize = (16 * ver + 128) * ver + 64;
        if ver >= 2 {
            let numalign: usize = ver / 7 + 2;
            result -= (25 * numalign - 10) * numalign - 55;
            if ver >= 7 {
                result -= 36;
            }
        }
        result
    }

    fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_versions() -> impl Iterator<Item = Version> {
        (1..=40).map(Version::new)
    }

    #[test]
    fn test_smallest_fitting_version() {
        assert_eq!(Version::for_byte_len(0), Ok(Version::new(1)));
        assert_eq!(Version::for_byte_len(11), Ok(Version::new(1)));
        assert_eq!(Version::for_byte_len(12), Ok(Version::new(2)));
        assert_eq!(Version::for_byte_len(200), Ok(Version::new(12)));
        assert_eq!(Version::for_byte_len(1663), Ok(Version::MAX));
    }

    #[test]
    fn test_capacity_exceeded() {
        assert_eq!(
            Version::for_byte_len(1664),
            Err(EncodeError::CapacityExceeded { len: 1664, capacity: 1663 })
        );
    }

    #[test]
    fn test_size() {
        assert_eq!(Version::MIN.size(), 21);
        assert_eq!(Version::new(12).size(), 65);
        assert_eq!(Version::MAX.size(), 177);
    }

    #[test]
    fn test_char_count_bits() {
        assert_eq!(Version::new(9).char_count_bits(), 8);
        assert_eq!(Version::new(10).char_count_bits(), 16);
    }

    #[test]
    fn test_every_layout_is_consistent() {
        for version in all_versions() {
            assert!(version.check_block_layout().is_ok());
        }
    }

    #[test]
    fn test_codewords_fill_raw_modules() {
        for version in all_versions() {
            let raw = version.raw_data_modules();
            assert_eq!(version.block_layout().total_codewords(), raw / 8);
            assert_eq!(usize::from(version.remainder_bits()), raw % 8);
        }
    }

    #[test]
    fn test_capacity_matches_layout() {
        for version in all_versions() {
            let header_bits = 4 + usize::from(version.char_count_bits());
            let data_bits = usize::from(version.block_layout().total_data_codewords) * 8;
            assert_eq!(version.capacity(), (data_bits - header_bits) / 8);
        }
    }
}
