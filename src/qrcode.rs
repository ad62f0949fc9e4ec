//! QR code encoding functionality.
//!
//! This module ties the pipeline together: version selection, the byte-mode bit stream,
//! Reed-Solomon blocks, interleaving, module placement and mask selection. Every symbol uses
//! the quartile error correction level and a single byte-mode segment.

use log::debug;

use crate::bits::build_data_codewords;
use crate::ecc::compute_blocks;
use crate::error::EncodeError;
use crate::interleave::interleave;
use crate::mask::{self, Mask, MaskTrial};
use crate::matrix::{ModuleGrid, SymbolMatrix};
use crate::version::Version;

/// Settings for one encode call. The default is the plain [`encode`](crate::encode) contract.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EncodeOptions {
    /// Smallest version to use, even if the data would fit a smaller one.
    pub min_version: Version,
    /// Largest version allowed before failing with [`EncodeError::CapacityExceeded`].
    pub max_version: Version,
    /// `None` picks the mask with the lowest penalty; `Some` forces one.
    pub mask: Option<Mask>,
    /// Draw the format and version information into the reserved areas.
    pub format_info: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            min_version: Version::MIN,
            max_version: Version::MAX,
            mask: None,
            format_info: false,
        }
    }
}

impl EncodeOptions {
    fn select_version(&self, len: usize) -> Result<Version, EncodeError> {
        let version = Version::for_byte_len(len)?.max(self.min_version);
        if version > self.max_version {
            return Err(EncodeError::CapacityExceeded {
                len,
                capacity: self.max_version.capacity(),
            });
        }
        Ok(version)
    }
}

/// A QR Code symbol, representing a square grid of dark and light modules.
///
/// Instances are immutable after creation.
///
/// # Example
///
/// ```rust
/// use qrgrid::qrcode::QrCode;
///
/// let qr = QrCode::encode_text("Hello, World!").unwrap();
/// assert_eq!(qr.version().value(), 2);
/// assert_eq!(qr.size(), 25);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QrCode {
    version: Version,
    mask: Mask,
    modules: ModuleGrid,
}

impl QrCode {
    /// Encodes a text string (as UTF-8 bytes) with the default options.
    pub fn encode_text(text: &str) -> Result<Self, EncodeError> {
        Self::encode_binary_with(text.as_bytes(), &EncodeOptions::default())
    }

    pub fn encode_text_with(text: &str, options: &EncodeOptions) -> Result<Self, EncodeError> {
        Self::encode_binary_with(text.as_bytes(), options)
    }

    /// Encodes arbitrary bytes with the default options.
    pub fn encode_binary(data: &[u8]) -> Result<Self, EncodeError> {
        Self::encode_binary_with(data, &EncodeOptions::default())
    }

    /// Encodes arbitrary bytes into a symbol.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::CapacityExceeded`] if `data` does not fit `options.max_version`.
    /// - [`EncodeError::InternalTable`] or [`EncodeError::FieldLookup`] if the embedded tables
    ///   are inconsistent. These do not depend on the input and are not worth retrying.
    pub fn encode_binary_with(data: &[u8], options: &EncodeOptions) -> Result<Self, EncodeError> {
        let version = options.select_version(data.len())?;
        let datacodewords = build_data_codewords(data, version)?;
        let blocks = compute_blocks(&datacodewords, version)?;
        let stream = interleave(&blocks, version);

        let mut matrix = SymbolMatrix::new(version);
        matrix.draw_codewords(&stream)?;
        if options.format_info {
            matrix.draw_version_bits();
        }

        let MaskTrial { mask, grid, score } = match options.mask {
            Some(forced) => mask::trial(&matrix, forced, options.format_info),
            None => mask::choose_mask(&matrix, options.format_info),
        };
        debug!(
            "encoded len={} version={} mask={} score={}",
            data.len(),
            version.value(),
            mask.value(),
            score
        );
        Ok(Self {
            version,
            mask,
            modules: grid,
        })
    }

    /// Returns this QR Code's version, in the range [1, 40].
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the mask applied to the data modules, in the range [0, 7].
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns this QR Code's size, in the range [21, 177].
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// Returns the color of the module at the given coordinates.
    ///
    /// Returns `true` for dark modules and `false` for light modules. Coordinates outside the QR
    /// code's bounds return `false`.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        self.modules.get_module(x, y)
    }

    pub fn modules(&self) -> &ModuleGrid {
        &self.modules
    }

    pub fn into_modules(self) -> ModuleGrid {
        self.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{apply_mask, penalty_score};

    /// Rebuilds the unmasked symbol the way `encode_binary_with` does.
    fn unmasked(data: &[u8]) -> SymbolMatrix {
        let version = Version::for_byte_len(data.len()).unwrap();
        let codewords = build_data_codewords(data, version).unwrap();
        let blocks = compute_blocks(&codewords, version).unwrap();
        let mut matrix = SymbolMatrix::new(version);
        matrix.draw_codewords(&interleave(&blocks, version)).unwrap();
        matrix
    }

    #[test]
    fn test_hello_is_version_one() {
        let qr = QrCode::encode_text("HELLO").unwrap();
        assert_eq!(qr.version(), Version::MIN);
        assert_eq!(qr.size(), 21);
    }

    #[test]
    fn test_mask_choice_is_optimal() {
        for text in ["HELLO", "https://example.com/some/path?q=1", "ü€ unicode ✓"] {
            let qr = QrCode::encode_text(text).unwrap();
            let matrix = unmasked(text.as_bytes());
            let scores: Vec<u32> =
                Mask::all().map(|m| penalty_score(&apply_mask(&matrix, m))).collect();
            let min = *scores.iter().min().unwrap();
            let first = scores.iter().position(|&s| s == min).unwrap();
            assert_eq!(qr.mask(), Mask::new(first as u8), "{}", text);
            assert_eq!(qr.modules(), &apply_mask(&matrix, qr.mask()));
        }
    }

    #[test]
    fn test_forced_mask() {
        let text = "forced mask";
        let matrix = unmasked(text.as_bytes());
        for mask in Mask::all() {
            let options = EncodeOptions {
                mask: Some(mask),
                ..EncodeOptions::default()
            };
            let qr = QrCode::encode_text_with(text, &options).unwrap();
            assert_eq!(qr.mask(), mask);
            assert_eq!(qr.modules(), &apply_mask(&matrix, mask));
        }
    }

    #[test]
    fn test_min_version() {
        let options = EncodeOptions {
            min_version: Version::new(5),
            ..EncodeOptions::default()
        };
        let qr = QrCode::encode_text_with("HELLO", &options).unwrap();
        assert_eq!(qr.version(), Version::new(5));
        assert_eq!(qr.size(), 37);
    }

    #[test]
    fn test_max_version() {
        let options = EncodeOptions {
            max_version: Version::new(2),
            ..EncodeOptions::default()
        };
        assert!(QrCode::encode_text_with(&"a".repeat(20), &options).is_ok());
        assert_eq!(
            QrCode::encode_text_with(&"a".repeat(21), &options),
            Err(EncodeError::CapacityExceeded { len: 21, capacity: 20 })
        );
    }

    #[test]
    fn test_format_info_is_opt_in() {
        let plain = QrCode::encode_text("format").unwrap();
        // Top-left format area stays light by default.
        for i in 0..6 {
            assert!(!plain.get_module(8, i));
            assert!(!plain.get_module(i, 8));
        }

        let options = EncodeOptions {
            format_info: true,
            ..EncodeOptions::default()
        };
        let qr = QrCode::encode_text_with("format", &options).unwrap();
        let bits = crate::format::format_bits(qr.mask());
        for i in 0..6 {
            assert_eq!(qr.get_module(8, i), (bits >> i) & 1 != 0);
        }
    }

    #[test]
    fn test_format_info_draws_version_bits() {
        let options = EncodeOptions {
            format_info: true,
            ..EncodeOptions::default()
        };
        let qr = QrCode::encode_text_with(&"v".repeat(100), &options).unwrap();
        assert_eq!(qr.version(), Version::new(8));
        let size = qr.size() as i32;
        let bits = crate::format::version_bits(qr.version());
        for i in 0..18 {
            let expected = (bits >> i) & 1 != 0;
            assert_eq!(qr.get_module(size - 11 + i % 3, i / 3), expected);
            assert_eq!(qr.get_module(i / 3, size - 11 + i % 3), expected);
        }
    }
}
