//! # qrgrid
//!
//! A Rust library that turns text into the module grid of a QR code.
//!
//! `qrgrid` encodes a string as a single byte-mode segment at the quartile (~25%) error
//! correction level and returns the square grid of dark and light modules, versions 1 to 40.
//! The grid is all you get: the quiet zone, module scaling and colors belong to the caller.
//!
//! ## Features
//!
//! - Smallest-version selection for up to 1663 bytes of input.
//! - Reed-Solomon error correction over GF(256) with interleaved blocks.
//! - Automatic mask selection using the four standard penalty rules.
//! - Optional format and version information, forced masks and version bounds through
//!   [`EncodeOptions`].
//! - Rendering helpers for SVG, ASCII art and in-memory image buffers.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrgrid = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! ```rust
//! let grid = qrgrid::encode("HELLO").unwrap();
//! assert_eq!(grid.size(), 21);
//! // Finder pattern corner
//! assert!(grid.get(0, 0));
//! ```
//!
//! Render with a 4-module quiet zone:
//!
//! ```rust
//! use qrgrid::helper::to_image_buffer;
//!
//! let grid = qrgrid::encode("Hello, World!").unwrap();
//! let img = to_image_buffer(&grid, 4, 1);
//! assert_eq!(img.dimensions(), (33, 33));
//! ```
//!
//! ## Modules
//!
//! - [`qrcode`]: The encoding pipeline and its options.
//! - [`version`], [`bits`], [`gf256`], [`ecc`], [`interleave`], [`matrix`], [`mask`]: The
//!   pipeline stages, bottom to top.
//! - [`helper`]: Utilities for rendering module grids.

#![forbid(unsafe_code)]

pub mod bits;
pub mod ecc;
pub mod error;
pub mod format;
pub mod gf256;
pub mod helper;
pub mod interleave;
pub mod mask;
pub mod matrix;
pub mod qrcode;
pub mod tables;
pub mod version;

pub use error::EncodeError;
pub use mask::Mask;
pub use matrix::ModuleGrid;
pub use qrcode::{EncodeOptions, QrCode};
pub use version::Version;

/// Encodes `text` (as UTF-8 bytes) into a QR code module grid.
///
/// The grid is addressed by (column, row) with (0, 0) at the top left; `true` is a dark module.
///
/// # Errors
///
/// Returns [`EncodeError::CapacityExceeded`] if the text is longer than 1663 bytes.
pub fn encode(text: &str) -> Result<ModuleGrid, EncodeError> {
    QrCode::encode_text(text).map(QrCode::into_modules)
}
