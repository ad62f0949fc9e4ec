/// Errors raised while encoding text into a module grid.
///
/// Ways to handle this error include:
///
/// - Shorten the text if it is [`EncodeError::CapacityExceeded`].
/// - Raise `max_version` in [`EncodeOptions`](crate::qrcode::EncodeOptions) if it was lowered.
/// - Treat the other variants as fatal for this one symbol. They come from the embedded
///   constant tables or the field arithmetic, and encoding the same input again fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The input needs more bytes than the largest allowed version can hold.
    #[error("data length = {len} bytes, max capacity = {capacity} bytes")]
    CapacityExceeded { len: usize, capacity: usize },

    /// The per-version codeword tables disagree with each other.
    #[error("inconsistent codeword table for version {version}: {detail}")]
    InternalTable { version: u8, detail: String },

    /// A value with no entry in the GF(256) table was looked up.
    #[error("finite field table has no entry for {repr} {value}")]
    FieldLookup { repr: &'static str, value: usize },
}

impl EncodeError {
    pub(crate) fn table(version: u8, detail: impl Into<String>) -> Self {
        Self::InternalTable {
            version,
            detail: detail.into(),
        }
    }
}
