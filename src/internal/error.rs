use thiserror::Error;

/// Unified error type for the canon-bcs library.
///
/// Every variant is terminal for the encode/decode call that produced it.
/// The encoder or decoder that raised it can simply be dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value handed to the encoder does not fit the target width.
    #[error("Out Of Range: value {value} does not fit in u{bits}")]
    OutOfRange { value: String, bits: u16 },

    /// The decoder needs more bytes than the input still holds.
    #[error("Unexpected End Of Input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEndOfInput { needed: usize, remaining: usize },

    /// A variable-length integer exceeds the supported range.
    #[error("Overflow: {0}")]
    Overflow(String),

    /// A bool or option discriminant byte is neither 0x00 nor 0x01.
    #[error("Invalid Tag: {tag:#04x} is not a valid {kind} tag")]
    InvalidTag { kind: &'static str, tag: u8 },

    /// A variable-length integer was not minimally encoded (strict mode only).
    #[error("Non Canonical Encoding: {0}")]
    NonCanonicalEncoding(String),

    /// A length-prefixed string is not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),

    /// Nested sequences, options or composites went deeper than allowed.
    #[error("Depth Limit Exceeded: maximum container depth is {0}")]
    DepthLimitExceeded(usize),

    /// Input remained after a top-level value was fully decoded.
    #[error("Trailing Bytes: {0} bytes left after decoding")]
    TrailingBytes(usize),
}

/// A specialized `Result` type for canon-bcs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand used by every bounds check on the decoding cursor.
    pub(crate) fn end_of_input(needed: usize, remaining: usize) -> Self {
        Error::UnexpectedEndOfInput { needed, remaining }
    }
}

/*
Panic policy:

Malformed input and out-of-range values are reported through Result<T, Error>.
Only programming errors inside the crate (broken cursor invariants) may panic,
and the cursor checks below are written so that they cannot.
*/
