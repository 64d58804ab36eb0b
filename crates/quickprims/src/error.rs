use bstr::BString;
use thiserror::Error;

/// A constructor received an argument that violates its contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Ring buffers need room for at least two values.
    #[error("ring buffer capacity must be greater than one, got {0}")]
    RingCapacity(usize),
    /// Averaging windows must hold at least two values.
    #[error("averaging window must be greater than one, got {0}")]
    WindowSize(usize),
}

/// An index fell outside `[0, len)`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of range for ring buffer of length {len}")]
pub struct OutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Number of live elements at the time of the access.
    pub len: usize,
}

/// Text that could not be parsed into the requested value.
///
/// The offending input is kept verbatim. Byte input that is not valid UTF-8
/// is displayed lossily.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not parse '{input}' as {target}")]
pub struct FormatError {
    pub(crate) input: BString,
    pub(crate) target: &'static str,
}

impl FormatError {
    pub(crate) fn new(input: impl Into<BString>, target: &'static str) -> Self {
        Self {
            input: input.into(),
            target,
        }
    }

    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// Name of the type the input was parsed as, e.g. `"i8"` or `"date"`.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
}

/// Failure to decode hexadecimal text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Hex digits come in pairs.
    #[error("hex input has odd length {0}")]
    OddLength(usize),
    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit '{found}' at byte {index}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn format_error_keeps_input() {
        let err = FormatError::new("12x", "u8");
        assert_eq!(err.input(), b"12x");
        assert_eq!(err.target(), "u8");
        assert_eq!(err.to_string(), "could not parse '12x' as u8");
    }

    #[test]
    fn format_error_displays_invalid_utf8_lossily() {
        let err = FormatError::new(&b"1\xff"[..], "i32");
        assert_eq!(err.to_string(), "could not parse '1\u{fffd}' as i32");
    }

    #[test]
    fn out_of_range_message() {
        let err = OutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 4 out of range for ring buffer of length 2"
        );
    }
}
