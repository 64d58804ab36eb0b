//! Hexadecimal text to bytes.
use alloc::vec::Vec;

use crate::error::HexError;

/// Decodes pairs of hex digits (either case) into bytes.
///
/// ```rust
/// assert_eq!(quickprims::hex::decode_hex("0aFf").unwrap(), [0x0a, 0xff]);
/// assert!(quickprims::hex::decode_hex("abc").is_err());
/// ```
///
/// # Errors
///
/// [`HexError::OddLength`] when `text` has an odd number of bytes and
/// [`HexError::InvalidDigit`] for the first character outside `0-9a-fA-F`.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let bytes = text.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(HexError::OddLength(bytes.len()));
    }

    let invalid = |index: usize| HexError::InvalidDigit {
        index,
        found: text
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER),
    };

    bytes
        .chunks_exact(2)
        .enumerate()
        .map(|(pair, digits)| -> Result<u8, HexError> {
            let index = pair * 2;
            let high = nibble(digits[0]).ok_or_else(|| invalid(index))?;
            let low = nibble(digits[1]).ok_or_else(|| invalid(index + 1))?;
            Ok((high << 4) | low)
        })
        .collect()
}

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", &[])]
    #[case("00", &[0x00])]
    #[case("0aFf", &[0x0a, 0xff])]
    #[case("DEADbeef", &[0xde, 0xad, 0xbe, 0xef])]
    fn decodes(#[case] text: &str, #[case] expected: &[u8]) {
        assert_eq!(decode_hex(text).unwrap(), expected);
    }

    #[rstest]
    #[case("a", HexError::OddLength(1))]
    #[case("0g", HexError::InvalidDigit { index: 1, found: 'g' })]
    #[case("zz", HexError::InvalidDigit { index: 0, found: 'z' })]
    #[case("00 1", HexError::InvalidDigit { index: 2, found: ' ' })]
    #[case("é", HexError::InvalidDigit { index: 0, found: 'é' })]
    fn rejects(#[case] text: &str, #[case] expected: HexError) {
        assert_eq!(decode_hex(text).unwrap_err(), expected);
    }
}
