//! Standard RFC 4648 Base64 encoding with `=` padding and no line wrapping.
//!
//! Only encoding is provided.
use alloc::string::String;

/// The 64 output symbols, indexed by 6-bit value.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding symbol for a trailing partial group.
pub const PAD: u8 = b'=';

/// Length of the encoded text for `input_len` bytes.
#[must_use]
pub const fn encoded_len(input_len: usize) -> usize {
    input_len.div_ceil(3) * 4
}

/// Encodes `input` as Base64 text.
///
/// ```rust
/// assert_eq!(quickprims::base64::encode(b"foo"), "Zm9v");
/// assert_eq!(quickprims::base64::encode(b"fo"), "Zm8=");
/// assert_eq!(quickprims::base64::encode(b""), "");
/// ```
#[must_use]
pub fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(input.len()));
    encode_into(input, &mut out);
    out
}

/// Appends the Base64 encoding of `input` to `out`.
pub fn encode_into(input: &[u8], out: &mut String) {
    out.reserve(encoded_len(input.len()));

    let mut groups = input.chunks_exact(3);
    for group in &mut groups {
        let [a, b, c] = [group[0], group[1], group[2]];
        push_symbols(out, &[
            a >> 2,
            ((a & 0x03) << 4) | (b >> 4),
            ((b & 0x0f) << 2) | (c >> 6),
            c & 0x3f,
        ]);
    }

    match *groups.remainder() {
        [] => {}
        [a] => {
            push_symbols(out, &[a >> 2, (a & 0x03) << 4]);
            out.push(PAD as char);
            out.push(PAD as char);
        }
        [a, b] => {
            push_symbols(out, &[a >> 2, ((a & 0x03) << 4) | (b >> 4), (b & 0x0f) << 2]);
            out.push(PAD as char);
        }
        _ => unreachable!("chunks_exact(3) leaves at most two bytes"),
    }
}

fn push_symbols(out: &mut String, sextets: &[u8]) {
    for &sextet in sextets {
        out.push(ALPHABET[usize::from(sextet)] as char);
    }
}
