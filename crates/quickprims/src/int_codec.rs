//! Allocation-light decimal conversions for the fixed-width integers.
//!
//! Formatting writes digits back to front into a stack buffer and copies
//! them out once. Parsing rejects any numeral that cannot fit the target
//! type using a per-type [`IntBounds`] row: a mantissa longer than
//! `max_digits`, or exactly that long with a leading digit above
//! `max_leading_digit`, fails before any arithmetic happens. The remaining
//! candidates are accumulated with checked arithmetic and compared against
//! the exact magnitude limit, so `127` and `-128` parse as `i8` while `128`
//! and `-129` do not.
//!
//! Accepted syntax is deliberately narrow: an optional `-` (signed types
//! only) followed by one or more ASCII digits. No whitespace, no `+`, no
//! digit grouping.
//!
//! ```rust
//! use quickprims::FastInt;
//!
//! assert_eq!(i8::try_parse("-128"), Some(-128));
//! assert_eq!(i8::try_parse("128"), None);
//! assert_eq!(u32::MAX.fast_format(), "4294967295");
//! ```
use alloc::string::String;

use crate::error::FormatError;

/// Limits used to reject out-of-range numerals for one integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntBounds {
    /// Decimal digits in the largest magnitude the type can hold.
    pub max_digits: usize,
    /// Largest most-significant digit allowed when a mantissa has exactly
    /// `max_digits` digits.
    pub max_leading_digit: u8,
    /// Whether a leading `-` is accepted.
    pub signed: bool,
    /// Magnitude of the type's maximum value.
    pub max_positive: u64,
    /// Magnitude of the type's minimum value; `0` for unsigned types.
    pub max_negative: u64,
}

impl IntBounds {
    const fn signed(max_digits: usize, max_leading_digit: u8, max_positive: u64) -> Self {
        Self {
            max_digits,
            max_leading_digit,
            signed: true,
            max_positive,
            max_negative: max_positive + 1,
        }
    }

    const fn unsigned(max_digits: usize, max_leading_digit: u8, max_positive: u64) -> Self {
        Self {
            max_digits,
            max_leading_digit,
            signed: false,
            max_positive,
            max_negative: 0,
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// Exact decimal formatting and parsing for `i8`..`i64` and `u8`..`u64`.
pub trait FastInt: Copy + private::Sealed {
    /// Range table for this type.
    const BOUNDS: IntBounds;
    /// Type name used in [`FormatError`]s.
    const NAME: &'static str;

    /// Appends the decimal representation of `self` to `out`.
    fn append_decimal(self, out: &mut String);

    /// Decimal representation of `self`, identical to its `Display` output.
    #[must_use]
    fn fast_format(self) -> String {
        let mut out = String::with_capacity(Self::BOUNDS.max_digits + 1);
        self.append_decimal(&mut out);
        out
    }

    /// Parses a numeral given as bytes, returning `None` if it is malformed
    /// or out of range.
    fn try_parse_bytes(text: &[u8]) -> Option<Self>;

    /// Parses a numeral, returning `None` if it is malformed or out of range.
    fn try_parse(text: &str) -> Option<Self> {
        Self::try_parse_bytes(text.as_bytes())
    }

    /// Parses a numeral.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] carrying `text` when
    /// [`try_parse`](Self::try_parse) would return `None`.
    fn parse(text: &str) -> Result<Self, FormatError> {
        Self::try_parse(text).ok_or_else(|| FormatError::new(text, Self::NAME))
    }
}

/// Formats any [`FastInt`] as decimal text.
#[must_use]
pub fn format_int<T: FastInt>(value: T) -> String {
    value.fast_format()
}

/// Parses decimal text into any [`FastInt`].
///
/// # Errors
///
/// See [`FastInt::parse`].
pub fn parse_int<T: FastInt>(text: &str) -> Result<T, FormatError> {
    T::parse(text)
}

/// Non-failing counterpart of [`parse_int`].
#[must_use]
pub fn try_parse_int<T: FastInt>(text: &str) -> Option<T> {
    T::try_parse(text)
}

// 20 digits covers u64::MAX and the magnitude of i64::MIN.
const MAX_DIGITS: usize = 20;

fn write_decimal(out: &mut String, negative: bool, mut magnitude: u64) {
    let mut digits = [0u8; MAX_DIGITS];
    let mut pos = MAX_DIGITS;
    loop {
        pos -= 1;
        // `magnitude % 10` always fits.
        #[allow(clippy::cast_possible_truncation)]
        let digit = (magnitude % 10) as u8;
        digits[pos] = b'0' + digit;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }

    out.reserve(MAX_DIGITS - pos + usize::from(negative));
    if negative {
        out.push('-');
    }
    out.extend(digits[pos..].iter().map(|&b| char::from(b)));
}

/// Splits off the sign and returns the magnitude if it is within `bounds`.
fn read_decimal(text: &[u8], bounds: &IntBounds) -> Option<(bool, u64)> {
    let (negative, digits) = match text {
        [b'-', rest @ ..] if bounds.signed => (true, rest),
        [] => return None,
        _ => (false, text),
    };

    let (&leading, _) = digits.split_first()?;
    if digits.len() > bounds.max_digits {
        return None;
    }
    if digits.len() == bounds.max_digits && leading > b'0' + bounds.max_leading_digit {
        return None;
    }

    let mut magnitude: u64 = 0;
    for &b in digits {
        let digit = b.wrapping_sub(b'0');
        if digit > 9 {
            return None;
        }
        magnitude = magnitude.checked_mul(10)?.checked_add(u64::from(digit))?;
    }

    let limit = if negative {
        bounds.max_negative
    } else {
        bounds.max_positive
    };
    (magnitude <= limit).then_some((negative, magnitude))
}

macro_rules! impl_signed {
    ($($ty:ident => $bounds:expr),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl FastInt for $ty {
            const BOUNDS: IntBounds = $bounds;
            const NAME: &'static str = stringify!($ty);

            fn append_decimal(self, out: &mut String) {
                write_decimal(out, self < 0, u64::from(self.unsigned_abs()));
            }

            fn try_parse_bytes(text: &[u8]) -> Option<Self> {
                let (negative, magnitude) = read_decimal(text, &Self::BOUNDS)?;
                let magnitude = i128::from(magnitude);
                $ty::try_from(if negative { -magnitude } else { magnitude }).ok()
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ident => $bounds:expr),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl FastInt for $ty {
            const BOUNDS: IntBounds = $bounds;
            const NAME: &'static str = stringify!($ty);

            fn append_decimal(self, out: &mut String) {
                write_decimal(out, false, u64::from(self));
            }

            fn try_parse_bytes(text: &[u8]) -> Option<Self> {
                let (_, magnitude) = read_decimal(text, &Self::BOUNDS)?;
                $ty::try_from(magnitude).ok()
            }
        }
    )*};
}

impl_signed! {
    i8 => IntBounds::signed(3, 1, 127),
    i16 => IntBounds::signed(5, 3, 32_767),
    i32 => IntBounds::signed(10, 2, 2_147_483_647),
    i64 => IntBounds::signed(19, 9, 9_223_372_036_854_775_807),
}

impl_unsigned! {
    u8 => IntBounds::unsigned(3, 2, 255),
    u16 => IntBounds::unsigned(5, 6, 65_535),
    u32 => IntBounds::unsigned(10, 4, 4_294_967_295),
    u64 => IntBounds::unsigned(20, 1, 18_446_744_073_709_551_615),
}
