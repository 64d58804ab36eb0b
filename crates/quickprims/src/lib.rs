//! Small, exact data and text primitives.
//!
//! - [`RingBuffer`]: fixed-capacity buffer that overwrites its oldest element.
//! - [`RunningAverage`]: O(1) moving average built on a [`RingBuffer`].
//! - [`base64`]: RFC 4648 Base64 encoding.
//! - [`FastInt`]: bounds-exact decimal formatting and parsing for the
//!   fixed-width integers.
//! - [`natural`]: ordering for strings with embedded numbers.
//! - [`parse_free_form_date`]: heuristic parsing of hand-typed dates.
//! - [`hex`] and [`text`]: hex decoding and quote/ellipsis helpers.
//! - [`units`]: durations and distances printed in the best-fitting unit.
//!
//! Everything is synchronous and allocation-light. The codecs and the
//! comparator are pure functions; the buffers need `&mut` to change.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod date;
mod error;
mod int_codec;
mod ring_buffer;
mod running_average;

pub mod base64;
pub mod hex;
pub mod natural;
pub mod text;
pub mod units;

#[cfg(test)]
mod tests;

pub use date::{Date, DateParseOptions, parse_free_form_date, try_parse_free_form_date};
pub use error::{FormatError, HexError, InvalidArgument, OutOfRange};
pub use int_codec::{FastInt, IntBounds, format_int, parse_int, try_parse_int};
pub use ring_buffer::{Iter, RingBuffer};
pub use running_average::RunningAverage;
