#![no_main]
use std::{cmp::Ordering, collections::VecDeque};

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use quickprims::{
    DateParseOptions, FastInt, RingBuffer, RunningAverage, base64, hex, natural, text,
    try_parse_free_form_date,
    units::{self, DistanceUnit, TimeUnit},
};

#[derive(Arbitrary, Debug)]
enum RingOp {
    Push(i32),
    Clear,
    Get(u8),
}

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    other: &'a str,
    bytes: &'a [u8],
    capacity: u8,
    ops: Vec<RingOp>,
    samples: Vec<f64>,
    cutoff: i8,
    american: bool,
}

/// `core` accepts `+` and redundant leading zeros; the fast codec does not.
fn comparable_with_core(text: &str) -> bool {
    let mantissa = text.strip_prefix('-').unwrap_or(text);
    !text.starts_with('+') && !(mantissa.len() > 1 && mantissa.starts_with('0'))
}

macro_rules! check_ints {
    ($text:expr, $($ty:ident),*) => {$(
        let ours = $ty::try_parse($text);
        if comparable_with_core($text) {
            assert_eq!(ours, $text.parse::<$ty>().ok(), "{}: {:?}", stringify!($ty), $text);
        }
        if let Some(v) = ours {
            assert_eq!($ty::try_parse(&v.fast_format()), Some(v));
        }
    )*};
}

fn check_ring(capacity: u8, ops: &[RingOp]) {
    let capacity = usize::from(capacity % 64);
    let Ok(mut ring) = RingBuffer::new(capacity) else {
        assert!(capacity <= 1);
        return;
    };
    let mut model = VecDeque::with_capacity(capacity);
    for op in ops {
        match *op {
            RingOp::Push(v) => {
                ring.push(v);
                model.push_back(v);
                if model.len() > capacity {
                    model.pop_front();
                }
            }
            RingOp::Clear => {
                ring.clear();
                model.clear();
            }
            RingOp::Get(i) => {
                let i = usize::from(i);
                assert_eq!(ring.get(i), model.get(i));
                assert_eq!(ring.try_get(i).ok(), model.get(i));
            }
        }
        assert_eq!(ring.len(), model.len());
        assert!(ring.iter().eq(model.iter()));
    }
}

fn check_units(samples: &[f64]) {
    for &sample in samples {
        let time = units::format_time(sample, TimeUnit::Seconds);
        assert!(!time.contains(','));
        let distance = units::format_distance(sample, DistanceUnit::Meters);
        assert_eq!(distance.starts_with('-'), sample < 0.0);
    }
}

fn check_average(capacity: u8, samples: &[f64]) {
    let Ok(mut avg) = RunningAverage::new(usize::from(capacity % 64)) else {
        return;
    };
    for &sample in samples {
        let before = avg.current();
        let after = avg.push(sample);
        if !sample.is_finite() {
            assert_eq!(before.to_bits(), after.to_bits());
        }
        assert!(avg.len() <= avg.window());
    }
}

fn codecs(data: &[u8]) {
    let Ok(input) = Input::arbitrary_take_rest(Unstructured::new(data)) else {
        return;
    };

    check_ints!(input.text, i8, i16, i32, i64, u8, u16, u32, u64);

    let forward = natural::compare(input.text, input.other);
    assert_eq!(forward, natural::compare(input.other, input.text).reverse());
    assert_eq!(natural::compare(input.text, input.text), Ordering::Equal);

    let options = DateParseOptions {
        two_digit_year_cutoff: i32::from(input.cutoff),
        american: input.american,
    };
    if let Some(date) = try_parse_free_form_date(input.text, &options) {
        assert!((1..=12).contains(&date.month()));
        assert!(date.day() >= 1);
    }

    let encoded = base64::encode(input.bytes);
    assert_eq!(encoded.len(), base64::encoded_len(input.bytes.len()));

    if let Ok(decoded) = hex::decode_hex(input.text) {
        assert_eq!(decoded.len() * 2, input.text.len());
    }

    let max = usize::from(input.capacity);
    assert!(text::truncate(input.text, max).chars().count() <= max);
    assert_eq!(text::unquote(&text::quote(input.text)), input.text);

    check_ring(input.capacity, &input.ops);
    check_units(&input.samples);
    check_average(input.capacity, &input.samples);
}

fuzz_target!(|data: &[u8]| codecs(data));
