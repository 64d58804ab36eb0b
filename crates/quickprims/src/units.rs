//! Human-readable durations and distances in the best-fitting unit.
//!
//! A value is converted to the largest unit in which it is at least `1`,
//! or to the smallest unit when it is below `1` in every unit. Each unit
//! prints a fixed number of decimals; metres and kilometres use fewer
//! decimals as the value grows. Output never uses digit grouping.
//!
//! ```rust
//! use quickprims::units::{DistanceUnit, TimeUnit, format_distance, format_time};
//!
//! assert_eq!(format_time(90.0, TimeUnit::Seconds), "1.5 min");
//! assert_eq!(format_time(0.25, TimeUnit::Seconds), "250.00 ms");
//! assert_eq!(format_distance(1500.0, DistanceUnit::Meters), "1.50 km");
//! ```
use alloc::{format, string::String};

/// Units accepted by [`format_time`].
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// `ns`
    Nanoseconds,
    /// `us`
    Microseconds,
    /// `ms`
    Milliseconds,
    /// `s`
    #[default]
    Seconds,
    /// `min`
    Minutes,
    /// `hrs`
    Hours,
    /// `days`
    Days,
}

/// Units accepted by [`format_distance`].
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    /// `nm`
    Nanometers,
    /// `um`
    Micrometers,
    /// `mm`
    Millimeters,
    /// `cm`
    Centimeters,
    /// `m`
    #[default]
    Meters,
    /// `km`
    Kilometers,
}

/// One display band: values of at least `from` units print with `decimals`.
struct Band {
    suffix: &'static str,
    size: f64,
    from: f64,
    decimals: usize,
}

const fn band(suffix: &'static str, size: f64, from: f64, decimals: usize) -> Band {
    Band {
        suffix,
        size,
        from,
        decimals,
    }
}

// Sizes are in the smallest unit of each family, bands ascend.
const TIME_BANDS: &[Band] = &[
    band("ns", 1.0, 0.0, 0),
    band("us", 1e3, 1.0, 2),
    band("ms", 1e6, 1.0, 2),
    band("s", 1e9, 1.0, 2),
    band("min", 60e9, 1.0, 1),
    band("hrs", 3_600e9, 1.0, 1),
    band("days", 86_400e9, 1.0, 2),
];

const DISTANCE_BANDS: &[Band] = &[
    band("nm", 1.0, 0.0, 0),
    band("um", 1e3, 1.0, 0),
    band("um", 1e3, 10.0, 1),
    band("mm", 1e6, 1.0, 1),
    band("cm", 1e7, 1.0, 1),
    band("m", 1e9, 1.0, 2),
    band("m", 1e9, 10.0, 1),
    band("m", 1e9, 100.0, 0),
    band("km", 1e12, 1.0, 2),
    band("km", 1e12, 10.0, 1),
    band("km", 1e12, 100.0, 0),
];

impl TimeUnit {
    fn size(self) -> f64 {
        match self {
            Self::Nanoseconds => 1.0,
            Self::Microseconds => 1e3,
            Self::Milliseconds => 1e6,
            Self::Seconds => 1e9,
            Self::Minutes => 60e9,
            Self::Hours => 3_600e9,
            Self::Days => 86_400e9,
        }
    }

    /// Display suffix, e.g. `"ms"`.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "min",
            Self::Hours => "hrs",
            Self::Days => "days",
        }
    }
}

impl DistanceUnit {
    fn size(self) -> f64 {
        match self {
            Self::Nanometers => 1.0,
            Self::Micrometers => 1e3,
            Self::Millimeters => 1e6,
            Self::Centimeters => 1e7,
            Self::Meters => 1e9,
            Self::Kilometers => 1e12,
        }
    }

    /// Display suffix, e.g. `"km"`.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Nanometers => "nm",
            Self::Micrometers => "um",
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Kilometers => "km",
        }
    }
}

/// Formats a duration of `value` `unit`s in the best-fitting time unit.
///
/// Negative values keep their sign and are scaled by magnitude. NaN and
/// infinities are printed as-is in `unit`.
#[must_use]
pub fn format_time(value: f64, unit: TimeUnit) -> String {
    render(value, unit.size(), unit.suffix(), TIME_BANDS)
}

/// Formats a distance of `value` `unit`s in the best-fitting length unit.
///
/// Negative values keep their sign and are scaled by magnitude. NaN and
/// infinities are printed as-is in `unit`.
#[must_use]
pub fn format_distance(value: f64, unit: DistanceUnit) -> String {
    render(value, unit.size(), unit.suffix(), DISTANCE_BANDS)
}

fn render(value: f64, size: f64, suffix: &str, bands: &[Band]) -> String {
    if !value.is_finite() {
        return format!("{value} {suffix}");
    }

    // `0.0 - -0.0` is `+0.0`, so negative zero prints as `0`.
    let magnitude = if value.is_sign_negative() { 0.0 - value } else { value };
    let base = magnitude * size;
    let band = bands
        .iter()
        .rfind(|band| band.size * band.from <= base)
        .unwrap_or(&bands[0]);
    let sign = if value < 0.0 { "-" } else { "" };

    format!(
        "{sign}{:.*} {}",
        band.decimals,
        base / band.size,
        band.suffix
    )
}
