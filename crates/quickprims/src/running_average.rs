//! Moving average over the most recent values pushed into a fixed window.
//!
//! The sum of the live window is maintained incrementally, so both `push`
//! and `current` are O(1). Accumulated floating-point error is bounded by
//! the window size; the sum is never recomputed from scratch.
use crate::{error::InvalidArgument, ring_buffer::RingBuffer};

/// Smoothed average of the last `window` values.
///
/// The window starts out holding a single `0.0`, so the average is defined
/// before the first real value arrives.
///
/// ```rust
/// use quickprims::RunningAverage;
///
/// let mut avg = RunningAverage::new(3).unwrap();
/// assert_eq!(avg.push(1.0), 0.5);
/// assert_eq!(avg.push(2.0), 1.0);
/// assert_eq!(avg.push(3.0), 2.0);
/// assert_eq!(avg.push(4.0), 3.0);
/// assert_eq!(avg.push(f64::NAN), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct RunningAverage {
    values: RingBuffer<f64>,
    sum: f64,
}

impl RunningAverage {
    /// Creates an average over the last `window` values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::WindowSize`] when `window` is `0` or `1`.
    pub fn new(window: usize) -> Result<Self, InvalidArgument> {
        let mut values =
            RingBuffer::new(window).map_err(|_| InvalidArgument::WindowSize(window))?;
        values.push(0.0);
        Ok(Self { values, sum: 0.0 })
    }

    /// Adds `value` to the window and returns the new average.
    ///
    /// NaN and infinite values are dropped and the average is returned
    /// unchanged.
    pub fn push(&mut self, value: f64) -> f64 {
        if !value.is_finite() {
            log::debug!("running average dropped non-finite value {value}");
            return self.current();
        }

        if self.values.is_full() {
            if let Some(oldest) = self.values.first() {
                self.sum -= oldest;
            }
        }
        self.sum += value;
        self.values.push(value);

        self.current()
    }

    /// The average of the live window.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn current(&self) -> f64 {
        self.sum / self.values.len() as f64
    }

    /// Number of values currently averaged, including the initial zero until
    /// it is evicted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: the window is seeded with a zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The configured window size.
    #[must_use]
    pub fn window(&self) -> usize {
        self.values.capacity()
    }
}
