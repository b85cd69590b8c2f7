//! Sliding-window variance and standard deviation
//!
//! Keeps the window's values in a ring buffer alongside a running sum and
//! sum of squares, so inserts, evictions and queries are all O(1).
//!
//! The sum / sum-of-squares formulation loses precision when the variance
//! is small relative to the mean (catastrophic cancellation). Unlike
//! Welford's update it can remove values, which a sliding frame requires.

use super::{AggregatorConfig, StatKind};
use crate::buffer::RingBuffer;
use crate::error::StatsError;
use crate::math::{sanitize, sanitize_variance, sqrt};
use crate::traits::{Dispersion, WindowAggregate};

#[cfg(not(feature = "std"))]
use alloc::format;

/// Running variance over a FIFO window of values
///
/// The buffer is allocated on the first insert; an aggregator that never
/// sees a value never allocates.
///
/// # Example
///
/// ```
/// use windowstats::statistics::WindowAggregator;
/// use windowstats::traits::{Dispersion, WindowAggregate};
///
/// let mut window = WindowAggregator::new();
///
/// for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     window.insert(value).unwrap();
/// }
/// assert_eq!(window.variance_population(), Some(2.0));
///
/// // slide the frame: [2, 3, 4, 5]
/// window.evict();
/// assert_eq!(window.variance_population(), Some(1.25));
/// ```
///
/// # Whole-group Usage
///
/// ```
/// use windowstats::statistics::WindowAggregator;
/// use windowstats::traits::Dispersion;
///
/// let group = WindowAggregator::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
///
/// assert_eq!(group.stddev_population(), Some(2.0));
/// assert!(group.variance_sample().unwrap() > 4.57);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WindowAggregator {
    /// Values in the window, absent until the first insert
    buffer: Option<RingBuffer<f64>>,
    /// Sum of buffered values
    sum: f64,
    /// Sum of squares of buffered values
    sum_sq: f64,
    config: AggregatorConfig,
}

impl WindowAggregator {
    /// Create an empty aggregator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty aggregator with custom buffer sizing
    pub fn with_config(config: AggregatorConfig) -> Result<Self, StatsError> {
        config.validate()?;
        Ok(Self {
            buffer: None,
            sum: 0.0,
            sum_sq: 0.0,
            config,
        })
    }

    /// Build an aggregator holding `values`, oldest first
    pub fn from_values(values: &[f64]) -> Result<Self, StatsError> {
        let mut aggregator = Self::new();
        aggregator.extend(values.iter().copied())?;
        Ok(aggregator)
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Number of values in the window
    pub fn len(&self) -> usize {
        self.buffer.as_ref().map_or(0, RingBuffer::len)
    }

    /// Slots currently allocated, 0 before the first insert
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().map_or(0, RingBuffer::capacity)
    }

    /// Running sum of the window
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Running sum of squares of the window
    pub fn sum_of_squares(&self) -> f64 {
        self.sum_sq
    }

    /// Arithmetic mean, defined for 1 or more values
    pub fn mean(&self) -> Option<f64> {
        match self.len() {
            0 => None,
            n => sanitize(self.sum / n as f64),
        }
    }

    /// Buffered values from oldest to newest
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.buffer.iter().flat_map(|ring| ring.iter())
    }

    /// Insert every value in order, stopping at the first error
    pub fn extend<I>(&mut self, values: I) -> Result<(), StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        for value in values {
            self.insert(value)?;
        }
        Ok(())
    }

    fn allocate(&self) -> Result<RingBuffer<f64>, StatsError> {
        let ring = RingBuffer::try_with_capacity(self.config.initial_capacity)?
            .with_growth_factor(self.config.growth_factor);
        tracing::debug!(
            capacity = self.config.initial_capacity,
            "window buffer allocated"
        );
        Ok(ring)
    }
}

/// Population variance from running moments: `E[x²] - E[x]²`
///
/// Can come out slightly negative when all values are (nearly) equal.
fn population_variance(sum: f64, sum_sq: f64, count: usize) -> f64 {
    let n = count as f64;
    let mean = sum / n;
    sum_sq / n - mean * mean
}

impl WindowAggregate for WindowAggregator {
    type Item = f64;

    fn insert(&mut self, value: f64) -> Result<(), StatsError> {
        if !value.is_finite() {
            return Err(StatsError::InvalidInput(format!(
                "{} is not a finite number",
                value
            )));
        }

        if self.buffer.is_none() {
            self.buffer = Some(self.allocate()?);
        }
        if let Some(ring) = self.buffer.as_mut() {
            ring.push_back(value)?;
        }

        self.sum += value;
        self.sum_sq += value * value;
        Ok(())
    }

    fn evict(&mut self) -> Option<f64> {
        let ring = self.buffer.as_mut()?;
        if ring.is_empty() {
            return None;
        }

        let value = ring.pop_front();
        if ring.is_empty() {
            // an empty window sums to exactly zero
            self.sum = 0.0;
            self.sum_sq = 0.0;
        } else {
            self.sum -= value;
            self.sum_sq -= value * value;
        }
        Some(value)
    }

    fn reset(&mut self) {
        tracing::trace!(len = self.len(), "window aggregator reset");
        self.buffer = None;
        self.sum = 0.0;
        self.sum_sq = 0.0;
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self
                .buffer
                .as_ref()
                .map_or(0, |ring| ring.size_bytes() - core::mem::size_of::<RingBuffer<f64>>())
    }

    fn count(&self) -> u64 {
        self.len() as u64
    }
}

impl Dispersion for WindowAggregator {
    fn statistic(&self, kind: StatKind) -> Option<f64> {
        let count = self.len();
        if count < kind.min_count() {
            return None;
        }

        let mut variance = population_variance(self.sum, self.sum_sq, count);
        if kind.is_sample() {
            // Bessel's correction
            variance *= count as f64 / (count - 1) as f64;
        }

        let variance = sanitize_variance(variance)?;
        if kind.is_stddev() {
            sanitize(sqrt(variance))
        } else {
            Some(variance)
        }
    }
}
