//! Aggregator configuration

use crate::buffer::{DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR};
use crate::error::StatsError;

/// Buffer sizing for a [`WindowAggregator`](super::WindowAggregator)
///
/// The defaults avoid any reallocation for windows of up to 100 rows while
/// keeping the idle footprint small.
///
/// # Example
///
/// ```
/// use windowstats::statistics::{AggregatorConfig, WindowAggregator};
///
/// let config = AggregatorConfig::default().with_initial_capacity(16);
/// let aggregator = WindowAggregator::with_config(config).unwrap();
/// assert_eq!(aggregator.config().initial_capacity, 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AggregatorConfig {
    /// Slots allocated on the first insert
    pub initial_capacity: usize,
    /// Capacity multiplier when the buffer is full
    pub growth_factor: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl AggregatorConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Reject settings the ring buffer cannot honor
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.initial_capacity == 0 {
            return Err(StatsError::InvalidConfig(
                "initial_capacity must be positive",
            ));
        }
        if self.growth_factor < 2 {
            return Err(StatsError::InvalidConfig(
                "growth_factor must be at least 2",
            ));
        }
        Ok(())
    }
}
