//! Core traits for window aggregates
//!
//! Every aggregate implements [`WindowAggregate`]: values enter with
//! `insert` and leave, oldest first, with `evict`. Statistics over the
//! current contents are exposed through specialized traits such as
//! [`Dispersion`].

use core::fmt::Debug;

use crate::error::StatsError;
use crate::statistics::StatKind;

/// State that values enter and leave in FIFO order
pub trait WindowAggregate: Clone + Debug {
    /// The type of value this aggregate consumes
    type Item;

    /// Add a value as the newest member of the window
    ///
    /// Returns an error if the value is rejected or storage cannot grow;
    /// the aggregate is unchanged in either case.
    fn insert(&mut self, item: Self::Item) -> Result<(), StatsError>;

    /// Remove the oldest value, if any
    fn evict(&mut self) -> Option<Self::Item>;

    /// Release all state, returning to the freshly constructed form
    fn reset(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of values currently in the window
    fn count(&self) -> u64;

    /// Check if the window is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Variance and standard deviation over the current window
///
/// Implementors provide [`statistic`](Dispersion::statistic); the four named
/// queries are views over it. `None` means the statistic is undefined: too
/// few values, or a result that is not a finite non-negative number.
pub trait Dispersion: WindowAggregate {
    /// Compute the requested statistic
    fn statistic(&self, kind: StatKind) -> Option<f64>;

    /// Sample variance, defined for 2 or more values
    fn variance_sample(&self) -> Option<f64> {
        self.statistic(StatKind::VarianceSample)
    }

    /// Population variance, defined for 1 or more values
    fn variance_population(&self) -> Option<f64> {
        self.statistic(StatKind::VariancePopulation)
    }

    /// Sample standard deviation, defined for 2 or more values
    fn stddev_sample(&self) -> Option<f64> {
        self.statistic(StatKind::StddevSample)
    }

    /// Population standard deviation, defined for 1 or more values
    fn stddev_population(&self) -> Option<f64> {
        self.statistic(StatKind::StddevPopulation)
    }
}
