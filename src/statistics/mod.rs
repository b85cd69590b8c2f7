//! Dispersion statistics over sliding windows
//!
//! This module provides [`WindowAggregator`], which tracks the values of a
//! frame as they enter and leave and answers variance and standard
//! deviation queries in constant time.
//!
//! # Example
//!
//! ```
//! use windowstats::statistics::{StatKind, WindowAggregator};
//! use windowstats::traits::{Dispersion, WindowAggregate};
//!
//! let mut window = WindowAggregator::new();
//!
//! for value in [10.0, 12.0, 15.0, 13.0, 18.0] {
//!     window.insert(value).unwrap();
//! }
//!
//! println!("Sample stddev: {:?}", window.stddev_sample());
//! println!("Population variance: {:?}", window.statistic(StatKind::VariancePopulation));
//! ```

mod config;
mod kind;
mod window;

pub use config::AggregatorConfig;
pub use kind::StatKind;
pub use window::WindowAggregator;
