//! # Windowstats
//!
//! Sliding-window variance and standard deviation for Rust.
//!
//! Windowstats computes sample and population variance and standard
//! deviation over a stream of numbers, either once for a whole group or
//! continuously over a frame that values enter and leave in order.
//!
//! ## Features
//!
//! - **O(1) updates**: inserts and evictions adjust a running sum and sum of
//!   squares; nothing is re-scanned
//! - **O(1) queries**: all four statistics are available at any time
//! - **Growable storage**: the backing ring buffer doubles when full
//! - **Undefined, not NaN**: results that cannot be computed are `None`
//!
//! ## Quick Start
//!
//! ```rust
//! use windowstats::prelude::*;
//!
//! let mut window = WindowAggregator::new();
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     window.insert(value).unwrap();
//! }
//! println!("Sample stddev: {:?}", window.stddev_sample());
//!
//! // the oldest value leaves the frame
//! window.evict();
//! assert_eq!(window.variance_population(), Some(1.25));
//! ```
//!
//! ## Query Engines
//!
//! The [`functions`] module wraps the aggregator in the step / inverse /
//! value / final protocol used by SQL aggregate and window functions:
//!
//! ```rust
//! use windowstats::functions::{StatFunction, Value};
//!
//! let mut variance = StatFunction::named("VAR_POP").unwrap();
//! variance.step(&Value::Integer(1)).unwrap();
//! variance.step(&Value::Null).unwrap();
//! variance.step(&Value::Real(3.0)).unwrap();
//!
//! assert_eq!(variance.finalize(), Some(1.0));
//! ```
//!
//! ## Precision
//!
//! Variance is derived as `E[x²] - E[x]²`. This supports removal of values
//! but loses precision when the spread is tiny compared to the magnitude of
//! the values. A result pushed below zero by rounding is reported as `None`.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `functions` (default): Aggregate/window function surface with aliases
//! - `serde`: Enable serialization of configuration

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod buffer;
pub mod error;
pub mod statistics;
pub mod traits;

mod math;

#[cfg(feature = "functions")]
#[cfg_attr(docsrs, doc(cfg(feature = "functions")))]
pub mod functions;

pub mod prelude {
    pub use crate::error::StatsError;
    pub use crate::statistics::{AggregatorConfig, StatKind, WindowAggregator};
    pub use crate::traits::*;

    #[cfg(feature = "functions")]
    pub use crate::functions::{StatFunction, Value};
}

pub use error::StatsError;
pub use statistics::WindowAggregator;
