//! Statistics functions for query engines
//!
//! This module exposes the aggregators as single-argument aggregate and
//! window functions: a dynamically typed [`Value`] argument, the alias
//! [`registry`], and [`StatFunction`], which implements the step, inverse,
//! value and final callbacks over one lazily allocated window.
//!
//! # Example
//!
//! ```
//! use windowstats::functions::{lookup, StatFunction, Value};
//!
//! let kind = lookup("var_samp").unwrap();
//! let mut function = StatFunction::new(kind);
//!
//! for row in [1i64, 3, 5] {
//!     function.step(&Value::from(row)).unwrap();
//! }
//!
//! // window mode: row `1` leaves the frame
//! function.inverse(&Value::from(1i64));
//! assert_eq!(function.value(), Some(2.0));
//! ```

mod function;
mod registry;
mod value;

pub use function::{aggregate, rolling, StatFunction};
pub use registry::{lookup, registry};
pub use value::Value;
