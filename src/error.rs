//! Error types for window aggregates
//!
//! Only genuine failures live here. A statistic that cannot be computed
//! (too few values, or a non-finite result) is not an error; queries report
//! it as `None`.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

/// Errors raised by buffers, aggregators and the function surface
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// A present value is not a finite real number
    #[error("invalid data type, expected numeric value: {0}")]
    InvalidInput(String),

    /// Backing storage could not be allocated
    #[error("out of memory: could not allocate room for {requested} values")]
    OutOfMemory { requested: usize },

    /// Configuration rejected by [`AggregatorConfig::validate`](crate::statistics::AggregatorConfig::validate)
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// No statistic is registered under this name
    #[error("unknown statistics function: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments passed to a statistics function
    #[error("statistics functions require exactly {expected} argument, found {found}")]
    Arity { expected: usize, found: usize },
}
