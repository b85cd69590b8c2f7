//! Function names and aliases
//!
//! Each statistic is reachable under several names. Lookup ignores ASCII
//! case, so `STDDEV`, `StdDev` and `stddev` all resolve to the sample
//! standard deviation.
//!
//! The alias set is fixed at compile time. Hosts that want other names
//! resolve them to a [`StatKind`] themselves and build the function with
//! `StatFunction::new`.

use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::error::StatsError;
use crate::statistics::StatKind;

const STDDEV_SAMPLE_NAMES: &[&str] = &[
    "stddev_samp",
    "stddev_sample",
    "stdev_samp",
    "stdev_sample",
    "stddev",
    "stdev",
    "std_dev",
    "standard_deviation",
];

const STDDEV_POPULATION_NAMES: &[&str] = &[
    "stddev_pop",
    "stddev_population",
    "stdev_pop",
    "stdev_population",
];

const VARIANCE_SAMPLE_NAMES: &[&str] = &[
    "variance_samp",
    "variance_sample",
    "var_samp",
    "var_sample",
    "variance",
    "var",
];

const VARIANCE_POPULATION_NAMES: &[&str] = &[
    "variance_pop",
    "variance_population",
    "var_pop",
    "var_population",
];

impl StatKind {
    /// Every name this statistic is registered under, canonical name first
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            StatKind::StddevSample => STDDEV_SAMPLE_NAMES,
            StatKind::StddevPopulation => STDDEV_POPULATION_NAMES,
            StatKind::VarianceSample => VARIANCE_SAMPLE_NAMES,
            StatKind::VariancePopulation => VARIANCE_POPULATION_NAMES,
        }
    }

    /// Resolve a function name or alias, ignoring ASCII case
    pub fn from_name(name: &str) -> Result<Self, StatsError> {
        lookup(name)
    }
}

/// All `(name, statistic)` pairs, grouped by statistic
pub fn registry() -> impl Iterator<Item = (&'static str, StatKind)> {
    StatKind::ALL
        .into_iter()
        .flat_map(|kind| kind.aliases().iter().map(move |&name| (name, kind)))
}

/// Resolve a function name, ignoring ASCII case
pub fn lookup(name: &str) -> Result<StatKind, StatsError> {
    registry()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|(_, kind)| kind)
        .ok_or_else(|| StatsError::UnknownFunction(name.to_string()))
}

impl FromStr for StatKind {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
    }
}
