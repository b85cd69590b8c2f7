//! The four dispersion statistics

use core::fmt;

/// Which dispersion statistic to report
///
/// One aggregator state answers all four; the kind only selects the divisor
/// (`n` or `n - 1`) and whether the square root is taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatKind {
    /// Sample standard deviation (`n - 1` divisor)
    StddevSample,
    /// Population standard deviation (`n` divisor)
    StddevPopulation,
    /// Sample variance (`n - 1` divisor)
    VarianceSample,
    /// Population variance (`n` divisor)
    VariancePopulation,
}

impl StatKind {
    /// Every kind, in registration order
    pub const ALL: [StatKind; 4] = [
        StatKind::StddevSample,
        StatKind::StddevPopulation,
        StatKind::VarianceSample,
        StatKind::VariancePopulation,
    ];

    /// Fewest buffered values for which the statistic is defined
    ///
    /// | Statistic | Minimum count |
    /// |-----------|---------------|
    /// | sample variance / stddev | 2 |
    /// | population variance / stddev | 1 |
    pub fn min_count(self) -> usize {
        if self.is_sample() {
            2
        } else {
            1
        }
    }

    /// Whether Bessel's correction applies
    pub fn is_sample(self) -> bool {
        matches!(self, StatKind::StddevSample | StatKind::VarianceSample)
    }

    /// Whether the result is a square root of the variance
    pub fn is_stddev(self) -> bool {
        matches!(self, StatKind::StddevSample | StatKind::StddevPopulation)
    }

    /// Canonical function name
    pub fn name(self) -> &'static str {
        match self {
            StatKind::StddevSample => "stddev_samp",
            StatKind::StddevPopulation => "stddev_pop",
            StatKind::VarianceSample => "variance_samp",
            StatKind::VariancePopulation => "variance_pop",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
