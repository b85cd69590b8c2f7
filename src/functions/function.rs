//! Aggregate and window function state
//!
//! A host engine drives one [`StatFunction`] per group or partition through
//! four callbacks:
//!
//! - `step` for every row entering the frame
//! - `inverse` for every row leaving it (window mode only)
//! - `value` whenever the current result is needed
//! - `finalize` once, at the end of the group

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::registry::lookup;
use super::value::Value;
use crate::error::StatsError;
use crate::statistics::{AggregatorConfig, StatKind, WindowAggregator};
use crate::traits::{Dispersion, WindowAggregate};

/// One evaluation of a statistics function over a group or partition
///
/// # Example
///
/// ```
/// use windowstats::functions::{StatFunction, Value};
///
/// let mut stddev = StatFunction::named("STDDEV").unwrap();
///
/// for value in [Value::Integer(2), Value::Null, Value::Real(4.0)] {
///     stddev.step(&value).unwrap();
/// }
///
/// // nulls are ignored: stddev of [2, 4]
/// assert_eq!(stddev.finalize(), Some(2f64.sqrt()));
/// ```
#[derive(Clone, Debug)]
pub struct StatFunction {
    kind: StatKind,
    state: WindowAggregator,
}

impl StatFunction {
    /// Create a function computing `kind` with default buffer sizing
    pub fn new(kind: StatKind) -> Self {
        Self {
            kind,
            state: WindowAggregator::new(),
        }
    }

    /// Create a function computing `kind` with custom buffer sizing
    pub fn with_config(kind: StatKind, config: AggregatorConfig) -> Result<Self, StatsError> {
        Ok(Self {
            kind,
            state: WindowAggregator::with_config(config)?,
        })
    }

    /// Create a function from any registered name or alias
    pub fn named(name: &str) -> Result<Self, StatsError> {
        lookup(name).map(Self::new)
    }

    pub fn kind(&self) -> StatKind {
        self.kind
    }

    /// Values currently inside the frame
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Feed a row entering the frame
    ///
    /// Nulls are skipped. Non-numeric and non-finite values fail with
    /// `InvalidInput` and leave the state unchanged.
    pub fn step(&mut self, value: &Value) -> Result<(), StatsError> {
        match value.as_f64()? {
            Some(x) => self.state.insert(x),
            None => Ok(()),
        }
    }

    /// Feed a row's argument list, which must hold exactly one value
    pub fn step_args(&mut self, args: &[Value]) -> Result<(), StatsError> {
        match args {
            [value] => self.step(value),
            _ => Err(StatsError::Arity {
                expected: 1,
                found: args.len(),
            }),
        }
    }

    /// Remove the oldest row from the frame
    ///
    /// A null row was never inserted, so it is not evicted either.
    pub fn inverse(&mut self, value: &Value) {
        if value.is_null() {
            return;
        }
        self.state.evict();
    }

    /// Current result, `None` when undefined
    pub fn value(&self) -> Option<f64> {
        self.state.statistic(self.kind)
    }

    /// Final result; consumes the function and releases its buffer
    pub fn finalize(self) -> Option<f64> {
        let result = self.value();
        tracing::trace!(kind = %self.kind, len = self.len(), "statistics function finalized");
        result
    }
}

/// Evaluate `kind` over a whole group
pub fn aggregate(kind: StatKind, values: &[Value]) -> Result<Option<f64>, StatsError> {
    let mut function = StatFunction::new(kind);
    for value in values {
        function.step(value)?;
    }
    Ok(function.finalize())
}

/// Evaluate `kind` over a `ROWS BETWEEN preceding PRECEDING AND CURRENT ROW`
/// frame, producing one result per row
///
/// # Example
///
/// ```
/// use windowstats::functions::{rolling, Value};
/// use windowstats::statistics::StatKind;
///
/// let rows: Vec<Value> = [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().map(Value::from).collect();
/// let results = rolling(StatKind::VariancePopulation, &rows, 3).unwrap();
///
/// // the last frame is [2, 3, 4, 5]
/// assert_eq!(results[4], Some(1.25));
/// ```
pub fn rolling(
    kind: StatKind,
    values: &[Value],
    preceding: usize,
) -> Result<Vec<Option<f64>>, StatsError> {
    let mut function = StatFunction::new(kind);
    let mut results = Vec::with_capacity(values.len());

    for (row, value) in values.iter().enumerate() {
        // `usize::MAX` preceding is an unbounded frame: nothing ever leaves
        let leaving = preceding
            .checked_add(1)
            .and_then(|width| row.checked_sub(width));
        if let Some(leaving) = leaving {
            function.inverse(&values[leaving]);
        }
        function.step(value)?;
        results.push(function.value());
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reals(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn test_step_skips_null() {
        let mut function = StatFunction::new(StatKind::VariancePopulation);
        function.step(&Value::Null).unwrap();
        assert!(function.is_empty());
        assert_eq!(function.value(), None);

        function.step(&Value::Integer(5)).unwrap();
        assert_eq!(function.value(), Some(0.0));
    }

    #[test]
    fn test_step_rejects_text() {
        let mut function = StatFunction::new(StatKind::StddevSample);
        function.step(&Value::Real(1.0)).unwrap();

        let err = function.step(&Value::from("oops")).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));
        assert_eq!(function.len(), 1);
    }

    #[test]
    fn test_step_rejects_nan() {
        let mut function = StatFunction::new(StatKind::StddevSample);
        assert!(function.step(&Value::Real(f64::NAN)).is_err());
        assert!(function.is_empty());
    }

    #[test]
    fn test_arity() {
        let mut function = StatFunction::new(StatKind::VarianceSample);
        assert_eq!(
            function.step_args(&[]),
            Err(StatsError::Arity {
                expected: 1,
                found: 0
            })
        );
        assert!(function
            .step_args(&[Value::Real(1.0), Value::Real(2.0)])
            .is_err());
        function.step_args(&[Value::Real(1.0)]).unwrap();
        assert_eq!(function.len(), 1);
    }

    #[test]
    fn test_inverse_skips_null() {
        let mut function = StatFunction::new(StatKind::VariancePopulation);
        function.step(&Value::Real(1.0)).unwrap();
        function.step(&Value::Real(3.0)).unwrap();

        function.inverse(&Value::Null);
        assert_eq!(function.len(), 2);

        function.inverse(&Value::Real(1.0));
        assert_eq!(function.len(), 1);
        assert_eq!(function.value(), Some(0.0));
    }

    #[test]
    fn test_all_null_group() {
        let rows = [Value::Null, Value::Null];
        for kind in StatKind::ALL {
            assert_eq!(aggregate(kind, &rows).unwrap(), None);
        }
    }

    #[test]
    fn test_aggregate() {
        let rows = reals(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(aggregate(StatKind::VariancePopulation, &rows).unwrap(), Some(2.0));
        assert_eq!(aggregate(StatKind::VarianceSample, &rows).unwrap(), Some(2.5));
    }

    #[test]
    fn test_rolling() {
        let rows = reals(&[1.0, 3.0, 5.0, 7.0]);
        let results = rolling(StatKind::VariancePopulation, &rows, 1).unwrap();

        // frames: [1], [1,3], [3,5], [5,7]
        assert_eq!(results, vec![Some(0.0), Some(1.0), Some(1.0), Some(1.0)]);
    }

    #[test]
    fn test_rolling_with_nulls() {
        let rows = vec![
            Value::Real(1.0),
            Value::Null,
            Value::Real(3.0),
            Value::Real(5.0),
        ];
        let results = rolling(StatKind::VarianceSample, &rows, 1).unwrap();

        // frames: [1], [1,null], [null,3], [3,5]
        assert_eq!(results, vec![None, None, None, Some(2.0)]);
    }

    #[test]
    fn test_rolling_unbounded_preceding() {
        let rows = reals(&[1.0, 2.0, 3.0, 4.0]);
        let results = rolling(StatKind::VariancePopulation, &rows, usize::MAX).unwrap();

        for (row, result) in results.iter().enumerate() {
            let prefix = aggregate(StatKind::VariancePopulation, &rows[..=row]).unwrap();
            assert_eq!(*result, prefix);
        }
        assert_eq!(results[1], Some(0.25));
    }

    #[test]
    fn test_rolling_propagates_error() {
        let rows = vec![Value::Real(1.0), Value::from("x")];
        assert!(rolling(StatKind::StddevPopulation, &rows, 2).is_err());
    }

    #[test]
    fn test_named() {
        let function = StatFunction::named("VAR_POP").unwrap();
        assert_eq!(function.kind(), StatKind::VariancePopulation);
        assert!(StatFunction::named("nope").is_err());
    }
}
