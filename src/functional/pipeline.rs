//! Fluent Combinator Pipelines
//!
//! [`Pipeline`] chains the sequence combinators into a single expression and
//! records, for every stage, how many elements went in and came out and how
//! long the stage took. Each stage is logged at `debug` level through
//! `tracing`, so a pipeline can be inspected without changing the code that
//! builds it.
//!
//! ```
//! use seqops::prelude::*;
//!
//! let pipeline = Pipeline::new((1..=100).collect::<Sequence<i32>>())
//!     .map(|x| x * 2)
//!     .keep(|x| x % 4 == 0)
//!     .map(|x| x / 2);
//!
//! assert_eq!(pipeline.metrics().len(), 3);
//! let result = pipeline.execute();
//! assert_eq!(result.len(), 50);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use serde_derive::Serialize;

use crate::functional::{mapping, modification, predicates, reduction};
use crate::models::sequence::Sequence;

/// What one pipeline stage did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageMetrics {
    /// Combinator that ran (`map`, `keep`, ...)
    pub stage: &'static str,
    pub input_len: usize,
    pub output_len: usize,
    pub elapsed: Duration,
}

impl fmt::Display for StageMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} elements in {:?}",
            self.stage, self.input_len, self.output_len, self.elapsed
        )
    }
}

/// Aggregate over every recorded stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineSummary {
    pub stage_count: usize,
    /// Length before the first stage
    pub input_len: usize,
    /// Length after the last stage
    pub output_len: usize,
    pub total_time: Duration,
}

/// A sequence flowing through a chain of combinators.
#[derive(Debug, Clone)]
pub struct Pipeline<T: Clone> {
    data: Sequence<T>,
    /// Metrics from every stage applied so far, in order
    metrics_history: Vec<StageMetrics>,
}

impl<T: Clone> Pipeline<T> {
    /// Starts a pipeline over `data` with an empty metrics history.
    pub fn new(data: Sequence<T>) -> Self {
        Self {
            data,
            metrics_history: Vec::new(),
        }
    }

    fn stage<U, F>(self, stage: &'static str, run: F) -> Pipeline<U>
    where
        U: Clone,
        F: FnOnce(&Sequence<T>) -> Sequence<U>,
    {
        let start = Instant::now();
        let data = run(&self.data);
        let metrics = StageMetrics {
            stage,
            input_len: self.data.len(),
            output_len: data.len(),
            elapsed: start.elapsed(),
        };
        tracing::debug!(
            stage,
            input_len = metrics.input_len,
            output_len = metrics.output_len,
            elapsed_us = metrics.elapsed.as_micros() as u64,
            "pipeline stage complete"
        );

        let mut metrics_history = self.metrics_history;
        metrics_history.push(metrics);
        Pipeline {
            data,
            metrics_history,
        }
    }

    /// Applies a mapping stage.
    pub fn map<U, F>(self, transform: F) -> Pipeline<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        self.stage("map", |data| mapping::map(data, transform))
    }

    /// Applies a filtering stage keeping matching elements.
    pub fn keep<P>(self, predicate: P) -> Pipeline<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.stage("keep", |data| predicates::keep(data, predicate))
    }

    /// Applies a filtering stage dropping matching elements.
    pub fn discard<P>(self, predicate: P) -> Pipeline<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.stage("discard", |data| predicates::discard(data, predicate))
    }

    /// Transforms only the elements satisfying `predicate`.
    pub fn modify_if<P, F>(self, predicate: P, transform: F) -> Pipeline<T>
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&T) -> T,
    {
        self.stage("modify_if", |data| {
            modification::modify_if(data, predicate, transform)
        })
    }

    /// Stable sort by element order; names travel with their elements.
    pub fn sort(self) -> Pipeline<T>
    where
        T: Ord,
    {
        self.stage("sort", |data| {
            let mut entries: Vec<(Option<String>, T)> = data
                .entries()
                .map(|(name, item)| (name.map(str::to_owned), item.clone()))
                .collect();
            entries.sort_by(|(_, a), (_, b)| a.cmp(b));
            Sequence::from_entries(entries)
        })
    }

    /// Terminal fold over the current data.
    pub fn fold<B, F>(self, init: B, combine: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        reduction::fold(&self.data, init, combine)
    }

    /// Terminal reduction over the current data, `None` when it is empty.
    pub fn reduce<F>(self, combine: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        reduction::reduce(&self.data, combine)
    }

    /// Finishes the pipeline and returns the data.
    pub fn execute(self) -> Sequence<T> {
        self.data
    }

    /// Current data without consuming the pipeline.
    pub fn data(&self) -> &Sequence<T> {
        &self.data
    }

    /// Metrics from every stage applied so far, in order.
    pub fn metrics(&self) -> &[StageMetrics] {
        &self.metrics_history
    }

    /// Consumes the pipeline and returns its metrics history.
    pub fn into_metrics(self) -> Vec<StageMetrics> {
        self.metrics_history
    }

    /// Aggregate over all recorded stages.
    ///
    /// Returns a default summary if no stage has run.
    pub fn metrics_summary(&self) -> PipelineSummary {
        let (Some(first), Some(last)) = (self.metrics_history.first(), self.metrics_history.last())
        else {
            return PipelineSummary::default();
        };
        PipelineSummary {
            stage_count: self.metrics_history.len(),
            input_len: first.input_len,
            output_len: last.output_len,
            total_time: self.metrics_history.iter().map(|m| m.elapsed).sum(),
        }
    }
}

impl<T: Clone> From<Sequence<T>> for Pipeline<T> {
    fn from(data: Sequence<T>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_new_empty_metrics() {
        let pipeline = Pipeline::new(Sequence::from(vec![1, 2, 3]));
        assert!(pipeline.metrics().is_empty());
        assert_eq!(pipeline.metrics_summary(), PipelineSummary::default());
    }

    #[test]
    fn test_pipeline_chained_operations_accumulate_metrics() {
        let pipeline = Pipeline::new((1..=100).collect::<Sequence<i32>>())
            .map(|x| x * 2)
            .keep(|x| x % 4 == 0)
            .map(|x| x / 2);

        let stages: Vec<_> = pipeline.metrics().iter().map(|m| m.stage).collect();
        assert_eq!(stages, vec!["map", "keep", "map"]);
        assert_eq!(pipeline.metrics()[1].input_len, 100);
        assert_eq!(pipeline.metrics()[1].output_len, 50);

        let summary = pipeline.metrics_summary();
        assert_eq!(summary.stage_count, 3);
        assert_eq!(summary.input_len, 100);
        assert_eq!(summary.output_len, 50);

        let result = pipeline.execute();
        assert_eq!(result.first(), Some(&2));
        assert_eq!(result.last(), Some(&100));
    }

    #[test]
    fn test_pipeline_discard_and_modify_if() {
        let result = Pipeline::new((1..=6).collect::<Sequence<i32>>())
            .discard(|x| *x == 3)
            .modify_if(|x| x % 2 == 0, |x| -x)
            .execute();
        assert_eq!(result.to_vec(), vec![1, -2, -4, 5, -6]);
    }

    #[test]
    fn test_pipeline_sort_keeps_names() {
        let pipeline = Pipeline::new(Sequence::named([("c", 3), ("a", 1), ("b", 2)])).sort();
        let data = pipeline.data();
        assert_eq!(data.to_vec(), vec![1, 2, 3]);
        assert_eq!(data.names(), vec![Some("a"), Some("b"), Some("c")]);
        assert_eq!(pipeline.into_metrics().len(), 1);
    }

    #[test]
    fn test_pipeline_terminal_reductions() {
        let numbers: Sequence<i32> = (1..=10).collect();
        let sum = Pipeline::new(numbers.clone())
            .keep(|x| x % 2 == 1)
            .fold(0, |acc, x| acc + x);
        assert_eq!(sum, 25);

        let product = Pipeline::from(numbers).keep(|x| *x <= 4).reduce(|acc, x| acc * x);
        assert_eq!(product, Some(24));
    }

    #[test]
    fn test_stage_metrics_display() {
        let metrics = StageMetrics {
            stage: "keep",
            input_len: 10,
            output_len: 5,
            elapsed: Duration::from_micros(3),
        };
        assert_eq!(metrics.to_string(), "keep: 10 -> 5 elements in 3µs");
    }
}
