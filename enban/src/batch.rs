//! Parallel validation of many IBAN or BIC texts
//!
//! Parsing is pure, so inputs are split across the rayon pool and the
//! results are collected back in input order.

use enban_core::{Pattern, Result};
use log::debug;
use rayon::prelude::*;

/// Below this many inputs the texts are parsed on the calling thread
pub const PARALLEL_THRESHOLD: usize = 256;

/// Per-input results of a batch, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport<T> {
    results: Vec<Result<T>>,
}

impl<T> BatchReport<T> {
    pub fn results(&self) -> &[Result<T>] {
        &self.results
    }

    pub fn into_results(self) -> Vec<Result<T>> {
        self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|result| result.is_ok()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.len() - self.valid_count()
    }

    /// True for an empty batch as well
    pub fn is_all_valid(&self) -> bool {
        self.results.iter().all(|result| result.is_ok())
    }

    /// Accepted values, dropping the rejected inputs
    pub fn into_valid(self) -> Vec<T> {
        self.results.into_iter().filter_map(|result| result.ok()).collect()
    }
}

/// Parse every text with `pattern`
pub fn parse_all<T, P, S>(pattern: &P, texts: &[S]) -> BatchReport<T>
where
    T: Send,
    P: Pattern<T> + Sync,
    S: AsRef<str> + Sync,
{
    let results: Vec<Result<T>> = if texts.len() < PARALLEL_THRESHOLD {
        texts.iter().map(|text| pattern.parse(text.as_ref())).collect()
    } else {
        texts.par_iter().map(|text| pattern.parse(text.as_ref())).collect()
    };

    let report = BatchReport { results };
    debug!(
        "parsed batch of {} texts ({} rejected)",
        report.len(),
        report.invalid_count()
    );
    report
}
