//! Descriptive statistics over the accumulated sample list.
//!
//! Quartiles use the split-in-half estimator: Q1 is the median of the lower
//! half (first `floor(n/2)` sorted elements), Q3 the median of the upper
//! half (sorted elements from index `ceil(n/2)`). This exact formula is
//! load-bearing for output compatibility; do not swap in an interpolated
//! quantile method.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::display::format_number;
use crate::core::{CalcError, CalcResult};

/// Summary statistics of a sample list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic sum.
    pub sum: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median of the sorted samples.
    pub median: f64,
    /// Median of the lower half. NaN for a single sample.
    pub q1: f64,
    /// Median of the upper half. NaN for a single sample.
    pub q3: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Samples strictly greater than zero.
    pub positive_count: usize,
    /// Samples strictly less than zero.
    pub negative_count: usize,
    /// Most frequent value; ties go to the value seen first.
    pub mode: f64,
}

impl Summary {
    /// Computes summary statistics over `samples`.
    ///
    /// The input order is irrelevant to every statistic except the mode
    /// tie-break, which prefers the value occurring earliest in `samples`.
    pub fn compute(samples: &[f64]) -> CalcResult<Self> {
        if samples.is_empty() {
            return Err(CalcError::EmptySamples);
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();

        let sum: f64 = sorted.iter().sum();
        let positive_count = sorted.iter().filter(|&&v| v > 0.0).count();
        let negative_count = sorted.iter().filter(|&&v| v < 0.0).count();

        Ok(Self {
            count: n,
            sum,
            mean: sum / n as f64,
            median: median_of(&sorted),
            q1: median_of(&sorted[..n / 2]),
            q3: median_of(&sorted[n.div_ceil(2)..]),
            min: sorted[0],
            max: sorted[n - 1],
            positive_count,
            negative_count,
            mode: mode_of(samples),
        })
    }

    /// Renders the user-facing multi-line report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = vec!["Statistics".to_string()];
        lines.push(format!("Count:    {}", self.count));
        lines.push(format!("Sum:      {}", format_number(self.sum)));
        lines.push(format!("Mean:     {}", format_number(self.mean)));
        lines.push(format!("Median:   {}", format_number(self.median)));
        lines.push(format!("Q1:       {}", format_number(self.q1)));
        lines.push(format!("Q3:       {}", format_number(self.q3)));
        lines.push(format!("Max:      {}", format_number(self.max)));
        lines.push(format!("Min:      {}", format_number(self.min)));
        lines.push(format!("Positive: {}", self.positive_count));
        lines.push(format!("Negative: {}", self.negative_count));
        lines.push(format!("Mode:     {}", format_number(self.mode)));
        lines.join("\n")
    }
}

/// Median of an ascending slice. NaN for an empty slice (a one-element
/// sample list has empty halves).
fn median_of(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Most frequent value, ties broken by first occurrence in input order.
/// Values are bucketed by bit pattern, so 0.0 and -0.0 count separately.
fn mode_of(samples: &[f64]) -> f64 {
    let mut counts: HashMap<u64, usize> = HashMap::with_capacity(samples.len());
    for &v in samples {
        *counts.entry(v.to_bits()).or_insert(0) += 1;
    }

    let mut best = samples[0];
    let mut best_count = 0;
    for &v in samples {
        let count = counts[&v.to_bits()];
        if count > best_count {
            best = v;
            best_count = count;
        }
    }
    best
}
