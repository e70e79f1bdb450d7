// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Baseline vs. current comparison.
//!
//! Every benchmark name ends up in exactly one bucket: new, removed,
//! regression, improvement, unchanged or skipped. Only the first is derived
//! from `current` alone and only removed from `baseline` alone.

use std::cmp::Ordering;

use crate::error::CompareError;
use crate::types::{BenchmarkSet, Threshold};

/// Classification of one benchmark present in both sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Regression,
    Improvement,
    Unchanged,
}

impl Classification {
    /// Bucket a relative change. Changes exactly at `±threshold` are unchanged.
    pub fn of(change: f64, threshold: Threshold) -> Self {
        let t = threshold.fraction();
        if change > t {
            Classification::Regression
        } else if change < -t {
            Classification::Improvement
        } else {
            Classification::Unchanged
        }
    }
}

/// Relative change `(current - baseline) / baseline`.
///
/// Fails for a baseline that is zero, negative or non-finite, or a current
/// time that is non-finite.
pub fn relative_change(
    name: &str,
    baseline_time: f64,
    current_time: f64,
) -> Result<f64, CompareError> {
    if !baseline_time.is_finite() || baseline_time <= 0.0 {
        return Err(CompareError::DegenerateBaseline {
            name: name.to_string(),
            baseline_time,
        });
    }
    if !current_time.is_finite() {
        return Err(CompareError::NonFiniteCurrent {
            name: name.to_string(),
            current_time,
        });
    }
    Ok((current_time - baseline_time) / baseline_time)
}

/// A benchmark whose time moved beyond the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkDelta {
    pub name: String,
    /// Baseline real time in nanoseconds
    pub baseline_time: f64,
    /// Current real time in nanoseconds
    pub current_time: f64,
    /// Relative change as a fraction (0.06 = +6%)
    pub change: f64,
}

impl BenchmarkDelta {
    /// Change as a percentage.
    pub fn change_percent(&self) -> f64 {
        self.change * 100.0
    }
}

/// Overall outcome of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// At least one regression.
    Regressed,
    /// No regressions and at least one improvement.
    Improved,
    /// Nothing crossed the threshold.
    NoSignificantChange,
}

impl Verdict {
    /// Process exit code: 1 if anything regressed, 0 otherwise.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Regressed => 1,
            Verdict::Improved | Verdict::NoSignificantChange => 0,
        }
    }
}

/// Result of comparing two benchmark sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub threshold: Threshold,
    /// Worst first (largest change).
    pub regressions: Vec<BenchmarkDelta>,
    /// Best first (most negative change).
    pub improvements: Vec<BenchmarkDelta>,
    /// Names only in `current`, sorted.
    pub new: Vec<String>,
    /// Names only in `baseline`, sorted.
    pub removed: Vec<String>,
    /// Pairs that could not be classified.
    pub skipped: Vec<CompareError>,
    pub unchanged: usize,
    pub baseline_count: usize,
}

impl Comparison {
    /// Benchmarks present in both sets: `|baseline| - |removed|`.
    pub fn total_compared(&self) -> usize {
        self.baseline_count - self.removed.len()
    }

    pub fn verdict(&self) -> Verdict {
        if !self.regressions.is_empty() {
            Verdict::Regressed
        } else if !self.improvements.is_empty() {
            Verdict::Improved
        } else {
            Verdict::NoSignificantChange
        }
    }

    /// Process exit code for this comparison.
    pub fn exit_code(&self) -> i32 {
        self.verdict().exit_code()
    }
}

/// Compare `current` against `baseline`.
pub fn compare(
    baseline: &BenchmarkSet,
    current: &BenchmarkSet,
    threshold: Threshold,
) -> Comparison {
    let mut regressions = Vec::new();
    let mut improvements = Vec::new();
    let mut new = Vec::new();
    let mut skipped = Vec::new();
    let mut unchanged = 0usize;

    for record in current {
        let Some(base) = baseline.get(&record.name) else {
            new.push(record.name.clone());
            continue;
        };

        let change = match relative_change(&record.name, base.real_time, record.real_time) {
            Ok(change) => change,
            Err(reason) => {
                tracing::warn!(%reason, "Skipping benchmark");
                skipped.push(reason);
                continue;
            }
        };

        let delta = BenchmarkDelta {
            name: record.name.clone(),
            baseline_time: base.real_time,
            current_time: record.real_time,
            change,
        };
        match Classification::of(change, threshold) {
            Classification::Regression => regressions.push(delta),
            Classification::Improvement => improvements.push(delta),
            Classification::Unchanged => unchanged += 1,
        }
    }

    let removed: Vec<String> = baseline
        .names()
        .filter(|name| !current.contains(name))
        .map(str::to_string)
        .collect();

    regressions.sort_by(|a, b| by_change(b, a).then_with(|| a.name.cmp(&b.name)));
    improvements.sort_by(|a, b| by_change(a, b).then_with(|| a.name.cmp(&b.name)));
    new.sort();

    tracing::debug!(
        regressions = regressions.len(),
        improvements = improvements.len(),
        unchanged,
        new = new.len(),
        removed = removed.len(),
        skipped = skipped.len(),
        "Comparison complete"
    );

    Comparison {
        threshold,
        regressions,
        improvements,
        new,
        removed,
        skipped,
        unchanged,
        baseline_count: baseline.len(),
    }
}

fn by_change(a: &BenchmarkDelta, b: &BenchmarkDelta) -> Ordering {
    a.change.total_cmp(&b.change)
}
