// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Domain types for benchmark results.
//!
//! Newtypes validate their invariants at construction, so the comparator
//! never sees a negative threshold or an unknown time unit.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

use crate::error::ThresholdError;

/// Default regression threshold: 5%.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Validated relative-change threshold, stored as a fraction (0.05 = 5%).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Create a new Threshold with validation.
    pub fn new(fraction: f64) -> Result<Self, ThresholdError> {
        if !fraction.is_finite() || fraction < 0.0 {
            return Err(ThresholdError::Invalid { value: fraction });
        }
        Ok(Self(fraction))
    }

    /// Get the threshold as a fraction.
    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// Get the threshold as a percentage.
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percent())
    }
}

impl FromStr for Threshold {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| ThresholdError::Unparsable {
                input: s.to_string(),
            })?;
        Self::new(value)
    }
}

/// Unit of a `real_time` value as written by Google Benchmark.
///
/// Entries without a `time_unit` are nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Ns,
    Us,
    Ms,
    S,
}

impl TimeUnit {
    /// Parse a unit label, returning `None` for anything unrecognised.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "ns" => Some(TimeUnit::Ns),
            "us" => Some(TimeUnit::Us),
            "ms" => Some(TimeUnit::Ms),
            "s" => Some(TimeUnit::S),
            _ => None,
        }
    }

    /// Convert a value in this unit to nanoseconds.
    pub fn to_nanos(self, value: f64) -> f64 {
        match self {
            TimeUnit::Ns => value,
            TimeUnit::Us => value * 1_000.0,
            TimeUnit::Ms => value * 1_000_000.0,
            TimeUnit::S => value * 1_000_000_000.0,
        }
    }
}

/// A single named measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub name: String,
    /// Wall-clock time in nanoseconds.
    pub real_time: f64,
}

impl BenchmarkRecord {
    pub fn new(name: impl Into<String>, real_time: f64) -> Self {
        Self {
            name: name.into(),
            real_time,
        }
    }
}

/// All benchmarks from one result file, keyed by name.
///
/// Names are unique; inserting a name that already exists replaces the
/// earlier record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkSet {
    records: BTreeMap<String, BenchmarkRecord>,
}

impl BenchmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced, if any.
    pub fn insert(&mut self, record: BenchmarkRecord) -> Option<BenchmarkRecord> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn get(&self, name: &str) -> Option<&BenchmarkRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order.
    pub fn iter(&self) -> btree_map::Values<'_, String, BenchmarkRecord> {
        self.records.values()
    }

    /// Benchmark names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl FromIterator<BenchmarkRecord> for BenchmarkSet {
    fn from_iter<I: IntoIterator<Item = BenchmarkRecord>>(iter: I) -> Self {
        let mut set = BenchmarkSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a BenchmarkSet {
    type Item = &'a BenchmarkRecord;
    type IntoIter = btree_map::Values<'a, String, BenchmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
