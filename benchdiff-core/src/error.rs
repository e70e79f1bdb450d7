// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for benchdiff.
//!
//! Every failure is an explicit enum variant. Nothing in the core library
//! terminates the process; the CLI decides what an error means for the
//! exit status.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a benchdiff run.
#[derive(Debug, Error)]
pub enum BenchDiffError {
    #[error("Usage error: {message}")]
    Usage { message: String },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Threshold(#[from] ThresholdError),

    #[error("Failed to write report: {source}")]
    Report {
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading a benchmark result file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid data in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing key in benchmark data: '{field}' ({context}) in {path}")]
    MissingField {
        path: PathBuf,
        field: &'static str,
        context: String,
    },

    #[error("Unsupported time unit '{unit}' for benchmark '{name}' in {path}")]
    UnsupportedTimeUnit {
        path: PathBuf,
        name: String,
        unit: String,
    },
}

/// A benchmark pair that cannot be classified.
///
/// These are never fatal: the comparator records them as skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompareError {
    #[error("degenerate baseline for '{name}': real_time = {baseline_time}")]
    DegenerateBaseline { name: String, baseline_time: f64 },

    #[error("non-finite current time for '{name}': real_time = {current_time}")]
    NonFiniteCurrent { name: String, current_time: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("Invalid threshold {value}: must be a finite, non-negative fraction")]
    Invalid { value: f64 },

    #[error("Invalid threshold '{input}': not a number")]
    Unparsable { input: String },
}

/// Result type alias using BenchDiffError.
pub type BenchDiffResult<T> = Result<T, BenchDiffError>;
