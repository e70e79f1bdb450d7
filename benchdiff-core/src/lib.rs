// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! benchdiff Core Library
//!
//! Loads two benchmark result sets, classifies every benchmark as a
//! regression, improvement, unchanged, new or removed, and renders the
//! outcome as a text report with an exit-code verdict.

pub mod compare;
pub mod error;
pub mod format;
pub mod loader;
pub mod palette;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use compare::{compare, BenchmarkDelta, Classification, Comparison, Verdict};
pub use error::{BenchDiffError, BenchDiffResult, CompareError, LoadError, ThresholdError};
pub use loader::{BenchmarkLoader, InputFormat};
pub use palette::{AnsiPalette, ColorChoice, Palette, PlainPalette, Role};
pub use report::Reporter;
pub use types::{BenchmarkRecord, BenchmarkSet, Threshold, TimeUnit, DEFAULT_THRESHOLD};
