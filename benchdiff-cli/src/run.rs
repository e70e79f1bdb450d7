// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Load, compare and report for one invocation.

use std::io::{self, Write};
use std::path::PathBuf;

use benchdiff_core::{
    compare, BenchDiffError, BenchDiffResult, BenchmarkLoader, Palette, Reporter, Threshold,
    Verdict,
};

pub fn execute<W: Write>(
    files: &[PathBuf],
    threshold: Threshold,
    palette: &dyn Palette,
    out: &mut W,
) -> BenchDiffResult<Verdict> {
    let [baseline_path, current_path] = files else {
        return Err(BenchDiffError::Usage {
            message: format!("expected 2 result files, got {}", files.len()),
        });
    };

    tracing::debug!(
        baseline = %baseline_path.display(),
        current = %current_path.display(),
        threshold = threshold.fraction(),
        "Comparing benchmark results"
    );

    let baseline = BenchmarkLoader::load_file(baseline_path)?;
    let current = BenchmarkLoader::load_file(current_path)?;
    let comparison = compare(&baseline, &current, threshold);

    let verdict = comparison.verdict();

    let reporter = Reporter::new(palette, baseline_path, current_path);
    match reporter
        .render(&mut *out, &comparison)
        .and_then(|_| out.flush())
    {
        Ok(()) => Ok(verdict),
        // Reader went away (`benchdiff a b | head`); the verdict still stands
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Report output closed early");
            Ok(verdict)
        }
        Err(source) => Err(BenchDiffError::Report { source }),
    }
}
