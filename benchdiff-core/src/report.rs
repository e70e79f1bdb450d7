// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Text report for a [`Comparison`].
//!
//! Layout: header, improvements table, regressions table, new and removed
//! lists, skipped pairs, summary counts and a one-line verdict. Sections
//! with nothing to show are left out.

use std::io::{self, Write};
use std::path::Path;

use crate::compare::{BenchmarkDelta, Comparison, Verdict};
use crate::format::{format_change, format_time, percent_of};
use crate::palette::{Palette, Role};

const BANNER_WIDTH: usize = 70;
const TABLE_WIDTH: usize = 90;

/// Renders comparison results as fixed-width text tables.
pub struct Reporter<'a> {
    palette: &'a dyn Palette,
    baseline_path: &'a Path,
    current_path: &'a Path,
}

impl<'a> Reporter<'a> {
    pub fn new(
        palette: &'a dyn Palette,
        baseline_path: &'a Path,
        current_path: &'a Path,
    ) -> Self {
        Self {
            palette,
            baseline_path,
            current_path,
        }
    }

    /// Write the full report and return the verdict it ends with.
    pub fn render<W: Write>(&self, out: &mut W, comparison: &Comparison) -> io::Result<Verdict> {
        writeln!(out)?;
        self.banner(out, "Benchmark Comparison Report")?;
        writeln!(out)?;
        writeln!(out, "Baseline: {}", self.baseline_path.display())?;
        writeln!(out, "Current:  {}", self.current_path.display())?;
        writeln!(out, "Threshold: {}", comparison.threshold)?;
        writeln!(out)?;

        if !comparison.improvements.is_empty() {
            let title = format!("🎉 IMPROVEMENTS ({} benchmarks):", comparison.improvements.len());
            self.table(out, &title, &comparison.improvements, Role::Improvement)?;
        }

        if !comparison.regressions.is_empty() {
            let title = format!("⚠️  REGRESSIONS ({} benchmarks):", comparison.regressions.len());
            self.table(out, &title, &comparison.regressions, Role::Regression)?;
        }

        if !comparison.new.is_empty() {
            let title = format!("📊 NEW BENCHMARKS ({}):", comparison.new.len());
            self.name_list(out, &title, &comparison.new, '+')?;
        }

        if !comparison.removed.is_empty() {
            let title = format!("🗑️  REMOVED BENCHMARKS ({}):", comparison.removed.len());
            self.name_list(out, &title, &comparison.removed, '-')?;
        }

        if !comparison.skipped.is_empty() {
            writeln!(out)?;
            let title = format!("⏭️  SKIPPED BENCHMARKS ({}):", comparison.skipped.len());
            writeln!(out, "{}", self.palette.colorize(&title, Role::Notice))?;
            for reason in &comparison.skipped {
                writeln!(out, "  ! {}", reason)?;
            }
        }

        writeln!(out)?;
        self.banner(out, "SUMMARY")?;
        writeln!(out)?;
        self.summary(out, comparison)?;
        writeln!(out)?;

        let verdict = comparison.verdict();
        let line = match verdict {
            Verdict::Regressed => self
                .palette
                .colorize("❌ Performance regressions detected!", Role::Regression),
            Verdict::Improved => self
                .palette
                .colorize("✅ Performance improved or unchanged", Role::Improvement),
            Verdict::NoSignificantChange => self
                .palette
                .colorize("✅ No significant performance changes", Role::Improvement),
        };
        writeln!(out, "{}", line)?;
        writeln!(out)?;

        Ok(verdict)
    }

    fn banner<W: Write>(&self, out: &mut W, title: &str) -> io::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(out, "{}", self.palette.colorize(&rule, Role::Header))?;
        writeln!(out, "{}", self.palette.colorize(title, Role::Header))?;
        writeln!(out, "{}", self.palette.colorize(&rule, Role::Header))
    }

    fn table<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        rows: &[BenchmarkDelta],
        role: Role,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.palette.colorize(title, role))?;
        writeln!(
            out,
            "{:<50} {:<15} {:<15} {:<10}",
            "Benchmark", "Baseline", "Current", "Change"
        )?;
        writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

        for row in rows {
            writeln!(
                out,
                "{:<50} {:<15} {:<15} {}",
                row.name,
                format_time(row.baseline_time),
                format_time(row.current_time),
                self.palette.colorize(&format_change(row.change), role)
            )?;
        }
        Ok(())
    }

    fn name_list<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        names: &[String],
        marker: char,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.palette.colorize(title, Role::Notice))?;
        for name in names {
            writeln!(out, "  {} {}", marker, name)?;
        }
        Ok(())
    }

    fn summary<W: Write>(&self, out: &mut W, comparison: &Comparison) -> io::Result<()> {
        let total = comparison.total_compared();
        let improvements = comparison.improvements.len();
        let regressions = comparison.regressions.len();
        let unchanged = comparison.unchanged;

        writeln!(out, "Total benchmarks compared: {}", total)?;
        writeln!(
            out,
            "{} ({:.1}%)",
            self.palette
                .colorize(&format!("Improvements: {}", improvements), Role::Improvement),
            percent_of(improvements, total)
        )?;
        writeln!(
            out,
            "{} ({:.1}%)",
            self.palette
                .colorize(&format!("Regressions:  {}", regressions), Role::Regression),
            percent_of(regressions, total)
        )?;
        writeln!(
            out,
            "Unchanged:    {} ({:.1}%)",
            unchanged,
            percent_of(unchanged, total)
        )?;

        if !comparison.skipped.is_empty() {
            let line = format!("Skipped:      {}", comparison.skipped.len());
            writeln!(out, "{}", self.palette.colorize(&line, Role::Notice))?;
        }
        if !comparison.new.is_empty() {
            let line = format!("New:          {}", comparison.new.len());
            writeln!(out, "{}", self.palette.colorize(&line, Role::Notice))?;
        }
        if !comparison.removed.is_empty() {
            let line = format!("Removed:      {}", comparison.removed.len());
            writeln!(out, "{}", self.palette.colorize(&line, Role::Notice))?;
        }
        Ok(())
    }
}
