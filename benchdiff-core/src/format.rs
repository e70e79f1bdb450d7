// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Human-readable formatting for times and changes.

/// Format a time in nanoseconds, auto-selecting ns/us/ms/s.
pub fn format_time(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{:.2} ns", ns)
    } else if ns < 1_000_000.0 {
        format!("{:.2} us", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else {
        format!("{:.2} s", ns / 1_000_000_000.0)
    }
}

/// Format a relative change as a signed percentage, e.g. `+6.0%` or `-12.5%`.
pub fn format_change(change: f64) -> String {
    let pct = change.abs() * 100.0;
    if change < 0.0 {
        format!("-{:.1}%", pct)
    } else {
        format!("+{:.1}%", pct)
    }
}

/// `part` as a percentage of `total`, 0 when `total` is 0.
pub fn percent_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format() {
        assert_eq!(format_time(500.0), "500.00 ns");
        assert_eq!(format_time(999.0), "999.00 ns");
        assert_eq!(format_time(1_500.0), "1.50 us");
        assert_eq!(format_time(1_500_000.0), "1.50 ms");
        assert_eq!(format_time(1_000_000_000.0), "1.00 s");
        assert_eq!(format_time(2_500_000_000.0), "2.50 s");
    }

    #[test]
    fn test_time_format_unit_boundaries() {
        assert_eq!(format_time(1_000.0), "1.00 us");
        assert_eq!(format_time(1_000_000.0), "1.00 ms");
        assert_eq!(format_time(0.25), "0.25 ns");
    }

    #[test]
    fn test_change_format() {
        assert_eq!(format_change(0.06), "+6.0%");
        assert_eq!(format_change(-0.125), "-12.5%");
        assert_eq!(format_change(1.5), "+150.0%");
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1, 4), 25.0);
        assert_eq!(percent_of(3, 0), 0.0);
    }
}
