// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark result loader.
//!
//! Reads Google Benchmark style output (JSON, or YAML with the same shape)
//! into a [`BenchmarkSet`]. Entries are validated one by one; the first
//! entry missing `name` or `real_time` fails the whole load.

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::types::{BenchmarkRecord, BenchmarkSet, TimeUnit};

/// Raw result document as parsed (before validation).
#[derive(Debug, Deserialize)]
struct RawReport {
    benchmarks: Option<Vec<RawBenchmark>>,
}

/// Raw benchmark entry. Fields other than these are ignored.
#[derive(Debug, Deserialize)]
struct RawBenchmark {
    name: Option<String>,
    real_time: Option<f64>,
    time_unit: Option<String>,
}

/// Serialization format of a result file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from the file extension. Anything that is not
    /// `.yaml`/`.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

/// Loader for benchmark result files.
pub struct BenchmarkLoader;

impl BenchmarkLoader {
    /// Load a result file, choosing the format from its extension.
    pub fn load_file(path: impl AsRef<Path>) -> Result<BenchmarkSet, LoadError> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let content = String::from_utf8(bytes).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: format!("not valid UTF-8: {}", e.utf8_error()),
        })?;

        let set = Self::load_str(&content, InputFormat::from_path(path), path)?;
        tracing::info!(path = %path.display(), benchmarks = set.len(), "Loaded benchmark results");
        Ok(set)
    }

    /// Parse result content. `origin` is only used in error messages.
    pub fn load_str(
        content: &str,
        format: InputFormat,
        origin: &Path,
    ) -> Result<BenchmarkSet, LoadError> {
        let raw: RawReport = match format {
            InputFormat::Json => serde_json::from_str(content).map_err(|e| LoadError::Parse {
                path: origin.to_path_buf(),
                message: format!("JSON parse error: {}", e),
            })?,
            InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| LoadError::Parse {
                path: origin.to_path_buf(),
                message: format!("YAML parse error: {}", e),
            })?,
        };

        Self::validate(raw, origin)
    }

    fn validate(raw: RawReport, origin: &Path) -> Result<BenchmarkSet, LoadError> {
        let entries = raw.benchmarks.ok_or_else(|| LoadError::MissingField {
            path: origin.to_path_buf(),
            field: "benchmarks",
            context: "top-level document".to_string(),
        })?;

        let mut set = BenchmarkSet::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let record = Self::validate_entry(entry, index, origin)?;
            if let Some(previous) = set.insert(record) {
                tracing::debug!(
                    name = %previous.name,
                    index,
                    "Duplicate benchmark name, keeping the later entry"
                );
            }
        }
        Ok(set)
    }

    fn validate_entry(
        raw: RawBenchmark,
        index: usize,
        origin: &Path,
    ) -> Result<BenchmarkRecord, LoadError> {
        let context = format!("benchmark at index {}", index);

        let name = raw.name.ok_or_else(|| LoadError::MissingField {
            path: origin.to_path_buf(),
            field: "name",
            context: context.clone(),
        })?;

        let real_time = raw.real_time.ok_or_else(|| LoadError::MissingField {
            path: origin.to_path_buf(),
            field: "real_time",
            context: format!("{} '{}'", context, name),
        })?;

        let unit = match raw.time_unit.as_deref() {
            None => TimeUnit::Ns,
            Some(label) => TimeUnit::parse(label).ok_or_else(|| LoadError::UnsupportedTimeUnit {
                path: origin.to_path_buf(),
                name: name.clone(),
                unit: label.to_string(),
            })?,
        };

        Ok(BenchmarkRecord::new(name, unit.to_nanos(real_time)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOGLE_BENCHMARK_JSON: &str = r#"
{
  "context": {
    "date": "2025-01-10T12:00:00+00:00",
    "num_cpus": 8,
    "library_build_type": "release"
  },
  "benchmarks": [
    {
      "name": "BM_contains_str_basic",
      "run_name": "BM_contains_str_basic",
      "run_type": "iteration",
      "iterations": 10000000,
      "real_time": 71.5,
      "cpu_time": 71.4,
      "time_unit": "ns"
    },
    {
      "name": "BM_split_basic",
      "iterations": 2000,
      "real_time": 1.25,
      "cpu_time": 1.24,
      "time_unit": "us"
    }
  ]
}
"#;

    fn origin() -> &'static Path {
        Path::new("test.json")
    }

    #[test]
    fn test_load_google_benchmark_output() {
        let set = BenchmarkLoader::load_str(GOOGLE_BENCHMARK_JSON, InputFormat::Json, origin())
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("BM_contains_str_basic").unwrap().real_time, 71.5);
        // time_unit "us" is normalised to nanoseconds
        assert_eq!(set.get("BM_split_basic").unwrap().real_time, 1_250.0);
    }

    #[test]
    fn test_missing_time_unit_means_nanoseconds() {
        let json = r#"{"benchmarks": [{"name": "A", "real_time": 100}]}"#;
        let set = BenchmarkLoader::load_str(json, InputFormat::Json, origin()).unwrap();
        assert_eq!(set.get("A").unwrap().real_time, 100.0);
    }

    #[test]
    fn test_invalid_json() {
        let result = BenchmarkLoader::load_str("{ not json", InputFormat::Json, origin());
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_missing_benchmarks_key() {
        let result = BenchmarkLoader::load_str(r#"{"context": {}}"#, InputFormat::Json, origin());
        match result {
            Err(LoadError::MissingField { field, .. }) => assert_eq!(field, "benchmarks"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_name() {
        let json = r#"{"benchmarks": [{"real_time": 1.0}]}"#;
        match BenchmarkLoader::load_str(json, InputFormat::Json, origin()) {
            Err(LoadError::MissingField { field, context, .. }) => {
                assert_eq!(field, "name");
                assert!(context.contains("index 0"));
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_real_time() {
        let json = r#"{"benchmarks": [{"name": "A", "real_time": 1.0}, {"name": "B"}]}"#;
        match BenchmarkLoader::load_str(json, InputFormat::Json, origin()) {
            Err(LoadError::MissingField { field, context, .. }) => {
                assert_eq!(field, "real_time");
                assert!(context.contains("index 1"));
                assert!(context.contains("'B'"));
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_real_time_is_parse_error() {
        let json = r#"{"benchmarks": [{"name": "A", "real_time": "fast"}]}"#;
        let result = BenchmarkLoader::load_str(json, InputFormat::Json, origin());
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_unsupported_time_unit() {
        let json = r#"{"benchmarks": [{"name": "A", "real_time": 1.0, "time_unit": "min"}]}"#;
        let result = BenchmarkLoader::load_str(json, InputFormat::Json, origin());
        assert!(matches!(
            result,
            Err(LoadError::UnsupportedTimeUnit { ref unit, .. }) if unit == "min"
        ));
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let json = r#"{"benchmarks": [
            {"name": "A", "real_time": 100},
            {"name": "A", "real_time": 250}
        ]}"#;
        let set = BenchmarkLoader::load_str(json, InputFormat::Json, origin()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("A").unwrap().real_time, 250.0);
    }

    #[test]
    fn test_empty_benchmark_list() {
        let json = r#"{"benchmarks": []}"#;
        let set = BenchmarkLoader::load_str(json, InputFormat::Json, origin()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_yaml_input() {
        let yaml = r#"
benchmarks:
  - name: BM_join
    real_time: 2.5
    time_unit: ms
  - name: BM_trim
    real_time: 40
"#;
        let set = BenchmarkLoader::load_str(yaml, InputFormat::Yaml, Path::new("r.yaml")).unwrap();
        assert_eq!(set.get("BM_join").unwrap().real_time, 2_500_000.0);
        assert_eq!(set.get("BM_trim").unwrap().real_time, 40.0);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("a.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("results")), InputFormat::Json);
    }

    #[test]
    fn test_non_utf8_file_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, [b'{', 0xff, 0xfe, b'}']).unwrap();

        match BenchmarkLoader::load_file(&path) {
            Err(LoadError::Parse { message, .. }) => assert!(message.contains("UTF-8")),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_load_file_not_found() {
        let result = BenchmarkLoader::load_file("/nonexistent/benchdiff/baseline.json");
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }
}
