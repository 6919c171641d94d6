//! Test-case discovery and loading
//!
//! Reads JSON test-case files from a file or directory. A file may hold a
//! single case object, a map of case names to case objects, or an array of
//! case objects. Malformed files or entries are reported and skipped; they
//! never abort the run.

use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::models::{RawCase, TestCase};

/// Why a file or entry could not be loaded as a test case
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{path}: cannot read file: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: invalid JSON: {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path}: {entry}: missing or invalid case fields: {source}")]
    InvalidCase {
        path: PathBuf,
        entry: String,
        source: serde_json::Error,
    },

    #[error("{path}: expected a case object, map, or array, found {found}")]
    UnsupportedShape { path: PathBuf, found: &'static str },
}

/// Outcome of loading a path: the cases that parsed, and the errors for
/// everything that did not.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub cases: Vec<TestCase>,
    pub errors: Vec<LoadError>,
}

impl LoadOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn record(&mut self, error: LoadError) {
        warn!("{}", error);
        self.errors.push(error);
    }
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} case(s) loaded, {} load error(s)",
            self.cases.len(),
            self.errors.len()
        )
    }
}

/// Load test cases from a file or directory.
///
/// Only an invalid top-level path is fatal; per-file problems are collected
/// in the outcome.
pub fn load_cases(path: &Path) -> anyhow::Result<LoadOutcome> {
    if path.is_dir() {
        load_directory(path)
    } else if path.is_file() {
        let mut outcome = LoadOutcome::default();
        load_file(path, &mut outcome);
        Ok(outcome)
    } else {
        anyhow::bail!("Path not found: {}", path.display());
    }
}

/// Load every `*.json` file in a directory, in sorted filename order
fn load_directory(dir: &Path) -> anyhow::Result<LoadOutcome> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| anyhow::anyhow!("Cannot read directory {}: {e}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    files.sort();

    let mut outcome = LoadOutcome::default();
    for file in &files {
        load_file(file, &mut outcome);
    }
    Ok(outcome)
}

/// Load one JSON file into the outcome, recording errors instead of failing
fn load_file(path: &Path, outcome: &mut LoadOutcome) {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            outcome.record(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
            return;
        }
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(source) => {
            outcome.record(LoadError::InvalidJson {
                path: path.to_path_buf(),
                source,
            });
            return;
        }
    };

    let stem = file_stem(path);

    match value {
        Value::Object(map) => {
            if is_single_case(&map) {
                parse_entry(path, &stem, Value::Object(map), outcome);
            } else {
                // Map of case name to case object
                for (name, entry) in map {
                    parse_entry(path, &name, entry, outcome);
                }
            }
        }
        Value::Array(entries) => {
            for (index, entry) in entries.into_iter().enumerate() {
                parse_entry(path, &format!("{stem}[{index}]"), entry, outcome);
            }
        }
        other => {
            outcome.record(LoadError::UnsupportedShape {
                path: path.to_path_buf(),
                found: json_type_name(&other),
            });
        }
    }
}

fn parse_entry(path: &Path, name: &str, entry: Value, outcome: &mut LoadOutcome) {
    match serde_json::from_value::<RawCase>(entry) {
        Ok(raw) => outcome.cases.push(TestCase::new(name, raw)),
        Err(source) => outcome.record(LoadError::InvalidCase {
            path: path.to_path_buf(),
            entry: name.to_string(),
            source,
        }),
    }
}

/// A JSON object is a single case when it carries all three required keys
fn is_single_case(map: &serde_json::Map<String, Value>) -> bool {
    ["query", "test_input", "test_output"]
        .iter()
        .all(|key| map.contains_key(*key))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    const EVEN_ODD: &str = r#"{
        "query": "Given a number, answer YES if it is even and NO otherwise.",
        "test_input": 4,
        "test_output": "YES"
    }"#;

    #[test]
    fn test_load_single_case_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "even_odd.json", EVEN_ODD);

        let outcome = load_cases(&path).unwrap();
        assert_eq!(outcome.cases.len(), 1);
        assert!(!outcome.has_errors());

        let case = &outcome.cases[0];
        assert_eq!(case.name, "even_odd");
        assert_eq!(case.test_output, "YES");
    }

    #[test]
    fn test_load_named_map_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "problems.json",
            r#"{
                "double_it": {"query": "Double the number.", "test_input": 2, "test_output": "4"},
                "reverse": {"query": "Reverse the string.", "test_input": "ab", "test_output": "ba"}
            }"#,
        );

        let outcome = load_cases(&path).unwrap();
        assert_eq!(outcome.cases.len(), 2);

        let names: Vec<&str> = outcome.cases.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"double_it"));
        assert!(names.contains(&"reverse"));
    }

    #[test]
    fn test_load_array_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "batch.json",
            r#"[
                {"query": "q1", "test_input": 1, "test_output": "a"},
                {"query": "q2", "test_input": 2, "test_output": "b"}
            ]"#,
        );

        let outcome = load_cases(&path).unwrap();
        assert_eq!(outcome.cases.len(), 2);
        assert_eq!(outcome.cases[0].name, "batch[0]");
        assert_eq!(outcome.cases[1].name, "batch[1]");
    }

    #[test]
    fn test_malformed_file_does_not_abort_batch() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a_broken.json", "{not valid json");
        write_file(&dir, "b_valid.json", EVEN_ODD);

        let outcome = load_cases(dir.path()).unwrap();
        assert_eq!(outcome.cases.len(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(outcome.errors[0], LoadError::InvalidJson { .. }));
    }

    #[test]
    fn test_missing_keys_reported_per_entry() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "mixed.json",
            r#"{
                "good": {"query": "q", "test_input": 1, "test_output": "a"},
                "bad": {"query": "only a query"}
            }"#,
        );

        let outcome = load_cases(&path).unwrap();
        assert_eq!(outcome.cases.len(), 1);
        assert_eq!(outcome.cases[0].name, "good");
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(outcome.errors[0], LoadError::InvalidCase { .. }));
    }

    #[test]
    fn test_directory_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "b.json", EVEN_ODD);
        write_file(&dir, "a.json", EVEN_ODD);
        write_file(&dir, "notes.txt", "not a test case");

        let outcome = load_cases(dir.path()).unwrap();
        assert_eq!(outcome.cases.len(), 2);
        assert_eq!(outcome.cases[0].name, "a");
        assert_eq!(outcome.cases[1].name, "b");
    }

    #[test]
    fn test_unsupported_top_level_shape() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "scalar.json", "42");

        let outcome = load_cases(&path).unwrap();
        assert!(outcome.cases.is_empty());
        assert!(matches!(
            outcome.errors[0],
            LoadError::UnsupportedShape { found: "a number", .. }
        ));
    }

    #[test]
    fn test_missing_path_is_fatal() {
        let result = load_cases(Path::new("/nonexistent/test_cases"));
        assert!(result.is_err());
    }
}
