//! Test case models
//!
//! Defines the JSON test-case record and its input value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input value of a test case, either a string or a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseInput {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for CaseInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseInput::Text(s) => write!(f, "{s}"),
            CaseInput::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Raw test-case record as it appears in a JSON file.
///
/// The case name is not part of the file format; it is derived from the
/// file stem, map key, or array index by the loader.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawCase {
    pub query: String,
    pub test_input: CaseInput,
    pub test_output: String,
}

/// A named, fully loaded test case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub query: String,
    pub test_input: CaseInput,
    pub test_output: String,
}

impl TestCase {
    pub fn new(name: impl Into<String>, raw: RawCase) -> Self {
        Self {
            name: name.into(),
            query: raw.query,
            test_input: raw.test_input,
            test_output: raw.test_output,
        }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (input: {})", self.name, self.test_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_input_display() {
        assert_eq!(CaseInput::Text("abc".to_string()).to_string(), "abc");
        assert_eq!(CaseInput::Number(4.into()).to_string(), "4");
    }

    #[test]
    fn test_raw_case_with_number_input() {
        let raw: RawCase = serde_json::from_str(
            r#"{"query": "Is this number even? Answer YES or NO.",
                "test_input": 4,
                "test_output": "YES"}"#,
        )
        .unwrap();

        assert_eq!(raw.test_input, CaseInput::Number(4.into()));
        assert_eq!(raw.test_output, "YES");
    }

    #[test]
    fn test_raw_case_with_string_input() {
        let raw: RawCase = serde_json::from_str(
            r#"{"query": "Reverse the string.",
                "test_input": "abc",
                "test_output": "cba"}"#,
        )
        .unwrap();

        assert_eq!(raw.test_input, CaseInput::Text("abc".to_string()));
    }

    #[test]
    fn test_raw_case_missing_key() {
        let result: Result<RawCase, _> =
            serde_json::from_str(r#"{"query": "incomplete", "test_input": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_case_from_raw() {
        let raw = RawCase {
            query: "q".to_string(),
            test_input: CaseInput::Number(7.into()),
            test_output: "NO".to_string(),
        };
        let case = TestCase::new("even_odd", raw);
        assert_eq!(case.name, "even_odd");
        assert_eq!(case.to_string(), "even_odd (input: 7)");
    }
}
