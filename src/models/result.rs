//! Evaluation result models
//!
//! Defines per-case results, status types, and the run summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of evaluating a single test case
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pass,
    Fail,
    Error,
}

impl CaseStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            CaseStatus::Pass => "✓",
            CaseStatus::Fail => "✗",
            CaseStatus::Error => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CaseStatus::Pass)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStatus::Pass => write!(f, "PASS"),
            CaseStatus::Fail => write!(f, "FAIL"),
            CaseStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of evaluating a single test case
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseResult {
    pub case_name: String,
    pub status: CaseStatus,
    pub expected: String,
    /// Model response, when one was received
    pub response: Option<String>,
    pub duration_ms: u64,
    pub message: Option<String>,
}

impl CaseResult {
    pub fn pass(
        case_name: impl Into<String>,
        expected: impl Into<String>,
        response: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            case_name: case_name.into(),
            status: CaseStatus::Pass,
            expected: expected.into(),
            response: Some(response.into()),
            duration_ms,
            message: None,
        }
    }

    pub fn fail(
        case_name: impl Into<String>,
        expected: impl Into<String>,
        response: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        let expected = expected.into();
        let response = response.into();
        let message = format!("expected {expected:?}, got {response:?}");
        Self {
            case_name: case_name.into(),
            status: CaseStatus::Fail,
            expected,
            response: Some(response),
            duration_ms,
            message: Some(message),
        }
    }

    pub fn error(
        case_name: impl Into<String>,
        expected: impl Into<String>,
        error: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            case_name: case_name.into(),
            status: CaseStatus::Error,
            expected: expected.into(),
            response: None,
            duration_ms,
            message: Some(error.into()),
        }
    }
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}ms]",
            self.status.symbol(),
            self.case_name,
            self.status,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of a full evaluation run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub model: String,
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub total_duration_ms: u64,
    pub results: Vec<CaseResult>,
}

impl RunSummary {
    pub fn new(
        model: impl Into<String>,
        started_at: DateTime<Utc>,
        results: Vec<CaseResult>,
    ) -> Self {
        let total = results.len();
        let passed = results
            .iter()
            .filter(|r| r.status == CaseStatus::Pass)
            .count();
        let failed = results
            .iter()
            .filter(|r| r.status == CaseStatus::Fail)
            .count();
        let errors = results
            .iter()
            .filter(|r| r.status == CaseStatus::Error)
            .count();
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            model: model.into(),
            started_at,
            total,
            passed,
            failed,
            errors,
            total_duration_ms,
            results,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }
}
