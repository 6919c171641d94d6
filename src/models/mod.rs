//! Data models for test-case evaluation
//!
//! This module contains all data structures used throughout the application.

mod case;
mod result;

pub use case::{CaseInput, RawCase, TestCase};
pub use result::{CaseResult, CaseStatus, RunSummary};
