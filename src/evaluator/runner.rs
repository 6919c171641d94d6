//! Test-case evaluation
//!
//! Sends each case's prompt to the inference endpoint and compares the
//! completion against the expected output. Cases run one at a time;
//! endpoint failures mark the case as errored and the run continues.

use chrono::Utc;
use std::time::Instant;
use tracing::{info, warn};

use crate::models::{CaseInput, CaseResult, RunSummary, TestCase};
use crate::ollama::OllamaClient;

/// Evaluates test cases against an inference endpoint
pub struct Evaluator {
    client: OllamaClient,
}

impl Evaluator {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }

    /// Evaluate a single test case
    pub async fn run_case(&self, case: &TestCase) -> CaseResult {
        info!("Evaluating {}", case);

        let prompt = build_prompt(&case.query, &case.test_input);
        let start = Instant::now();

        match self.client.generate(&prompt).await {
            Ok(completion) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                if outputs_match(&completion, &case.test_output) {
                    CaseResult::pass(&case.name, &case.test_output, completion, duration_ms)
                } else {
                    CaseResult::fail(&case.name, &case.test_output, completion, duration_ms)
                }
            }
            Err(e) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                warn!("Case {} errored: {}", case.name, e);
                CaseResult::error(&case.name, &case.test_output, e.to_string(), duration_ms)
            }
        }
    }

    /// Evaluate all cases sequentially and summarize the run
    pub async fn run_all(&self, cases: &[TestCase]) -> RunSummary {
        info!(
            "Evaluating {} case(s) with model {} at {}",
            cases.len(),
            self.client.model(),
            self.client.host()
        );

        let started_at = Utc::now();
        let start = Instant::now();
        let mut results = Vec::with_capacity(cases.len());

        for case in cases {
            let result = self.run_case(case).await;
            info!("  {}", result);
            results.push(result);
        }

        let summary = RunSummary::new(self.client.model(), started_at, results);

        info!(
            "Run completed in {}ms - Pass: {}/{} ({:.1}%)",
            start.elapsed().as_millis(),
            summary.passed,
            summary.total,
            summary.pass_rate()
        );

        summary
    }
}

/// Combine the query and the input value into a single prompt.
///
/// The model is told to answer with the bare result so the completion can
/// be compared directly against the expected output.
pub fn build_prompt(query: &str, input: &CaseInput) -> String {
    format!(
        "{query}\n\nInput: {input}\n\n\
         Respond with ONLY the answer, nothing else. \
         Do not explain your reasoning."
    )
}

/// Compare a completion against the expected output.
///
/// Both sides are trimmed and compared ASCII-case-insensitively, so a
/// completion of " YES\n" matches an expected "YES". Substring matches do
/// not count.
pub fn outputs_match(completion: &str, expected: &str) -> bool {
    completion.trim().eq_ignore_ascii_case(expected.trim())
}
