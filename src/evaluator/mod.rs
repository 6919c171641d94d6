//! Evaluation engine
//!
//! Runs loaded test cases against the inference endpoint, one at a time.

mod runner;

pub use runner::{build_prompt, outputs_match, Evaluator};
