//! CLI argument parsing
//!
//! Defines the command-line interface using clap.

use clap::Parser;
use std::path::PathBuf;

/// Run JSON test cases against a local Ollama model
#[derive(Parser, Debug)]
#[command(name = "ollama-eval")]
#[command(version = "0.1.0")]
#[command(about = "Run JSON test cases against a local Ollama model and report pass/fail")]
#[command(long_about = None)]
pub struct Args {
    /// Path to a test-case JSON file or a directory of JSON files
    pub path: PathBuf,

    /// Model identifier to query
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long)]
    pub host: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Output format (table, json, json-pretty, csv, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Save formatted results to a file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Skip the endpoint reachability check before the run
    #[arg(long)]
    pub no_health_check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
