//! ollama-eval - LLM test-case evaluator
//!
//! A CLI tool that loads JSON test cases (query, input, expected output),
//! sends each query with its input to a locally-running Ollama model, and
//! compares the completion against the expected output to report pass/fail.
//!
//! ## Usage
//!
//! ```bash
//! # Run every JSON test case in a directory
//! ollama-eval ./test_cases
//!
//! # Run a single file against a different model
//! ollama-eval ./test_cases/even_odd.json --model llama3.2
//!
//! # Machine-readable results
//! ollama-eval ./test_cases --format json --output results.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

mod cli;
mod config;
mod evaluator;
mod loader;
mod models;
mod ollama;
mod output;
mod utils;

use cli::Args;
use config::{AppConfig, EnvConfig};
use evaluator::Evaluator;
use ollama::OllamaClient;
use output::{write_results_to_file, OutputFormat, ResultFormatter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env_config = EnvConfig::load();

    utils::init_logger(args.verbose || env_config.verbose.unwrap_or(false));

    let mut config = AppConfig::from_env(&env_config);
    if let Some(host) = &args.host {
        config = config.with_host(host);
    }
    if let Some(model) = &args.model {
        config = config.with_model(model);
    }
    if let Some(timeout) = args.timeout {
        config = config.with_timeout(timeout);
    }

    info!("Test cases: {}", args.path.display());
    info!("Model: {} at {}", config.model, config.host);

    let client = OllamaClient::new(&config.host, &config.model, config.timeout_secs)?;

    if !args.no_health_check {
        if let Err(e) = client.check_health().await {
            eprintln!("ERROR: Cannot reach Ollama at {}", config.host);
            eprintln!("Details: {e}");
            eprintln!("Ensure the server is running, or pass --no-health-check.");
            std::process::exit(1);
        }
        info!("Endpoint connection verified");
    }

    let outcome = loader::load_cases(&args.path)?;
    for error in &outcome.errors {
        eprintln!("Load error: {error}");
    }

    if outcome.cases.is_empty() {
        warn!("No test cases found in {}", args.path.display());
        std::process::exit(i32::from(outcome.has_errors()));
    }

    info!("{outcome}");

    let format = args
        .format
        .as_deref()
        .or(env_config.format.as_deref())
        .and_then(OutputFormat::from_str)
        .unwrap_or(OutputFormat::Table);
    let formatter = ResultFormatter::new(format);

    let evaluator = Evaluator::new(client);
    let summary = evaluator.run_all(&outcome.cases).await;

    println!("{}", formatter.format_summary(&summary));

    if let Some(path) = &args.output {
        write_results_to_file(path, &summary, format)?;
        info!("Results saved to {path}");
    }

    if !summary.is_all_passed() || outcome.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}
