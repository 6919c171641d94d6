//! Ollama inference endpoint client
//!
//! Provides the HTTP client used to obtain completions from a local model.

mod client;

pub use client::{GenerateRequest, GenerateResponse, OllamaClient, OllamaError};
