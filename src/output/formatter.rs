//! Output formatters for evaluation results
//!
//! Provides table, JSON, CSV, and summary output formats.

use std::io::Write;

use crate::models::{CaseResult, CaseStatus, RunSummary};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Csv,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a single case result
    pub fn format_result(&self, result: &CaseResult) -> String {
        match self.format {
            OutputFormat::Table => self.format_result_table(result),
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
            OutputFormat::Csv => self.format_result_csv(result),
            OutputFormat::Summary => self.format_result_brief(result),
        }
    }

    fn format_result_table(&self, result: &CaseResult) -> String {
        let status_str = if self.colorize {
            match result.status {
                CaseStatus::Pass => "\x1b[32m✓ PASS\x1b[0m",
                CaseStatus::Fail => "\x1b[31m✗ FAIL\x1b[0m",
                CaseStatus::Error => "\x1b[31m! ERROR\x1b[0m",
            }
        } else {
            match result.status {
                CaseStatus::Pass => "✓ PASS",
                CaseStatus::Fail => "✗ FAIL",
                CaseStatus::Error => "! ERROR",
            }
        };

        let detail = result.message.as_deref().unwrap_or("");
        format!(
            "{:24} {} [{:>6}ms] {}",
            truncate(&result.case_name, 24),
            status_str,
            result.duration_ms,
            truncate(detail, 48)
        )
    }

    fn format_result_csv(&self, result: &CaseResult) -> String {
        format!(
            "{},{},{},\"{}\",\"{}\",\"{}\"",
            result.case_name,
            result.status,
            result.duration_ms,
            csv_escape(&result.expected),
            csv_escape(result.response.as_deref().unwrap_or("")),
            csv_escape(result.message.as_deref().unwrap_or(""))
        )
    }

    fn format_result_brief(&self, result: &CaseResult) -> String {
        format!(
            "{} {} ({}ms)",
            result.status.symbol(),
            result.case_name,
            result.duration_ms
        )
    }

    /// Format a run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Csv => self.format_summary_csv(summary),
            OutputFormat::Summary => self.format_summary_brief(summary),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str("\n══════════════════════════════════════════════════════════════\n");
        output.push_str(&format!(
            " Model: {} | Started: {}\n",
            summary.model,
            summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str("══════════════════════════════════════════════════════════════\n");

        for result in &summary.results {
            output.push_str(&format!(" {}\n", self.format_result_table(result)));
        }

        output.push_str("──────────────────────────────────────────────────────────────\n");

        let pass_str = if self.colorize {
            format!("\x1b[32m{}\x1b[0m", summary.passed)
        } else {
            summary.passed.to_string()
        };
        let fail_str = if self.colorize && summary.failed > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failed)
        } else {
            summary.failed.to_string()
        };

        output.push_str(&format!(
            " Total: {} | Pass: {} | Fail: {} | Error: {}\n",
            summary.total, pass_str, fail_str, summary.errors
        ));
        output.push_str(&format!(
            " Pass Rate: {:.1}% | Duration: {}ms\n",
            summary.pass_rate(),
            summary.total_duration_ms
        ));
        output.push_str("══════════════════════════════════════════════════════════════\n");

        output
    }

    fn format_summary_csv(&self, summary: &RunSummary) -> String {
        let mut output = String::new();
        output.push_str("case,status,duration_ms,expected,response,message\n");
        for result in &summary.results {
            output.push_str(&self.format_result_csv(result));
            output.push('\n');
        }
        output
    }

    fn format_summary_brief(&self, summary: &RunSummary) -> String {
        format!(
            "{}: {}/{} passed ({:.1}%) in {}ms",
            summary.model,
            summary.passed,
            summary.total,
            summary.pass_rate(),
            summary.total_duration_ms
        )
    }
}

/// Write formatted results to a file
pub fn write_results_to_file(
    path: &str,
    summary: &RunSummary,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let formatter = ResultFormatter::new(format).no_color();
    let content = formatter.format_summary(summary);

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

fn csv_escape(s: &str) -> String {
    s.replace('"', "\"\"")
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_summary() -> RunSummary {
        let results = vec![
            CaseResult::pass("even_odd", "YES", "YES", 120),
            CaseResult::fail("double_it", "4", "5", 90),
        ];
        RunSummary::new("phi4-mini", Utc::now(), results)
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TABLE"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("csv"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_str("unknown"), None);
    }

    #[test]
    fn test_format_result_brief() {
        let result = CaseResult::pass("even_odd", "YES", "YES", 100);
        let formatter = ResultFormatter::new(OutputFormat::Summary);
        let output = formatter.format_result(&result);
        assert!(output.contains("even_odd"));
        assert!(output.contains("100ms"));
    }

    #[test]
    fn test_format_summary_table_no_color() {
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let output = formatter.format_summary(&sample_summary());

        assert!(output.contains("phi4-mini"));
        assert!(output.contains("✓ PASS"));
        assert!(output.contains("✗ FAIL"));
        assert!(output.contains("Pass Rate: 50.0%"));
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_format_summary_csv() {
        let formatter = ResultFormatter::new(OutputFormat::Csv);
        let output = formatter.format_summary(&sample_summary());

        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("case,status,duration_ms,expected,response,message")
        );
        assert!(lines.next().unwrap().starts_with("even_odd,PASS,120"));
    }

    #[test]
    fn test_format_summary_json_round_trips() {
        let formatter = ResultFormatter::new(OutputFormat::Json);
        let output = formatter.format_summary(&sample_summary());

        let parsed: RunSummary = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.total, 2);
        assert_eq!(parsed.passed, 1);
    }

    #[test]
    fn test_csv_escape_quotes() {
        let result = CaseResult::fail("q", "say \"hi\"", "no", 10);
        let formatter = ResultFormatter::new(OutputFormat::Csv);
        let line = formatter.format_result(&result);
        assert!(line.contains("\"say \"\"hi\"\"\""));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long name", 10), "this is...");
    }
}
