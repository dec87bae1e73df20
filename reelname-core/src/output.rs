use crate::outcome::RunSummary;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RunSummary {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.is_success(),
            "operation": "rename",
            "directory": self.directory,
            "dry_run": self.dry_run,
            "summary": {
                "renamed": self.renamed(),
                "unchanged": self.unchanged(),
                "skipped": self.skipped(),
                "failed": self.failed(),
            },
            "entries": self.outcomes,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        for outcome in &self.outcomes {
            writeln!(output, "{}", outcome.message(self.dry_run)).unwrap();
        }
        writeln!(output, "{}", self.completion_message()).unwrap();
        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
