//! Output formatters for health reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{HealthReport, ReportStatus};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting health reports
pub trait OutputFormatter {
    fn format_report(&self, report: &HealthReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Green).bold(), title.color(Color::Green).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_status_badge(&self, status: ReportStatus) -> String {
        let (badge, color) = match status {
            ReportStatus::Unreadable => ("UNREADABLE", Color::BrightBlack),
            ReportStatus::NoAbnormalValues => ("NO FLAGS", Color::Green),
            ReportStatus::FindingsDetected => ("REVIEW", Color::Yellow),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &HealthReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("HEALTH REPORT CHECK"));
        output.push_str(&format!(
            "File: {} ({}) {}\n",
            report.file_name,
            report.metadata.file_type,
            self.format_status_badge(report.status)
        ));
        output.push_str(&format!(
            "Generated: {} | Characters read: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.characters_extracted
        ));

        output.push_str(&self.format_header("Summary"));
        for line in report.summary.lines() {
            if line.starts_with("- ") && report.status == ReportStatus::FindingsDetected {
                output.push_str(&self.colorize(line, Color::Yellow));
            } else {
                output.push_str(line);
            }
            output.push('\n');
        }

        output.push_str(&self.format_header("General Advice"));
        for advice in &report.general_advice {
            output.push_str(&format!("• {}\n", self.colorize(advice, Color::Cyan)));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &HealthReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &HealthReport) -> Result<String> {
        let mut md = String::new();
        md.push_str(&format!("# Health Report: {}\n\n", report.file_name));

        if self.include_metadata {
            md.push_str("| Field | Value |\n|---|---|\n");
            md.push_str(&format!("| File type | {} |\n", report.metadata.file_type));
            md.push_str(&format!("| Characters read | {} |\n", report.metadata.characters_extracted));
            md.push_str(&format!(
                "| Generated | {} |\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        md.push_str("## Summary\n\n");
        match report.status {
            ReportStatus::Unreadable => {
                md.push_str(&report.summary);
                md.push_str("\n\n");
            }
            _ => {
                if report.findings.is_empty() {
                    md.push_str("No obvious abnormal values detected by this simple checker.\n\n");
                } else {
                    for finding in &report.findings {
                        md.push_str(&format!("- **{}**: {}\n", finding.indicator, finding.message));
                    }
                    md.push('\n');
                }
                if let Some(preview) = &report.preview {
                    md.push_str(&format!("> {}\n\n", preview));
                }
            }
        }

        md.push_str("## General Advice\n\n");
        for advice in &report.general_advice {
            md.push_str(&format!("- {}\n", advice));
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &HealthReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, report_name: &str) -> String {
    let base_name = Path::new(report_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    match format {
        OutputFormat::Console => format!("{}_check.txt", base_name),
        OutputFormat::Json => format!("{}_check.json", base_name),
        OutputFormat::Markdown => format!("{}_check.md", base_name),
    }
}
