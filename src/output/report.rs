//! Health report structures handed to the formatters

use crate::config::ReportConfig;
use crate::input::FileType;
use crate::processing::preview::build_preview;
use crate::processing::scanner::Finding;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const UNREADABLE_SUMMARY: &str = "I could not read the contents of this file. It may be an image or a \
                                      format that this demo does not fully support.";
pub const FINDINGS_HEADER: &str = "Key points I can see in the text (non-medical):";
pub const NO_FINDINGS_LINE: &str = "- No obvious abnormal values detected by this simple checker.";
pub const PREVIEW_HEADER: &str = "Short preview from the report:";

/// Disclaimers attached to every report, readable or not
pub const GENERAL_ADVICE: &[&str] = &[
    "I am not a doctor and cannot provide a diagnosis or prescribe medicines.",
    "Please discuss this report with a qualified healthcare professional for accurate interpretation.",
    "If you have serious symptoms like chest pain, trouble breathing, severe pain, or confusion, seek emergency medical help immediately.",
    "In general, follow your doctor's instructions, take medicines only as prescribed, rest adequately, stay hydrated, and maintain a balanced diet.",
    "For borderline blood pressure or cholesterol, lifestyle changes such as regular physical activity, balanced diet, stress management, and avoiding smoking are often recommended — but your doctor is the best person to guide you.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// No text could be recovered from the upload
    Unreadable,
    NoAbnormalValues,
    FindingsDetected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub file_name: String,
    pub status: ReportStatus,
    pub summary: String,
    pub findings: Vec<Finding>,
    pub preview: Option<String>,
    pub general_advice: Vec<String>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub file_type: FileType,
    pub characters_extracted: usize,
    pub generated_at: DateTime<Utc>,
}

impl HealthReport {
    /// Compose the report for one upload from its extracted text and findings.
    pub fn from_analysis(file_name: &str, text: &str, findings: Vec<Finding>, config: &ReportConfig) -> Self {
        let metadata = ReportMetadata {
            file_type: FileType::from_filename(file_name),
            characters_extracted: text.chars().count(),
            generated_at: Utc::now(),
        };
        let general_advice = GENERAL_ADVICE.iter().map(|s| s.to_string()).collect();

        if text.trim().is_empty() {
            return Self {
                file_name: file_name.to_string(),
                status: ReportStatus::Unreadable,
                summary: UNREADABLE_SUMMARY.to_string(),
                findings: Vec::new(),
                preview: None,
                general_advice,
                metadata,
            };
        }

        let preview = build_preview(text, config.preview_chars, config.preview_lines);
        let status = if findings.is_empty() {
            ReportStatus::NoAbnormalValues
        } else {
            ReportStatus::FindingsDetected
        };

        Self {
            file_name: file_name.to_string(),
            status,
            summary: Self::create_summary(&findings, &preview),
            findings,
            preview: Some(preview),
            general_advice,
            metadata,
        }
    }

    fn create_summary(findings: &[Finding], preview: &str) -> String {
        let mut lines = vec![FINDINGS_HEADER.to_string()];
        if findings.is_empty() {
            lines.push(NO_FINDINGS_LINE.to_string());
        } else {
            lines.extend(findings.iter().map(|f| format!("- {}", f.message)));
        }
        lines.push(String::new());
        lines.push(PREVIEW_HEADER.to_string());
        lines.push(preview.to_string());
        lines.join("\n")
    }

    pub fn is_readable(&self) -> bool {
        self.status != ReportStatus::Unreadable
    }
}
