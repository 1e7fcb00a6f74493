//! Report analysis: extraction, indicator scan and summary in one pass

use crate::config::{Config, ReportConfig};
use crate::input::InputManager;
use crate::output::report::HealthReport;
use crate::processing::scanner::IndicatorScanner;
use log::info;

pub struct ReportAnalyzer {
    input: InputManager,
    scanner: IndicatorScanner,
    report: ReportConfig,
}

impl Default for ReportAnalyzer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ReportAnalyzer {
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputManager::from_config(&config.extraction),
            scanner: IndicatorScanner::new(),
            report: config.report.clone(),
        }
    }

    pub fn with_scanner(mut self, scanner: IndicatorScanner) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn analyze(&self, raw: &[u8], filename: &str) -> HealthReport {
        let text = self.input.extract(raw, filename);
        let findings = if text.trim().is_empty() {
            Vec::new()
        } else {
            self.scanner.scan(&text)
        };
        info!(
            "Analyzed '{}': {} characters, {} findings",
            filename,
            text.len(),
            findings.len()
        );
        HealthReport::from_analysis(filename, &text, findings, &self.report)
    }
}
