//! Report processing: indicator rules, scanning, previews and analysis

pub mod analyzer;
pub mod indicators;
pub mod preview;
pub mod scanner;

pub use analyzer::ReportAnalyzer;
pub use scanner::{scan, Finding, IndicatorScanner};
