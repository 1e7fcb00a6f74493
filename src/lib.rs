//! Wellness assistant library
//!
//! Reads uploaded health reports (DOCX, PDF or plain text), flags a small set
//! of out-of-range indicators, and offers canned mood support and fitness
//! plans.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod wellness;

pub use config::Config;
pub use error::{Result, WellnessError};
pub use processing::{scan, Finding, ReportAnalyzer};
