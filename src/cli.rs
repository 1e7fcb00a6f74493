//! CLI interface for the wellness assistant

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wellness")]
#[command(about = "Small wellness assistant: report checks, mood support and fitness plans")]
#[command(long_about = "Scan health reports for out-of-range blood pressure and lipid values, \
get supportive replies for how you feel, and build simple fitness plans. Output is advisory only.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a health report for out-of-range values
    Report {
        /// Path to the report (DOCX, PDF, or text)
        file: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Get a supportive reply for a mood you pick
    Mood {
        /// Mood label, e.g. "stressed" or "tired / burned out"
        mood: String,

        /// Print the reply as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a supportive reply to a free-text message
    Chat {
        /// What's on your mind
        message: String,

        /// Print the reply as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a simple fitness plan
    Fitness {
        /// Goal, e.g. "weight loss", "muscle gain", "flexibility"
        #[arg(short, long)]
        goal: String,

        /// Activity level: beginner, moderate, active
        #[arg(short, long)]
        level: String,

        /// Age group, e.g. "18-25", "36-45", "46+"
        #[arg(short, long)]
        age: Option<String>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_report_command_parses() {
        let cli = Cli::try_parse_from(["wellness", "-v", "report", "labs.pdf", "--output", "json"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Report { file, output, save, no_color } => {
                assert_eq!(file, PathBuf::from("labs.pdf"));
                assert_eq!(output.as_deref(), Some("json"));
                assert!(save.is_none());
                assert!(!no_color);
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_fitness_requires_goal_and_level() {
        assert!(Cli::try_parse_from(["wellness", "fitness", "--goal", "loss"]).is_err());
        assert!(Cli::try_parse_from(["wellness", "fitness", "-g", "loss", "-l", "beginner", "-a", "46+"]).is_ok());
    }
}
