//! Wellness assistant: report checks, mood support and fitness plans

use clap::Parser;
use log::{error, info, warn};
use std::path::Path;
use std::process;
use wellness_assistant::cli::{self, Cli, Commands, ConfigAction};
use wellness_assistant::config::Config;
use wellness_assistant::error::{Result, WellnessError};
use wellness_assistant::input::InputManager;
use wellness_assistant::output::formatter::{save_report_to_file, ReportGenerator};
use wellness_assistant::processing::ReportAnalyzer;
use wellness_assistant::wellness::fitness::FitnessPlan;
use wellness_assistant::wellness::reply::{reply_to_label, reply_to_message, MoodReply};
use wellness_assistant::wellness::StaticContent;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Report { file, output, save, no_color } => {
            let format = match output {
                Some(name) => cli::parse_output_format(&name).map_err(WellnessError::InvalidInput)?,
                None => config.output.format,
            };

            let input = InputManager::from_config(&config.extraction);
            let (raw, filename) = input.read_upload(&file).await?;
            info!("Read {} bytes from {}", raw.len(), file.display());

            let report = ReportAnalyzer::new(&config).analyze(&raw, &filename);
            if !report.is_readable() {
                warn!("No text could be read from {}", file.display());
            }

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, true, true);
            let rendered = generator.generate_report(&report, &format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Mood { mood, json } => {
            let reply = reply_to_label(&mood, &StaticContent, &mut rand::thread_rng());
            print_reply(&reply, json)?;
        }

        Commands::Chat { message, json } => {
            let reply = reply_to_message(&message, &StaticContent, &mut rand::thread_rng());
            info!("Detected mood: {}", reply.mood);
            print_reply(&reply, json)?;
        }

        Commands::Fitness { goal, level, age, json } => {
            let plan = FitnessPlan::new(&goal, &level, age.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("Fitness plan ({} / {})", plan.goal, plan.activity_level);
                for (i, step) in plan.plan.iter().enumerate() {
                    println!("  {}. {}", i + 1, step);
                }
                println!("\nTips:");
                for tip in &plan.tips {
                    println!("  • {}", tip);
                }
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| WellnessError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }
            ConfigAction::Path => println!("{}", config_path.display()),
            ConfigAction::Reset => {
                Config::reset(config_path)?;
                println!("Configuration reset to defaults at {}", config_path.display());
            }
        },
    }

    Ok(())
}

fn print_reply(reply: &MoodReply, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reply)?);
    } else {
        println!("{}", reply);
    }
    Ok(())
}
