use crate::commands::{analyze, configure};
use crate::config::Config;
use crate::utils::error::{AppResult, FlowResult};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "feedback-analyzer")]
#[command(about = "Score customer feedback sentiment and summarize it in a report")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config, config_path: PathBuf) -> AppResult<FlowResult> {
        match self {
            Commands::Analyze(args) => analyze::handle_analyze_command(&config, &args),
            Commands::Config(args) => {
                configure::handle_config_command(&config, &config_path, args.command)
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single piece of feedback or a CSV file of feedback
    Analyze(AnalyzeArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    #[arg(short, long, conflicts_with = "file", help = "Feedback text to analyze")]
    pub text: Option<String>,

    #[arg(short, long, value_name = "CSV", help = "CSV file with a 'feedback' column")]
    pub file: Option<PathBuf>,

    #[arg(short = 'F', long, help = "Report format (defaults to the configured format)")]
    pub format: Option<ReportFormat>,

    #[arg(short, long, value_name = "PATH", help = "Write the report to this file")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Open the HTML report in the browser")]
    pub open: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
    Html,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}
