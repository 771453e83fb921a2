use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::error::{AppResult, FlowResult};
use crate::utils::interactive::prompt_yes_no;
use crate::utils::output::OutputStyle;
use std::path::Path;

pub fn handle_config_command(
    config: &Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> AppResult<FlowResult> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(config, config_path),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(FlowResult::Completed)
        }
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
        None => handle_config_help(config_path),
    }
}

fn display_or_none(value: Option<String>) -> String {
    value.unwrap_or_else(|| "(none)".to_string())
}

fn handle_show_command(config: &Config, config_path: &Path) -> AppResult<FlowResult> {
    OutputStyle::print_header("⚙️  Feedback Analyzer Configuration");

    println!("{}", OutputStyle::header("General"));
    OutputStyle::print_field_colored("Color", &config.general.color.to_string(), OutputStyle::content);
    OutputStyle::print_field_colored("Paginate", &config.general.paginate.to_string(), OutputStyle::content);
    OutputStyle::print_field_colored(
        "Format",
        &display_or_none(config.general.default_format.clone()),
        OutputStyle::content,
    );

    println!("{}", OutputStyle::header("Analysis"));
    OutputStyle::print_field_colored("Top words", &config.analysis.top_words.to_string(), OutputStyle::content);
    OutputStyle::print_field_colored(
        "Lexicon",
        &display_or_none(
            config
                .analysis
                .lexicon_file
                .as_ref()
                .map(|p| p.display().to_string()),
        ),
        OutputStyle::content,
    );
    let stopwords = if config.analysis.extra_stopwords.is_empty() {
        None
    } else {
        Some(config.analysis.extra_stopwords.join(", "))
    };
    OutputStyle::print_field_colored("Stopwords", &display_or_none(stopwords), OutputStyle::content);

    println!("{}", OutputStyle::header("Report"));
    OutputStyle::print_field_colored(
        "Output dir",
        &config.report.output_dir.display().to_string(),
        OutputStyle::content,
    );
    OutputStyle::print_field_colored(
        "Open",
        &config.report.open_browser.to_string(),
        OutputStyle::content,
    );

    println!("{}", OutputStyle::separator());
    println!(
        "Configuration file location: {}",
        OutputStyle::muted(&config_path.display().to_string())
    );
    Ok(FlowResult::Completed)
}

fn handle_reset_command(config_path: &Path) -> AppResult<FlowResult> {
    if prompt_yes_no("Are you sure you want to reset configuration to defaults? This will overwrite your current settings.")? {
        Config::default().save_to(config_path)?;
        Ok(FlowResult::Success("Configuration reset to defaults!".to_string()))
    } else {
        Ok(FlowResult::Cancelled("Reset cancelled.".to_string()))
    }
}

fn handle_config_help(config_path: &Path) -> AppResult<FlowResult> {
    println!("{}", OutputStyle::header("Configuration commands:"));
    println!("  show   Show the effective configuration");
    println!("  path   Print the configuration file location");
    println!("  reset  Restore the default configuration");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(FlowResult::Completed)
}
