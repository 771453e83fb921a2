use crate::utils::output::OutputStyle;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Error reading CSV: {0}")]
    Input(String),

    #[error("CSV must contain a '{column}' column")]
    MissingColumn { column: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl AppError {
    pub fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        AppError::Io(format!("{}: {}", path.display(), err))
    }
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

/// Outcomes of a command that are not failures but still need to be reported
#[derive(Debug)]
pub enum FlowResult {
    /// No feedback text was provided; the caller goes back to the entry state
    NothingToAnalyze,
    Cancelled(String),
    ReportWritten(PathBuf),
    Success(String),
    /// The command already produced its output
    Completed,
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::Input(_) | AppError::MissingColumn { .. } => {
            eprintln!("📄 {}", OutputStyle::error(&err.to_string()));
        }
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::error(&format!("Config: {}", msg)));
        }
        AppError::Io(e) => {
            eprintln!("❌ {}", OutputStyle::error(e));
        }
        AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::NothingToAnalyze => {
            println!("{}", OutputStyle::muted("Nothing to analyze."));
            println!(
                "{}",
                OutputStyle::muted(
                    "Type a piece of feedback, pass --text, or load a CSV with a 'feedback' column via --file."
                )
            );
        }
        FlowResult::Cancelled(msg) => {
            println!("⏹️  {}", OutputStyle::muted(&msg));
        }
        FlowResult::ReportWritten(path) => {
            println!(
                "✅ {} {}",
                OutputStyle::success("Report written to"),
                OutputStyle::info(&path.display().to_string())
            );
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(&msg));
        }
        FlowResult::Completed => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message_names_the_column() {
        let err = AppError::MissingColumn {
            column: "feedback".to_string(),
        };
        assert_eq!(err.to_string(), "CSV must contain a 'feedback' column");
    }

    #[test]
    fn test_input_error_carries_parse_failure() {
        let err = AppError::Input("found record with 3 fields, but the previous record has 2 fields".to_string());
        assert!(err.to_string().starts_with("Error reading CSV: "));
        assert!(err.to_string().contains("3 fields"));
    }
}
