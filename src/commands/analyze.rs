use crate::cli::{AnalyzeArgs, ReportFormat};
use crate::config::Config;
use crate::core::operations::FeedbackAnalyzer;
use crate::core::presenter::ReportView;
use crate::core::traits::{FeedbackSource, ReportRenderer};
use crate::source::{CsvFeedbackSource, ManualEntry};
use crate::utils::error::{AppResult, FlowResult};
use crate::utils::export::{default_report_path, open_browser, write_report, HtmlRenderer, JsonRenderer};
use crate::utils::interactive::{prompt_multiline, read_piped_stdin};
use crate::utils::output::{print_warning, OutputStyle, TerminalRenderer};
use crate::utils::pagination::display_content;
use std::io::IsTerminal;
use tracing::debug;

pub fn handle_analyze_command(config: &Config, args: &AnalyzeArgs) -> AppResult<FlowResult> {
    let analyzer = FeedbackAnalyzer::from_config(config)?;

    let source: Box<dyn FeedbackSource> = match (&args.text, &args.file) {
        (_, Some(path)) => Box::new(CsvFeedbackSource::new(path)),
        (Some(text), None) => Box::new(ManualEntry::new(text.as_str())),
        (None, None) => match read_entry()? {
            Some(text) => Box::new(ManualEntry::new(text)),
            None => return Ok(FlowResult::Cancelled("Analysis cancelled".to_string())),
        },
    };

    let Some(batch) = source.load_batch()? else {
        return Ok(FlowResult::NothingToAnalyze);
    };

    let result = analyzer.analyze(&batch);
    let view = ReportView::from_result(&result);
    let format = args
        .format
        .or_else(|| config.default_format())
        .unwrap_or_default();
    debug!(?format, items = result.total, "rendering report");

    match format {
        ReportFormat::Terminal => present_terminal(config, args, &view),
        ReportFormat::Json => present_json(args, &view),
        ReportFormat::Html => present_html(config, args, &view),
    }
}

/// The entry form: typed on a terminal, or whatever was piped into stdin
fn read_entry() -> AppResult<Option<String>> {
    if std::io::stdin().is_terminal() {
        prompt_multiline(&format!(
            "💬 {}",
            OutputStyle::header("Enter feedback (Enter to analyze, Ctrl+J for a new line, Esc to cancel):")
        ))
    } else {
        read_piped_stdin().map(Some)
    }
}

fn present_terminal(config: &Config, args: &AnalyzeArgs, view: &ReportView) -> AppResult<FlowResult> {
    if let Some(path) = &args.output {
        colored::control::set_override(false);
        let content = TerminalRenderer::default().render(view)?;
        write_report(path, &content)?;
        return Ok(FlowResult::ReportWritten(path.clone()));
    }

    let content = TerminalRenderer::for_terminal().render(view)?;
    display_content(&content, config.general.paginate)?;
    Ok(FlowResult::Completed)
}

fn present_json(args: &AnalyzeArgs, view: &ReportView) -> AppResult<FlowResult> {
    let content = JsonRenderer.render(view)?;
    match &args.output {
        Some(path) => {
            write_report(path, &content)?;
            Ok(FlowResult::ReportWritten(path.clone()))
        }
        None => {
            println!("{}", content);
            Ok(FlowResult::Completed)
        }
    }
}

fn present_html(config: &Config, args: &AnalyzeArgs, view: &ReportView) -> AppResult<FlowResult> {
    let content = HtmlRenderer.render(view)?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_report_path(&config.report.output_dir, &view.generated_at));
    write_report(&path, &content)?;

    if (args.open || config.report.open_browser)
        && let Err(e) = open_browser(&path)
    {
        print_warning(&e.to_string());
    }

    Ok(FlowResult::ReportWritten(path))
}
