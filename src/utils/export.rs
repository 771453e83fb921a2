use crate::core::presenter::ReportView;
use crate::core::traits::ReportRenderer;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{escape_html, file_stamp, format_datetime, format_score};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Pretty-printed JSON of the report view
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, view: &ReportView) -> AppResult<String> {
        serde_json::to_string_pretty(view)
            .map_err(|e| AppError::System(format!("Failed to serialize report to JSON: {}", e)))
    }
}

/// Self-contained HTML page with Chart.js charts
pub struct HtmlRenderer;

impl ReportRenderer for HtmlRenderer {
    fn render(&self, view: &ReportView) -> AppResult<String> {
        generate_html(view)
    }
}

/// Serialize data for embedding inside a `<script>` element
fn script_json<T: Serialize>(value: &T) -> AppResult<String> {
    let json = serde_json::to_string(value)
        .map_err(|e| AppError::System(format!("Failed to serialize chart data to JSON: {}", e)))?;
    Ok(json.replace("</", "<\\/"))
}

fn table_rows(view: &ReportView) -> String {
    view.rows
        .iter()
        .map(|row| {
            format!(
                "                    <tr><td class=\"feedback-text\">{}</td><td><span class=\"badge {}\">{}</span></td><td class=\"score\">{}</td></tr>\n",
                escape_html(&row.text),
                row.sentiment.as_str().to_lowercase(),
                row.sentiment,
                escape_html(&row.score)
            )
        })
        .collect()
}

pub fn generate_html(view: &ReportView) -> AppResult<String> {
    let sentiment_json = script_json(&view.sentiment_chart)?;
    let words_json = script_json(&view.word_chart)?;
    let summary = &view.summary;
    let rows = table_rows(view);
    let empty_note = if view.is_empty() {
        r#"<p class="empty">No feedback entries were analyzed.</p>"#
    } else {
        ""
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Feedback Results</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            background-color: #f5f5f5;
        }}

        .container {{
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }}

        .header {{
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 2rem;
            border-radius: 10px;
            margin-bottom: 2rem;
            text-align: center;
        }}

        .header h1 {{
            font-size: 2.2rem;
            margin-bottom: 0.5rem;
        }}

        .stats {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 1rem;
            margin-bottom: 2rem;
        }}

        .card {{
            background: white;
            padding: 1.5rem;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }}

        .stat-item {{
            text-align: center;
        }}

        .stat-number {{
            font-size: 2rem;
            font-weight: bold;
            color: #667eea;
        }}

        .stat-label {{
            color: #666;
            font-size: 0.9rem;
        }}

        .charts {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(400px, 1fr));
            gap: 1.5rem;
            margin-bottom: 1.5rem;
        }}

        .card h2 {{
            font-size: 1.1rem;
            margin-bottom: 1rem;
        }}

        .section {{
            margin-bottom: 1.5rem;
        }}

        table {{
            width: 100%;
            border-collapse: collapse;
        }}

        th, td {{
            padding: 0.6rem 0.75rem;
            border-bottom: 1px solid #e9ecef;
            text-align: left;
            vertical-align: top;
        }}

        th {{
            background: #f8f9fa;
        }}

        .feedback-text {{
            white-space: pre-wrap;
        }}

        .score {{
            font-family: 'Courier New', monospace;
            text-align: right;
        }}

        .badge {{
            padding: 0.25rem 0.5rem;
            border-radius: 15px;
            font-size: 0.8rem;
        }}

        .badge.positive {{
            background: #e3f2fd;
            color: #1976d2;
        }}

        .badge.neutral {{
            background: #fff8e1;
            color: #b28704;
        }}

        .badge.negative {{
            background: #fce4ec;
            color: #c2185b;
        }}

        .empty, footer {{
            text-align: center;
            color: #666;
            font-size: 0.9rem;
            margin-top: 1rem;
        }}

        @media (max-width: 768px) {{
            .container {{
                padding: 10px;
            }}

            .charts {{
                grid-template-columns: 1fr;
            }}
        }}
    </style>
</head>
<body>
    <div class="container">
        <header class="header">
            <h1>Sentiment Analysis Results</h1>
            <p>Generated {generated_at}</p>
        </header>

        <div class="stats">
            <div class="card stat-item"><div class="stat-label">Total feedback</div><div class="stat-number">{total}</div></div>
            <div class="card stat-item"><div class="stat-label">Positive</div><div class="stat-number">{positive:.1}%</div></div>
            <div class="card stat-item"><div class="stat-label">Neutral</div><div class="stat-number">{neutral:.1}%</div></div>
            <div class="card stat-item"><div class="stat-label">Negative</div><div class="stat-number">{negative:.1}%</div></div>
        </div>
        {empty_note}

        <div class="charts">
            <div class="card"><h2>Sentiment distribution</h2><canvas id="sentimentPie" height="220"></canvas></div>
            <div class="card"><h2>Sentiment counts</h2><canvas id="sentimentBar" height="220"></canvas></div>
        </div>

        <div class="card section">
            <h2>Top words (most frequent)</h2>
            <canvas id="wordBar" height="120"></canvas>
        </div>

        <div class="card section">
            <h2>Detailed Results</h2>
            <table id="resultsTable">
                <thead><tr><th>Feedback</th><th>Sentiment</th><th>Score</th></tr></thead>
                <tbody>
{rows}                </tbody>
            </table>
        </div>

        <footer>Average score: {average}</footer>
    </div>

    <script>
        const sentiment = {sentiment_json};
        const words = {words_json};
        const palette = {{ Positive: '#36A2EB', Neutral: '#FFCE56', Negative: '#FF6384' }};
        const colors = sentiment.labels.map(label => palette[label] || '#999999');

        new Chart(document.getElementById('sentimentPie'), {{
            type: 'pie',
            data: {{ labels: sentiment.labels, datasets: [{{ data: sentiment.values, backgroundColor: colors }}] }}
        }});

        new Chart(document.getElementById('sentimentBar'), {{
            type: 'bar',
            data: {{ labels: sentiment.labels, datasets: [{{ label: 'Count', data: sentiment.values, backgroundColor: colors }}] }},
            options: {{ scales: {{ y: {{ beginAtZero: true, ticks: {{ precision: 0 }} }} }} }}
        }});

        new Chart(document.getElementById('wordBar'), {{
            type: 'bar',
            data: {{ labels: words.labels, datasets: [{{ label: 'Frequency', data: words.values, backgroundColor: '#4BC0C0' }}] }},
            options: {{ indexAxis: 'y', scales: {{ x: {{ beginAtZero: true, ticks: {{ precision: 0 }} }} }} }}
        }});
    </script>
</body>
</html>
"#,
        generated_at = escape_html(&format_datetime(&view.generated_at)),
        total = summary.total,
        positive = summary.positive_pct,
        neutral = summary.neutral_pct,
        negative = summary.negative_pct,
        average = format_score(summary.average_score),
        empty_note = empty_note,
        rows = rows,
        sentiment_json = sentiment_json,
        words_json = words_json,
    );

    Ok(html)
}

/// Timestamped report file name inside `dir`
pub fn default_report_path(dir: &Path, now: &DateTime<Local>) -> PathBuf {
    dir.join(format!("feedback-report-{}.html", file_stamp(now)))
}

pub fn write_report(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| AppError::io(path, e))?;
    info!(path = %path.display(), bytes = content.len(), "report written");
    Ok(())
}

pub fn open_browser(path: &Path) -> AppResult<()> {
    debug!(path = %path.display(), "opening report in browser");

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .arg("/C")
            .arg("start")
            .arg(path)
            .spawn()
            .map_err(|e| AppError::System(format!("Failed to open browser: {}", e)))?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| AppError::System(format!("Failed to open browser: {}", e)))?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| AppError::System(format!("Failed to open browser: {}", e)))?;
    }

    Ok(())
}
