use crate::core::traits::FeedbackSource;
use crate::utils::error::{AppError, AppResult};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Name of the mandatory column, matched case-sensitively
pub const FEEDBACK_COLUMN: &str = "feedback";

/// Cell values read as missing data, matched exactly
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    cell.trim().is_empty() || NA_VALUES.contains(&cell)
}

/// Bulk feedback loaded from a CSV file
pub struct CsvFeedbackSource {
    path: PathBuf,
}

impl CsvFeedbackSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the `feedback` column of CSV data, in row order.
    ///
    /// Empty, whitespace-only and NA-marker cells are dropped, as are rows
    /// too short to reach the column. A row with more fields than the
    /// header is malformed and fails the whole batch.
    pub fn read_feedback<R: Read>(reader: R) -> AppResult<Vec<String>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| AppError::Input(e.to_string()))?
            .clone();

        if headers.is_empty() {
            return Err(AppError::Input("No columns to parse from file".to_string()));
        }

        let column = headers
            .iter()
            .position(|h| h == FEEDBACK_COLUMN)
            .ok_or_else(|| AppError::MissingColumn {
                column: FEEDBACK_COLUMN.to_string(),
            })?;

        let mut feedback = Vec::new();
        let mut dropped = 0usize;

        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| AppError::Input(e.to_string()))?;
            // header is line 1
            let line = record.position().map_or(index as u64 + 2, |p| p.line());
            if record.len() > headers.len() {
                return Err(AppError::Input(format!(
                    "Expected {} fields in line {}, saw {}",
                    headers.len(),
                    line,
                    record.len()
                )));
            }
            match record.get(column) {
                Some(cell) if !is_missing(cell) => feedback.push(cell.to_string()),
                _ => {
                    dropped += 1;
                    debug!(line, "skipping missing feedback cell");
                }
            }
        }

        if dropped > 0 {
            warn!(dropped, "dropped rows with a missing feedback cell");
        }
        info!(rows = feedback.len(), "loaded feedback from CSV");

        Ok(feedback)
    }
}

impl FeedbackSource for CsvFeedbackSource {
    fn load_batch(&self) -> AppResult<Option<Vec<String>>> {
        let file = File::open(&self.path).map_err(|e| AppError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "reading feedback CSV");
        Self::read_feedback(file).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn read(data: &str) -> AppResult<Vec<String>> {
        CsvFeedbackSource::read_feedback(data.as_bytes())
    }

    #[test]
    fn test_reads_feedback_column_in_order() {
        let data = "id,feedback,rating\n1,Great app,5\n2,\"Slow, but works\",3\n3,Crashes a lot,1\n";
        assert_eq!(
            read(data).unwrap(),
            vec!["Great app", "Slow, but works", "Crashes a lot"]
        );
    }

    #[test]
    fn test_drops_empty_cells() {
        let data = "feedback,rating\nGood,5\n,3\n   ,2\nBad,1\n";
        assert_eq!(read(data).unwrap(), vec!["Good", "Bad"]);
    }

    #[test]
    fn test_quoted_multiline_cell_is_one_entry() {
        let data = "feedback\n\"line one\nline two\"\nnext\n";
        assert_eq!(read(data).unwrap(), vec!["line one\nline two", "next"]);
    }

    #[test]
    fn test_missing_feedback_column() {
        let err = read("comment,rating\nnice,5\n").unwrap_err();
        assert!(matches!(err, AppError::MissingColumn { .. }));
        assert_eq!(err.to_string(), "CSV must contain a 'feedback' column");
    }

    #[test]
    fn test_column_name_is_case_sensitive() {
        let err = read("Feedback\nnice\n").unwrap_err();
        assert!(matches!(err, AppError::MissingColumn { .. }));
    }

    #[test]
    fn test_rows_longer_than_header_are_input_errors() {
        let err = read("feedback,rating\ngood,5\nbad,1,extra\n").unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
        assert_eq!(
            err.to_string(),
            "Error reading CSV: Expected 2 fields in line 3, saw 3"
        );
    }

    #[test]
    fn test_short_rows_are_accepted() {
        let data = "feedback,rating\nGreat app,5\nSlow\n";
        assert_eq!(read(data).unwrap(), vec!["Great app", "Slow"]);
    }

    #[test]
    fn test_row_missing_the_feedback_field_is_dropped() {
        let data = "rating,feedback\n5,Great app\n3\n1,Crashes\n";
        assert_eq!(read(data).unwrap(), vec!["Great app", "Crashes"]);
    }

    #[test]
    fn test_na_markers_are_dropped() {
        let data = "feedback\nGood\nN/A\nnull\nNA\nNaN\nNone\n<NA>\n#N/A\n";
        assert_eq!(read(data).unwrap(), vec!["Good"]);
    }

    #[test]
    fn test_na_markers_match_exactly() {
        let data = "feedback\nna\nNone of it works\n\" NA \"\n";
        assert_eq!(read(data).unwrap(), vec!["na", "None of it works", " NA "]);
    }

    #[test]
    fn test_invalid_utf8_is_input_error() {
        let bytes: &[u8] = b"feedback\n\xff\xfe broken\n";
        let err = CsvFeedbackSource::read_feedback(bytes).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn test_empty_file_is_input_error() {
        let err = read("").unwrap_err();
        assert_eq!(err.to_string(), "Error reading CSV: No columns to parse from file");
    }

    #[test]
    fn test_header_only_yields_empty_batch() {
        assert!(read("feedback\n").unwrap().is_empty());
    }

    #[test]
    fn test_load_batch_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "feedback").unwrap();
        writeln!(file, "Love the new design").unwrap();
        writeln!(file, "Support never answered").unwrap();

        let source = CsvFeedbackSource::new(file.path());
        let batch = source.load_batch().unwrap().unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1], "Support never answered");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CsvFeedbackSource::new("/nonexistent/feedback.csv");
        assert!(matches!(source.load_batch(), Err(AppError::Io(_))));
    }
}
