//! Feedback sources
//!
//! The two adapters that turn user input into a batch for the analyzer:
//! a single typed entry and a CSV file with a `feedback` column.

pub mod manual;
pub mod tabular;

pub use manual::ManualEntry;
pub use tabular::{CsvFeedbackSource, FEEDBACK_COLUMN};
