pub mod error;
pub mod export;
pub mod format;
pub mod interactive;
pub mod output;
pub mod pagination;

pub use error::{handle_flow, report_error};
