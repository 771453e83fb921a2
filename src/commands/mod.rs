pub mod analyze;
pub mod configure;
