//! Core business logic layer
//!
//! This module contains the fundamental data structures, traits, and the
//! normalize/score/aggregate/present pipeline of the analyzer.

pub mod data;
pub mod lexicon;
pub mod normalizer;
pub mod operations;
pub mod presenter;
pub mod scorer;
pub mod stopwords;
pub mod traits;

