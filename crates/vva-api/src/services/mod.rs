//! Business logic services.

pub mod analyzer;

pub use analyzer::VideoAnalyzer;
