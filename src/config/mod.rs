//! # Configuration
//!
//! Environment-driven settings for the generator binary.

mod generator;

pub use generator::GeneratorConfig;
