//! Configuration for the mailto rewriter

pub mod settings;

pub use settings::{LoggingConfig, RewriterConfig};
