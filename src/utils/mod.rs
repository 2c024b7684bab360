//! Utility functions for the mailto rewriter

pub mod url;
pub mod logging;
pub mod launch;

pub use self::url::*;
pub use logging::*;
pub use launch::*;
