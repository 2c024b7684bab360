//! Command-line interface for rewriting, composing and inspecting mailto links

pub mod compose;
pub mod inspect;
pub mod rewrite;

pub use compose::*;
pub use inspect::*;
pub use rewrite::*;
