//! mailto-webmail - rewrite `mailto:` links into Roundcube webmail compose URLs
//!
//! Meant to be installed as the mailto: handler of a site-specific browser:
//! the host hands over the link it intercepted and navigates to the result.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod rewrite;
pub mod utils;

// Re-export commonly used items
pub use error::{Error, Result};
pub use logging::{init_logger_with_config, log_info, log_error, log_debug};
pub use models::{MailtoParts, RewriteLog};
pub use rewrite::{transform, transform_with, AmpDecoding};
pub use config::settings::RewriterConfig;
