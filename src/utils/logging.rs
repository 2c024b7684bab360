//! Logging utility functions for rewrite operations

use crate::config::settings::RewriterConfig;
use crate::models::RewriteLog;
use crate::rewrite::AmpDecoding;
use crate::{log_debug, log_rewrite_record};
use tracing::info;

/// Log an incoming link from the host browser
pub fn log_incoming_link(source: &str, input: &str) {
    info!("📥 {} link: {}", source, input.chars().take(80).collect::<String>());
    log_debug!("🔍 INCOMING LINK:\n  Source: {}\n  Raw: {}\n  Length: {} bytes",
               source, input, input.len());
}

/// Create and log a rewrite record
pub fn create_rewrite_record(input: &str, output: &str, decoding: AmpDecoding) -> RewriteLog {
    let entry = RewriteLog::new(input, output, decoding);

    info!("✅ Rewrote to {}", output.chars().take(80).collect::<String>());
    log_rewrite_record!(&entry);

    entry
}

/// Log the effective configuration at debug level
pub fn log_config_summary(config: &RewriterConfig) {
    log_debug!("📋 Configuration:\n  Log level: {}\n  &amp; decoding: {}\n  File logging: {}\n  Log file: {}/{}",
               config.log_level,
               config.decoding,
               config.logging.enable_file_logging,
               config.logging.log_dir,
               config.logging.file_name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rewrite_record() {
        let entry = create_rewrite_record("mailto:a@example.com", "https://mail.example.com/", AmpDecoding::First);
        assert_eq!(entry.input, "mailto:a@example.com");
        assert_eq!(entry.output, "https://mail.example.com/");
        assert_eq!(entry.decoding, AmpDecoding::First);
    }
}
