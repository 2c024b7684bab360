//! Inspect CLI command

use crate::models::MailtoParts;
use crate::rewrite::AmpDecoding;
use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// The mailto: link to take apart
    pub url: String,
}

impl InspectArgs {
    /// Render the link's pieces as pretty JSON
    pub fn execute(&self, decoding: AmpDecoding) -> Result<String> {
        let parts = MailtoParts::parse(&self.url, decoding);
        debug!("Inspected link: {} field(s)", parts.fields.len());

        serde_json::to_string_pretty(&parts).context("Failed to serialize link parts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_renders_json() {
        let args = InspectArgs {
            url: "mailto:alice@example.com?subject=Hi%20there".to_string(),
        };

        let json = args.execute(AmpDecoding::First).unwrap();
        let parsed: MailtoParts = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.recipient, "alice@example.com");
        assert_eq!(parsed.field("subject"), Some("Hi there"));
    }
}
