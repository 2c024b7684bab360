//! Compose CLI command

use crate::rewrite::{compose_url_with, mailto_from_recipients_with, AmpDecoding, RecipientFormat};
use crate::utils::{create_rewrite_record, log_incoming_link, open_url};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Comma separated recipients, e.g. "Jane Doe <jane@example.com>, bob@example.com"
    #[arg(default_value = "")]
    pub recipients: String,

    /// Leave display names out of the compose URL
    #[arg(long, default_value = "false")]
    pub no_names: bool,

    /// Open the compose URL in the default browser
    #[arg(long, default_value = "false")]
    pub open: bool,
}

impl ComposeArgs {
    /// Produce the compose URL for the recipients, launching it when requested
    pub fn execute(&self, decoding: AmpDecoding) -> Result<String> {
        let rules = self.recipient_format();
        let link = mailto_from_recipients_with(&self.recipients, &rules);
        log_incoming_link("compose", &link);

        let output = compose_url_with(&self.recipients, &rules, decoding);
        create_rewrite_record(&link, &output, decoding);

        if self.open {
            open_url(&output)?;
        }

        Ok(output)
    }

    /// Recipient formatting selected by the flags
    pub fn recipient_format(&self) -> RecipientFormat {
        RecipientFormat {
            names: !self.no_names,
            ..RecipientFormat::default()
        }
    }
}
