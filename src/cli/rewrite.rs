//! Rewrite CLI command, the form a host browser invokes

use crate::rewrite::{transform_with, AmpDecoding};
use crate::utils::{create_rewrite_record, log_incoming_link, open_url};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RewriteArgs {
    /// The intercepted mailto: link
    pub url: String,

    /// Open the compose URL in the default browser
    #[arg(long, default_value = "false")]
    pub open: bool,
}

impl RewriteArgs {
    /// Produce the compose URL, launching it when requested
    pub fn execute(&self, decoding: AmpDecoding) -> Result<String> {
        log_incoming_link("mailto", &self.url);

        let output = transform_with(&self.url, decoding);
        create_rewrite_record(&self.url, &output, decoding);

        if self.open {
            open_url(&output)?;
        }

        Ok(output)
    }
}
