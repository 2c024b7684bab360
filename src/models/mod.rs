use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::rewrite::{build_compose_url, split_link, AmpDecoding};
use crate::utils::parse_query_pairs;

// Pieces of an intercepted mailto link, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailtoParts {
    pub recipient: String,
    pub arguments: Option<String>,
    pub fields: Vec<(String, String)>, // Decoded argument pairs, in order
    pub compose_url: String,
}

impl MailtoParts {
    // Split a link the same way the rewrite does and keep every piece
    pub fn parse(input: &str, decoding: AmpDecoding) -> Self {
        let (recipient, arg_str) = split_link(input, decoding);
        let compose_url = build_compose_url(&recipient, &arg_str);
        let fields = parse_query_pairs(&arg_str);
        let arguments = if arg_str.is_empty() { None } else { Some(arg_str) };

        Self {
            recipient,
            arguments,
            fields,
            compose_url,
        }
    }

    // First decoded value for a field name, e.g. "subject"
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// One rewrite, as written to the debug log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteLog {
    pub timestamp: DateTime<Utc>,
    pub input: String,
    pub output: String,
    pub decoding: AmpDecoding,
}

impl RewriteLog {
    pub fn new(input: &str, output: &str, decoding: AmpDecoding) -> Self {
        Self {
            timestamp: Utc::now(),
            input: input.to_string(),
            output: output.to_string(),
            decoding,
        }
    }
}
