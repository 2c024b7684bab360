//! Recipient list formatting for compose links
//!
//! Recipients may carry display names (`Name <email>`). Names with commas are
//! double-quoted, non-ASCII names are RFC 2047 encoded, and the joined list is
//! percent-encoded so it is safe as the `to=` value of the compose URL.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Characters left as-is in a formatted recipient list: `@` and `,` plus the
/// unreserved marks. Everything else is percent-encoded.
const RECIPIENT_LIST: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'@')
    .remove(b',')
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~');

/// One recipient, optionally with a display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: String,
}

impl Contact {
    pub fn new(name: Option<&str>, email: &str) -> Self {
        Self {
            name: name.map(str::to_string),
            email: email.to_string(),
        }
    }
}

/// Formatting rules for recipient lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipientFormat {
    /// Separate recipients with `", "` instead of `","`
    pub spaces: bool,
    /// Include display names
    pub names: bool,
    /// RFC 2047 encode non-ASCII display names
    pub mime: bool,
    /// Drop names containing commas instead of quoting them
    pub no_commas: bool,
}

impl Default for RecipientFormat {
    fn default() -> Self {
        Self {
            spaces: false,
            names: true,
            mime: true,
            no_commas: false,
        }
    }
}

/// RFC 2047 "B" encoded word for a display name
pub fn mime_encode_name(name: &str) -> String {
    format!("=?utf-8?b?{}?=", STANDARD.encode(name.as_bytes()))
}

/// Split a recipient list on commas that are not inside double quotes
fn split_unquoted_commas(list: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                entries.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&list[start..]);
    entries
}

/// Parse a single `Name <email>`, `"Last, First" <email>` or bare `email` entry
pub fn parse_contact(entry: &str) -> Option<Contact> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }

    if let (Some(open), true) = (entry.rfind('<'), entry.ends_with('>')) {
        let email = entry[open + 1..entry.len() - 1].trim();
        let name = entry[..open].trim().trim_matches('"').trim();
        let name = if name.is_empty() { None } else { Some(name) };
        return Some(Contact::new(name, email));
    }

    Some(Contact::new(None, entry))
}

/// Parse a comma separated recipient list, skipping empty entries
pub fn parse_recipient_list(list: &str) -> Vec<Contact> {
    split_unquoted_commas(list)
        .into_iter()
        .filter_map(parse_contact)
        .collect()
}

/// Render one contact as an address under the given rules
fn format_contact(contact: &Contact, rules: &RecipientFormat) -> String {
    let name = match (&contact.name, rules.names) {
        (Some(name), true) => name,
        _ => return contact.email.clone(),
    };

    let mut name = if rules.mime && !name.is_ascii() {
        mime_encode_name(name)
    } else {
        name.clone()
    };

    if name.contains(',') {
        if rules.no_commas {
            return contact.email.clone();
        }
        name = format!("\"{}\"", name);
    }

    format!("{} <{}>", name, contact.email)
}

/// Join contacts into a percent-encoded recipient list
pub fn format_recipients(contacts: &[Contact], rules: &RecipientFormat) -> String {
    let separator = if rules.spaces { ", " } else { "," };
    let joined = contacts
        .iter()
        .map(|contact| format_contact(contact, rules))
        .collect::<Vec<_>>()
        .join(separator);

    debug!("Formatted {} recipient(s): {}", contacts.len(), joined);
    utf8_percent_encode(&joined, RECIPIENT_LIST).to_string()
}
