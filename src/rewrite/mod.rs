//! Rewriting of `mailto:` links into Roundcube compose URLs
//!
//! The host browser hands over the raw link it intercepted; whatever comes
//! back is used as the new navigation target. Nothing here can fail: every
//! input string maps to some output string.

pub mod compose;
pub mod recipients;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use compose::{compose_url, compose_url_with, mailto_from_contacts, mailto_from_recipients, mailto_from_recipients_with};
pub use recipients::{Contact, RecipientFormat};

/// Webmail installation to send compose requests to. Edit before deploying.
pub const WEBMAIL_BASE: &str = "https://mail.example.com/";

/// Fixed Roundcube query selecting the compose screen
pub const COMPOSE_QUERY: &str = "_task=mail&_action=compose";

const MAILTO_SCHEME: &str = "mailto:";
const AMP_ENTITY: &str = "&amp;";

/// How `&amp;` entities in the intercepted link are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmpDecoding {
    /// Only the first `&amp;` is turned back into `&`
    #[default]
    First,
    /// Every `&amp;` is turned back into `&`
    All,
}

impl fmt::Display for AmpDecoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmpDecoding::First => write!(f, "first"),
            AmpDecoding::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for AmpDecoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(AmpDecoding::First),
            "all" => Ok(AmpDecoding::All),
            other => Err(format!("Unknown &amp; decoding mode '{}' (expected 'first' or 'all')", other)),
        }
    }
}

/// Strip the scheme and decode `&amp;`, then split off the argument string.
///
/// Both removals are single-shot for the scheme; the entity follows `decoding`.
/// The argument string is everything after the first `?`, empty if there is none.
pub fn split_link(input: &str, decoding: AmpDecoding) -> (String, String) {
    let stripped = input.replacen(MAILTO_SCHEME, "", 1);
    let decoded = match decoding {
        AmpDecoding::First => stripped.replacen(AMP_ENTITY, "&", 1),
        AmpDecoding::All => stripped.replace(AMP_ENTITY, "&"),
    };

    match decoded.split_once('?') {
        Some((addr, args)) => (addr.to_string(), args.to_string()),
        None => (decoded, String::new()),
    }
}

/// Build the compose URL for a recipient and a raw argument string
pub fn build_compose_url(email_addr: &str, arg_str: &str) -> String {
    let mut out = format!("{}?{}&to={}", WEBMAIL_BASE, COMPOSE_QUERY, email_addr);
    if !arg_str.is_empty() {
        out.push('&');
        out.push_str(arg_str);
    }
    out
}

/// Rewrite a `mailto:` link into a compose URL, decoding only the first `&amp;`
pub fn transform(input: &str) -> String {
    transform_with(input, AmpDecoding::First)
}

/// Rewrite a `mailto:` link into a compose URL with the given `&amp;` handling
pub fn transform_with(input: &str, decoding: AmpDecoding) -> String {
    let (email_addr, arg_str) = split_link(input, decoding);
    build_compose_url(&email_addr, &arg_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://mail.example.com/?_task=mail&_action=compose";

    #[test]
    fn test_plain_recipient() {
        assert_eq!(
            transform("mailto:alice@example.com"),
            format!("{}&to=alice@example.com", PREFIX)
        );
    }

    #[test]
    fn test_recipient_with_subject() {
        assert_eq!(
            transform("mailto:alice@example.com?subject=Hi"),
            format!("{}&to=alice@example.com&subject=Hi", PREFIX)
        );
    }

    #[test]
    fn test_first_amp_entity_decoded() {
        assert_eq!(
            transform("mailto:bob@example.com?subject=Hi&amp;body=Hello"),
            format!("{}&to=bob@example.com&subject=Hi&body=Hello", PREFIX)
        );
    }

    #[test]
    fn test_second_amp_entity_left_encoded() {
        let out = transform("mailto:bob@example.com?subject=Hi&amp;body=Hello&amp;cc=carol@example.com");
        assert_eq!(
            out,
            format!("{}&to=bob@example.com&subject=Hi&body=Hello&amp;cc=carol@example.com", PREFIX)
        );
    }

    #[test]
    fn test_decode_all_amp_entities() {
        let out = transform_with(
            "mailto:bob@example.com?subject=Hi&amp;body=Hello&amp;cc=carol@example.com",
            AmpDecoding::All,
        );
        assert_eq!(
            out,
            format!("{}&to=bob@example.com&subject=Hi&body=Hello&cc=carol@example.com", PREFIX)
        );
    }

    #[test]
    fn test_bare_scheme() {
        assert_eq!(transform("mailto:"), format!("{}&to=", PREFIX));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transform(""), format!("{}&to=", PREFIX));
    }

    #[test]
    fn test_trailing_question_mark_adds_nothing() {
        assert_eq!(
            transform("mailto:alice@example.com?"),
            format!("{}&to=alice@example.com", PREFIX)
        );
    }

    #[test]
    fn test_argument_string_keeps_later_question_marks() {
        assert_eq!(
            transform("mailto:a@example.com?subject=Why?&body=x"),
            format!("{}&to=a@example.com&subject=Why?&body=x", PREFIX)
        );
    }

    #[test]
    fn test_only_first_scheme_removed() {
        assert_eq!(
            transform("mailto:mailto:a@example.com"),
            format!("{}&to=mailto:a@example.com", PREFIX)
        );
    }

    #[test]
    fn test_scheme_removed_even_when_not_a_prefix() {
        assert_eq!(
            transform("x-mailto:a@example.com"),
            format!("{}&to=x-a@example.com", PREFIX)
        );
    }

    #[test]
    fn test_percent_encoding_passed_through() {
        assert_eq!(
            transform("mailto:a@example.com?subject=Hello%20World"),
            format!("{}&to=a@example.com&subject=Hello%20World", PREFIX)
        );
    }

    #[test]
    fn test_not_idempotent() {
        let once = transform("mailto:alice@example.com?subject=Hi");
        let twice = transform(&once);
        assert_ne!(once, twice);
        assert!(twice.starts_with(WEBMAIL_BASE));
    }

    #[test]
    fn test_deterministic() {
        let input = "mailto:alice@example.com?subject=Hi&amp;body=Hello";
        assert_eq!(transform(input), transform(input));
    }

    #[test]
    fn test_output_starts_with_base() {
        for input in ["", "?", "garbage", "mailto:?&amp;", "\u{1F600}?x=y"] {
            assert!(transform(input).starts_with(WEBMAIL_BASE), "input {:?}", input);
        }
    }

    #[test]
    fn test_amp_decoding_parse() {
        assert_eq!("first".parse::<AmpDecoding>().unwrap(), AmpDecoding::First);
        assert_eq!(" ALL ".parse::<AmpDecoding>().unwrap(), AmpDecoding::All);
        assert!("some".parse::<AmpDecoding>().is_err());
        assert_eq!(AmpDecoding::default(), AmpDecoding::First);
        assert_eq!(AmpDecoding::All.to_string(), "all");
    }
}
