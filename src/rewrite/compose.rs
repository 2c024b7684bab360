//! Compose links built from a recipient list

use super::recipients::{format_recipients, parse_recipient_list, Contact, RecipientFormat};
use super::{transform_with, AmpDecoding};
use tracing::debug;

/// Turn contacts into a `mailto:` link
pub fn mailto_from_contacts(contacts: &[Contact], rules: &RecipientFormat) -> String {
    format!("mailto:{}", format_recipients(contacts, rules))
}

/// Turn a comma separated recipient list into a `mailto:` link.
///
/// Whitespace around entries is dropped and recipients are joined with `","`.
/// Entries may be `Name <email>`; see [`RecipientFormat`] for how names are written.
pub fn mailto_from_recipients_with(recipients: &str, rules: &RecipientFormat) -> String {
    mailto_from_contacts(&parse_recipient_list(recipients), rules)
}

/// [`mailto_from_recipients_with`] under the default rules
pub fn mailto_from_recipients(recipients: &str) -> String {
    mailto_from_recipients_with(recipients, &RecipientFormat::default())
}

/// Build the compose URL for a recipient list under the given rules
pub fn compose_url_with(recipients: &str, rules: &RecipientFormat, decoding: AmpDecoding) -> String {
    let link = mailto_from_recipients_with(recipients, rules);
    debug!("Composing from recipients via {}", link);
    transform_with(&link, decoding)
}

/// Build the compose URL for a recipient list
pub fn compose_url(recipients: &str, decoding: AmpDecoding) -> String {
    compose_url_with(recipients, &RecipientFormat::default(), decoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_from_recipients() {
        assert_eq!(
            mailto_from_recipients("  alice@example.com, bob@example.com "),
            "mailto:alice@example.com,bob@example.com"
        );
    }

    #[test]
    fn test_mailto_from_no_recipients() {
        assert_eq!(mailto_from_recipients(""), "mailto:");
        assert_eq!(mailto_from_recipients("   "), "mailto:");
    }

    #[test]
    fn test_compose_url() {
        assert_eq!(
            compose_url("alice@example.com, bob@example.com", AmpDecoding::First),
            "https://mail.example.com/?_task=mail&_action=compose&to=alice@example.com,bob@example.com"
        );
    }

    #[test]
    fn test_compose_url_with_display_names() {
        assert_eq!(
            compose_url("\"Doe, Jane\" <jane@x.net>, Jürgen Weber <weber@x.net>", AmpDecoding::First),
            "https://mail.example.com/?_task=mail&_action=compose&to=\
             %22Doe,%20Jane%22%20%3Cjane@x.net%3E,\
             %3D%3Futf-8%3Fb%3FSsO8cmdlbiBXZWJlcg%3D%3D%3F%3D%20%3Cweber@x.net%3E"
        );
    }

    #[test]
    fn test_compose_url_without_names() {
        let rules = RecipientFormat { names: false, ..Default::default() };
        assert_eq!(
            compose_url_with("Alice <alice@example.com>", &rules, AmpDecoding::First),
            "https://mail.example.com/?_task=mail&_action=compose&to=alice@example.com"
        );
    }

    #[test]
    fn test_compose_url_without_recipients() {
        assert_eq!(
            compose_url("", AmpDecoding::First),
            "https://mail.example.com/?_task=mail&_action=compose&to="
        );
    }
}
