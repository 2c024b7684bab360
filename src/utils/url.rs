//! URL utility functions

use url::Url;

/// Parse URL and extract components
pub fn parse_url(url_str: &str) -> Result<Url, url::ParseError> {
    Url::parse(url_str)
}

/// Check if URL is HTTP or HTTPS
pub fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Decode a URL-encoded argument string into ordered key-value pairs
pub fn parse_query_pairs(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_web_url() {
        assert!(is_web_url(&parse_url("https://mail.example.com/?_task=mail").unwrap()));
        assert!(!is_web_url(&parse_url("mailto:a@example.com").unwrap()));
    }

    #[test]
    fn test_parse_query_pairs_keeps_order() {
        let pairs = parse_query_pairs("subject=Hi%21&cc=a%40example.com&subject=again");
        assert_eq!(
            pairs,
            vec![
                ("subject".to_string(), "Hi!".to_string()),
                ("cc".to_string(), "a@example.com".to_string()),
                ("subject".to_string(), "again".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_pairs_empty() {
        assert!(parse_query_pairs("").is_empty());
    }
}
