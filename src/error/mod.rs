//! Error handling module for the mailto rewriter

use thiserror::Error;

/// Custom error type for the mailto rewriter
///
/// The rewrite itself is total; these cover the surfaces around it
/// (handing the compose URL to a browser).
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Launch error: {0}")]
    Launch(String),
}

/// Result type for the mailto rewriter
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_variants_display() {
        let io: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "xdg-open").into();
        assert!(matches!(io, Error::Io(_)));
        assert_eq!(io.to_string(), "IO error: xdg-open");

        let parse: Error = url::Url::parse("no scheme").unwrap_err().into();
        assert!(matches!(parse, Error::UrlParse(_)));

        assert_eq!(Error::Launch("exit 3".into()).to_string(), "Launch error: exit 3");
    }
}
