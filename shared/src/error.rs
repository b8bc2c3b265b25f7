use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned status {0}")]
    HttpStatus(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid game id: {0:?}")]
    InvalidGameId(String),

    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl SharedError {
    /// Whether the dashboard should schedule another attempt for this error.
    /// Every fetch-level failure is treated as transient; input validation
    /// errors are not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SharedError::Network(_) | SharedError::HttpStatus(_) | SharedError::Parse(_)
        )
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        SharedError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SharedError::HttpStatus(503).to_string(),
            "Server returned status 503"
        );
        assert_eq!(
            SharedError::InvalidGameId("abc".to_string()).to_string(),
            "Invalid game id: \"abc\""
        );
    }

    #[test]
    fn test_transient_classification() {
        assert!(SharedError::Network("offline".into()).is_transient());
        assert!(SharedError::HttpStatus(500).is_transient());
        assert!(SharedError::Parse("eof".into()).is_transient());
        assert!(!SharedError::InvalidGameId("x".into()).is_transient());
        assert!(!SharedError::UnsupportedLanguage("fr".into()).is_transient());
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let shared: SharedError = err.into();
        assert!(matches!(shared, SharedError::Parse(_)));
    }
}
