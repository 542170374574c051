//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error: {0}")]
    AiProvider(String),

    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("prompt cannot be empty")]
    EmptyPrompt,

    #[error("failed to save image: {0}")]
    Save(String),
}

pub type Result<T> = std::result::Result<T, Error>;

const API_KEY_HINT: &str = "Possible causes:
  - Invalid API key
  - API key not properly set in GEMINI_API_KEY environment variable
  - API key may have been revoked or expired

Get your API key at: https://aistudio.google.com/apikey";

const QUOTA_HINT: &str = "Possible causes:
  - API quota exceeded
  - Rate limit reached
  - Try again in a few moments";

const NETWORK_HINT: &str = "Possible causes:
  - Network connectivity issues
  - Firewall blocking API requests
  - Check your internet connection";

const SAVE_HINT: &str = "Possible causes:
  - Insufficient permissions to write to the directory
  - Disk space full
  - Invalid output directory path";

impl Error {
    /// Best-effort guidance derived from the error text.
    ///
    /// Upstream error wording is not a contract; this matches substrings in
    /// the lowered message and is advisory only.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::MissingApiKey => return Some(API_KEY_HINT),
            Error::Save(_) => return Some(SAVE_HINT),
            _ => {}
        }

        let text = self.to_string().to_lowercase();
        if text.contains("api key") || text.contains("authentication") {
            Some(API_KEY_HINT)
        } else if text.contains("quota") || text.contains("rate limit") {
            Some(QUOTA_HINT)
        } else if text.contains("network") || text.contains("connection") {
            Some(NETWORK_HINT)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_classifies_authentication_errors() {
        let err = Error::AiProvider("Invalid API key provided".to_string());
        assert_eq!(err.hint(), Some(API_KEY_HINT));

        let err = Error::AiProvider("Authentication failed (status 401)".to_string());
        assert_eq!(err.hint(), Some(API_KEY_HINT));
    }

    #[test]
    fn test_hint_classifies_quota_errors() {
        let err = Error::AiProvider("Quota exceeded for this project".to_string());
        assert_eq!(err.hint(), Some(QUOTA_HINT));

        let err = Error::AiProvider("Rate limit reached, slow down".to_string());
        assert_eq!(err.hint(), Some(QUOTA_HINT));
    }

    #[test]
    fn test_hint_classifies_network_errors() {
        let err = Error::AiProvider("Connection reset by peer".to_string());
        assert_eq!(err.hint(), Some(NETWORK_HINT));

        let err = Error::AiProvider("Network is unreachable".to_string());
        assert_eq!(err.hint(), Some(NETWORK_HINT));
    }

    #[test]
    fn test_hint_is_none_for_unrecognized_errors() {
        let err = Error::AiProvider("Something unexpected happened".to_string());
        assert_eq!(err.hint(), None);
        assert_eq!(Error::EmptyPrompt.hint(), None);
    }

    #[test]
    fn test_missing_api_key_and_save_always_hint() {
        assert_eq!(Error::MissingApiKey.hint(), Some(API_KEY_HINT));
        let err = Error::Save("permission denied".to_string());
        assert_eq!(err.hint(), Some(SAVE_HINT));
    }
}
