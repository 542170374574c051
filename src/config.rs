//! Environment-backed configuration.

use crate::{Error, Result};

/// Nano Banana Pro (Gemini 3 Pro Image).
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub image_model: String,
}

impl Config {
    /// Load configuration from the environment (and `.env` when present).
    ///
    /// The API key is validated here, before any network call is attempted.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;

        Ok(Self {
            gemini_api_key,
            image_model: std::env::var("NANOBANANA_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
        })
    }
}
