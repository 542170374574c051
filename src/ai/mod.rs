//! AI service integration for image generation
//!
//! Provides the interface to Gemini's `generateContent` endpoint for turning
//! a text prompt into image bytes.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiImageClient;
pub use mock::MockImageClient;

use crate::Result;
use async_trait::async_trait;

/// Image produced by a generation backend, plus any textual commentary the
/// model emitted before the image part.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub data: Vec<u8>,
    pub mime_type: String,
    pub commentary: Vec<String>,
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage>;
}
