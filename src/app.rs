//! Linear generate-then-save flow.

use crate::ai::{GeminiImageClient, ImageGenerationService};
use crate::config::Config;
use crate::storage::ImageSaver;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;

const PROMPT_LOG_LIMIT: usize = 100;

/// Ties the generation backend to the on-disk saver.
pub struct App {
    image_gen: Box<dyn ImageGenerationService>,
    saver: ImageSaver,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests that need to inject
    /// mocks.
    pub fn with_services(image_gen: Box<dyn ImageGenerationService>, saver: ImageSaver) -> Self {
        Self { image_gen, saver }
    }

    pub fn new(config: &Config, output_dir: &Path) -> Self {
        info!("Image provider: Gemini (model: {})", config.image_model);
        let image_gen = Box::new(GeminiImageClient::new(
            config.gemini_api_key.clone(),
            config.image_model.clone(),
        ));
        Self::with_services(image_gen, ImageSaver::new(output_dir))
    }

    /// Validate the prompt, request one image, save it.
    ///
    /// Each step has exactly one failure exit; there is no retry.
    pub async fn run(&self, prompt: &str) -> Result<PathBuf> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(Error::EmptyPrompt);
        }

        info!("Generating image with Nano Banana Pro...");
        info!("Prompt: {}", truncate_for_log(prompt));

        let image = self.image_gen.generate_image(prompt).await?;
        for line in &image.commentary {
            info!("Model response: {}", line);
        }
        info!(
            "Image generated successfully ({} bytes, {})",
            image.data.len(),
            image.mime_type
        );

        let path = self.saver.save(&image)?;
        info!("Image saved to: {}", path.display());

        Ok(path)
    }
}

/// First 100 characters of the prompt, with a marker when truncated.
fn truncate_for_log(prompt: &str) -> String {
    match prompt.char_indices().nth(PROMPT_LOG_LIMIT) {
        Some((idx, _)) => format!("{}...", &prompt[..idx]),
        None => prompt.to_string(),
    }
}
