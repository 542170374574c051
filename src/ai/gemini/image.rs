use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, Part};
use crate::ai::{GeneratedImage, ImageGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ImageRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

pub struct GeminiImageClient {
    http: GeminiHttpClient,
}

impl GeminiImageClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(120),
                client,
            ),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl ImageGenerationService for GeminiImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage> {
        let request = ImageRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            },
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        let parts = response
            .candidates
            .first()
            .map(|c| c.content.parts.as_slice())
            .unwrap_or_default();

        // Walk parts in order: collect text for the caller to surface, stop
        // at the first inline image.
        let mut commentary = Vec::new();
        let mut inline = None;
        for part in parts {
            match part {
                Part::Text { text } => {
                    commentary.push(text.clone());
                }
                Part::InlineData { inline_data } => {
                    inline = Some(inline_data);
                    break;
                }
            }
        }

        let inline = inline
            .ok_or_else(|| Error::AiProvider("no image data found in API response".to_string()))?;

        tracing::debug!(
            "Gemini returned image with mime_type: {}",
            inline.mime_type
        );

        use base64::Engine as _;
        let data = base64::engine::general_purpose::STANDARD
            .decode(&inline.data)
            .map_err(|e| Error::AiProvider(format!("failed to decode base64 image data: {}", e)))?;

        Ok(GeneratedImage {
            data,
            mime_type: inline.mime_type.clone(),
            commentary,
        })
    }
}
