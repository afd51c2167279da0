use std::time::Duration;

use anyhow::Context as _;
use axum::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::model::{ImagePart, ModelClient, ModelError};

/// REST client for the Gemini `generateContent` endpoint. Sends the prompt
/// (plus an optional inline image) and returns the first candidate's text.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("build gemini http client")?;
        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            client,
        })
    }

    async fn call_api(&self, request: GeminiRequest) -> Result<String, ModelError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model_name, "gemini request failed");
                ModelError::Transport(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            tracing::error!(%status, %message, "gemini returned error status");
            return Err(ModelError::Provider { status, message });
        }

        let body: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse gemini response");
            ModelError::Malformed(e)
        })?;

        body.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(ModelError::Empty)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<ImagePart>,
    ) -> Result<String, ModelError> {
        let mut parts = vec![Part::Text {
            text: prompt.to_string(),
        }];
        if let Some(img) = image {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: img.mime_type.to_string(),
                    data: general_purpose::STANDARD.encode(&img.data),
                },
            });
        }

        self.call_api(GeminiRequest {
            contents: vec![Content { parts }],
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_part_serializes_flat() {
        let req = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: "hello".into(),
                }],
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn inline_data_part_carries_mime_and_base64() {
        let req = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::InlineData {
                    inline_data: InlineData {
                        mime_type: "image/png".into(),
                        data: general_purpose::STANDARD.encode(b"abc"),
                    },
                }],
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        let part = &json["contents"][0]["parts"][0]["inline_data"];
        assert_eq!(part["mime_type"], "image/png");
        assert_eq!(part["data"], "YWJj");
    }

    #[test]
    fn response_text_extraction() {
        let raw = serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "generated" } ] } }
            ]
        });
        let parsed: GeminiResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "generated");
    }

    #[test]
    fn empty_candidates_deserialize() {
        let parsed: GeminiResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
