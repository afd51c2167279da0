pub mod gemini;

use axum::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Inline image attached to a prompt, already validated as a known format.
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub mime_type: &'static str,
    pub data: Bytes,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("model provider returned {status}: {message}")]
    Provider {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("could not parse model response: {0}")]
    Malformed(#[source] reqwest::Error),
    #[error("model returned no candidates")]
    Empty,
}

/// The single choke point to the generative model. One call per user action,
/// no retries; callers surface the error inline and keep the session alive.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str, image: Option<ImagePart>)
        -> Result<String, ModelError>;
}
