use std::sync::Arc;

use crate::config::AppConfig;
use crate::model::{gemini::GeminiClient, ModelClient};
use crate::sessions::SessionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<SessionRegistry>,
    pub model: Arc<dyn ModelClient>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let model = Arc::new(GeminiClient::new(&config)?) as Arc<dyn ModelClient>;
        Ok(Self::from_parts(config, model))
    }

    pub fn from_parts(config: Arc<AppConfig>, model: Arc<dyn ModelClient>) -> Self {
        Self {
            config,
            sessions: Arc::new(SessionRegistry::default()),
            model,
        }
    }

    #[cfg(test)]
    pub fn fake_with(model: Arc<dyn ModelClient>) -> Self {
        let config = Arc::new(AppConfig {
            gemini_api_key: "test".into(),
            gemini_model: "test-model".into(),
            request_timeout_secs: 5,
        });
        Self::from_parts(config, model)
    }
}
