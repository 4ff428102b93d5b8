//! Secondary remote strategy: OpenAI chat completions.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::{KeyStore, OPENAI_PROVIDER};
use crate::error::{PlannerError, Result};
use crate::sanitize;
use crate::types::{GeneratedItinerary, TripPreferences};

use super::{prompt, ItineraryProvider};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub struct OpenAiProvider {
    keys: Arc<dyn KeyStore>,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAiProvider {
    pub fn new(keys: Arc<dyn KeyStore>) -> Self {
        Self {
            keys,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn request_url(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.ends_with("/chat/completions") {
            trimmed.to_string()
        } else {
            format!("{trimmed}/chat/completions")
        }
    }
}

#[async_trait]
impl ItineraryProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        OPENAI_PROVIDER
    }

    async fn generate(&self, prefs: &TripPreferences) -> Result<GeneratedItinerary> {
        // no compiled-in fallback here: an absent key skips the strategy
        let api_key = self
            .keys
            .api_key(OPENAI_PROVIDER)
            .await
            .ok_or(PlannerError::MissingApiKey(OPENAI_PROVIDER))?;

        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are an expert Sri Lanka travel planner. Always respond with valid JSON only."
                },
                { "role": "user", "content": prompt::build_prompt(prefs) }
            ],
            "temperature": 0.7,
            "max_tokens": 4096
        });

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| PlannerError::Unknown(format!("failed to build HTTP client: {err}")))?;

        let response = client
            .post(self.request_url())
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(|m| m.as_str())
                        .map(|s| s.to_string())
                })
                .unwrap_or(response_text);
            return Err(PlannerError::ProviderStatus {
                provider: OPENAI_PROVIDER,
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Value = serde_json::from_str(&response_text).map_err(|err| {
            PlannerError::MalformedResponse(format!("OpenAI envelope is not JSON: {err}"))
        })?;
        let text = envelope
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                PlannerError::MalformedResponse("no content in OpenAI response".to_string())
            })?;

        debug!(target: "planner::openai", bytes = text.len(), "received generation");
        sanitize::parse_itinerary(text, prefs)
    }
}
