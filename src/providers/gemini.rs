//! Primary remote strategy: Google Gemini `generateContent`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::{KeyStore, DEFAULT_GEMINI_API_KEY, GEMINI_PROVIDER};
use crate::error::{PlannerError, Result};
use crate::sanitize;
use crate::types::{GeneratedItinerary, TripPreferences};

use super::{prompt, ItineraryProvider};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub struct GeminiProvider {
    keys: Arc<dyn KeyStore>,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiProvider {
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
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl ItineraryProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        GEMINI_PROVIDER
    }

    async fn generate(&self, prefs: &TripPreferences) -> Result<GeneratedItinerary> {
        // resolved fresh on every call; the compiled-in default is a
        // documented-insecure last resort for demo deployments
        let api_key = self
            .keys
            .api_key(GEMINI_PROVIDER)
            .await
            .unwrap_or_else(|| DEFAULT_GEMINI_API_KEY.to_string());

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt::build_prompt(prefs) }] }],
            "generationConfig": {
                "temperature": 0.7,
                "topK": 40,
                "topP": 0.95,
                "maxOutputTokens": 8192
            }
        });

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| PlannerError::Unknown(format!("failed to build HTTP client: {err}")))?;

        let response = client
            .post(self.request_url())
            .query(&[("key", api_key.as_str())])
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
                provider: GEMINI_PROVIDER,
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Value = serde_json::from_str(&response_text).map_err(|err| {
            PlannerError::MalformedResponse(format!("Gemini envelope is not JSON: {err}"))
        })?;
        let text = envelope
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                PlannerError::MalformedResponse("no content in Gemini response".to_string())
            })?;

        debug!(target: "planner::gemini", bytes = text.len(), "received generation");
        sanitize::parse_itinerary(text, prefs)
    }
}
