//! Credential resolution for the remote provider strategies.
//!
//! Keys are resolved once per planning call through an injected [`KeyStore`],
//! so a rotated credential takes effect on the next request without a
//! process restart. Lookup is infallible: a missing key skips a strategy, it
//! never fails the request.

use std::collections::HashMap;

use async_trait::async_trait;

/// Key-store lookup name for the primary (Gemini) provider.
pub const GEMINI_PROVIDER: &str = "gemini";
/// Key-store lookup name for the secondary (OpenAI) provider.
pub const OPENAI_PROVIDER: &str = "openai";

/// Compiled-in last-resort Gemini credential.
///
/// INSECURE: this exists only so demo deployments work out of the box. Any
/// production deployment must inject a real key through a [`KeyStore`]; this
/// placeholder is quota-limited and may be revoked at any time.
pub const DEFAULT_GEMINI_API_KEY: &str = "AIzaSyDEMO-insecure-fallback-key-000000000";

/// Injected configuration store the providers resolve credentials from.
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// API key for a provider name, or `None` if the store has no entry or
    /// is unreachable. Must not fail.
    async fn api_key(&self, provider: &str) -> Option<String>;
}

/// Default store: reads `GEMINI_API_KEY` / `OPENAI_API_KEY` from the
/// environment on every lookup.
#[derive(Debug, Default)]
pub struct EnvKeyStore;

#[async_trait]
impl KeyStore for EnvKeyStore {
    async fn api_key(&self, provider: &str) -> Option<String> {
        let var = match provider {
            GEMINI_PROVIDER => "GEMINI_API_KEY",
            OPENAI_PROVIDER => "OPENAI_API_KEY",
            _ => return None,
        };
        std::env::var(var).ok().filter(|key| !key.is_empty())
    }
}

/// Fixed in-memory store, useful for tests and embedding callers.
#[derive(Debug, Default)]
pub struct StaticKeyStore {
    keys: HashMap<String, String>,
}

impl StaticKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, provider: impl Into<String>, key: impl Into<String>) -> Self {
        self.keys.insert(provider.into(), key.into());
        self
    }
}

#[async_trait]
impl KeyStore for StaticKeyStore {
    async fn api_key(&self, provider: &str) -> Option<String> {
        self.keys.get(provider).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_store_returns_configured_keys() {
        let store = StaticKeyStore::new().with_key(GEMINI_PROVIDER, "test-key");
        assert_eq!(
            store.api_key(GEMINI_PROVIDER).await.as_deref(),
            Some("test-key")
        );
        assert_eq!(store.api_key(OPENAI_PROVIDER).await, None);
    }

    #[tokio::test]
    async fn env_store_ignores_unknown_providers() {
        assert_eq!(EnvKeyStore.api_key("not-a-provider").await, None);
    }
}
