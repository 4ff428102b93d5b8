//! Provider orchestrator: the engine's public entry point.
//!
//! Strategies run strictly sequentially, never concurrently: concurrent
//! dispatch would bill two generations for a request that uses one, and the
//! primary-before-secondary ordering is a product decision. The chain ends
//! at the local schedule builder, which is total, so `generate` can only
//! fail on invalid preferences.

use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::{EnvKeyStore, KeyStore};
use crate::error::Result;
use crate::providers::{GeminiProvider, ItineraryProvider, OpenAiProvider};
use crate::schedule;
use crate::types::{GeneratedItinerary, TripRequest};

pub struct TripPlanner {
    catalog: Catalog,
    remotes: Vec<Box<dyn ItineraryProvider>>,
}

impl Default for TripPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TripPlanner {
    /// Planner with the built-in Sri Lanka catalog, environment-backed
    /// credentials and the standard Gemini-then-OpenAI chain.
    pub fn new() -> Self {
        Self::with_key_store(Arc::new(EnvKeyStore))
    }

    /// Planner with an injected credential store.
    pub fn with_key_store(keys: Arc<dyn KeyStore>) -> Self {
        let remotes: Vec<Box<dyn ItineraryProvider>> = vec![
            Box::new(GeminiProvider::new(Arc::clone(&keys))),
            Box::new(OpenAiProvider::new(keys)),
        ];
        Self {
            catalog: Catalog::sri_lanka(),
            remotes,
        }
    }

    /// Replace the remote strategy chain. Order is rank order; the local
    /// schedule builder always remains the terminal fallback.
    pub fn with_remote_providers(mut self, remotes: Vec<Box<dyn ItineraryProvider>>) -> Self {
        self.remotes = remotes;
        self
    }

    /// Swap the destination catalog backing selection and local generation.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Produce a complete itinerary for the request.
    ///
    /// The only error surfaced to the caller is preference validation (an
    /// inverted date range). Remote strategy failures are logged and
    /// recovered by advancing down the chain; if every remote attempt fails
    /// the deterministic local builder supplies the result. Dropping the
    /// returned future aborts any in-flight provider call, and no further
    /// strategy is attempted.
    pub async fn generate(&self, request: &TripRequest) -> Result<GeneratedItinerary> {
        let prefs = request.normalize()?;

        for provider in &self.remotes {
            info!(
                target: "planner::orchestrator",
                provider = provider.name(),
                "attempting remote generation"
            );
            match provider.generate(&prefs).await {
                Ok(itinerary) => {
                    info!(
                        target: "planner::orchestrator",
                        provider = provider.name(),
                        days = itinerary.days.len(),
                        "remote generation succeeded"
                    );
                    return Ok(itinerary);
                }
                Err(err) => {
                    warn!(
                        target: "planner::orchestrator",
                        provider = provider.name(),
                        error = %err,
                        "strategy failed, advancing"
                    );
                }
            }
        }

        info!(
            target: "planner::orchestrator",
            "all remote strategies exhausted, using local schedule builder"
        );
        Ok(schedule::build_itinerary(&prefs, &self.catalog))
    }
}
