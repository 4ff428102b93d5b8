//! Remote generation strategies. Each provider is one ranked attempt in the
//! orchestrator's fallback chain; all of them funnel their raw output
//! through the sanitizer before anything is returned.

mod gemini;
mod openai;
pub(crate) mod prompt;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GeneratedItinerary, TripPreferences};

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// One remote itinerary-generation strategy.
#[async_trait]
pub trait ItineraryProvider: Send + Sync {
    /// Stable provider name used for logging and key-store lookup.
    fn name(&self) -> &'static str;

    /// Attempt a full generation. Any error advances the orchestrator to the
    /// next strategy; it is never surfaced to the caller.
    async fn generate(&self, prefs: &TripPreferences) -> Result<GeneratedItinerary>;
}
