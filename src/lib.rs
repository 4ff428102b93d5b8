//! trip-planner-rs: a resilient Sri Lanka trip-itinerary planning engine
//!
//! Given a date range, party composition, interest tags, budget tier and
//! pacing preference, the planner produces a complete day-by-day itinerary
//! with timed activities, lodging, meals, transport notes and an aggregated
//! cost breakdown. Generation runs through a ranked chain of strategies
//! (Gemini, then OpenAI, then a deterministic local schedule builder), each
//! isolated so that provider outages, rate limits or malformed output never
//! reach the caller.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{TripPlanner, TripRequest, InterestTag};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = TripPlanner::new();
//!     let request = TripRequest {
//!         interests: vec![InterestTag::Beach, InterestTag::Wildlife],
//!         ..Default::default()
//!     };
//!
//!     let itinerary = planner.generate(&request).await?;
//!     println!("{}", serde_json::to_string_pretty(&itinerary)?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod cost;
pub mod error;
pub mod planner;
pub mod providers;
pub mod sanitize;
pub mod schedule;
pub mod types;

pub use catalog::{Catalog, DateSuggestion, Destination, IslandEvent};
pub use config::{EnvKeyStore, KeyStore, StaticKeyStore};
pub use cost::{recompute_totals, TierRates, AIRPORT_TRANSFER_USD, DAILY_TRANSPORT_USD};
pub use error::{PlannerError, Result};
pub use planner::TripPlanner;
pub use providers::{GeminiProvider, ItineraryProvider, OpenAiProvider};
pub use sanitize::{parse_itinerary, strip_code_fences};
pub use types::{
    AccommodationChoice, Activity, BudgetTier, CostBreakdown, DayItinerary, GeneratedItinerary,
    InterestTag, Meals, Pace, Travelers, TripPreferences, TripRequest,
};

#[cfg(feature = "cli")]
pub mod cli;
