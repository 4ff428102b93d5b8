use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One timed activity within a day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Display time slot (e.g. "09:00 AM"). Not guaranteed sortable across days.
    pub time_of_day: String,
    pub name: String,
    pub description: String,
    /// Display duration (e.g. "2 hours").
    pub duration_label: String,
    /// Notional per-person cost before the tier multiplier is applied.
    #[schemars(range(min = 0.0))]
    pub cost_usd: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}

/// Lodging pick for one day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationChoice {
    pub name: String,
    /// Derived from the budget tier (e.g. "Mid-Range").
    pub tier_label: String,
    #[schemars(range(min = 1, max = 5))]
    pub star_rating: u8,
    #[schemars(range(min = 0.0))]
    pub nightly_price_usd: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

/// Meal descriptors for one day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

/// One produced day of the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayItinerary {
    /// 1-based, contiguous across the trip.
    pub day_index: u32,
    pub calendar_date: NaiveDate,
    /// Destination name for the day.
    pub location: String,
    pub activities: Vec<Activity>,
    pub accommodation: AccommodationChoice,
    pub meals: Meals,
    pub transport_note: String,
    #[serde(default)]
    pub local_tips: Vec<String>,
}

/// Aggregated trip cost. `total_usd` is always the exact sum of the four
/// components; remote-provided totals are discarded and recomputed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CostBreakdown {
    pub accommodation_usd: f64,
    pub activities_usd: f64,
    pub transport_usd: f64,
    pub meals_usd: f64,
    pub total_usd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_person_usd: Option<f64>,
}

/// The engine's sole output: a complete day-by-day plan with costs.
/// Constructed once per planning request; the caller owns persistence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItinerary {
    pub title: String,
    pub summary: String,
    pub duration_days: u32,
    pub highlights: Vec<String>,
    pub days: Vec<DayItinerary>,
    /// Optional on the wire so untrusted provider output can omit it; always
    /// recomputed locally before the itinerary is returned.
    #[serde(default)]
    pub total_cost: CostBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing_tips: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time_to_visit: Option<String>,
}
