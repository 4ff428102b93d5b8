use chrono::{Duration, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Number of days a trip spans when the caller supplies no date range.
pub const DEFAULT_TRIP_DAYS: i64 = 7;

/// Interest buckets the destination catalog is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InterestTag {
    Cultural,
    Wildlife,
    Beach,
    Adventure,
    Nature,
    Train,
}

impl InterestTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestTag::Cultural => "cultural",
            InterestTag::Wildlife => "wildlife",
            InterestTag::Beach => "beach",
            InterestTag::Adventure => "adventure",
            InterestTag::Nature => "nature",
            InterestTag::Train => "train",
        }
    }
}

impl std::fmt::Display for InterestTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost preset driving the cost model.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    #[default]
    MidRange,
    Luxury,
    UltraLuxury,
}

impl BudgetTier {
    /// Human-readable label used for accommodation tier descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget",
            BudgetTier::MidRange => "Mid-Range",
            BudgetTier::Luxury => "Luxury",
            BudgetTier::UltraLuxury => "Ultra-Luxury",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::MidRange => "mid-range",
            BudgetTier::Luxury => "luxury",
            BudgetTier::UltraLuxury => "ultra-luxury",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trip intensity setting. Controls how many destinations are sampled per
/// interest and how many activities fill each day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Active,
}

impl Pace {
    /// How many destinations to sample from the head of each interest bucket.
    pub fn destination_breadth(&self) -> usize {
        match self {
            Pace::Relaxed => 1,
            Pace::Moderate => 2,
            Pace::Active => 3,
        }
    }

    /// How many catalog activities to schedule per day.
    pub fn activities_per_day(&self) -> usize {
        match self {
            Pace::Relaxed => 1,
            Pace::Moderate => 2,
            Pace::Active => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Moderate => "moderate",
            Pace::Active => "active",
        }
    }
}

impl std::fmt::Display for Pace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Party composition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct Travelers {
    pub adults: u32,
    pub children: u32,
}

impl Default for Travelers {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
        }
    }
}

impl Travelers {
    /// Adults plus half-weighted children, used for per-person cost scaling.
    pub fn effective_count(&self) -> f64 {
        self.adults as f64 + 0.5 * self.children as f64
    }
}

/// Raw caller-supplied planning request. Every field is optional; call
/// [`TripRequest::normalize`] to obtain fully-defaulted [`TripPreferences`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TripRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub travelers: Option<Travelers>,
    pub interests: Vec<InterestTag>,
    pub budget: Option<BudgetTier>,
    pub pace: Option<Pace>,
    pub special_requests: Option<String>,
}

impl TripRequest {
    /// Apply defaults and validate. Missing dates default to today through
    /// today + 7 days; missing travelers to one adult. The only rejection is
    /// an inverted date range after defaulting.
    pub fn normalize(&self) -> Result<TripPreferences> {
        let start = self.start_date.unwrap_or_else(|| Utc::now().date_naive());
        let end = self
            .end_date
            .unwrap_or_else(|| start + Duration::days(DEFAULT_TRIP_DAYS));

        if end < start {
            return Err(PlannerError::InvalidPreferences(format!(
                "trip end date {} is before start date {}",
                end, start
            )));
        }

        let mut travelers = self.travelers.unwrap_or_default();
        if travelers.adults == 0 {
            travelers.adults = 1;
        }

        Ok(TripPreferences {
            start_date: start,
            end_date: end,
            travelers,
            interests: self.interests.clone(),
            budget: self.budget.unwrap_or_default(),
            pace: self.pace.unwrap_or_default(),
            special_requests: self.special_requests.clone(),
        })
    }
}

/// Fully-defaulted planning preferences. Immutable once constructed and
/// consumed read-only by every downstream stage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripPreferences {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: Travelers,
    pub interests: Vec<InterestTag>,
    pub budget: BudgetTier,
    pub pace: Pace,
    pub special_requests: Option<String>,
}

impl TripPreferences {
    /// Trip length in days. A same-day trip counts as a single day.
    pub fn duration_days(&self) -> u32 {
        (self.end_date - self.start_date).num_days().max(1) as u32
    }

    /// Calendar date of the 1-based `day_index`.
    pub fn date_for_day(&self, day_index: u32) -> NaiveDate {
        self.start_date + Duration::days(day_index as i64 - 1)
    }
}
