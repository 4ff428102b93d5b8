//! Destination catalog: the static, data-driven table of locations the
//! planner draws from, grouped by interest, plus the pace-aware selector.

mod data;
pub mod seasons;

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{BudgetTier, InterestTag, Pace};

pub use seasons::{events_for_year, travel_date_suggestions, DateSuggestion, IslandEvent};

/// Catalog entry for a named location. Static data, never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub name: String,
    pub short_description: String,
    /// Recommended minimum stay, fractional days allowed (e.g. 0.5).
    pub min_stay_days: f64,
    pub interests: Vec<InterestTag>,
}

impl Destination {
    pub fn matches(&self, tag: InterestTag) -> bool {
        self.interests.contains(&tag)
    }
}

/// Canned activity for a destination, before tier pricing is applied.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTemplate {
    pub time_of_day: String,
    pub name: String,
    pub description: String,
    pub duration_label: String,
    pub cost_usd: f64,
}

/// Explicit lodging pick for a `(destination, tier)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LodgingEntry {
    pub destination: String,
    pub tier: BudgetTier,
    pub name: String,
    pub star_rating: u8,
    pub nightly_price_usd: f64,
}

/// The swappable data table backing destination selection and the local
/// schedule builder. Deployments can deserialize their own catalog; the
/// built-in one covers Sri Lanka.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub destinations: Vec<Destination>,
    /// Keyed by destination name.
    pub activities: HashMap<String, Vec<ActivityTemplate>>,
    pub lodging: Vec<LodgingEntry>,
    /// Substituted when no interest matches any bucket.
    pub popular_defaults: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        data::sri_lanka()
    }
}

impl Catalog {
    /// Built-in Sri Lanka catalog.
    pub fn sri_lanka() -> Self {
        data::sri_lanka()
    }

    pub fn destination(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == name)
    }

    /// De-duplicated ordered destination list for the given interests.
    ///
    /// For each interest, in caller order, the head `pace.destination_breadth()`
    /// entries of that bucket are taken in catalog order. Deterministic:
    /// identical input always yields identical output. An empty result is
    /// replaced by the fixed popular-defaults list so the schedule builder
    /// always has at least one destination.
    pub fn select_destinations(&self, interests: &[InterestTag], pace: Pace) -> Vec<&Destination> {
        let breadth = pace.destination_breadth();
        let mut selected: Vec<&Destination> = Vec::new();

        for &tag in interests {
            let mut taken = 0;
            for dest in self.destinations.iter().filter(|d| d.matches(tag)) {
                if taken == breadth {
                    break;
                }
                taken += 1;
                if !selected.iter().any(|s| s.name == dest.name) {
                    selected.push(dest);
                }
            }
        }

        if selected.is_empty() {
            selected = self
                .popular_defaults
                .iter()
                .filter_map(|name| self.destination(name))
                .collect();
        }

        // a custom catalog may list defaults that resolve to nothing; the
        // schedule builder requires at least one destination
        if selected.is_empty() {
            selected.extend(self.destinations.first());
        }

        selected
    }

    /// Canned activities for a destination, if the table has an entry.
    pub fn activities_for(&self, destination: &str) -> Option<&[ActivityTemplate]> {
        self.activities.get(destination).map(|v| v.as_slice())
    }

    /// Explicit lodging pick for a `(destination, tier)` pair, if any.
    pub fn lodging_for(&self, destination: &str, tier: BudgetTier) -> Option<&LodgingEntry> {
        self.lodging
            .iter()
            .find(|entry| entry.destination == destination && entry.tier == tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_is_deterministic() {
        let catalog = Catalog::sri_lanka();
        let interests = [InterestTag::Beach, InterestTag::Cultural];

        let first: Vec<String> = catalog
            .select_destinations(&interests, Pace::Moderate)
            .iter()
            .map(|d| d.name.clone())
            .collect();
        let second: Vec<String> = catalog
            .select_destinations(&interests, Pace::Moderate)
            .iter()
            .map(|d| d.name.clone())
            .collect();

        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn breadth_follows_pace() {
        let catalog = Catalog::sri_lanka();
        let interests = [InterestTag::Wildlife];

        let relaxed = catalog.select_destinations(&interests, Pace::Relaxed);
        let active = catalog.select_destinations(&interests, Pace::Active);

        assert_eq!(relaxed.len(), 1);
        assert_eq!(active.len(), 3);
        // head-of-bucket sampling: the relaxed pick leads the active list
        assert_eq!(relaxed[0].name, active[0].name);
    }

    #[test]
    fn empty_interests_fall_back_to_popular_defaults() {
        let catalog = Catalog::sri_lanka();
        let selected = catalog.select_destinations(&[], Pace::Moderate);

        assert_eq!(selected.len(), 3);
        let cultural = selected
            .iter()
            .filter(|d| d.matches(InterestTag::Cultural))
            .count();
        let beach = selected
            .iter()
            .filter(|d| d.matches(InterestTag::Beach))
            .count();
        assert!(cultural >= 2);
        assert!(beach >= 1);
    }

    #[test]
    fn overlapping_interests_deduplicate() {
        let catalog = Catalog::sri_lanka();
        let selected =
            catalog.select_destinations(&[InterestTag::Nature, InterestTag::Train], Pace::Active);

        let mut names: Vec<&str> = selected.iter().map(|d| d.name.as_str()).collect();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn unresolvable_defaults_fall_back_to_first_destination() {
        let catalog = Catalog {
            destinations: vec![Destination {
                name: "Jaffna".into(),
                short_description: "Northern peninsula of temples and islands".into(),
                min_stay_days: 1.0,
                interests: vec![InterestTag::Cultural],
            }],
            activities: HashMap::new(),
            lodging: Vec::new(),
            popular_defaults: vec!["Atlantis".into()],
        };

        // no interest match and no resolvable default: still never empty
        let selected = catalog.select_destinations(&[InterestTag::Beach], Pace::Moderate);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Jaffna");
    }

    #[test]
    fn lodging_lookup_hits_and_misses() {
        let catalog = Catalog::sri_lanka();
        assert!(catalog.lodging_for("Kandy", BudgetTier::MidRange).is_some());
        assert!(catalog
            .lodging_for("Nowhere Special", BudgetTier::Budget)
            .is_none());
    }
}
