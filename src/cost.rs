//! Tiered cost model. Totals are always derived here; a total carried in
//! remote provider output is never trusted (generative arithmetic is
//! routinely inconsistent).

use crate::types::{BudgetTier, CostBreakdown, DayItinerary, TripPreferences};

/// Flat per-traveler daily rate for ground transport (private driver).
pub const DAILY_TRANSPORT_USD: f64 = 50.0;

/// Placeholder cost for the airport arrival/departure transfers the local
/// schedule builder pins to the first and last day. A product heuristic kept
/// as a constant.
pub const AIRPORT_TRANSFER_USD: f64 = 30.0;

/// Per-tier pricing knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRates {
    pub accommodation_per_night: f64,
    pub meals_per_day: f64,
    /// Scales notional per-activity cost to reflect the richer experiences
    /// implied by higher tiers.
    pub activity_multiplier: f64,
}

impl TierRates {
    pub fn for_tier(tier: BudgetTier) -> Self {
        match tier {
            BudgetTier::Budget => TierRates {
                accommodation_per_night: 35.0,
                meals_per_day: 20.0,
                activity_multiplier: 1.0,
            },
            BudgetTier::MidRange => TierRates {
                accommodation_per_night: 100.0,
                meals_per_day: 40.0,
                activity_multiplier: 1.25,
            },
            BudgetTier::Luxury => TierRates {
                accommodation_per_night: 275.0,
                meals_per_day: 80.0,
                activity_multiplier: 1.5,
            },
            BudgetTier::UltraLuxury => TierRates {
                accommodation_per_night: 500.0,
                meals_per_day: 120.0,
                activity_multiplier: 2.0,
            },
        }
    }

    /// Default star rating when a destination has no explicit lodging entry.
    pub fn default_star_rating(tier: BudgetTier) -> u8 {
        match tier {
            BudgetTier::Budget => 2,
            BudgetTier::MidRange => 3,
            BudgetTier::Luxury => 4,
            BudgetTier::UltraLuxury => 5,
        }
    }
}

fn to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Recompute the full cost breakdown from the produced days.
///
/// `accommodation` sums nightly prices across days; `activities` sums
/// activity costs scaled by the tier multiplier and effective traveler count;
/// `transport` and `meals` are flat daily rates scaled the same way. The
/// total is always the exact sum of the four components.
pub fn recompute_totals(days: &[DayItinerary], prefs: &TripPreferences) -> CostBreakdown {
    let rates = TierRates::for_tier(prefs.budget);
    let duration = prefs.duration_days() as f64;
    let effective = prefs.travelers.effective_count();

    let accommodation_usd = to_cents(
        days.iter()
            .map(|day| day.accommodation.nightly_price_usd)
            .sum(),
    );
    let raw_activity_cost: f64 = days
        .iter()
        .flat_map(|day| day.activities.iter())
        .map(|activity| activity.cost_usd)
        .sum();
    let activities_usd = to_cents(raw_activity_cost * rates.activity_multiplier * effective);
    let transport_usd = to_cents(duration * DAILY_TRANSPORT_USD * effective);
    let meals_usd = to_cents(duration * rates.meals_per_day * effective);

    let total_usd = accommodation_usd + activities_usd + transport_usd + meals_usd;
    let per_person_usd = if effective > 0.0 {
        Some((total_usd / effective).round())
    } else {
        None
    };

    CostBreakdown {
        accommodation_usd,
        activities_usd,
        transport_usd,
        meals_usd,
        total_usd,
        per_person_usd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AccommodationChoice, Activity, Meals, Pace, Travelers, TripRequest,
    };
    use chrono::NaiveDate;

    fn prefs(tier: BudgetTier, adults: u32, children: u32) -> TripPreferences {
        TripRequest {
            start_date: NaiveDate::from_ymd_opt(2026, 2, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 8),
            travelers: Some(Travelers { adults, children }),
            budget: Some(tier),
            pace: Some(Pace::Moderate),
            ..Default::default()
        }
        .normalize()
        .unwrap()
    }

    fn day(index: u32, nightly: f64, activity_cost: f64) -> DayItinerary {
        DayItinerary {
            day_index: index,
            calendar_date: NaiveDate::from_ymd_opt(2026, 2, index).unwrap(),
            location: "Kandy".into(),
            activities: vec![Activity {
                time_of_day: "09:00 AM".into(),
                name: "Temple visit".into(),
                description: "Morning at the temple".into(),
                duration_label: "2 hours".into(),
                cost_usd: activity_cost,
                tips: None,
            }],
            accommodation: AccommodationChoice {
                name: "Thilanka Hotel".into(),
                tier_label: "Mid-Range".into(),
                star_rating: 3,
                nightly_price_usd: nightly,
                amenities: None,
            },
            meals: Meals {
                breakfast: "At hotel".into(),
                lunch: "Rice and curry".into(),
                dinner: "Hotel restaurant".into(),
            },
            transport_note: "Private driver".into(),
            local_tips: vec![],
        }
    }

    #[test]
    fn total_is_exact_sum_of_components() {
        let prefs = prefs(BudgetTier::MidRange, 2, 1);
        let days: Vec<_> = (1..=7).map(|i| day(i, 100.0, 12.5)).collect();
        let cost = recompute_totals(&days, &prefs);

        assert_eq!(
            cost.total_usd,
            cost.accommodation_usd + cost.activities_usd + cost.transport_usd + cost.meals_usd
        );
        assert!(cost.total_usd > 0.0);
    }

    #[test]
    fn tiers_are_monotone() {
        let tiers = [
            BudgetTier::Budget,
            BudgetTier::MidRange,
            BudgetTier::Luxury,
            BudgetTier::UltraLuxury,
        ];
        let mut previous: Option<CostBreakdown> = None;
        for tier in tiers {
            let prefs = prefs(tier, 2, 0);
            let rates = TierRates::for_tier(tier);
            let days: Vec<_> = (1..=7)
                .map(|i| day(i, rates.accommodation_per_night, 10.0))
                .collect();
            let cost = recompute_totals(&days, &prefs);
            if let Some(prev) = previous {
                assert!(cost.accommodation_usd >= prev.accommodation_usd);
                assert!(cost.meals_usd >= prev.meals_usd);
                assert!(cost.activities_usd >= prev.activities_usd);
            }
            previous = Some(cost);
        }
    }

    #[test]
    fn children_are_half_weighted() {
        let adults_only = prefs(BudgetTier::Budget, 2, 0);
        let with_children = prefs(BudgetTier::Budget, 2, 2);
        let days: Vec<_> = (1..=7).map(|i| day(i, 35.0, 10.0)).collect();

        let base = recompute_totals(&days, &adults_only);
        let family = recompute_totals(&days, &with_children);

        // 2 adults + 2 children = 3.0 effective travelers vs 2.0
        assert_eq!(family.meals_usd, base.meals_usd * 1.5);
        assert_eq!(family.transport_usd, base.transport_usd * 1.5);
        // accommodation is per room-night, not per traveler
        assert_eq!(family.accommodation_usd, base.accommodation_usd);
    }

    #[test]
    fn per_person_rounds_total_over_effective() {
        let prefs = prefs(BudgetTier::Budget, 2, 0);
        let days = vec![day(1, 35.0, 0.0)];
        let cost = recompute_totals(&days, &prefs);
        assert_eq!(cost.per_person_usd, Some((cost.total_usd / 2.0).round()));
    }
}
