//! Deterministic local schedule builder: the terminal fallback strategy.
//! Total for any valid [`TripPreferences`]; it must never fail to populate a
//! required field.

use tracing::debug;

use crate::catalog::{Catalog, Destination};
use crate::cost::{self, TierRates, AIRPORT_TRANSFER_USD};
use crate::types::{
    AccommodationChoice, Activity, DayItinerary, GeneratedItinerary, Meals, TripPreferences,
};

/// How many days the itinerary lingers at each stop before moving on, unless
/// the pace is active. A product heuristic kept as a constant.
pub const STAY_DAYS_PER_STOP: u32 = 2;

/// Build a complete itinerary from the catalog alone.
pub fn build_itinerary(prefs: &TripPreferences, catalog: &Catalog) -> GeneratedItinerary {
    let duration = prefs.duration_days();
    // a catalog with no destinations at all still gets a generic stop
    let generic_stop;
    let mut destinations = catalog.select_destinations(&prefs.interests, prefs.pace);
    if destinations.is_empty() {
        generic_stop = generic_destination();
        destinations.push(&generic_stop);
    }
    debug!(
        target: "planner::schedule",
        duration,
        destinations = destinations.len(),
        "building local itinerary"
    );

    let days: Vec<DayItinerary> = (1..=duration)
        .map(|day_index| build_day(day_index, duration, prefs, catalog, &destinations))
        .collect();

    let total_cost = cost::recompute_totals(&days, prefs);
    let highlights = destinations
        .iter()
        .take(5)
        .map(|d| format!("{} - {}", d.name, d.short_description))
        .collect();

    GeneratedItinerary {
        title: format!("{}-Day Sri Lanka {} Journey", duration, prefs.budget.label()),
        summary: format!(
            "A {}-paced {}-day route through Sri Lanka covering {} stops, \
             from arrival at Bandaranaike International to your departure transfer.",
            prefs.pace,
            duration,
            destinations.len()
        ),
        duration_days: duration,
        highlights,
        days,
        total_cost,
        ai_insights: Some(vec![
            "Book accommodation ahead during the December-March peak season".to_string(),
            "Carry cash for smaller establishments outside Colombo".to_string(),
            "Respect local customs at religious sites".to_string(),
        ]),
        packing_tips: Some(vec![
            "Light cotton clothes".to_string(),
            "Comfortable walking shoes".to_string(),
            "Sunscreen and a hat".to_string(),
            "Modest clothing for temple visits".to_string(),
        ]),
        best_time_to_visit: Some(
            "December to March for the west coast and hill country, April to September for the east coast"
                .to_string(),
        ),
    }
}

/// Index into the destination list for a given day. The pointer advances
/// every day at active pace and every `STAY_DAYS_PER_STOP` days otherwise,
/// cycling when the trip outlasts the list.
fn destination_index(day_index: u32, prefs: &TripPreferences, count: usize) -> usize {
    let step = if prefs.pace == crate::types::Pace::Active {
        1
    } else {
        STAY_DAYS_PER_STOP
    };
    (((day_index - 1) / step) as usize) % count
}

fn build_day(
    day_index: u32,
    duration: u32,
    prefs: &TripPreferences,
    catalog: &Catalog,
    destinations: &[&Destination],
) -> DayItinerary {
    let destination = destinations[destination_index(day_index, prefs, destinations.len())];
    let mut activities = planned_activities(destination, prefs, catalog);

    if day_index == 1 {
        activities.insert(0, arrival_activity());
    }
    if day_index == duration {
        activities.push(departure_activity());
    }

    DayItinerary {
        day_index,
        calendar_date: prefs.date_for_day(day_index),
        location: destination.name.clone(),
        activities,
        accommodation: pick_accommodation(destination, prefs, catalog),
        meals: Meals {
            breakfast: "Included at your hotel".to_string(),
            lunch: format!("Rice and curry at a local spot in {}", destination.name),
            dinner: "Dinner at the hotel restaurant or a nearby recommendation".to_string(),
        },
        transport_note: "Private vehicle with driver".to_string(),
        local_tips: vec![
            "Carry small rupee notes for entrance fees and tips".to_string(),
            "Cover shoulders and knees when visiting temples".to_string(),
        ],
    }
}

fn planned_activities(
    destination: &Destination,
    prefs: &TripPreferences,
    catalog: &Catalog,
) -> Vec<Activity> {
    let per_day = prefs.pace.activities_per_day();
    match catalog.activities_for(&destination.name) {
        Some(templates) => templates
            .iter()
            .take(per_day)
            .map(|t| Activity {
                time_of_day: t.time_of_day.clone(),
                name: t.name.clone(),
                description: t.description.clone(),
                duration_label: t.duration_label.clone(),
                cost_usd: t.cost_usd,
                tips: None,
            })
            .collect(),
        // destinations absent from the table still get a usable day
        None => vec![
            Activity {
                time_of_day: "09:00 AM".to_string(),
                name: format!("Explore {}", destination.name),
                description: destination.short_description.clone(),
                duration_label: "3 hours".to_string(),
                cost_usd: 10.0,
                tips: None,
            },
            Activity {
                time_of_day: "02:00 PM".to_string(),
                name: format!("{} at leisure", destination.name),
                description: "Free afternoon to wander, shop or rest".to_string(),
                duration_label: "Half day".to_string(),
                cost_usd: 0.0,
                tips: None,
            },
        ],
    }
}

fn pick_accommodation(
    destination: &Destination,
    prefs: &TripPreferences,
    catalog: &Catalog,
) -> AccommodationChoice {
    let tier = prefs.budget;
    match catalog.lodging_for(&destination.name, tier) {
        Some(entry) => AccommodationChoice {
            name: entry.name.clone(),
            tier_label: tier.label().to_string(),
            star_rating: entry.star_rating,
            nightly_price_usd: entry.nightly_price_usd,
            amenities: Some(default_amenities()),
        },
        None => AccommodationChoice {
            name: format!("{} {} Hotel", destination.name, tier.label()),
            tier_label: tier.label().to_string(),
            star_rating: TierRates::default_star_rating(tier),
            nightly_price_usd: TierRates::for_tier(tier).accommodation_per_night,
            amenities: Some(default_amenities()),
        },
    }
}

fn generic_destination() -> Destination {
    Destination {
        name: "Colombo".to_string(),
        short_description: "Sri Lanka's bustling commercial capital and arrival city".to_string(),
        min_stay_days: 1.0,
        interests: Vec::new(),
    }
}

fn default_amenities() -> Vec<String> {
    vec![
        "WiFi".to_string(),
        "Air Conditioning".to_string(),
        "Breakfast Included".to_string(),
    ]
}

fn arrival_activity() -> Activity {
    Activity {
        time_of_day: "Arrival".to_string(),
        name: "Airport arrival and transfer".to_string(),
        description: "Meet your driver at Bandaranaike International Airport and transfer to your first stop"
            .to_string(),
        duration_label: "2-4 hours".to_string(),
        cost_usd: AIRPORT_TRANSFER_USD,
        tips: Some(vec![
            "Pick up a local SIM card in the arrivals hall".to_string()
        ]),
    }
}

fn departure_activity() -> Activity {
    Activity {
        time_of_day: "Departure".to_string(),
        name: "Transfer to the airport".to_string(),
        description: "Private transfer back to Bandaranaike International Airport for your flight home"
            .to_string(),
        duration_label: "2-4 hours".to_string(),
        cost_usd: AIRPORT_TRANSFER_USD,
        tips: None,
    }
}
