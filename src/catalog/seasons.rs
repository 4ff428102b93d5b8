//! Seasonality helpers: month suggestions per interest and the island's
//! public holiday / festival calendar.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::InterestTag;

/// A suggested travel month with a reason and a 1-5 rating.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DateSuggestion {
    pub month: String,
    pub reason: String,
    pub rating: u8,
}

/// Public holiday, festival or recurring event.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IslandEvent {
    /// ISO date within the requested year.
    pub date: String,
    pub name: String,
    pub kind: EventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Holiday,
    Festival,
}

fn suggestion(month: &str, reason: &str, rating: u8) -> DateSuggestion {
    DateSuggestion {
        month: month.to_string(),
        reason: reason.to_string(),
        rating,
    }
}

/// Best travel months for the given interests, capped at four. Falls back to
/// peak-season defaults when no interest contributes a suggestion.
pub fn travel_date_suggestions(interests: &[InterestTag]) -> Vec<DateSuggestion> {
    let mut suggestions = Vec::new();

    if interests.contains(&InterestTag::Beach) || interests.contains(&InterestTag::Wildlife) {
        suggestions.push(suggestion(
            "December",
            "Perfect beach weather on the west and south coasts, start of whale season",
            5,
        ));
        suggestions.push(suggestion(
            "January",
            "Peak season with reliably dry weather, ideal for Yala safaris",
            5,
        ));
        suggestions.push(suggestion(
            "February",
            "Excellent conditions across the south",
            5,
        ));
        suggestions.push(suggestion(
            "March",
            "Last month of the west-coast dry season",
            4,
        ));
    }

    if interests.contains(&InterestTag::Cultural) {
        suggestions.push(suggestion(
            "January",
            "Thai Pongal festival and pleasant weather in the Cultural Triangle",
            5,
        ));
        suggestions.push(suggestion(
            "April",
            "Sinhala and Tamil New Year celebrations",
            5,
        ));
        suggestions.push(suggestion(
            "July/August",
            "Kandy Esala Perahera, the island's grandest Buddhist pageant",
            5,
        ));
    }

    if interests.contains(&InterestTag::Nature) || interests.contains(&InterestTag::Train) {
        suggestions.push(suggestion(
            "January-March",
            "Clearest hill-country skies for tea trails and train rides",
            5,
        ));
        suggestions.push(suggestion(
            "July-September",
            "The Gathering of elephants at Minneriya tank",
            5,
        ));
    }

    if interests.contains(&InterestTag::Adventure) {
        suggestions.push(suggestion(
            "December-April",
            "Ideal conditions for the Adam's Peak pilgrimage climb",
            5,
        ));
        suggestions.push(suggestion(
            "May-September",
            "Best surf at Arugam Bay on the east coast",
            5,
        ));
    }

    if suggestions.is_empty() {
        suggestions.push(suggestion("January", "Peak season with the best overall weather", 5));
        suggestions.push(suggestion("February", "Great weather with thinner crowds", 5));
        suggestions.push(suggestion(
            "December",
            "Start of peak season with a festive atmosphere",
            4,
        ));
        suggestions.push(suggestion("March", "Good weather at shoulder-season prices", 4));
    }

    suggestions.truncate(4);
    suggestions
}

fn event(date: String, name: &str, kind: EventKind) -> IslandEvent {
    IslandEvent {
        date,
        name: name.to_string(),
        kind,
    }
}

/// Sri Lanka public holidays and festivals for a given year.
pub fn events_for_year(year: i32) -> Vec<IslandEvent> {
    use EventKind::{Festival, Holiday};
    vec![
        event(format!("{year}-01-14"), "Thai Pongal", Festival),
        event(format!("{year}-01-15"), "Duruthu Full Moon Poya", Holiday),
        event(format!("{year}-02-04"), "Independence Day", Holiday),
        event(
            format!("{year}-04-13"),
            "Sinhala & Tamil New Year Eve",
            Festival,
        ),
        event(format!("{year}-04-14"), "Sinhala & Tamil New Year", Holiday),
        event(format!("{year}-05-01"), "May Day", Holiday),
        event(format!("{year}-05-23"), "Vesak Full Moon Poya", Holiday),
        event(format!("{year}-06-21"), "Poson Full Moon Poya", Holiday),
        event(format!("{year}-07-21"), "Esala Full Moon Poya", Holiday),
        event(format!("{year}-08-19"), "Kandy Esala Perahera", Festival),
        event(format!("{year}-11-14"), "Deepavali", Festival),
        event(format!("{year}-12-25"), "Christmas Day", Holiday),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_capped_at_four() {
        let all = [
            InterestTag::Beach,
            InterestTag::Cultural,
            InterestTag::Nature,
            InterestTag::Adventure,
        ];
        assert_eq!(travel_date_suggestions(&all).len(), 4);
    }

    #[test]
    fn no_interests_gets_defaults() {
        let suggestions = travel_date_suggestions(&[]);
        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[0].month, "January");
    }

    #[test]
    fn events_carry_the_requested_year() {
        let events = events_for_year(2026);
        assert_eq!(events.len(), 12);
        assert!(events.iter().all(|e| e.date.starts_with("2026-")));
    }
}
