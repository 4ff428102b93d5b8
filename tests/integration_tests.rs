use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde_json::{json, Value};
use trip_planner_rs::{
    config::{StaticKeyStore, GEMINI_PROVIDER, OPENAI_PROVIDER},
    GeminiProvider, InterestTag, ItineraryProvider, KeyStore, OpenAiProvider, Pace, TripPlanner,
    TripRequest, Travelers,
};

const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";
const OPENAI_PATH: &str = "/chat/completions";

fn keys() -> Arc<dyn KeyStore> {
    Arc::new(
        StaticKeyStore::new()
            .with_key(GEMINI_PROVIDER, "test-gemini-key")
            .with_key(OPENAI_PROVIDER, "test-openai-key"),
    )
}

fn seven_day_request() -> TripRequest {
    TripRequest {
        start_date: NaiveDate::from_ymd_opt(2026, 2, 1),
        end_date: NaiveDate::from_ymd_opt(2026, 2, 8),
        travelers: Some(Travelers {
            adults: 2,
            children: 0,
        }),
        interests: vec![InterestTag::Beach],
        pace: Some(Pace::Moderate),
        ..Default::default()
    }
}

fn remote_itinerary_json(days: u32) -> Value {
    let day_entries: Vec<Value> = (1..=days)
        .map(|i| {
            json!({
                "dayIndex": i,
                "calendarDate": "2026-02-01",
                "location": "Mirissa",
                "activities": [{
                    "timeOfDay": "06:30 AM",
                    "name": "Whale watching cruise",
                    "description": "Morning boat to the continental shelf",
                    "durationLabel": "4 hours",
                    "costUsd": 50.0
                }],
                "accommodation": {
                    "name": "Mandara Resort",
                    "tierLabel": "Mid-Range",
                    "starRating": 4,
                    "nightlyPriceUsd": 110.0
                },
                "meals": {
                    "breakfast": "At hotel",
                    "lunch": "Beachside cafe",
                    "dinner": "Seafood grill"
                },
                "transportNote": "Private driver",
                "localTips": ["Book the whale boat a day ahead"]
            })
        })
        .collect();

    json!({
        "title": "Southern Coast Escape",
        "summary": "A week of beaches and whales",
        "durationDays": days,
        "highlights": ["Whale watching at Mirissa"],
        "days": day_entries,
        "totalCost": {
            "accommodationUsd": 1.0,
            "activitiesUsd": 1.0,
            "transportUsd": 1.0,
            "mealsUsd": 1.0,
            "totalUsd": 123456.0
        }
    })
}

fn planner_against(
    gemini_url: &str,
    openai_url: &str,
    keys: Arc<dyn KeyStore>,
) -> TripPlanner {
    let remotes: Vec<Box<dyn ItineraryProvider>> = vec![
        Box::new(
            GeminiProvider::new(Arc::clone(&keys))
                .with_base_url(gemini_url)
                .with_timeout(Duration::from_secs(5)),
        ),
        Box::new(
            OpenAiProvider::new(keys)
                .with_base_url(openai_url)
                .with_timeout(Duration::from_secs(5)),
        ),
    ];
    TripPlanner::new().with_remote_providers(remotes)
}

#[tokio::test]
async fn both_providers_down_still_yields_valid_itinerary() {
    let mut gemini = mockito::Server::new_async().await;
    let mut openai = mockito::Server::new_async().await;

    let gemini_mock = gemini
        .mock("POST", GEMINI_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("upstream unavailable")
        .create_async()
        .await;
    let openai_mock = openai
        .mock("POST", OPENAI_PATH)
        .with_status(429)
        .with_body(json!({"error": {"message": "rate limited"}}).to_string())
        .create_async()
        .await;

    let planner = planner_against(&gemini.url(), &openai.url(), keys());
    let itinerary = planner.generate(&seven_day_request()).await.unwrap();

    gemini_mock.assert_async().await;
    openai_mock.assert_async().await;

    assert_eq!(itinerary.duration_days, 7);
    assert_eq!(itinerary.days.len(), 7);
    assert!(itinerary.days[0].activities[0].name.contains("Airport arrival"));
    assert!(itinerary
        .days
        .last()
        .unwrap()
        .activities
        .last()
        .unwrap()
        .name
        .contains("airport"));
    assert!(itinerary.total_cost.total_usd > 0.0);
    let cost = &itinerary.total_cost;
    assert_eq!(
        cost.total_usd,
        cost.accommodation_usd + cost.activities_usd + cost.transport_usd + cost.meals_usd
    );
}

#[tokio::test]
async fn fenced_primary_response_is_accepted_and_totals_corrected() {
    let mut gemini = mockito::Server::new_async().await;
    let mut openai = mockito::Server::new_async().await;

    let fenced = format!("```json\n{}\n```", remote_itinerary_json(7));
    let envelope = json!({
        "candidates": [{ "content": { "parts": [{ "text": fenced }] } }]
    });
    let gemini_mock = gemini
        .mock("POST", GEMINI_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope.to_string())
        .create_async()
        .await;
    // the secondary must never be billed when the primary succeeds
    let openai_mock = openai
        .mock("POST", OPENAI_PATH)
        .expect(0)
        .create_async()
        .await;

    let planner = planner_against(&gemini.url(), &openai.url(), keys());
    let itinerary = planner.generate(&seven_day_request()).await.unwrap();

    gemini_mock.assert_async().await;
    openai_mock.assert_async().await;

    assert_eq!(itinerary.title, "Southern Coast Escape");
    assert_eq!(itinerary.days.len(), 7);
    // the remote total (123456) is discarded and recomputed
    let cost = &itinerary.total_cost;
    assert_ne!(cost.total_usd, 123456.0);
    assert_eq!(
        cost.total_usd,
        cost.accommodation_usd + cost.activities_usd + cost.transport_usd + cost.meals_usd
    );
    // dates are rewritten from the trip start
    assert_eq!(
        itinerary.days[2].calendar_date,
        NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()
    );
}

#[tokio::test]
async fn prose_primary_falls_through_to_secondary() {
    let mut gemini = mockito::Server::new_async().await;
    let mut openai = mockito::Server::new_async().await;

    let gemini_envelope = json!({
        "candidates": [{ "content": { "parts": [{
            "text": "I'd be happy to plan your trip! Let me describe it in prose..."
        }] } }]
    });
    gemini
        .mock("POST", GEMINI_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(gemini_envelope.to_string())
        .create_async()
        .await;

    let openai_envelope = json!({
        "choices": [{ "message": { "content": remote_itinerary_json(7).to_string() } }]
    });
    let openai_mock = openai
        .mock("POST", OPENAI_PATH)
        .match_header("authorization", "Bearer test-openai-key")
        .with_status(200)
        .with_body(openai_envelope.to_string())
        .create_async()
        .await;

    let planner = planner_against(&gemini.url(), &openai.url(), keys());
    let itinerary = planner.generate(&seven_day_request()).await.unwrap();

    openai_mock.assert_async().await;
    assert_eq!(itinerary.title, "Southern Coast Escape");
}

#[tokio::test]
async fn wrong_day_count_from_remote_disqualifies_the_strategy() {
    let mut gemini = mockito::Server::new_async().await;
    let mut openai = mockito::Server::new_async().await;

    // 5 days for a 7-day trip: structurally incomplete, discarded wholesale
    let envelope = json!({
        "candidates": [{ "content": { "parts": [{
            "text": remote_itinerary_json(5).to_string()
        }] } }]
    });
    gemini
        .mock("POST", GEMINI_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(envelope.to_string())
        .create_async()
        .await;
    openai
        .mock("POST", OPENAI_PATH)
        .with_status(503)
        .create_async()
        .await;

    let planner = planner_against(&gemini.url(), &openai.url(), keys());
    let itinerary = planner.generate(&seven_day_request()).await.unwrap();

    // local fallback produced the full week
    assert_eq!(itinerary.days.len(), 7);
}

#[tokio::test]
async fn missing_secondary_key_skips_the_strategy() {
    let mut gemini = mockito::Server::new_async().await;

    gemini
        .mock("POST", GEMINI_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    // no OpenAI key configured; its strategy is skipped without error
    let keys: Arc<dyn KeyStore> =
        Arc::new(StaticKeyStore::new().with_key(GEMINI_PROVIDER, "test-gemini-key"));
    let remotes: Vec<Box<dyn ItineraryProvider>> = vec![
        Box::new(
            GeminiProvider::new(Arc::clone(&keys))
                .with_base_url(gemini.url())
                .with_timeout(Duration::from_secs(5)),
        ),
        Box::new(OpenAiProvider::new(keys)),
    ];
    let planner = TripPlanner::new().with_remote_providers(remotes);

    let itinerary = planner.generate(&seven_day_request()).await.unwrap();
    assert_eq!(itinerary.days.len(), 7);
}

#[tokio::test]
async fn zero_interest_request_gets_popular_defaults() {
    let planner = TripPlanner::new().with_remote_providers(Vec::new());
    let request = TripRequest {
        start_date: NaiveDate::from_ymd_opt(2026, 2, 1),
        end_date: NaiveDate::from_ymd_opt(2026, 2, 7),
        ..Default::default()
    };

    let itinerary = planner.generate(&request).await.unwrap();
    let selected = planner
        .catalog()
        .select_destinations(&[], Pace::Moderate);
    assert_eq!(selected.len(), 3);
    assert!(itinerary
        .days
        .iter()
        .all(|day| selected.iter().any(|d| d.name == day.location)));
}
