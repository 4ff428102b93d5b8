//! Shared prompt construction for both remote provider strategies.

use crate::types::{Pace, TripPreferences};

/// Domain knowledge block embedded in every generation prompt.
pub(crate) const SRI_LANKA_CONTEXT: &str = "\
You are an expert Sri Lanka travel planner with deep knowledge of:

DESTINATIONS:
- Cultural Triangle: Sigiriya (Lion Rock), Polonnaruwa, Anuradhapura, Dambulla Cave Temple
- Hill Country: Kandy (Temple of the Tooth), Nuwara Eliya (Little England), Ella (Nine Arch Bridge, Little Adam's Peak), Haputale
- Beaches: Mirissa (whale watching), Unawatuna, Bentota, Arugam Bay (surfing), Trincomalee, Tangalle
- Wildlife: Yala (leopards), Udawalawe (elephants), Minneriya (elephant gathering), Wilpattu, Sinharaja Rainforest
- Adventure: Kitulgala (white water rafting), Adam's Peak pilgrimage, Knuckles Range trekking

BEST TIMES:
- West/South Coast & Hill Country: December to March
- East Coast: April to September
- Cultural Triangle: year-round, best January to April
- Whale watching at Mirissa: November to April
- Elephant gathering at Minneriya: July to October

TRANSPORT:
- Scenic train rides: Kandy-Ella (most scenic), Colombo-Galle (coastal)
- Private driver: most flexible, $50-80/day
- Tuk-tuks: great for short distances

ACCOMMODATION TIERS:
- Budget: $20-50/night (guesthouses, hostels)
- Mid-range: $50-150/night (boutique hotels)
- Luxury: $150-400/night (heritage hotels, resorts)
- Ultra-luxury: $400+/night (Aman, Cape Weligama, Wild Coast Tented Lodge)

LOCAL TIPS:
- Dress modestly at temples (cover shoulders and knees)
- Remove shoes before entering temples
- Coconut sambol, hoppers and kottu roti are must-try foods
- Tipping: 10% at restaurants";

/// Build the full generation prompt: domain context, the normalized trip
/// details and a strict JSON skeleton matching the itinerary wire schema.
pub(crate) fn build_prompt(prefs: &TripPreferences) -> String {
    let duration = prefs.duration_days();
    let travelers = if prefs.travelers.children > 0 {
        format!(
            "{} adults, {} children",
            prefs.travelers.adults, prefs.travelers.children
        )
    } else {
        format!("{} adults", prefs.travelers.adults)
    };
    let interests = if prefs.interests.is_empty() {
        "general sightseeing".to_string()
    } else {
        prefs
            .interests
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let special = prefs
        .special_requests
        .as_deref()
        .map(|req| format!("\n- Special requests: {req}"))
        .unwrap_or_default();
    let pace_guidance = match prefs.pace {
        Pace::Relaxed => "include rest time and fewer activities",
        Pace::Moderate => "balance activities with downtime",
        Pace::Active => "maximize activities and experiences",
    };

    format!(
        r#"{context}

Create a detailed {duration}-day Sri Lanka itinerary with these preferences:

TRIP DETAILS:
- Duration: {duration} days
- Start date: {start}
- Travelers: {travelers}
- Budget level: {budget}
- Pace: {pace}
- Interests: {interests}{special}

Generate a JSON response with this exact structure:
{{
  "title": "Catchy trip title",
  "summary": "2-3 sentence trip overview",
  "durationDays": {duration},
  "highlights": ["highlight1", "highlight2", "highlight3"],
  "bestTimeToVisit": "Best months for this itinerary",
  "packingTips": ["tip1", "tip2", "tip3"],
  "days": [
    {{
      "dayIndex": 1,
      "calendarDate": "{start}",
      "location": "City or area name",
      "activities": [
        {{
          "timeOfDay": "09:00 AM",
          "name": "Activity name",
          "description": "What you'll do",
          "durationLabel": "2 hours",
          "costUsd": 30,
          "tips": ["tip1"]
        }}
      ],
      "accommodation": {{
        "name": "Hotel name",
        "tierLabel": "{tier_label}",
        "starRating": 4,
        "nightlyPriceUsd": 80,
        "amenities": ["Pool", "WiFi", "Breakfast"]
      }},
      "meals": {{
        "breakfast": "Included at hotel",
        "lunch": "Local restaurant recommendation",
        "dinner": "Restaurant recommendation"
      }},
      "transportNote": "How to get around",
      "localTips": ["Local advice for this day"]
    }}
  ],
  "aiInsights": ["insight1", "insight2"]
}}

IMPORTANT:
- The "days" array must contain exactly {duration} entries with contiguous dayIndex values starting at 1
- Every day must have at least one activity
- Use realistic Sri Lankan hotel and restaurant names
- Calendar dates are ISO formatted (YYYY-MM-DD) starting at {start}
- Make the route flow logically and minimize backtracking
- Include the Kandy-Ella train if the hill country is included
- For a {pace} pace, {pace_guidance}

Return ONLY valid JSON, no additional text."#,
        context = SRI_LANKA_CONTEXT,
        duration = duration,
        start = prefs.start_date,
        travelers = travelers,
        budget = prefs.budget,
        pace = prefs.pace,
        interests = interests,
        special = special,
        tier_label = prefs.budget.label(),
        pace_guidance = pace_guidance,
    )
}
