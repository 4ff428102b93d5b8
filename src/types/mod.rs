pub mod itinerary;
pub mod preferences;

pub use itinerary::{
    AccommodationChoice, Activity, CostBreakdown, DayItinerary, GeneratedItinerary, Meals,
};
pub use preferences::{
    BudgetTier, InterestTag, Pace, Travelers, TripPreferences, TripRequest, DEFAULT_TRIP_DAYS,
};
