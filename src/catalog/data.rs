//! Built-in Sri Lanka catalog data. Edit here (or load a custom [`Catalog`])
//! to add destinations; no planner code change is required.

use std::collections::HashMap;

use super::{ActivityTemplate, Catalog, Destination, LodgingEntry};
use crate::types::{BudgetTier, InterestTag};

use InterestTag::{Adventure, Beach, Cultural, Nature, Train, Wildlife};

fn dest(name: &str, description: &str, min_stay_days: f64, interests: &[InterestTag]) -> Destination {
    Destination {
        name: name.to_string(),
        short_description: description.to_string(),
        min_stay_days,
        interests: interests.to_vec(),
    }
}

fn activity(time: &str, name: &str, description: &str, duration: &str, cost: f64) -> ActivityTemplate {
    ActivityTemplate {
        time_of_day: time.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        duration_label: duration.to_string(),
        cost_usd: cost,
    }
}

fn lodging(destination: &str, tier: BudgetTier, name: &str, stars: u8, price: f64) -> LodgingEntry {
    LodgingEntry {
        destination: destination.to_string(),
        tier,
        name: name.to_string(),
        star_rating: stars,
        nightly_price_usd: price,
    }
}

pub(super) fn sri_lanka() -> Catalog {
    let destinations = vec![
        dest(
            "Sigiriya",
            "Ancient rock fortress rising from the Cultural Triangle plains",
            1.0,
            &[Cultural],
        ),
        dest(
            "Kandy",
            "Hill-country capital and home of the Temple of the Sacred Tooth",
            1.5,
            &[Cultural, Train],
        ),
        dest(
            "Anuradhapura",
            "Sprawling sacred city of stupas and ancient monasteries",
            1.0,
            &[Cultural],
        ),
        dest(
            "Dambulla",
            "Golden cave temple complex painted over two millennia",
            0.5,
            &[Cultural],
        ),
        dest(
            "Galle",
            "Dutch-era fort town on the southern coast",
            1.0,
            &[Cultural, Beach],
        ),
        dest(
            "Yala",
            "Premier national park with the world's densest leopard population",
            1.5,
            &[Wildlife],
        ),
        dest(
            "Udawalawe",
            "Open grassland park famous for large elephant herds",
            1.0,
            &[Wildlife],
        ),
        dest(
            "Minneriya",
            "Seasonal gathering of hundreds of wild elephants at the tank",
            0.5,
            &[Wildlife, Nature],
        ),
        dest(
            "Mirissa",
            "Crescent beach known for blue whale watching",
            2.0,
            &[Beach, Wildlife],
        ),
        dest(
            "Unawatuna",
            "Sheltered swimming bay ringed by palm groves",
            1.5,
            &[Beach],
        ),
        dest(
            "Bentota",
            "West-coast resort strip with calm lagoon water sports",
            1.5,
            &[Beach],
        ),
        dest(
            "Arugam Bay",
            "East-coast surf town with world-class point breaks",
            2.0,
            &[Beach, Adventure],
        ),
        dest(
            "Kitulgala",
            "Rainforest gorge for white-water rafting on the Kelani River",
            1.0,
            &[Adventure, Nature],
        ),
        dest(
            "Adam's Peak",
            "Pilgrimage summit climbed by lantern light before dawn",
            1.0,
            &[Adventure, Cultural],
        ),
        dest(
            "Knuckles Range",
            "Mist-wrapped massif of cloud forest trekking trails",
            1.5,
            &[Adventure, Nature],
        ),
        dest(
            "Ella",
            "Laid-back mountain village of tea trails and the Nine Arch Bridge",
            2.0,
            &[Nature, Train, Adventure],
        ),
        dest(
            "Nuwara Eliya",
            "Colonial 'Little England' amid emerald tea estates",
            1.0,
            &[Nature, Train],
        ),
        dest(
            "Horton Plains",
            "High plateau walk to the sheer drop of World's End",
            0.5,
            &[Nature],
        ),
        dest(
            "Sinharaja",
            "UNESCO rainforest reserve thick with endemic birdlife",
            1.0,
            &[Nature, Wildlife],
        ),
    ];

    let mut activities: HashMap<String, Vec<ActivityTemplate>> = HashMap::new();
    activities.insert(
        "Sigiriya".into(),
        vec![
            activity(
                "06:30 AM",
                "Lion Rock sunrise climb",
                "Beat the heat and the crowds up the 1,200 steps to the frescoed summit",
                "3 hours",
                30.0,
            ),
            activity(
                "11:00 AM",
                "Royal water gardens walk",
                "Stroll the symmetrical pleasure gardens at the base of the fortress",
                "1 hour",
                0.0,
            ),
            activity(
                "03:00 PM",
                "Pidurangala Rock hike",
                "Short scramble to the classic side-on view of Sigiriya",
                "2 hours",
                5.0,
            ),
        ],
    );
    activities.insert(
        "Kandy".into(),
        vec![
            activity(
                "09:00 AM",
                "Temple of the Sacred Tooth Relic",
                "Morning puja at Sri Lanka's holiest Buddhist shrine",
                "2 hours",
                10.0,
            ),
            activity(
                "02:00 PM",
                "Royal Botanic Gardens, Peradeniya",
                "Orchid houses and the great avenue of royal palms",
                "2 hours",
                8.0,
            ),
            activity(
                "05:00 PM",
                "Kandy Lake loop and cultural show",
                "Lakeside walk followed by traditional drumming and dance",
                "2 hours",
                15.0,
            ),
        ],
    );
    activities.insert(
        "Galle".into(),
        vec![
            activity(
                "09:30 AM",
                "Galle Fort ramparts walk",
                "Circle the 17th-century Dutch walls from Flag Rock to the lighthouse",
                "2 hours",
                0.0,
            ),
            activity(
                "01:00 PM",
                "Old town boutiques and museums",
                "Gem shops, the Maritime Museum and colonial-era streets",
                "2 hours",
                6.0,
            ),
            activity(
                "05:30 PM",
                "Sunset at the lighthouse bastion",
                "Watch cricket on the green as the sun drops into the Indian Ocean",
                "1 hour",
                0.0,
            ),
        ],
    );
    activities.insert(
        "Yala".into(),
        vec![
            activity(
                "05:30 AM",
                "Morning leopard safari",
                "Open-jeep game drive through Block 1 at first light",
                "4 hours",
                60.0,
            ),
            activity(
                "03:00 PM",
                "Afternoon game drive",
                "Second drive timed for elephants and sloth bears at the waterholes",
                "3 hours",
                55.0,
            ),
            activity(
                "07:00 PM",
                "Bush dinner under the stars",
                "Camp-style Sri Lankan barbecue at the park edge",
                "2 hours",
                25.0,
            ),
        ],
    );
    activities.insert(
        "Udawalawe".into(),
        vec![
            activity(
                "06:00 AM",
                "Elephant herd safari",
                "Track breeding herds across the open reservoir grasslands",
                "3 hours",
                45.0,
            ),
            activity(
                "11:00 AM",
                "Elephant Transit Home feeding",
                "Watch orphaned calves bottle-fed before release to the wild",
                "1 hour",
                5.0,
            ),
        ],
    );
    activities.insert(
        "Mirissa".into(),
        vec![
            activity(
                "06:30 AM",
                "Blue whale watching cruise",
                "Morning boat out to the continental shelf for blues and spinners",
                "4 hours",
                50.0,
            ),
            activity(
                "02:00 PM",
                "Beach afternoon at Parrot Rock",
                "Swim, wade out to the rock viewpoint and laze under the palms",
                "3 hours",
                0.0,
            ),
            activity(
                "06:00 PM",
                "Seafood dinner on the sand",
                "Pick your catch at a toes-in-the-sand beach restaurant",
                "2 hours",
                20.0,
            ),
        ],
    );
    activities.insert(
        "Ella".into(),
        vec![
            activity(
                "07:00 AM",
                "Little Adam's Peak hike",
                "Gentle ridge walk with views down Ella Gap",
                "2 hours",
                0.0,
            ),
            activity(
                "10:30 AM",
                "Nine Arch Bridge viewpoint",
                "Watch the blue train cross the colonial-era viaduct",
                "1.5 hours",
                0.0,
            ),
            activity(
                "02:00 PM",
                "Tea factory tour and tasting",
                "See leaf become cup at a working hill-country factory",
                "2 hours",
                12.0,
            ),
        ],
    );
    activities.insert(
        "Nuwara Eliya".into(),
        vec![
            activity(
                "09:00 AM",
                "Pedro Tea Estate tour",
                "Walk the plucking fields and the 19th-century factory floor",
                "2 hours",
                10.0,
            ),
            activity(
                "01:00 PM",
                "Gregory Lake and town stroll",
                "Boat hire and mock-Tudor architecture in Little England",
                "2 hours",
                8.0,
            ),
        ],
    );
    activities.insert(
        "Kitulgala".into(),
        vec![
            activity(
                "09:00 AM",
                "White-water rafting, Kelani River",
                "Grade 2-3 rapids through the rainforest gorge",
                "3 hours",
                35.0,
            ),
            activity(
                "02:00 PM",
                "Jungle canopy zipline",
                "Confidence-testing line across the river valley",
                "1.5 hours",
                25.0,
            ),
        ],
    );
    activities.insert(
        "Arugam Bay".into(),
        vec![
            activity(
                "06:00 AM",
                "Surf session at Main Point",
                "Long right-hander that made the bay famous",
                "3 hours",
                15.0,
            ),
            activity(
                "04:00 PM",
                "Lagoon safari by canoe",
                "Paddle past crocodiles and wading birds at Pottuvil",
                "2 hours",
                18.0,
            ),
        ],
    );

    let lodging_table = vec![
        lodging("Kandy", BudgetTier::Budget, "Kandy City Rest", 2, 28.0),
        lodging("Kandy", BudgetTier::MidRange, "Thilanka Hotel", 3, 85.0),
        lodging("Kandy", BudgetTier::Luxury, "The Kandy House", 5, 240.0),
        lodging(
            "Kandy",
            BudgetTier::UltraLuxury,
            "Kings Pavilion Kandy",
            5,
            450.0,
        ),
        lodging("Sigiriya", BudgetTier::Budget, "Sigiri Rock Side Home Stay", 2, 25.0),
        lodging("Sigiriya", BudgetTier::MidRange, "Hotel Sigiriya", 3, 95.0),
        lodging("Sigiriya", BudgetTier::Luxury, "Jetwing Vil Uyana", 5, 320.0),
        lodging(
            "Sigiriya",
            BudgetTier::UltraLuxury,
            "Water Garden Sigiriya",
            5,
            520.0,
        ),
        lodging("Galle", BudgetTier::MidRange, "Fort Bazaar", 4, 140.0),
        lodging("Galle", BudgetTier::Luxury, "Amangalla", 5, 380.0),
        lodging("Mirissa", BudgetTier::Budget, "Hangover Hostel Mirissa", 2, 22.0),
        lodging("Mirissa", BudgetTier::MidRange, "Mandara Resort", 4, 110.0),
        lodging(
            "Mirissa",
            BudgetTier::UltraLuxury,
            "Cape Weligama",
            5,
            560.0,
        ),
        lodging("Ella", BudgetTier::MidRange, "Ella Flower Garden Resort", 3, 75.0),
        lodging("Ella", BudgetTier::Luxury, "98 Acres Resort & Spa", 5, 260.0),
        lodging("Yala", BudgetTier::Luxury, "Jetwing Yala", 5, 290.0),
        lodging(
            "Yala",
            BudgetTier::UltraLuxury,
            "Wild Coast Tented Lodge",
            5,
            620.0,
        ),
        lodging(
            "Nuwara Eliya",
            BudgetTier::Luxury,
            "The Grand Hotel",
            5,
            210.0,
        ),
    ];

    Catalog {
        destinations,
        activities,
        lodging: lodging_table,
        popular_defaults: vec!["Kandy".into(), "Sigiriya".into(), "Mirissa".into()],
    }
}
