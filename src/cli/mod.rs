use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Arg, Command};
use tracing::info;

use crate::config::{EnvKeyStore, KeyStore, GEMINI_PROVIDER, OPENAI_PROVIDER};
use crate::providers::{GeminiProvider, ItineraryProvider, OpenAiProvider};
use crate::types::{BudgetTier, InterestTag, Pace, Travelers, TripRequest};
use crate::TripPlanner;

/// CLI entry point for the trip-planner tool
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-planner")
        .version("0.1.0")
        .about("Generate a day-by-day Sri Lanka itinerary with AI-provider fallback")
        .arg(
            Arg::new("start")
                .long("start")
                .value_name("DATE")
                .help("Trip start date (YYYY-MM-DD, default today)"),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .value_name("DATE")
                .help("Trip end date (YYYY-MM-DD, default start + 7 days)"),
        )
        .arg(
            Arg::new("adults")
                .long("adults")
                .value_name("COUNT")
                .default_value("1"),
        )
        .arg(
            Arg::new("children")
                .long("children")
                .value_name("COUNT")
                .default_value("0"),
        )
        .arg(
            Arg::new("interests")
                .short('i')
                .long("interests")
                .value_name("LIST")
                .help("Comma-separated: cultural,wildlife,beach,adventure,nature,train"),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("TIER")
                .help("budget | mid-range | luxury | ultra-luxury")
                .default_value("mid-range"),
        )
        .arg(
            Arg::new("pace")
                .short('p')
                .long("pace")
                .value_name("PACE")
                .help("relaxed | moderate | active")
                .default_value("moderate"),
        )
        .arg(
            Arg::new("special-requests")
                .long("special-requests")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Per-provider request timeout")
                .default_value("60"),
        )
        .arg(
            Arg::new("gemini-model")
                .long("gemini-model")
                .value_name("MODEL")
                .default_value("gemini-1.5-flash"),
        )
        .arg(
            Arg::new("openai-model")
                .long("openai-model")
                .value_name("MODEL")
                .default_value("gpt-4o-mini"),
        )
        .get_matches();

    let parse_date = |name: &str| -> Result<Option<NaiveDate>, Box<dyn std::error::Error>> {
        match matches.get_one::<String>(name) {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    };

    let interests = matches
        .get_one::<String>("interests")
        .map(|raw| {
            raw.split(',')
                .map(|tag| {
                    serde_json::from_value::<InterestTag>(serde_json::Value::String(
                        tag.trim().to_string(),
                    ))
                    .map_err(|_| format!("unknown interest: {tag}"))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?
        .unwrap_or_default();

    let budget: BudgetTier = serde_json::from_value(serde_json::Value::String(
        matches.get_one::<String>("budget").unwrap().clone(),
    ))
    .map_err(|_| "unknown budget tier")?;
    let pace: Pace = serde_json::from_value(serde_json::Value::String(
        matches.get_one::<String>("pace").unwrap().clone(),
    ))
    .map_err(|_| "unknown pace")?;

    let request = TripRequest {
        start_date: parse_date("start")?,
        end_date: parse_date("end")?,
        travelers: Some(Travelers {
            adults: matches.get_one::<String>("adults").unwrap().parse()?,
            children: matches.get_one::<String>("children").unwrap().parse()?,
        }),
        interests,
        budget: Some(budget),
        pace: Some(pace),
        special_requests: matches.get_one::<String>("special-requests").cloned(),
    };

    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;
    let timeout = std::time::Duration::from_secs(timeout_seconds);
    let keys: Arc<dyn KeyStore> = Arc::new(EnvKeyStore);

    let remotes: Vec<Box<dyn ItineraryProvider>> = vec![
        Box::new(
            GeminiProvider::new(Arc::clone(&keys))
                .with_model(matches.get_one::<String>("gemini-model").unwrap())
                .with_timeout(timeout),
        ),
        Box::new(
            OpenAiProvider::new(keys)
                .with_model(matches.get_one::<String>("openai-model").unwrap())
                .with_timeout(timeout),
        ),
    ];
    let planner = TripPlanner::new().with_remote_providers(remotes);

    info!(
        "planning trip: budget={}, pace={}, providers=[{}, {}]",
        budget, pace, GEMINI_PROVIDER, OPENAI_PROVIDER
    );

    let itinerary = planner.generate(&request).await?;
    println!("{}", serde_json::to_string_pretty(&itinerary)?);

    Ok(())
}
