//! Response sanitizer and validator for untrusted generative output.
//!
//! Providers frequently wrap JSON in Markdown code fences, omit fields, or
//! produce internally-inconsistent arithmetic. Everything here treats the
//! raw text as hostile: fences are stripped, the payload is validated
//! against the Draft7 schema derived from [`GeneratedItinerary`], structure
//! is checked against the trip duration, and the cost total is discarded and
//! recomputed locally. A failure at any step disqualifies the strategy
//! wholesale; nothing is patched field-by-field.

use jsonschema::{Draft, JSONSchema};
use schemars::schema_for;
use serde_json::Value;
use tracing::debug;

use crate::cost;
use crate::error::{PlannerError, Result};
use crate::types::{GeneratedItinerary, TripPreferences};

const MAX_SCHEMA_ERRORS: usize = 3;

/// Strip a Markdown code-fence wrapper (```json ... ``` or ``` ... ```),
/// returning the inner text. Input without fences is returned trimmed.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    for marker in ["```json", "```"] {
        if let Some(start) = trimmed.find(marker) {
            let rest = &trimmed[start + marker.len()..];
            if let Some(end) = rest.find("```") {
                return rest[..end].trim();
            }
            return rest.trim();
        }
    }
    trimmed
}

/// Parse, validate and normalize raw provider text into a
/// [`GeneratedItinerary`]. The returned itinerary has deterministic calendar
/// dates and a locally recomputed cost breakdown.
pub fn parse_itinerary(raw: &str, prefs: &TripPreferences) -> Result<GeneratedItinerary> {
    let json_str = strip_code_fences(raw);

    let payload: Value = serde_json::from_str(json_str).map_err(|err| {
        PlannerError::MalformedResponse(format!("response is not valid JSON: {err}"))
    })?;

    validate_against_schema(&payload)?;

    let raw = payload.to_string();
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    let mut itinerary: GeneratedItinerary = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|err| {
            let path = err.path().to_string();
            let location = if path.is_empty() {
                "<root>".to_string()
            } else {
                path
            };
            PlannerError::MalformedResponse(format!(
                "failed to deserialize itinerary at {location}: {err}"
            ))
        })?;

    check_structure(&itinerary, prefs)?;

    // derived metadata is always rewritten locally, never trusted
    itinerary.duration_days = prefs.duration_days();
    for day in &mut itinerary.days {
        day.calendar_date = prefs.date_for_day(day.day_index);
    }
    itinerary.total_cost = cost::recompute_totals(&itinerary.days, prefs);

    Ok(itinerary)
}

/// Validate an untrusted payload against the itinerary schema, collecting a
/// bounded number of error details.
fn validate_against_schema(payload: &Value) -> Result<()> {
    let schema_json = serde_json::to_value(schema_for!(GeneratedItinerary))?;
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema_json)
        .map_err(|err| {
            PlannerError::Unknown(format!("failed to prepare itinerary schema: {err}"))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "payload failed schema validation".to_string()
        } else {
            details.join("; ")
        };
        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        debug!(target: "planner::sanitize", error = %detail_str, "schema validation failed");
        return Err(PlannerError::MalformedResponse(format!(
            "itinerary does not match schema: {detail_str}"
        )));
    }

    Ok(())
}

fn check_structure(itinerary: &GeneratedItinerary, prefs: &TripPreferences) -> Result<()> {
    let expected = prefs.duration_days();
    if itinerary.days.len() != expected as usize {
        return Err(PlannerError::MalformedResponse(format!(
            "expected {} days, provider returned {}",
            expected,
            itinerary.days.len()
        )));
    }

    for (i, day) in itinerary.days.iter().enumerate() {
        if day.day_index != i as u32 + 1 {
            return Err(PlannerError::MalformedResponse(format!(
                "day indices are not contiguous: position {} has dayIndex {}",
                i + 1,
                day.day_index
            )));
        }
        if day.activities.is_empty() {
            return Err(PlannerError::MalformedResponse(format!(
                "day {} has no activities",
                day.day_index
            )));
        }
    }

    Ok(())
}
