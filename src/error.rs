use thiserror::Error;

/// Main error type for the planning engine
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid preferences: {0}")]
    InvalidPreferences(String),

    #[error("No API key available for {0}")]
    MissingApiKey(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider {provider} returned HTTP {status}: {message}")]
    ProviderStatus {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Whether the orchestrator may recover by advancing to the next
    /// strategy. Only a preference-validation failure is surfaced to the
    /// caller; everything else disqualifies a single strategy.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PlannerError::InvalidPreferences(_))
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::InvalidPreferences(_) => "INVALID_PREFERENCES",
            PlannerError::MissingApiKey(_) => "MISSING_API_KEY",
            PlannerError::Http(_) => "HTTP_ERROR",
            PlannerError::ProviderStatus { .. } => "PROVIDER_STATUS_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            PlannerError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "recoverable": self.is_recoverable()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_not_recoverable() {
        let err = PlannerError::InvalidPreferences("end before start".into());
        assert!(!err.is_recoverable());
        assert_eq!(err.error_code(), "INVALID_PREFERENCES");
    }

    #[test]
    fn provider_errors_advance_the_chain() {
        let err = PlannerError::MalformedResponse("not JSON".into());
        assert!(err.is_recoverable());

        let payload = err.to_error_payload();
        assert_eq!(payload["error"]["code"], "MALFORMED_RESPONSE");
        assert_eq!(payload["error"]["recoverable"], true);
    }
}
