use crate::utils::error::{Result, TripError};
use std::env;

pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const SERPAPI_KEY: &str = "SERPAPI_KEY";
pub const TRIP_ADVISOR_KEY: &str = "TRIP_ADVISOR_KEY";

/// Loads `.env` from the working directory if there is one. A missing file is fine.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
}

/// Reads a required key. Unset or blank is a configuration error.
pub fn require_key(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TripError::MissingConfigError {
            field: name.to_string(),
        }),
    }
}

/// Keys needed by the guide server, read once at startup.
#[derive(Clone)]
pub struct ApiKeys {
    pub google_maps: String,
    pub openai: String,
    pub serpapi: String,
    pub trip_advisor: String,
}

impl ApiKeys {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            google_maps: require_key(GOOGLE_MAPS_API_KEY)?,
            openai: require_key(OPENAI_API_KEY)?,
            serpapi: require_key(SERPAPI_KEY)?,
            trip_advisor: require_key(TRIP_ADVISOR_KEY)?,
        })
    }
}

impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys").finish_non_exhaustive()
    }
}
