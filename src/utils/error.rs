use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{service} returned status {status}")]
    UpstreamStatus { service: String, status: String },

    #[error("{service} request failed with status code {code}")]
    UpstreamHttp { service: String, code: u16 },

    #[error("Invalid response from {service}: {message}")]
    InvalidResponse { service: String, message: String },

    #[error("No results found")]
    NoResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Upstream,
    Parse,
    Network,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TripError {
    pub fn invalid_input(field: &str, value: &str, reason: impl Into<String>) -> Self {
        TripError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_response(service: &str, message: impl Into<String>) -> Self {
        TripError::InvalidResponse {
            service: service.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TripError::ConfigError { .. }
            | TripError::MissingConfigError { .. }
            | TripError::InvalidConfigValueError { .. }
            | TripError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            TripError::InvalidInput { .. } => ErrorCategory::Input,
            TripError::UpstreamStatus { .. }
            | TripError::UpstreamHttp { .. }
            | TripError::NoResults => ErrorCategory::Upstream,
            TripError::InvalidResponse { .. } | TripError::SerializationError(_) => {
                ErrorCategory::Parse
            }
            TripError::ApiError(_) => ErrorCategory::Network,
            TripError::IoError(_) | TripError::CsvError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Upstream | ErrorCategory::Network => match self {
                TripError::NoResults => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
            ErrorCategory::Parse | ErrorCategory::Io => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TripError::MissingConfigError { field } => {
                format!("{} is not set", field)
            }
            TripError::InvalidInput { field, value, .. } => {
                format!("'{}' is not a valid {}", value, field)
            }
            TripError::UpstreamStatus { service, status } => {
                format!("The {} service answered with {}", service, status)
            }
            TripError::UpstreamHttp { code, .. } => {
                format!("API request failed with status code {}", code)
            }
            TripError::InvalidResponse { .. } | TripError::SerializationError(_) => {
                "Invalid JSON response from the API".to_string()
            }
            TripError::NoResults => "No places matched the search".to_string(),
            TripError::ApiError(_) => "Could not reach the remote service".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the environment variables (or .env file) and the TOML config file"
            }
            ErrorCategory::Input => "Fix the highlighted argument and try again",
            ErrorCategory::Upstream => match self {
                TripError::NoResults => "Widen the radius or drop some filters",
                _ => "Check the API key and quota for the upstream service",
            },
            ErrorCategory::Parse => "The upstream service changed its response format",
            ErrorCategory::Network => "Check the network connection and endpoint URLs",
            ErrorCategory::Io => "Check that the output location is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, TripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let err = TripError::MissingConfigError {
            field: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);

        let err = TripError::invalid_input("latitude", "abc", "not a number");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.user_friendly_message(), "'abc' is not a valid latitude");

        let err = TripError::UpstreamStatus {
            service: "places".to_string(),
            status: "REQUEST_DENIED".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Upstream);
        assert_eq!(err.to_string(), "places returned status REQUEST_DENIED");

        assert_eq!(TripError::NoResults.severity(), ErrorSeverity::Low);
    }
}
