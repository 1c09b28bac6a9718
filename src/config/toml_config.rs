use crate::domain::model::Coordinate;
use crate::utils::error::{Result, TripError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Settings shared by every binary. Every section has defaults, so an empty
/// file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub endpoints: EndpointConfig,
    pub search: SearchConfig,
    pub guide: GuideConfig,
    pub restaurants: RestaurantConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    /// `compact` or `json`
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            log_format: "compact".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub places: String,
    pub directions: String,
    pub images: String,
    pub completion: String,
    pub restaurants: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            places: "https://maps.googleapis.com/maps/api/place/nearbysearch/json".to_string(),
            directions: "https://maps.googleapis.com/maps/api/directions/json".to_string(),
            images: "https://serpapi.com/search.json".to_string(),
            completion: "https://api.openai.com/v1/chat/completions".to_string(),
            restaurants:
                "https://tripadvisor16.p.rapidapi.com/api/v1/restaurant/searchRestaurants"
                    .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_latitude: f64,
    pub default_longitude: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        // Munnar, Kerala
        Self {
            default_latitude: 10.089167,
            default_longitude: 77.059723,
        }
    }
}

impl SearchConfig {
    pub fn default_origin(&self) -> Coordinate {
        Coordinate::new(self.default_latitude, self.default_longitude)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    pub model: String,
    /// Route origin when a request does not name one. Anything the directions
    /// API accepts: "lat,lng" or a place name.
    pub default_origin: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            default_origin: "10.089167,77.059723".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantConfig {
    pub rapidapi_host: String,
    pub search_location_id: String,
    pub save_location_id: String,
    pub save_dir: String,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            rapidapi_host: "tripadvisor16.p.rapidapi.com".to_string(),
            search_location_id: "60763".to_string(),
            save_location_id: "304554".to_string(),
            save_dir: ".".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TripError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise the built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TripError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TripError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("endpoints.places", &self.endpoints.places)?;
        validate_url("endpoints.directions", &self.endpoints.directions)?;
        validate_url("endpoints.images", &self.endpoints.images)?;
        validate_url("endpoints.completion", &self.endpoints.completion)?;
        validate_url("endpoints.restaurants", &self.endpoints.restaurants)?;

        self.bind_address()?;
        match self.server.log_format.as_str() {
            "compact" | "json" => {}
            other => {
                return Err(TripError::InvalidConfigValueError {
                    field: "server.log_format".to_string(),
                    value: other.to_string(),
                    reason: "Valid formats: compact, json".to_string(),
                })
            }
        }

        validate_range(
            "search.default_latitude",
            self.search.default_latitude,
            -90.0,
            90.0,
        )?;
        validate_range(
            "search.default_longitude",
            self.search.default_longitude,
            -180.0,
            180.0,
        )?;

        validate_non_empty_string("guide.model", &self.guide.model)?;
        validate_non_empty_string("guide.default_origin", &self.guide.default_origin)?;
        validate_non_empty_string("restaurants.rapidapi_host", &self.restaurants.rapidapi_host)?;
        validate_path("restaurants.save_dir", &self.restaurants.save_dir)?;

        if let Some(timeout) = self.http.request_timeout_secs {
            validate_range("http.request_timeout_secs", timeout, 1, 600)?;
        }

        Ok(())
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        self.server
            .bind_address
            .parse()
            .map_err(|e| TripError::InvalidConfigValueError {
                field: "server.bind_address".to_string(),
                value: self.server.bind_address.clone(),
                reason: format!("{}", e),
            })
    }

    pub fn json_logs(&self) -> bool {
        self.server.log_format == "json"
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
