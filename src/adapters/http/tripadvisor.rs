use super::read_body;
use crate::domain::ports::RestaurantDirectory;
use crate::utils::error::{Result, TripError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

const SERVICE: &str = "restaurant directory";

/// TripAdvisor restaurant search via RapidAPI. The body is passed through untouched.
pub struct TripAdvisorClient {
    client: Client,
    endpoint: String,
    api_key: String,
    host: String,
}

impl TripAdvisorClient {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            host: host.into(),
        }
    }
}

#[async_trait]
impl RestaurantDirectory for TripAdvisorClient {
    async fn search_restaurants(&self, location_id: &str) -> Result<Value> {
        tracing::debug!("Searching restaurants for location {}", location_id);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("locationId", location_id)])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await?;
        let body = read_body(SERVICE, response).await?;

        serde_json::from_str(&body)
            .map_err(|_| TripError::invalid_response(SERVICE, "Invalid JSON response from the API"))
    }
}
