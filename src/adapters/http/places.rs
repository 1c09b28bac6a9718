use super::{parse_json, read_body};
use crate::domain::model::NearbySearchRequest;
use crate::domain::ports::PlacesSearch;
use crate::utils::error::{Result, TripError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

const SERVICE: &str = "places";

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<Value>,
    error_message: Option<String>,
}

pub struct GooglePlacesClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GooglePlacesClient {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl PlacesSearch for GooglePlacesClient {
    async fn nearby_search(&self, request: &NearbySearchRequest) -> Result<Vec<Value>> {
        let mut params = request.query_pairs();
        params.push(("key", self.api_key.clone()));

        tracing::debug!("Making nearby search request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).query(&params).send().await?;
        let body = read_body(SERVICE, response).await?;
        let parsed: NearbySearchResponse = parse_json(SERVICE, &body)?;

        if parsed.status != "OK" {
            if let Some(message) = &parsed.error_message {
                tracing::warn!("Nearby search rejected: {}", message);
            }
            return Err(TripError::UpstreamStatus {
                service: SERVICE.to_string(),
                status: parsed.status,
            });
        }

        Ok(parsed.results)
    }
}
