use super::{parse_json, read_body};
use crate::domain::model::RouteSummary;
use crate::domain::ports::Directions;
use crate::utils::error::{Result, TripError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SERVICE: &str = "directions";

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct Leg {
    duration: TextValue,
    distance: TextValue,
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
}

#[derive(Debug, Deserialize)]
struct Step {
    #[serde(default)]
    html_instructions: String,
}

pub struct GoogleDirectionsClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GoogleDirectionsClient {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Directions for GoogleDirectionsClient {
    async fn route(&self, origin: &str, destination: &str) -> Result<RouteSummary> {
        tracing::debug!("Requesting directions from {} to {}", origin, destination);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;
        let body = read_body(SERVICE, response).await?;
        let parsed: DirectionsResponse = parse_json(SERVICE, &body)?;

        if parsed.status != "OK" {
            return Err(TripError::UpstreamStatus {
                service: SERVICE.to_string(),
                status: parsed.status,
            });
        }

        let leg = parsed
            .routes
            .into_iter()
            .next()
            .and_then(|route| route.legs.into_iter().next())
            .ok_or_else(|| TripError::invalid_response(SERVICE, "route has no legs"))?;

        Ok(RouteSummary {
            duration: leg.duration.text,
            distance: leg.distance.text,
            steps: leg
                .steps
                .into_iter()
                .map(|step| step.html_instructions)
                .collect(),
        })
    }
}
