use super::{parse_json, read_body};
use crate::domain::ports::ImageSearch;
use crate::utils::error::{Result, TripError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SERVICE: &str = "image search";

#[derive(Debug, Deserialize)]
struct ImageSearchResponse {
    #[serde(default)]
    images_results: Vec<ImageResult>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageResult {
    original: Option<String>,
}

/// Google Images through SerpApi, first page only.
pub struct SerpApiImageSearch {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SerpApiImageSearch {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ImageSearch for SerpApiImageSearch {
    async fn first_image(&self, query: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("engine", "google_images"),
                ("ijn", "0"),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;
        let body = read_body(SERVICE, response).await?;
        let parsed: ImageSearchResponse = parse_json(SERVICE, &body)?;

        if let Some(error) = parsed.error {
            // SerpApi reports "no results" through the error field too.
            if parsed.images_results.is_empty() && error.contains("hasn't returned any results") {
                return Ok(None);
            }
            return Err(TripError::UpstreamStatus {
                service: SERVICE.to_string(),
                status: error,
            });
        }

        Ok(parsed
            .images_results
            .into_iter()
            .next()
            .and_then(|image| image.original))
    }
}
