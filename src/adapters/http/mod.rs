//! reqwest clients for the external collaborators.

pub mod completion;
pub mod directions;
pub mod images;
pub mod places;
pub mod tripadvisor;

use crate::utils::error::{Result, TripError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// One client is shared by every adapter. `None` keeps reqwest's default timeout.
pub fn build_client(timeout_secs: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Returns the body of a 2xx response; any other status becomes
/// [`TripError::UpstreamHttp`].
pub(crate) async fn read_body(service: &str, response: reqwest::Response) -> Result<String> {
    let status = response.status();
    tracing::debug!("{} response status: {}", service, status);

    if !status.is_success() {
        return Err(TripError::UpstreamHttp {
            service: service.to_string(),
            code: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

pub(crate) fn parse_json<T: DeserializeOwned>(service: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| TripError::invalid_response(service, e.to_string()))
}
