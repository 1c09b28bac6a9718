use crate::utils::error::TripError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

impl TripError {
    pub fn http_status(&self) -> StatusCode {
        match self {
            TripError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            // Pass the upstream error code through; anything else is a bad gateway.
            TripError::UpstreamHttp { code, .. } => StatusCode::from_u16(*code)
                .ok()
                .filter(|status| status.is_client_error() || status.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            TripError::UpstreamStatus { .. } | TripError::ApiError(_) => StatusCode::BAD_GATEWAY,
            TripError::NoResults => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TripError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!("Request failed: {} (Category: {:?})", self, self.category());
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let message = match &self {
            TripError::InvalidInput { .. } | TripError::UpstreamStatus { .. } => self.to_string(),
            _ => self.user_friendly_message(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
