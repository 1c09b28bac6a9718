use crate::domain::model::{NearbySearchRequest, RouteSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Nearby search. Returns the raw `results` array once the upstream status is `OK`.
#[async_trait]
pub trait PlacesSearch: Send + Sync {
    async fn nearby_search(&self, request: &NearbySearchRequest)
        -> Result<Vec<serde_json::Value>>;
}

#[async_trait]
pub trait Directions: Send + Sync {
    async fn route(&self, origin: &str, destination: &str) -> Result<RouteSummary>;
}

/// Image search. `Ok(None)` means the search ran but had no usable image.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn first_image(&self, query: &str) -> Result<Option<String>>;
}

#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
pub trait RestaurantDirectory: Send + Sync {
    async fn search_restaurants(&self, location_id: &str) -> Result<serde_json::Value>;
}

#[async_trait]
impl<T: PlacesSearch + ?Sized> PlacesSearch for std::sync::Arc<T> {
    async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<Vec<serde_json::Value>> {
        (**self).nearby_search(request).await
    }
}
