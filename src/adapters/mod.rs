// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod storage;

pub use http::completion::OpenAiCompletion;
pub use http::directions::GoogleDirectionsClient;
pub use http::images::SerpApiImageSearch;
pub use http::places::GooglePlacesClient;
pub use http::tripadvisor::TripAdvisorClient;
pub use storage::LocalStorage;
