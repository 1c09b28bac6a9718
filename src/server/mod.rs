//! HTTP surface: travel guide, restaurant directory, nearby search.
//!
//! Every handler is stateless; `AppState` only carries the clients and
//! defaults built once at startup.

pub mod error;
pub mod handlers;

use crate::adapters::http::build_client;
use crate::adapters::{
    GoogleDirectionsClient, GooglePlacesClient, LocalStorage, OpenAiCompletion,
    SerpApiImageSearch, TripAdvisorClient,
};
use crate::config::toml_config::RestaurantConfig;
use crate::config::{ApiKeys, AppConfig};
use crate::core::guide::TravelGuideService;
use crate::core::nearby::NearbyEngine;
use crate::domain::ports::{PlacesSearch, RestaurantDirectory};
use crate::utils::error::Result;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub guide: TravelGuideService,
    pub guide_origin: String,
    pub restaurants: Arc<dyn RestaurantDirectory>,
    pub restaurant_defaults: RestaurantConfig,
    pub storage: LocalStorage,
    pub nearby: Arc<NearbyEngine<Arc<dyn PlacesSearch>>>,
}

impl AppState {
    pub fn new(config: &AppConfig, keys: &ApiKeys) -> Result<Self> {
        let client = build_client(config.http.request_timeout_secs)?;
        let endpoints = &config.endpoints;

        let guide = TravelGuideService::new(
            Arc::new(OpenAiCompletion::new(
                client.clone(),
                &endpoints.completion,
                &keys.openai,
                &config.guide.model,
            )),
            Arc::new(SerpApiImageSearch::new(
                client.clone(),
                &endpoints.images,
                &keys.serpapi,
            )),
            Arc::new(GoogleDirectionsClient::new(
                client.clone(),
                &endpoints.directions,
                &keys.google_maps,
            )),
        );

        let restaurants: Arc<dyn RestaurantDirectory> = Arc::new(TripAdvisorClient::new(
            client.clone(),
            &endpoints.restaurants,
            &keys.trip_advisor,
            &config.restaurants.rapidapi_host,
        ));

        let places: Arc<dyn PlacesSearch> = Arc::new(GooglePlacesClient::new(
            client,
            &endpoints.places,
            &keys.google_maps,
        ));
        let nearby =
            NearbyEngine::new(places).with_default_origin(config.search.default_origin());

        Ok(Self {
            guide,
            guide_origin: config.guide.default_origin.clone(),
            restaurants,
            restaurant_defaults: config.restaurants.clone(),
            storage: LocalStorage::new(config.restaurants.save_dir.clone()),
            nearby: Arc::new(nearby),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/travel_guide", get(handlers::travel_guide))
        .route("/restaurants/search", get(handlers::search_restaurants))
        .route("/restaurants/save", get(handlers::save_restaurants))
        .route("/restaurants/nearby", get(handlers::nearby_restaurants))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_server(config: &AppConfig, keys: &ApiKeys) -> Result<()> {
    let state = AppState::new(config, keys)?;
    let app = router(state);

    let addr = config.bind_address()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Travel guide server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
