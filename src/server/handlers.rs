use crate::app::report::selection_value;
use crate::core::guide::render_page;
use crate::core::request::RawNearbyQuery;
use crate::domain::model::TravelType;
use crate::domain::ports::Storage;
use crate::server::AppState;
use crate::utils::error::{Result, TripError};
use crate::utils::validation::non_blank;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

pub const SAVE_FILE: &str = "restaurants.json";

#[derive(Debug, Deserialize)]
pub struct GuideParams {
    pub destination: Option<String>,
    pub travel_type: Option<String>,
    pub origin: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RestaurantParams {
    #[serde(rename = "locationId")]
    pub location_id: Option<String>,
}

pub async fn home() -> Html<&'static str> {
    Html(
        r#"
    <h1>Welcome to the Travel Guide API</h1>
    <p>To get a travel guide, add the destination and travel type as query parameters in the URL, like this:</p>
    <pre>/travel_guide?destination=New York&travel_type=couple</pre>
    <p>Restaurants: <code>/restaurants/search?locationId=60763</code>, <code>/restaurants/save?locationId=304554</code>,
    <code>/restaurants/nearby?lat=10.089167&lng=77.059723&keyword=tea</code></p>
    "#,
    )
}

pub async fn travel_guide(
    State(state): State<AppState>,
    Query(params): Query<GuideParams>,
) -> Result<Html<String>> {
    let destination = non_blank(params.destination.as_deref()).ok_or_else(|| {
        TripError::invalid_input(
            "destination",
            "",
            "Please provide a destination in the query parameter (e.g., ?destination=New York)",
        )
    })?;
    let travel_type = TravelType::parse(params.travel_type.as_deref().unwrap_or("general"));
    let origin = non_blank(params.origin.as_deref()).unwrap_or(state.guide_origin.as_str());

    let guide = state.guide.generate(destination, travel_type, origin).await?;
    Ok(Html(render_page(&guide)))
}

pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(params): Query<RestaurantParams>,
) -> Result<Json<Value>> {
    let location_id = non_blank(params.location_id.as_deref())
        .unwrap_or(state.restaurant_defaults.search_location_id.as_str());

    let data = state.restaurants.search_restaurants(location_id).await?;
    Ok(Json(data))
}

pub async fn save_restaurants(
    State(state): State<AppState>,
    Query(params): Query<RestaurantParams>,
) -> Result<Json<Value>> {
    let location_id = non_blank(params.location_id.as_deref())
        .unwrap_or(state.restaurant_defaults.save_location_id.as_str());

    let data = state.restaurants.search_restaurants(location_id).await?;
    let bytes = serde_json::to_vec_pretty(&data)?;
    state.storage.write_file(SAVE_FILE, &bytes).await?;
    tracing::info!(
        "Saved restaurants for location {} to {}/{}",
        location_id,
        state.storage.base_path(),
        SAVE_FILE
    );

    Ok(Json(json!({ "message": format!("Data saved to {}", SAVE_FILE) })))
}

pub async fn nearby_restaurants(
    State(state): State<AppState>,
    Query(params): Query<RawNearbyQuery>,
) -> Result<Json<Value>> {
    let query = params.parse()?;
    let selection = state.nearby.run(&query).await?;
    Ok(Json(selection_value(&selection)))
}
