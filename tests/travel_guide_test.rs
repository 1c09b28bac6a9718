use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use trip_scout::adapters::http::build_client;
use trip_scout::adapters::{GoogleDirectionsClient, OpenAiCompletion, SerpApiImageSearch};
use trip_scout::core::guide::DIRECTIONS_UNAVAILABLE;
use trip_scout::domain::model::TravelType;
use trip_scout::domain::ports::{Directions, ImageSearch};
use trip_scout::{TravelGuideService, TripError};

const GUIDE_TEXT: &str = "**Overview of New York**\n\nThe city that never sleeps.\n\n- Central Park\n- Brooklyn Bridge\n\n```python\nplaces_for_images = [\"Central Park\", \"Brooklyn Bridge\"]\nrestaurants_to_search = [\"Tavern on the Green\", \"The River Café\"]\n```";

fn service(server: &MockServer) -> TravelGuideService {
    let client = build_client(None).unwrap();
    TravelGuideService::new(
        Arc::new(OpenAiCompletion::new(
            client.clone(),
            server.url("/v1/chat/completions"),
            "openai-key",
            "gpt-3.5-turbo",
        )),
        Arc::new(SerpApiImageSearch::new(
            client.clone(),
            server.url("/search.json"),
            "serp-key",
        )),
        Arc::new(GoogleDirectionsClient::new(
            client,
            server.url("/directions/json"),
            "maps-key",
        )),
    )
}

async fn mock_completion(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer openai-key")
                .body_contains("gpt-3.5-turbo")
                .body_contains("Focus on romantic spots");
            then.status(200).json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": GUIDE_TEXT}}]
            }));
        })
        .await
}

#[tokio::test]
async fn test_full_travel_guide() {
    let server = MockServer::start_async().await;
    let completion = mock_completion(&server).await;
    let central = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search.json")
                .query_param("q", "Central Park")
                .query_param("engine", "google_images")
                .query_param("ijn", "0")
                .query_param("api_key", "serp-key");
            then.status(200).json_body(json!({
                "images_results": [
                    {"original": "https://img.example/central-park.jpg"},
                    {"original": "https://img.example/second.jpg"}
                ]
            }));
        })
        .await;
    let bridge = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search.json")
                .query_param("q", "Brooklyn Bridge");
            then.status(200).json_body(json!({"images_results": []}));
        })
        .await;
    let directions = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/directions/json")
                .query_param("origin", "Times Square")
                .query_param("destination", "New York")
                .query_param("key", "maps-key");
            then.status(200).json_body(json!({
                "status": "OK",
                "routes": [{"legs": [{
                    "duration": {"text": "12 mins"},
                    "distance": {"text": "3.1 km"},
                    "steps": [
                        {"html_instructions": "Head <b>north</b> on 7th Ave"},
                        {"html_instructions": "Turn <b>right</b>"}
                    ]
                }]}]
            }));
        })
        .await;

    let guide = service(&server)
        .generate("New York", TravelType::Couple, "Times Square")
        .await
        .unwrap();

    completion.assert_async().await;
    central.assert_async().await;
    bridge.assert_async().await;
    directions.assert_async().await;

    assert_eq!(guide.places_for_images, vec!["Central Park", "Brooklyn Bridge"]);
    assert_eq!(
        guide.restaurants_to_search,
        vec!["Tavern on the Green", "The River Café"]
    );

    let md = &guide.markdown;
    assert!(md.starts_with("# Overview of New York\n\nThe city that never sleeps.\n\n- Central Park\n- Brooklyn Bridge\n"));
    assert!(md.contains("### Central Park\n![Central Park](https://img.example/central-park.jpg)\n\n"));
    assert!(md.contains("### Brooklyn Bridge\nNo image available\n\n"));
    assert!(md.contains("## Travel Route Information\nTravel Time: 12 mins\nDistance: 3.1 km\n"));
    assert!(md.contains("Head <b>north</b> on 7th Ave\nTurn <b>right</b>\n"));
    assert!(md.contains("Google Maps Link: https://www.google.com/maps/dir/?api=1&origin=Times+Square&destination=New+York"));
}

#[tokio::test]
async fn test_directions_failure_degrades() {
    let server = MockServer::start_async().await;
    mock_completion(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search.json");
            then.status(500);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/directions/json");
            then.status(200)
                .json_body(json!({"status": "NOT_FOUND", "routes": []}));
        })
        .await;

    let guide = service(&server)
        .generate("New York", TravelType::Couple, "nowhere")
        .await
        .unwrap();

    assert!(guide.markdown.contains("### Central Park\nNo image available"));
    assert!(guide
        .markdown
        .ends_with(&format!("## Travel Route Information\n{}", DIRECTIONS_UNAVAILABLE)));
}

#[tokio::test]
async fn test_completion_failure_is_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(401).json_body(json!({"error": {"message": "bad key"}}));
        })
        .await;
    let images = server
        .mock_async(|when, then| {
            when.method(GET).path("/search.json");
            then.status(200).json_body(json!({"images_results": []}));
        })
        .await;

    let err = service(&server)
        .generate("Paris", TravelType::General, "Lyon")
        .await
        .unwrap_err();

    assert!(matches!(err, TripError::UpstreamHttp { code: 401, .. }));
    images.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_adapters_report_upstream_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search.json");
            then.status(200)
                .json_body(json!({"error": "Invalid API key. Your API key should be here: https://serpapi.com/manage-api-key"}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/directions/json");
            then.status(200).json_body(json!({"status": "OK", "routes": []}));
        })
        .await;

    let client = build_client(Some(5)).unwrap();
    let images = SerpApiImageSearch::new(client.clone(), server.url("/search.json"), "k");
    assert!(matches!(
        images.first_image("Louvre").await,
        Err(TripError::UpstreamStatus { .. })
    ));

    let directions = GoogleDirectionsClient::new(client, server.url("/directions/json"), "k");
    assert!(matches!(
        directions.route("Lyon", "Paris").await,
        Err(TripError::InvalidResponse { .. })
    ));
}
