use crate::core::geodesic::geodesic_miles;
use crate::domain::model::{Coordinate, Place, UNSET};
use serde_json::Value;

/// Builds a [`Place`] from one raw search result. Each field is read on its own;
/// a missing or mistyped field keeps its default and never affects the others.
pub fn normalize_record(raw: &Value, origin: Coordinate) -> Place {
    let text = |pointer: &str| {
        raw.pointer(pointer)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default()
    };

    Place {
        name: text("/name"),
        business_status: text("/business_status"),
        open_now: raw
            .pointer("/opening_hours/open_now")
            .and_then(Value::as_bool),
        price_level: raw
            .get("price_level")
            .and_then(Value::as_u64)
            .filter(|tier| *tier <= 4)
            .map(|tier| tier as u8),
        rating: raw.get("rating").and_then(Value::as_f64).unwrap_or(UNSET),
        total_user_ratings: raw
            .get("user_ratings_total")
            .and_then(Value::as_i64)
            .unwrap_or(-1),
        distance_miles: location_of(raw)
            .map(|location| geodesic_miles(origin, location))
            .unwrap_or(UNSET),
        address: text("/vicinity"),
    }
}

pub fn normalize_results(results: &[Value], origin: Coordinate) -> Vec<Place> {
    results
        .iter()
        .map(|raw| normalize_record(raw, origin))
        .collect()
}

fn location_of(raw: &Value) -> Option<Coordinate> {
    let location = raw.pointer("/geometry/location")?;
    let lat = location.get("lat").and_then(Value::as_f64)?;
    let lng = location.get("lng").and_then(Value::as_f64)?;
    Some(Coordinate::new(lat, lng))
}
