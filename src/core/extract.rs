//! Recovers list literals such as `places_for_images = ["A", "B"]` from
//! generated text.
//!
//! This is best-effort: the model is asked for a fixed format but nothing
//! enforces it. A missing marker yields an empty list, and names that contain
//! commas are split apart.

use regex::Regex;

pub const PLACES_FOR_IMAGES: &str = "places_for_images";
pub const RESTAURANTS_TO_SEARCH: &str = "restaurants_to_search";

pub fn extract_list(text: &str, name: &str) -> Vec<String> {
    let pattern = format!(r"(?s){}\s*=\s*\[(.*?)\]", regex::escape(name));
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };

    let Some(caps) = re.captures(text) else {
        tracing::debug!("No '{}' list found in generated text", name);
        return Vec::new();
    };

    caps[1]
        .split(',')
        .map(|item| {
            item.trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .trim()
                .to_string()
        })
        .filter(|item| !item.is_empty())
        .collect()
}

pub fn extract_place_names(text: &str) -> Vec<String> {
    extract_list(text, PLACES_FOR_IMAGES)
}

pub fn extract_restaurant_names(text: &str) -> Vec<String> {
    extract_list(text, RESTAURANTS_TO_SEARCH)
}
