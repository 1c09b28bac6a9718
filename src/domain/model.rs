use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used by numeric [`Place`] fields that upstream did not supply.
pub const UNSET: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// One normalized search result. Every field falls back to its own default
/// when upstream omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub business_status: String,
    pub open_now: Option<bool>,
    pub price_level: Option<u8>,
    pub rating: f64,
    pub total_user_ratings: i64,
    pub distance_miles: f64,
    pub address: String,
}

impl Default for Place {
    fn default() -> Self {
        Self {
            name: String::new(),
            business_status: String::new(),
            open_now: None,
            price_level: None,
            rating: UNSET,
            total_user_ratings: -1,
            distance_miles: UNSET,
            address: String::new(),
        }
    }
}

impl Place {
    /// Attribute lines in the order the CLI prints them, name excluded.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("businessStatus", self.business_status.clone()),
            (
                "openNow",
                self.open_now.map(|v| v.to_string()).unwrap_or_default(),
            ),
            (
                "priceLevel",
                self.price_level.map(|v| v.to_string()).unwrap_or_default(),
            ),
            ("rating", self.rating.to_string()),
            ("totalUserRatings", self.total_user_ratings.to_string()),
            ("distance", self.distance_miles.to_string()),
            ("address", self.address.clone()),
        ]
    }
}

/// What the caller asked for, before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct NearbyQuery {
    pub origin: Option<Coordinate>,
    pub keyword: Option<String>,
    pub max_price: Option<u8>,
    pub open_now: Option<bool>,
    pub radius_miles: Option<f64>,
}

/// The resolved request sent to the places-search API.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearchRequest {
    pub origin: Coordinate,
    pub keyword: String,
    pub max_price: Option<u8>,
    pub open_now: Option<bool>,
    pub radius_meters: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub places: Vec<Place>,
    pub chosen: usize,
}

impl Selection {
    pub fn choice(&self) -> &Place {
        &self.places[self.chosen]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub duration: String,
    pub distance: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLink {
    Found(String),
    NotFound,
    Failed,
}

impl ImageLink {
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageLink::Found(url) => Some(url),
            _ => None,
        }
    }
}

impl fmt::Display for ImageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLink::Found(url) => f.write_str(url),
            ImageLink::NotFound => f.write_str("No image found"),
            ImageLink::Failed => f.write_str("Error fetching image"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelType {
    Family,
    Business,
    Couple,
    Friends,
    Bachelor,
    General,
}

impl TravelType {
    /// Unknown values fall back to [`TravelType::General`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "family" => TravelType::Family,
            "business" => TravelType::Business,
            "couple" => TravelType::Couple,
            "friends" => TravelType::Friends,
            "bachelor" => TravelType::Bachelor,
            _ => TravelType::General,
        }
    }

    pub fn focus(&self) -> &'static str {
        match self {
            TravelType::Family => "Focus on family-friendly attractions, activities for kids, and dining options with child-friendly menus.",
            TravelType::Business => "Focus on business hotels, meeting-friendly restaurants, and quick-break attractions.",
            TravelType::Couple => "Focus on romantic spots, scenic locations, and intimate dining experiences.",
            TravelType::Friends => "Focus on group activities, adventurous attractions, and budget-friendly options.",
            TravelType::Bachelor => "Focus on nightlife, bars, and exciting activities suitable for solo travelers or small groups.",
            TravelType::General => "Focus on general attractions and experiences.",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TravelType::Family => "Family",
            TravelType::Business => "Business",
            TravelType::Couple => "Couple",
            TravelType::Friends => "Friends",
            TravelType::Bachelor => "Bachelor",
            TravelType::General => "General",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TravelGuide {
    pub destination: String,
    #[serde(skip)]
    pub travel_type: TravelType,
    pub markdown: String,
    pub places_for_images: Vec<String>,
    pub restaurants_to_search: Vec<String>,
}
