pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::adapters::{GooglePlacesClient, LocalStorage};
pub use crate::config::{ApiKeys, AppConfig, CliConfig};
pub use crate::core::{guide::TravelGuideService, nearby::NearbyEngine};
pub use crate::domain::model::{Coordinate, NearbyQuery, Place, Selection};
pub use crate::utils::error::{Result, TripError};
