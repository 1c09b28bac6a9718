pub mod extract;
pub mod geodesic;
pub mod guide;
pub mod nearby;
pub mod normalizer;
pub mod request;
pub mod selector;

pub use crate::domain::model::{Coordinate, NearbyQuery, NearbySearchRequest, Place, Selection};
pub use crate::domain::ports::{
    Completion, Directions, ImageSearch, PlacesSearch, RestaurantDirectory, Storage,
};
pub use crate::utils::error::Result;
