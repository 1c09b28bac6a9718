use crate::core::normalizer::normalize_results;
use crate::core::request::build_request;
use crate::core::selector::select_random;
use crate::domain::model::{Coordinate, NearbyQuery, Selection};
use crate::domain::ports::PlacesSearch;
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build, fetch, normalize, select. One upstream call per run.
pub struct NearbyEngine<P: PlacesSearch> {
    places: P,
    default_origin: Option<Coordinate>,
}

impl<P: PlacesSearch> NearbyEngine<P> {
    pub fn new(places: P) -> Self {
        Self {
            places,
            default_origin: None,
        }
    }

    pub fn with_default_origin(mut self, origin: Coordinate) -> Self {
        self.default_origin = Some(origin);
        self
    }

    pub async fn run(&self, query: &NearbyQuery) -> Result<Selection> {
        // ThreadRng is not Send; seed a StdRng from it so the future stays Send.
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.run_with_rng(query, &mut rng).await
    }

    pub async fn run_with_rng<R: Rng + Send + ?Sized>(
        &self,
        query: &NearbyQuery,
        rng: &mut R,
    ) -> Result<Selection> {
        let request = build_request(query, self.default_origin)?;
        tracing::debug!(
            "Nearby search around {} for '{}' within {} m",
            request.origin,
            request.keyword,
            request.radius_meters
        );

        let raw = self.places.nearby_search(&request).await?;
        tracing::info!("Fetched {} results", raw.len());

        let places = normalize_results(&raw, request.origin);
        let selection = select_random(places, rng)?;
        tracing::debug!("Picked '{}'", selection.choice().name);

        Ok(selection)
    }
}
