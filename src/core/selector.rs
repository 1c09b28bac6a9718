use crate::domain::model::{Place, Selection};
use crate::utils::error::{Result, TripError};
use rand::Rng;

/// Picks one place uniformly at random and keeps the full list alongside it.
pub fn select_random<R: Rng + ?Sized>(places: Vec<Place>, rng: &mut R) -> Result<Selection> {
    if places.is_empty() {
        return Err(TripError::NoResults);
    }

    let chosen = rng.random_range(0..places.len());
    Ok(Selection { places, chosen })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn named(name: &str) -> Place {
        Place {
            name: name.to_string(),
            ..Place::default()
        }
    }

    #[test]
    fn test_single_place_always_chosen() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let selection = select_random(vec![named("Only")], &mut rng).unwrap();
            assert_eq!(selection.choice().name, "Only");
        }
    }

    #[test]
    fn test_empty_is_no_results() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(matches!(
            select_random(Vec::new(), &mut rng),
            Err(TripError::NoResults)
        ));
    }

    #[test]
    fn test_every_place_reachable() {
        let places = vec![named("A"), named("B"), named("C")];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            let selection = select_random(places.clone(), &mut rng).unwrap();
            assert_eq!(selection.places.len(), 3);
            seen[selection.chosen] += 1;
        }
        for count in seen {
            assert!(count > 800, "skewed pick counts: {:?}", seen);
        }
    }

    #[test]
    fn test_same_seed_same_pick() {
        let places = vec![named("A"), named("B"), named("C"), named("D")];
        let first = select_random(places.clone(), &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let second = select_random(places, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(first.chosen, second.chosen);
    }
}
