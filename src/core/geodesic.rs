//! Distance on the WGS-84 ellipsoid.
//!
//! Vincenty's inverse formula, accurate to well under a millimetre for the
//! distances a nearby search produces. Nearly antipodal pairs can keep the
//! iteration from converging; those fall back to a great-circle distance on
//! the mean Earth radius.

use crate::domain::model::Coordinate;

const WGS84_A: f64 = 6_378_137.0;
const WGS84_F: f64 = 1.0 / 298.257_223_563;
const WGS84_B: f64 = (1.0 - WGS84_F) * WGS84_A;
const MEAN_RADIUS_M: f64 = 6_371_008.8;

pub const METERS_PER_MILE: f64 = 1_609.344;

const MAX_ITERATIONS: usize = 200;
const CONVERGENCE: f64 = 1e-12;

pub fn geodesic_meters(from: Coordinate, to: Coordinate) -> f64 {
    vincenty_meters(from, to).unwrap_or_else(|| great_circle_meters(from, to))
}

pub fn geodesic_miles(from: Coordinate, to: Coordinate) -> f64 {
    geodesic_meters(from, to) / METERS_PER_MILE
}

fn vincenty_meters(from: Coordinate, to: Coordinate) -> Option<f64> {
    let l = (to.longitude - from.longitude).to_radians();
    let u1 = ((1.0 - WGS84_F) * from.latitude.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * to.latitude.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();

        if sin_sigma == 0.0 {
            return Some(0.0);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Equatorial lines have cos²α = 0.
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));

        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if (lambda - previous).abs() < CONVERGENCE {
            let u_sq = cos_sq_alpha * (WGS84_A.powi(2) - WGS84_B.powi(2)) / WGS84_B.powi(2);
            let a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = b
                * sin_sigma
                * (cos_2sigma_m
                    + b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                            - b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma.powi(2))
                                * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));
            return Some(WGS84_B * a * (sigma - delta_sigma));
        }
    }

    None
}

fn great_circle_meters(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let d_phi = phi2 - phi1;
    let d_lambda = (to.longitude - from.longitude).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * MEAN_RADIUS_M * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEWPORT_RI: Coordinate = Coordinate {
        latitude: 41.49008,
        longitude: -71.312796,
    };
    const CLEVELAND_OH: Coordinate = Coordinate {
        latitude: 41.499498,
        longitude: -81.695391,
    };

    #[test]
    fn test_identical_points_are_zero() {
        let munnar = Coordinate::new(10.089167, 77.059723);
        assert_eq!(geodesic_miles(munnar, munnar), 0.0);
    }

    #[test]
    fn test_known_distance() {
        let miles = geodesic_miles(NEWPORT_RI, CLEVELAND_OH);
        assert!((miles - 538.390_445).abs() < 1e-3, "got {}", miles);
    }

    #[test]
    fn test_symmetric() {
        let there = geodesic_meters(NEWPORT_RI, CLEVELAND_OH);
        let back = geodesic_meters(CLEVELAND_OH, NEWPORT_RI);
        assert!((there - back).abs() < 1e-6);
    }

    #[test]
    fn test_short_hop_is_small() {
        let a = Coordinate::new(10.089167, 77.059723);
        let b = Coordinate::new(10.090167, 77.059723);
        let meters = geodesic_meters(a, b);
        // One thousandth of a degree of latitude near the equator is about 110 m.
        assert!(meters > 105.0 && meters < 115.0, "got {}", meters);
    }

    #[test]
    fn test_antipodal_falls_back() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.5, 179.7);
        let meters = geodesic_meters(a, b);
        assert!(meters.is_finite());
        assert!(meters > 19_000_000.0 && meters < 20_100_000.0, "got {}", meters);
    }
}
