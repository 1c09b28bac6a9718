use crate::domain::model::{Coordinate, NearbyQuery, NearbySearchRequest};
use crate::utils::error::{Result, TripError};
use crate::utils::validation::{non_blank, parse_finite};
use serde::Deserialize;

pub const DEFAULT_KEYWORD: &str = "restaurant";
pub const DEFAULT_RADIUS_METERS: u32 = 3200;
pub const METERS_PER_RADIUS_MILE: f64 = 1609.34;
pub const MAX_PRICE_TIER: u8 = 4;

/// Parses an origin from free text. Non-numeric or out-of-range components are
/// rejected here, before anything reaches the network.
pub fn parse_coordinate(latitude: &str, longitude: &str) -> Result<Coordinate> {
    let lat = parse_finite("latitude", latitude)?;
    let lng = parse_finite("longitude", longitude)?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(TripError::invalid_input(
            "latitude",
            latitude,
            "must be between -90 and 90",
        ));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(TripError::invalid_input(
            "longitude",
            longitude,
            "must be between -180 and 180",
        ));
    }

    Ok(Coordinate::new(lat, lng))
}

pub fn parse_max_price(raw: Option<&str>) -> Result<Option<u8>> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };

    match raw.parse::<u8>() {
        Ok(tier) if tier <= MAX_PRICE_TIER => Ok(Some(tier)),
        _ => Err(TripError::invalid_input(
            "max price",
            raw,
            "expected a price tier from 0 to 4",
        )),
    }
}

/// `y`/`n` style answers. Anything unrecognised means "don't filter".
pub fn parse_open_now(raw: Option<&str>) -> Option<bool> {
    let raw = non_blank(raw)?;
    match raw.to_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        other => {
            tracing::warn!("Ignoring unrecognised open-now value '{}'", other);
            None
        }
    }
}

pub fn parse_radius_miles(raw: Option<&str>) -> Result<Option<f64>> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };

    let miles = parse_finite("radius", raw)?;
    if miles < 0.0 {
        return Err(TripError::invalid_input("radius", raw, "cannot be negative"));
    }
    Ok(Some(miles))
}

pub fn radius_meters(radius_miles: Option<f64>) -> u32 {
    radius_miles
        .map(|miles| (miles * METERS_PER_RADIUS_MILE).round() as u32)
        .unwrap_or(DEFAULT_RADIUS_METERS)
}

/// Filters as text, the way a command line or query string delivers them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNearbyQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub keyword: Option<String>,
    pub maxprice: Option<String>,
    pub opennow: Option<String>,
    pub radius: Option<String>,
}

impl RawNearbyQuery {
    /// Validates every field. An origin needs both components; with neither,
    /// the caller's default origin applies later.
    pub fn parse(&self) -> Result<NearbyQuery> {
        let origin = match (non_blank(self.lat.as_deref()), non_blank(self.lng.as_deref())) {
            (None, None) => None,
            (lat, lng) => Some(parse_coordinate(lat.unwrap_or(""), lng.unwrap_or(""))?),
        };

        Ok(NearbyQuery {
            origin,
            keyword: self.keyword.clone(),
            max_price: parse_max_price(self.maxprice.as_deref())?,
            open_now: parse_open_now(self.opennow.as_deref()),
            radius_miles: parse_radius_miles(self.radius.as_deref())?,
        })
    }
}

/// Applies defaults to a query. `default_origin` is used when the query has none.
pub fn build_request(
    query: &NearbyQuery,
    default_origin: Option<Coordinate>,
) -> Result<NearbySearchRequest> {
    let origin = query
        .origin
        .or(default_origin)
        .ok_or_else(|| TripError::invalid_input("origin", "", "no coordinates supplied"))?;

    if let Some(tier) = query.max_price {
        if tier > MAX_PRICE_TIER {
            return Err(TripError::invalid_input(
                "max price",
                &tier.to_string(),
                "expected a price tier from 0 to 4",
            ));
        }
    }

    let keyword = non_blank(query.keyword.as_deref())
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_KEYWORD.to_string());

    Ok(NearbySearchRequest {
        origin,
        keyword,
        max_price: query.max_price,
        open_now: query.open_now,
        radius_meters: radius_meters(query.radius_miles),
    })
}

impl NearbySearchRequest {
    /// Query parameters for the nearby-search endpoint, API key excluded.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("location", self.origin.to_string()),
            ("keyword", self.keyword.clone()),
        ];
        if let Some(tier) = self.max_price {
            pairs.push(("maxprice", tier.to_string()));
        }
        if let Some(open_now) = self.open_now {
            pairs.push(("opennow", open_now.to_string()));
        }
        pairs.push(("radius", self.radius_meters.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn munnar() -> Coordinate {
        Coordinate::new(10.089167, 77.059723)
    }

    #[test]
    fn test_defaults_applied() {
        let query = NearbyQuery {
            origin: Some(munnar()),
            ..NearbyQuery::default()
        };
        let request = build_request(&query, None).unwrap();

        assert_eq!(request.keyword, "restaurant");
        assert_eq!(request.radius_meters, 3200);
        assert_eq!(request.max_price, None);
        assert_eq!(request.open_now, None);
        assert_eq!(
            request.query_pairs(),
            vec![
                ("location", "10.089167,77.059723".to_string()),
                ("keyword", "restaurant".to_string()),
                ("radius", "3200".to_string()),
            ]
        );
    }

    #[test]
    fn test_filters_passed_through() {
        let query = NearbyQuery {
            origin: Some(munnar()),
            keyword: Some("Street Food".to_string()),
            max_price: Some(2),
            open_now: Some(true),
            radius_miles: Some(2.0),
        };
        let request = build_request(&query, None).unwrap();

        assert_eq!(request.keyword, "street food");
        assert_eq!(request.radius_meters, 3219);
        let pairs = request.query_pairs();
        assert!(pairs.contains(&("maxprice", "2".to_string())));
        assert!(pairs.contains(&("opennow", "true".to_string())));
    }

    #[test]
    fn test_blank_keyword_uses_default() {
        let query = NearbyQuery {
            origin: Some(munnar()),
            keyword: Some("   ".to_string()),
            ..NearbyQuery::default()
        };
        assert_eq!(build_request(&query, None).unwrap().keyword, "restaurant");
    }

    #[test]
    fn test_default_origin_used() {
        let request = build_request(&NearbyQuery::default(), Some(munnar())).unwrap();
        assert_eq!(request.origin, munnar());
        assert!(build_request(&NearbyQuery::default(), None).is_err());
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(
            parse_coordinate("10.089167", "77.059723").unwrap(),
            munnar()
        );
        assert!(matches!(
            parse_coordinate("ten", "77.0"),
            Err(TripError::InvalidInput { .. })
        ));
        assert!(parse_coordinate("10.0", "").is_err());
        assert!(parse_coordinate("91", "0").is_err());
        assert!(parse_coordinate("0", "-181").is_err());
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!(parse_max_price(Some("3")).unwrap(), Some(3));
        assert_eq!(parse_max_price(Some("")).unwrap(), None);
        assert!(parse_max_price(Some("5")).is_err());
        assert!(parse_max_price(Some("cheap")).is_err());

        assert_eq!(parse_open_now(Some("Y")), Some(true));
        assert_eq!(parse_open_now(Some("no")), Some(false));
        assert_eq!(parse_open_now(Some("maybe")), None);
        assert_eq!(parse_open_now(None), None);

        assert_eq!(parse_radius_miles(Some("1.5")).unwrap(), Some(1.5));
        assert_eq!(parse_radius_miles(None).unwrap(), None);
        assert!(parse_radius_miles(Some("-1")).is_err());
        assert!(parse_radius_miles(Some("far")).is_err());
    }

    #[test]
    fn test_raw_query_parse() {
        let raw = RawNearbyQuery {
            lat: Some("10.089167".to_string()),
            lng: Some("77.059723".to_string()),
            opennow: Some("n".to_string()),
            ..RawNearbyQuery::default()
        };
        let query = raw.parse().unwrap();
        assert_eq!(query.origin, Some(munnar()));
        assert_eq!(query.open_now, Some(false));

        assert!(RawNearbyQuery::default().parse().unwrap().origin.is_none());

        let half = RawNearbyQuery {
            lat: Some("10.0".to_string()),
            ..RawNearbyQuery::default()
        };
        assert!(half.parse().is_err());
    }

    #[test]
    fn test_radius_conversion() {
        assert_eq!(radius_meters(None), 3200);
        assert_eq!(radius_meters(Some(1.0)), 1609);
        assert_eq!(radius_meters(Some(0.0)), 0);
    }
}
