//! Domain types shared between the places pipeline and the export sink.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as returned by the Places and Geocoding APIs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
}

impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// One exported row: summary, detail, and normalized address fields for a
/// single place.
///
/// Built once per place by the pagination driver and never mutated after
/// it is appended to the result sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceRecord {
    pub name: String,
    pub geo_location: GeoLocation,
    pub place_id: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub formatted_address: Option<String>,
    /// Raw detail payload exactly as the API returned it.
    pub details: serde_json::Value,
    pub local_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub website: Option<String>,
    pub url: Option<String>,
    pub rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_location_displays_as_lat_comma_lng() {
        let loc = GeoLocation {
            lat: 47.6062,
            lng: -122.3321,
        };
        assert_eq!(loc.to_string(), "47.6062,-122.3321");
    }

    #[test]
    fn geo_location_deserializes_from_api_shape() {
        let loc: GeoLocation =
            serde_json::from_str(r#"{"lat": 47.5, "lng": -122.25}"#).unwrap();
        assert_eq!(loc, GeoLocation { lat: 47.5, lng: -122.25 });
    }
}
