//! Google Places Web Service response types.
//!
//! ## Observed shape
//!
//! ### Envelope
//! Every endpoint answers with a JSON object carrying a `status` string
//! (`"OK"`, `"ZERO_RESULTS"`, `"OVER_QUERY_LIMIT"`, `"REQUEST_DENIED"`,
//! `"INVALID_REQUEST"`, `"NOT_FOUND"`, `"UNKNOWN_ERROR"`) and, on failure, an
//! optional `error_message`. The status is checked on the raw JSON before any
//! typed deserialization.
//!
//! ### `next_page_token`
//! Present on a text search response only when more results exist. Passed
//! back verbatim as `pagetoken`. A freshly issued token is rejected with
//! `INVALID_REQUEST` for a couple of seconds.
//!
//! ### `address_components`
//! Each entry has `long_name`, `short_name`, and a `types` array such as
//! `["locality", "political"]`. Places without a street address (parks,
//! neighbourhoods) omit `street_number` and `route` entirely.
//!
//! ### Phone numbers
//! `formatted_phone_number` is the local form (`"(206) 555-0100"`);
//! `international_phone_number` carries the country prefix. Both are absent
//! for places without a listed phone.

use placedump_core::GeoLocation;
use serde::Deserialize;

/// `geometry` block shared by search, detail, and geocoding results.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: GeoLocation,
}

/// A place as returned in the `results` array of a text search.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    /// Legacy place identifier; Google no longer populates it for new
    /// projects.
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    pub geometry: Geometry,

    /// Opaque identifier used to request place details.
    pub place_id: String,
}

impl PlaceSummary {
    #[must_use]
    pub fn geo_location(&self) -> GeoLocation {
        self.geometry.location
    }
}

/// Top-level body of `GET place/textsearch/json`.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceSummary>,

    #[serde(default)]
    pub next_page_token: Option<String>,

    #[serde(default)]
    pub html_attributions: Vec<String>,
}

/// One page of search results as seen by the pagination driver.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub places: Vec<PlaceSummary>,
    /// `true` when the API reported that another page exists.
    pub has_next_page: bool,
    /// Continuation token for the next page; only meaningful when
    /// `has_next_page` is set.
    pub next_page_token: Option<String>,
}

impl From<TextSearchResponse> for SearchPage {
    fn from(response: TextSearchResponse) -> Self {
        let next_page_token = response.next_page_token.filter(|t| !t.is_empty());
        Self {
            places: response.results,
            has_next_page: next_page_token.is_some(),
            next_page_token,
        }
    }
}

/// One fragment of a structured address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: Option<String>,

    pub short_name: String,

    #[serde(default)]
    pub types: Vec<String>,
}

/// Full place record from `GET place/details/json`.
///
/// Only obtainable through a details round-trip; the raw `result` object is
/// kept alongside the typed fields for export.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub formatted_address: Option<String>,

    #[serde(default)]
    pub address_components: Vec<AddressComponent>,

    /// Local-format phone number.
    #[serde(default)]
    pub formatted_phone_number: Option<String>,

    #[serde(default)]
    pub international_phone_number: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    /// Canonical Google Maps URL for the place.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(skip)]
    pub raw: serde_json::Value,
}

impl PlaceDetail {
    /// Parses a detail `result` object, retaining the original JSON as
    /// [`PlaceDetail::raw`].
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `payload` does not match the
    /// expected shape.
    pub fn from_payload(payload: serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut detail = PlaceDetail::deserialize(&payload)?;
        detail.raw = payload;
        Ok(detail)
    }
}

/// Top-level body of `GET place/details/json`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub result: serde_json::Value,

    #[serde(default)]
    pub html_attributions: Vec<String>,
}

/// Top-level body of `GET geocode/json`.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}
