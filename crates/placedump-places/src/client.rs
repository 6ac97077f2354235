//! HTTP client for the Google Places Web Service.
//!
//! Wraps `reqwest` with API key management, `status` envelope checks, and
//! typed response deserialization. A text search location is resolved to
//! coordinates through the Geocoding API before the first page is requested.

use std::time::Duration;

use placedump_core::GeoLocation;
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::source::PlacesSource;
use crate::types::{
    DetailsResponse, GeocodeResponse, PlaceDetail, SearchPage, TextSearchResponse,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";
const DEFAULT_RADIUS_METERS: u32 = 3200;

/// Client for the Google Places text search, place details, and geocoding
/// endpoints.
///
/// Use [`GooglePlacesClient::new`] for production or
/// [`GooglePlacesClient::with_base_url`] to point at a mock server in tests.
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    radius_meters: u32,
}

impl GooglePlacesClient {
    /// Creates a new client pointed at the production Google Maps API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `Url::join` appends endpoint paths
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            radius_meters: DEFAULT_RADIUS_METERS,
        })
    }

    /// Sets the search radius, in meters, around the geocoded location.
    #[must_use]
    pub fn radius_meters(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    /// Resolves a free-form location string to coordinates.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::LocationNotFound`] if the API has no match.
    /// - [`PlacesError::Api`] if the API returns an error status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, location: &str) -> Result<GeoLocation, PlacesError> {
        let url = self.build_url("geocode/json", &[("address", location)])?;
        let body = self.request_json(&url).await?;
        Self::check_api_status(&body)?;

        let response: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("geocode(address={location})"),
                source: e,
            })?;

        response
            .results
            .first()
            .map(|r| r.geometry.location)
            .ok_or_else(|| PlacesError::LocationNotFound {
                location: location.to_owned(),
            })
    }

    /// Builds the full request URL for `path` with percent-encoded query
    /// parameters; the API key is always appended last.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field. `OK` and `ZERO_RESULTS` are
    /// successes; anything else, including a missing `status`, becomes
    /// [`PlacesError::Api`].
    fn check_api_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        match body.get("status").and_then(serde_json::Value::as_str) {
            Some("OK" | "ZERO_RESULTS") => Ok(()),
            None => Err(PlacesError::Api {
                status: "MISSING_STATUS".to_string(),
                message: "response has no status field".to_string(),
            }),
            Some(status) => {
                let message = body
                    .get("error_message")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("no error message")
                    .to_string();
                Err(PlacesError::Api {
                    status: status.to_string(),
                    message,
                })
            }
        }
    }

    fn log_attributions(attributions: &[String]) {
        if !attributions.is_empty() {
            tracing::info!(attributions = ?attributions, "Places API attributions");
        }
    }
}

impl PlacesSource for GooglePlacesClient {
    /// Calls `place/textsearch/json`.
    ///
    /// The first page geocodes `location` and sends `location` + `radius`.
    /// Continuation pages send the token verbatim as `pagetoken` and skip
    /// geocoding, since the API ignores location parameters alongside a
    /// token.
    async fn text_search(
        &self,
        query: &str,
        location: &str,
        page_token: Option<&str>,
    ) -> Result<SearchPage, PlacesError> {
        let url = if let Some(token) = page_token {
            self.build_url(
                "place/textsearch/json",
                &[("query", query), ("pagetoken", token)],
            )?
        } else {
            let coords = self.geocode(location).await?;
            let lat_lng = format!("{},{}", coords.lat, coords.lng);
            let radius = self.radius_meters.to_string();
            self.build_url(
                "place/textsearch/json",
                &[("query", query), ("location", &lat_lng), ("radius", &radius)],
            )?
        };

        let body = self.request_json(&url).await?;
        Self::check_api_status(&body)?;

        let response: TextSearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        Self::log_attributions(&response.html_attributions);
        Ok(SearchPage::from(response))
    }

    /// Calls `place/details/json` and keeps the raw `result` object.
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let url = self.build_url("place/details/json", &[("place_id", place_id)])?;
        let body = self.request_json(&url).await?;
        Self::check_api_status(&body)?;

        let response: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        Self::log_attributions(&response.html_attributions);
        PlaceDetail::from_payload(response.result).map_err(|e| PlacesError::Deserialize {
            context: format!("details result (place_id={place_id})"),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
