//! The request/response seam the pagination driver is written against.
//!
//! [`crate::GooglePlacesClient`] is the production implementation; tests
//! substitute scripted fakes.

use crate::error::PlacesError;
use crate::types::{PlaceDetail, SearchPage};

#[allow(async_fn_in_trait)]
pub trait PlacesSource {
    /// Fetches one page of text search results.
    ///
    /// `page_token` is `None` for the first page and otherwise the token
    /// returned by the previous page, passed back verbatim.
    async fn text_search(
        &self,
        query: &str,
        location: &str,
        page_token: Option<&str>,
    ) -> Result<SearchPage, PlacesError>;

    /// Fetches the full detail record for one place.
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError>;
}
