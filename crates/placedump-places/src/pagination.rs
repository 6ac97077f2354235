//! Token-driven multi-page collection of place records.
//!
//! Each page is a search call followed by one detail call and one address
//! normalization per returned place. A page either contributes all of its
//! records or none: any error inside the page discards what was assembled
//! for it, is logged with the page number, and the loop moves on to the next
//! page index using the token captured before the failure. That can repeat a
//! page (a failed first page is retried without a token on the second
//! attempt), which is accepted in exchange for never aborting the run.
//!
//! The loop stops after `max_pages` attempts, or as soon as a successful page
//! reports that no further page exists.

use std::time::Duration;

use placedump_core::PlaceRecord;

use crate::address::{normalize_address, NormalizedAddress};
use crate::error::PlacesError;
use crate::source::PlacesSource;
use crate::types::{PlaceDetail, PlaceSummary};

/// Bounds and pacing for a collection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Upper bound on page attempts, failed attempts included.
    pub max_pages: u32,
    /// Delay before every page after the first. Google rejects a
    /// `next_page_token` that is used immediately after being issued.
    pub page_delay_ms: u64,
}

/// Everything a collection run produced.
#[derive(Debug, Default)]
pub struct PlaceCollection {
    /// Records in page order, then within-page order.
    pub records: Vec<PlaceRecord>,
    pub pages_attempted: u32,
    /// 1-based page numbers whose contribution was discarded.
    pub failed_pages: Vec<u32>,
}

/// Records assembled from one successful page.
struct Page {
    records: Vec<PlaceRecord>,
    next_page_token: Option<String>,
}

/// Runs the page loop for `query` around `location`.
///
/// Never fails as a whole: page-level errors are logged and reflected in
/// [`PlaceCollection::failed_pages`].
pub async fn collect_places<S: PlacesSource>(
    source: &S,
    query: &str,
    location: &str,
    options: CollectOptions,
) -> PlaceCollection {
    let mut collection = PlaceCollection::default();
    let mut page_token: Option<String> = None;

    for page_number in 1..=options.max_pages {
        if page_number > 1 && options.page_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(options.page_delay_ms)).await;
        }
        collection.pages_attempted += 1;

        match fetch_page(source, query, location, page_token.as_deref(), page_number).await {
            Ok(page) => {
                let place_count = page.records.len();
                collection.records.extend(page.records);
                tracing::info!(
                    page = page_number,
                    places = place_count,
                    has_next_page = page.next_page_token.is_some(),
                    "page collected"
                );

                match page.next_page_token {
                    Some(next) => page_token = Some(next),
                    None => break,
                }
            }
            Err(error) => {
                tracing::warn!(
                    page = page_number,
                    error = %error,
                    "page failed; skipping its results"
                );
                collection.failed_pages.push(page_number);
            }
        }
    }

    collection
}

/// Fetches one search page and assembles a record for every place on it.
///
/// Any error aborts the page; records already built for it are dropped.
async fn fetch_page<S: PlacesSource>(
    source: &S,
    query: &str,
    location: &str,
    page_token: Option<&str>,
    page_number: u32,
) -> Result<Page, PlacesError> {
    let search = source.text_search(query, location, page_token).await?;

    let mut records = Vec::with_capacity(search.places.len());
    for summary in search.places {
        tracing::debug!(
            page = page_number,
            place_id = %summary.place_id,
            name = %summary.name,
            "fetching place details"
        );
        let detail = source.place_details(&summary.place_id).await?;
        let address = normalize_address(&summary.place_id, &detail.address_components)?;
        records.push(build_record(summary, detail, address));
    }

    let next_page_token = if search.has_next_page {
        if search.next_page_token.is_none() {
            tracing::warn!(
                page = page_number,
                "API reported another page without a token; treating as last page"
            );
        }
        search.next_page_token
    } else {
        None
    };

    Ok(Page {
        records,
        next_page_token,
    })
}

fn build_record(
    summary: PlaceSummary,
    detail: PlaceDetail,
    address: NormalizedAddress,
) -> PlaceRecord {
    PlaceRecord {
        geo_location: summary.geo_location(),
        name: summary.name,
        place_id: summary.place_id,
        address1: address.address1,
        city: address.city,
        state: address.state,
        postal_code: address.postal_code,
        formatted_address: detail.formatted_address,
        details: detail.raw,
        local_phone_number: detail.formatted_phone_number,
        international_phone_number: detail.international_phone_number,
        website: detail.website,
        url: detail.url,
        rating: detail.rating,
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
