//! Export run orchestration: resolve settings, drive the page loop, write
//! the CSV.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use placedump_core::AppConfig;
use placedump_places::{collect_places, CollectOptions, GooglePlacesClient};

use crate::export;

/// Command-line values that take precedence over the environment.
#[derive(Debug, Default)]
pub(crate) struct ExportOverrides {
    pub query: Option<String>,
    pub location: Option<String>,
    pub pages: Option<u32>,
    pub output: Option<PathBuf>,
}

/// Fully resolved parameters for one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportSettings {
    pub query: String,
    pub location: String,
    pub pages: u32,
    pub output: PathBuf,
}

impl ExportSettings {
    /// Merges CLI overrides over the loaded config. `now` stamps the default
    /// output filename.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the command line nor the environment
    /// supplies a query or a location.
    pub(crate) fn resolve(
        config: &AppConfig,
        overrides: ExportOverrides,
        now: DateTime<Local>,
    ) -> anyhow::Result<Self> {
        let query = overrides
            .query
            .or_else(|| config.query.clone())
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("no search query; set PLACEDUMP_QUERY or pass --query"))?;
        let location = overrides
            .location
            .or_else(|| config.location.clone())
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("no search location; set PLACEDUMP_LOCATION or pass --location")
            })?;
        let pages = overrides.pages.unwrap_or(config.pages);
        let output = overrides
            .output
            .unwrap_or_else(|| PathBuf::from(export::default_filename(&query, &location, pages, now)));

        Ok(Self {
            query,
            location,
            pages,
            output,
        })
    }
}

/// Builds the Places client, collects every page, and writes the CSV.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the CSV cannot be
/// written. Page-level API failures are logged and skipped, not propagated.
pub(crate) async fn run_export(config: &AppConfig, settings: &ExportSettings) -> anyhow::Result<()> {
    let client = GooglePlacesClient::with_base_url(
        &config.places_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Places client: {e}"))?
    .radius_meters(config.radius_meters);

    let options = CollectOptions {
        max_pages: settings.pages,
        page_delay_ms: config.page_delay_ms,
    };

    tracing::info!(
        query = %settings.query,
        location = %settings.location,
        max_pages = settings.pages,
        "starting places export"
    );
    let collection = collect_places(&client, &settings.query, &settings.location, options).await;

    if !collection.failed_pages.is_empty() {
        tracing::warn!(
            failed_pages = ?collection.failed_pages,
            pages_attempted = collection.pages_attempted,
            "some pages failed and were skipped"
        );
    }
    if collection.records.is_empty() {
        tracing::warn!("no places collected; writing header-only CSV");
    }

    export::write_csv(&settings.output, &collection.records)?;

    println!(
        "wrote {} places from {} page(s) to {}",
        collection.records.len(),
        collection.pages_attempted,
        settings.output.display()
    );
    Ok(())
}
