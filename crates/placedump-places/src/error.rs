use thiserror::Error;

use crate::address::AddressField;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a non-success `status` field.
    #[error("Places API returned {status}: {message}")]
    Api { status: String, message: String },

    #[error("location \"{location}\" could not be geocoded")]
    LocationNotFound { location: String },

    #[error("incomplete address for place {place_id}: missing {}", join_fields(.missing))]
    IncompleteAddress {
        place_id: String,
        missing: Vec<AddressField>,
    },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

fn join_fields(fields: &[AddressField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
