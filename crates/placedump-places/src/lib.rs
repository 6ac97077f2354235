pub mod address;
pub mod client;
pub mod error;
pub mod pagination;
pub mod source;
pub mod types;

pub use address::{normalize_address, AddressField, NormalizedAddress};
pub use client::GooglePlacesClient;
pub use error::PlacesError;
pub use pagination::{collect_places, CollectOptions, PlaceCollection};
pub use source::PlacesSource;
pub use types::{AddressComponent, PlaceDetail, PlaceSummary, SearchPage};
