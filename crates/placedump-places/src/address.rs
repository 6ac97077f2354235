//! Decomposition of a place's `address_components` list into a canonical
//! street/city/state/postal-code record.
//!
//! Every component carries one or more type tags (`"street_number"`,
//! `"locality"`, `"political"`, ...) and a short display name. Each tag of
//! each component is looked up in a fixed tag → slot table; unrecognized tags
//! are ignored. When two components fill the same slot the later one wins,
//! so duplicate tags resolve deterministically by input order.

use crate::error::PlacesError;
use crate::types::AddressComponent;

/// Required address fields, in the order they are reported when missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    StreetNumber,
    Route,
    City,
    State,
    PostalCode,
}

impl AddressField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AddressField::StreetNumber => "street_number",
            AddressField::Route => "route",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::PostalCode => "postal_code",
        }
    }
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Subpremise,
    StreetNumber,
    Route,
    City,
    State,
    PostalCode,
}

fn slot_for_tag(tag: &str) -> Option<Slot> {
    match tag {
        "subpremise" => Some(Slot::Subpremise),
        "street_number" => Some(Slot::StreetNumber),
        "route" => Some(Slot::Route),
        "locality" => Some(Slot::City),
        "administrative_area_level_1" => Some(Slot::State),
        "postal_code" => Some(Slot::PostalCode),
        _ => None,
    }
}

/// Raw slot values captured from a component list, before any field is
/// required to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub subpremise: Option<String>,
    pub street_number: Option<String>,
    pub route: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

impl AddressParts {
    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::Subpremise => &mut self.subpremise,
            Slot::StreetNumber => &mut self.street_number,
            Slot::Route => &mut self.route,
            Slot::City => &mut self.city,
            Slot::State => &mut self.state,
            Slot::PostalCode => &mut self.postal_code,
        }
    }

    /// Required fields that were never captured, in [`AddressField`] order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<AddressField> {
        [
            (AddressField::StreetNumber, &self.street_number),
            (AddressField::Route, &self.route),
            (AddressField::City, &self.city),
            (AddressField::State, &self.state),
            (AddressField::PostalCode, &self.postal_code),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| field)
        .collect()
    }
}

/// A place address split into the exported columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAddress {
    /// `"{street_number} {route}"`, followed by `" {subpremise}"` when one
    /// was captured.
    pub address1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Captures recognized slots from `components` in a single pass.
///
/// Values are taken verbatim from `short_name`; no trimming, case folding,
/// or abbreviation expansion is applied.
#[must_use]
pub fn extract_address_parts(components: &[AddressComponent]) -> AddressParts {
    let mut parts = AddressParts::default();
    for component in components {
        for tag in &component.types {
            if let Some(slot) = slot_for_tag(tag) {
                *parts.slot_mut(slot) = Some(component.short_name.clone());
            }
        }
    }
    parts
}

/// Normalizes a place's address components into a [`NormalizedAddress`].
///
/// # Errors
///
/// Returns [`PlacesError::IncompleteAddress`] naming every required field
/// (street number, route, city, state, postal code) that no component
/// supplied. A missing subpremise is not an error.
pub fn normalize_address(
    place_id: &str,
    components: &[AddressComponent],
) -> Result<NormalizedAddress, PlacesError> {
    let parts = extract_address_parts(components);
    let missing = parts.missing_fields();

    let AddressParts {
        subpremise,
        street_number,
        route,
        city,
        state,
        postal_code,
    } = parts;

    let (Some(street_number), Some(route), Some(city), Some(state), Some(postal_code)) =
        (street_number, route, city, state, postal_code)
    else {
        return Err(PlacesError::IncompleteAddress {
            place_id: place_id.to_owned(),
            missing,
        });
    };

    let mut address1 = format!("{street_number} {route}");
    if let Some(subpremise) = subpremise.filter(|s| !s.is_empty()) {
        address1.push(' ');
        address1.push_str(&subpremise);
    }

    Ok(NormalizedAddress {
        address1,
        city,
        state,
        postal_code,
    })
}

#[cfg(test)]
#[path = "address_test.rs"]
mod tests;
