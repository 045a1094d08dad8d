use crate::core::geo::{LatLng, LatLngBounds};
use serde::Deserialize;

/// A place's location point and optional viewport rectangle
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    pub viewport: Option<LatLngBounds>,
}

/// A result record from a place-search provider.
///
/// Read-only from the controller's perspective: providers construct these
/// from their wire responses, the controller only consumes them. Geometry is
/// optional because providers may return address-only candidates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub name: String,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub rating: Option<f64>,
    pub geometry: Option<Geometry>,
}

impl Place {
    /// Fixed-format multi-line detail text: name, formatted address,
    /// formatted phone number, rating, and raw location, in that order.
    /// Absent fields render as "n/a"; callers must ensure geometry exists.
    pub fn summary(&self) -> String {
        let location = self
            .geometry
            .as_ref()
            .map(|g| g.location.to_string())
            .unwrap_or_else(|| "n/a".to_string());

        format!(
            "{}\n{}\n{}\nRating: {}\nLocation: {}",
            self.name,
            self.formatted_address.as_deref().unwrap_or("n/a"),
            self.formatted_phone_number.as_deref().unwrap_or("n/a"),
            self.rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
            location,
        )
    }
}
