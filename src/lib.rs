//! # Placebar
//!
//! A provider-agnostic place search control for interactive Rust maps.
//!
//! The crate wires a text search box to a place-search provider and renders
//! the results as markers on a map: one marker per result, a shared detail
//! popup for whichever marker was last clicked, and a viewport fit around
//! the whole batch.

pub mod core;
pub mod events;
pub mod layers;
pub mod search;
pub mod ui;

// Re-export public API
pub use crate::core::{
    geo::{BoundsAccumulator, LatLng, LatLngBounds, Point},
    map::{Map, MapOptions},
    viewport::Viewport,
};

pub use layers::marker::{Marker, MarkerLayer};

pub use events::{EventManager, MapEvent};

pub use search::{
    controller::SearchBarController,
    photon::{PhotonOptions, PhotonProvider},
    place::{Geometry, Place},
    provider::SearchProvider,
};

pub use ui::{
    popup::DetailPopup,
    search_box::{ControlPosition, ControlSlot, SearchBox},
};

pub mod prelude;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum PlacebarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = PlacebarError;

/// Initializes env_logger for examples and debugging sessions.
/// Safe to call more than once; later calls are ignored.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}
