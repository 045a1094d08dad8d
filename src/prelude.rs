//! Prelude module for common placebar types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use placebar::prelude::*;`

pub use crate::core::{
    geo::{BoundsAccumulator, LatLng, LatLngBounds, Point},
    map::{Map, MapOptions},
    viewport::Viewport,
};

pub use crate::layers::marker::{Marker, MarkerLayer};

pub use crate::events::{EventManager, MapEvent};

pub use crate::search::{
    controller::SearchBarController,
    photon::{PhotonOptions, PhotonProvider},
    place::{Geometry, Place},
    provider::SearchProvider,
};

pub use crate::ui::{
    popup::DetailPopup,
    search_box::{ControlPosition, ControlSlot, SearchBox},
};

pub use crate::{Error as PlacebarError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
