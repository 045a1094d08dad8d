pub mod marker;

pub use marker::{Marker, MarkerLayer};
