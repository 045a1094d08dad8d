use crate::core::{
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

/// Pixel radius within which a click counts as hitting a marker
const HIT_TOLERANCE_PX: f64 = 12.0;

/// A visual pin placed on the map at a coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    id: String,
    position: LatLng,
    title: String,
}

impl Marker {
    pub fn new(id: impl Into<String>, position: LatLng) -> Self {
        Self {
            id: id.into(),
            position,
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bounds(&self) -> LatLngBounds {
        LatLngBounds::new(self.position, self.position)
    }
}

/// Ordered collection of the markers currently displayed on the map.
///
/// Insertion order is preserved so a search batch renders in result order.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a marker, replacing any existing marker with the same id
    pub fn add(&mut self, marker: Marker) {
        self.markers.retain(|m| m.id != marker.id);
        self.markers.push(marker);
    }

    /// Removes a marker by id, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<Marker> {
        let index = self.markers.iter().position(|m| m.id == id)?;
        Some(self.markers.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Marker ids in insertion order
    pub fn ids(&self) -> Vec<String> {
        self.markers.iter().map(|m| m.id.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Finds the topmost marker within hit tolerance of a screen position
    pub fn hit_test(&self, pixel: &Point, viewport: &Viewport) -> Option<&Marker> {
        self.markers
            .iter()
            .rev()
            .find(|m| viewport.lat_lng_to_pixel(&m.position).distance_to(pixel) <= HIT_TOLERANCE_PX)
    }
}
