use crate::{
    core::{
        geo::{BoundsAccumulator, LatLngBounds},
        map::Map,
    },
    events::MapEvent,
    layers::marker::Marker,
    search::{place::Place, provider::SearchProvider},
    ui::{
        popup::DetailPopup,
        search_box::{ControlPosition, ControlSlot, SearchBox},
    },
    Result,
};

/// Bookkeeping for one marker the controller placed
#[derive(Debug, Clone)]
struct PlacedMarker {
    marker_id: String,
    summary: String,
}

/// Bridges a search box and a place-search provider to map rendering.
///
/// On each result batch the controller clears the markers it previously
/// placed, creates one titled marker per geometry-bearing result, records
/// the detail text shown when that marker is clicked, and fits the map
/// viewport around the whole batch. The detail popup is a single shared
/// overlay whose content is overwritten per click.
///
/// All handlers are synchronous and take `&mut self` plus the map, so a
/// batch always runs to completion before the next event is dispatched;
/// clear-then-repopulate cannot race.
pub struct SearchBarController {
    search_box: SearchBox,
    popup: DetailPopup,
    placed: Vec<PlacedMarker>,
    marker_seq: u64,
}

impl SearchBarController {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            popup: DetailPopup::new(),
            placed: Vec::new(),
            marker_seq: 0,
        }
    }

    /// Registers the search box as a map control and seeds the result bias
    /// region from the currently visible area
    pub fn attach(&mut self, map: &mut Map) {
        map.add_control(ControlSlot::new("search-box", ControlPosition::TopLeft));
        self.search_box.set_bias(map.viewport.bounds());
    }

    /// Dispatches a map event to the matching named handler
    pub fn handle_event(&mut self, map: &mut Map, event: &MapEvent) -> Result<()> {
        match event {
            MapEvent::ViewChanged { bounds, .. } => {
                self.on_view_changed(bounds);
                Ok(())
            }
            MapEvent::MarkerClick { marker_id, .. } => {
                self.on_marker_click(map, marker_id);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Keeps the search box bias region synced with the visible map area
    pub fn on_view_changed(&mut self, bounds: &LatLngBounds) {
        self.search_box.set_bias(bounds.clone());
    }

    /// Runs the current query against a provider and renders the results
    pub async fn run_search(&mut self, map: &mut Map, provider: &dyn SearchProvider) -> Result<()> {
        let places = provider
            .search(self.search_box.query(), self.search_box.bias())
            .await?;
        self.on_places_changed(map, &places)
    }

    /// Handles a fresh batch of search results.
    ///
    /// An empty batch is an explicit no-op: previously placed markers stay
    /// untouched and no viewport fit happens. Otherwise the old markers are
    /// cleared (a no-op on the first batch), one marker is created per
    /// result with geometry, and the viewport is fitted around the union of
    /// all per-result contributions.
    pub fn on_places_changed(&mut self, map: &mut Map, places: &[Place]) -> Result<()> {
        if places.is_empty() {
            return Ok(());
        }

        for placed in self.placed.drain(..) {
            map.remove_marker(&placed.marker_id);
        }

        let mut fit_bounds = BoundsAccumulator::new();

        for place in places {
            let geometry = match &place.geometry {
                Some(geometry) => geometry,
                None => {
                    log::warn!("Returned place contains no geometry");
                    continue;
                }
            };

            let marker_id = format!("place-{}", self.marker_seq);
            self.marker_seq += 1;

            map.add_marker(Marker::new(&marker_id, geometry.location).with_title(&place.name));
            self.placed.push(PlacedMarker {
                marker_id,
                summary: place.summary(),
            });

            match &geometry.viewport {
                Some(viewport) => fit_bounds.extend_bounds(viewport),
                None => fit_bounds.extend_point(&geometry.location),
            }
        }

        map.fit_bounds(&fit_bounds.bounds_or_default())
    }

    /// Shows the shared detail popup for a clicked marker.
    /// Clicks on markers this controller did not place are ignored.
    pub fn on_marker_click(&mut self, map: &Map, marker_id: &str) {
        let placed = match self.placed.iter().find(|p| p.marker_id == marker_id) {
            Some(placed) => placed,
            None => return,
        };
        let marker = match map.marker(marker_id) {
            Some(marker) => marker,
            None => return,
        };

        self.popup.set_content(placed.summary.clone());
        self.popup.open_at(marker.id(), marker.position());
    }

    /// Ids of the markers placed by the most recent batch, in result order
    pub fn marker_ids(&self) -> Vec<String> {
        self.placed.iter().map(|p| p.marker_id.clone()).collect()
    }

    pub fn popup(&self) -> &DetailPopup {
        &self.popup
    }

    pub fn popup_mut(&mut self) -> &mut DetailPopup {
        &mut self.popup
    }

    pub fn search_box(&self) -> &SearchBox {
        &self.search_box
    }

    pub fn search_box_mut(&mut self) -> &mut SearchBox {
        &mut self.search_box
    }
}

impl Default for SearchBarController {
    fn default() -> Self {
        Self::new()
    }
}
