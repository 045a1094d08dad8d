use crate::{
    core::{
        geo::{LatLng, LatLngBounds, Point},
        viewport::Viewport,
    },
    events::{EventManager, MapEvent},
    layers::marker::{Marker, MarkerLayer},
    ui::search_box::ControlSlot,
    Result,
};

#[derive(Debug, Clone)]
pub struct MapOptions {
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    /// Pixel padding applied when fitting the viewport to bounds
    pub fit_padding: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            min_zoom: None,
            max_zoom: None,
            fit_padding: 20.0,
        }
    }
}

/// Map facade owning the viewport, the displayed markers, registered
/// controls, and the event queue.
pub struct Map {
    pub viewport: Viewport,
    markers: MarkerLayer,
    controls: Vec<ControlSlot>,
    event_manager: EventManager,
    options: MapOptions,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self::with_options(Viewport::new(center, zoom, size), MapOptions::default())
    }

    pub fn with_options(viewport: Viewport, options: MapOptions) -> Self {
        let mut map = Self {
            viewport,
            markers: MarkerLayer::new(),
            controls: Vec::new(),
            event_manager: EventManager::new(),
            options,
        };

        if let (Some(min), Some(max)) = (map.options.min_zoom, map.options.max_zoom) {
            map.viewport.set_zoom_limits(min, max);
        }

        map
    }

    /// Sets the map view to a specific center and zoom
    pub fn set_view(&mut self, center: LatLng, zoom: f64) -> Result<()> {
        let old_center = self.viewport.center;
        let old_zoom = self.viewport.zoom;

        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);

        if self.viewport.center != old_center || self.viewport.zoom != old_zoom {
            self.emit_view_changed();
        }

        Ok(())
    }

    /// Fits the visible viewport to the given bounds
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) -> Result<()> {
        self.viewport
            .fit_bounds(bounds, Some(self.options.fit_padding));
        self.emit_view_changed();
        Ok(())
    }

    fn emit_view_changed(&mut self) {
        self.event_manager.emit(MapEvent::ViewChanged {
            center: self.viewport.center,
            zoom: self.viewport.zoom,
            bounds: self.viewport.bounds(),
        });
    }

    /// Adds a marker to the map
    pub fn add_marker(&mut self, marker: Marker) {
        let marker_id = marker.id().to_string();
        self.markers.add(marker);
        self.event_manager.emit(MapEvent::MarkerAdd { marker_id });
    }

    /// Removes a marker from the map
    pub fn remove_marker(&mut self, marker_id: &str) -> Option<Marker> {
        let removed = self.markers.remove(marker_id);
        if removed.is_some() {
            self.event_manager.emit(MapEvent::MarkerRemove {
                marker_id: marker_id.to_string(),
            });
        }
        removed
    }

    pub fn marker(&self, marker_id: &str) -> Option<&Marker> {
        self.markers.get(marker_id)
    }

    /// Marker ids in display order
    pub fn marker_ids(&self) -> Vec<String> {
        self.markers.ids()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn markers(&self) -> &MarkerLayer {
        &self.markers
    }

    /// Registers a UI element in a fixed map region
    pub fn add_control(&mut self, slot: ControlSlot) {
        self.controls.push(slot);
    }

    pub fn controls(&self) -> &[ControlSlot] {
        &self.controls
    }

    /// Handles a click at a screen position: emits `MarkerClick` for the
    /// topmost marker hit, otherwise a plain map `Click`
    pub fn click_at(&mut self, pixel: Point) {
        if let Some(marker) = self.markers.hit_test(&pixel, &self.viewport) {
            let event = MapEvent::MarkerClick {
                marker_id: marker.id().to_string(),
                position: marker.position(),
            };
            self.event_manager.emit(event);
        } else {
            self.event_manager.emit(MapEvent::Click {
                lat_lng: self.viewport.pixel_to_lat_lng(&pixel),
                pixel,
            });
        }
    }

    /// Register an event listener
    pub fn on<F>(&mut self, event_type: &str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.event_manager.on(event_type, callback);
    }

    /// Process all queued events
    pub fn process_events(&mut self) -> Vec<MapEvent> {
        self.event_manager.process_events()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }
}
