use crate::core::geo::{LatLng, LatLngBounds, Point};
use crate::prelude::HashMap;
use std::collections::VecDeque;

/// Map event types that can be emitted by the map
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Map view has changed (center, zoom, or fitted bounds)
    ViewChanged {
        center: LatLng,
        zoom: f64,
        bounds: LatLngBounds,
    },
    /// A marker was clicked
    MarkerClick {
        marker_id: String,
        position: LatLng,
    },
    /// A marker was added to the map
    MarkerAdd { marker_id: String },
    /// A marker was removed from the map
    MarkerRemove { marker_id: String },
    /// Mouse/touch click on the map that hit no marker
    Click { lat_lng: LatLng, pixel: Point },
}

impl MapEvent {
    /// Event-type key used for listener registration
    pub fn event_type(&self) -> &'static str {
        match self {
            MapEvent::ViewChanged { .. } => "viewchanged",
            MapEvent::MarkerClick { .. } => "markerclick",
            MapEvent::MarkerAdd { .. } => "markeradd",
            MapEvent::MarkerRemove { .. } => "markerremove",
            MapEvent::Click { .. } => "click",
        }
    }
}

/// Event listener callback type
pub type EventCallback = Box<dyn Fn(&MapEvent) + Send + Sync>;

/// Event management system for the map.
///
/// Single-threaded dispatch: events are queued by `emit` and delivered in
/// order by `process_events`; each callback runs to completion before the
/// next event is dispatched.
#[derive(Default)]
pub struct EventManager {
    /// Event listeners by event type
    listeners: HashMap<String, Vec<EventCallback>>,
    /// Event queue for processing
    event_queue: VecDeque<MapEvent>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener
    pub fn on<F>(&mut self, event_type: &str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.listeners
            .entry(event_type.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Emit an event to the queue
    pub fn emit(&mut self, event: MapEvent) {
        self.event_queue.push_back(event);
    }

    /// Process all queued events, returning them in dispatch order
    pub fn process_events(&mut self) -> Vec<MapEvent> {
        let events: Vec<_> = self.event_queue.drain(..).collect();

        for event in &events {
            if let Some(callbacks) = self.listeners.get(event.event_type()) {
                for callback in callbacks {
                    callback(event);
                }
            }
        }

        events
    }

    /// Clear all events from the queue
    pub fn clear_events(&mut self) {
        self.event_queue.clear();
    }

    /// Get number of pending events
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_events_dispatch_in_order() {
        let mut manager = EventManager::new();
        manager.emit(MapEvent::MarkerAdd {
            marker_id: "a".to_string(),
        });
        manager.emit(MapEvent::MarkerAdd {
            marker_id: "b".to_string(),
        });

        let events = manager.process_events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            MapEvent::MarkerAdd {
                marker_id: "a".to_string()
            }
        );
        assert_eq!(manager.pending_events(), 0);
    }

    #[test]
    fn test_listener_receives_matching_events_only() {
        let mut manager = EventManager::new();
        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_seen = clicks.clone();

        manager.on("markerclick", move |_| {
            clicks_seen.fetch_add(1, Ordering::SeqCst);
        });

        manager.emit(MapEvent::MarkerClick {
            marker_id: "a".to_string(),
            position: LatLng::new(1.0, 1.0),
        });
        manager.emit(MapEvent::MarkerAdd {
            marker_id: "a".to_string(),
        });
        manager.process_events();

        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }
}
