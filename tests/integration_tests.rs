use async_trait::async_trait;
use placebar::prelude::*;
use std::sync::Mutex;

/// Provider stub returning canned batches in order
struct ScriptedProvider {
    batches: Mutex<Vec<Vec<Place>>>,
    seen_bias: Mutex<Vec<Option<LatLngBounds>>>,
}

impl ScriptedProvider {
    fn new(batches: Vec<Vec<Place>>) -> Self {
        Self {
            batches: Mutex::new(batches),
            seen_bias: Mutex::new(Vec::new()),
        }
    }

    fn last_bias(&self) -> Option<LatLngBounds> {
        self.seen_bias.lock().unwrap().last().cloned().flatten()
    }
}

#[async_trait]
impl SearchProvider for ScriptedProvider {
    async fn search(&self, _query: &str, bias: Option<&LatLngBounds>) -> Result<Vec<Place>> {
        self.seen_bias.lock().unwrap().push(bias.cloned());
        let mut batches = self.batches.lock().unwrap();
        if batches.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(batches.remove(0))
        }
    }
}

struct FailingProvider;

#[async_trait]
impl SearchProvider for FailingProvider {
    async fn search(&self, _query: &str, _bias: Option<&LatLngBounds>) -> Result<Vec<Place>> {
        Err(Box::new(PlacebarError::Provider(
            "backend unavailable".to_string(),
        )))
    }
}

fn place(name: &str, lat: f64, lng: f64) -> Place {
    Place {
        name: name.to_string(),
        formatted_address: Some(format!("{} street", name)),
        formatted_phone_number: Some("+1 555-0123".to_string()),
        rating: Some(4.2),
        geometry: Some(Geometry {
            location: LatLng::new(lat, lng),
            viewport: None,
        }),
    }
}

fn setup() -> (Map, SearchBarController) {
    let mut map = Map::new(LatLng::new(0.0, 0.0), 2.0, Point::new(800.0, 600.0));
    let mut controller = SearchBarController::new();
    controller.attach(&mut map);
    (map, controller)
}

/// Drains the map's event queue through the controller's named handlers
fn pump(map: &mut Map, controller: &mut SearchBarController) -> Vec<MapEvent> {
    let events = map.process_events();
    for event in &events {
        controller.handle_event(map, event).unwrap();
    }
    events
}

#[tokio::test]
async fn search_places_markers_and_fits_viewport() {
    let (mut map, mut controller) = setup();
    let provider = ScriptedProvider::new(vec![vec![
        place("Cafe A", 1.0, 1.0),
        place("Cafe B", 3.0, 3.0),
    ]]);

    controller.search_box_mut().set_query("cafe");
    controller.run_search(&mut map, &provider).await.unwrap();

    assert_eq!(map.marker_count(), 2);
    assert_eq!(controller.marker_ids(), map.marker_ids());
    // Fit centers on the union of the two points
    assert!((map.viewport.center.lat - 2.0).abs() < 0.001);
    assert!((map.viewport.center.lng - 2.0).abs() < 0.001);

    let events = pump(&mut map, &mut controller);
    assert!(events
        .iter()
        .any(|e| matches!(e, MapEvent::ViewChanged { .. })));
}

#[tokio::test]
async fn empty_result_leaves_map_untouched() {
    let (mut map, mut controller) = setup();
    let provider = ScriptedProvider::new(vec![vec![place("Cafe A", 1.0, 1.0)], vec![]]);

    controller.search_box_mut().set_query("cafe");
    controller.run_search(&mut map, &provider).await.unwrap();
    pump(&mut map, &mut controller);
    let ids_before = controller.marker_ids();
    let viewport_before = map.viewport.clone();

    controller.search_box_mut().set_query("nothing matches");
    controller.run_search(&mut map, &provider).await.unwrap();

    assert_eq!(controller.marker_ids(), ids_before);
    assert_eq!(map.viewport, viewport_before);
    assert!(map.process_events().is_empty());
}

#[tokio::test]
async fn successive_batches_never_leave_stale_markers() {
    let (mut map, mut controller) = setup();
    let provider = ScriptedProvider::new(vec![
        vec![place("Old A", 1.0, 1.0), place("Old B", 2.0, 2.0)],
        vec![place("New", 40.0, -70.0)],
    ]);

    controller.search_box_mut().set_query("old");
    controller.run_search(&mut map, &provider).await.unwrap();
    pump(&mut map, &mut controller);
    assert_eq!(map.marker_count(), 2);

    controller.search_box_mut().set_query("new");
    controller.run_search(&mut map, &provider).await.unwrap();

    assert_eq!(map.marker_count(), 1);
    let id = &controller.marker_ids()[0];
    assert_eq!(map.marker(id).unwrap().title(), "New");
}

#[tokio::test]
async fn clicking_a_marker_opens_the_shared_popup() {
    let (mut map, mut controller) = setup();
    let provider = ScriptedProvider::new(vec![vec![place("Cafe A", 1.0, 1.0)]]);

    controller.search_box_mut().set_query("cafe");
    controller.run_search(&mut map, &provider).await.unwrap();
    pump(&mut map, &mut controller);

    // The fit centered the view on the marker, so it sits mid-screen
    let marker_id = controller.marker_ids()[0].clone();
    let pixel = map
        .viewport
        .lat_lng_to_pixel(&map.marker(&marker_id).unwrap().position());
    map.click_at(pixel);
    let events = pump(&mut map, &mut controller);

    assert!(events
        .iter()
        .any(|e| matches!(e, MapEvent::MarkerClick { .. })));
    let popup = controller.popup();
    assert!(popup.is_open());
    assert_eq!(popup.anchor().unwrap().marker_id, marker_id);
    assert!(popup.content().starts_with("Cafe A\nCafe A street\n+1 555-0123\nRating: 4.2"));
    assert!(popup.content().ends_with("Location: (1, 1)"));
}

#[tokio::test]
async fn viewport_changes_keep_provider_bias_in_sync() {
    let (mut map, mut controller) = setup();
    let provider = ScriptedProvider::new(vec![vec![place("Cafe A", 45.0, 45.0)], Vec::new()]);

    controller.search_box_mut().set_query("cafe");
    controller.run_search(&mut map, &provider).await.unwrap();
    // The fit moved the view; pumping delivers the new bounds to the search box
    pump(&mut map, &mut controller);

    controller.run_search(&mut map, &provider).await.unwrap();

    let bias = provider.last_bias().expect("bias should be set");
    assert!(bias.contains(&LatLng::new(45.0, 45.0)));
}

#[tokio::test]
async fn provider_errors_propagate_and_leave_markers_alone() {
    let (mut map, mut controller) = setup();
    let provider = ScriptedProvider::new(vec![vec![place("Cafe A", 1.0, 1.0)]]);

    controller.search_box_mut().set_query("cafe");
    controller.run_search(&mut map, &provider).await.unwrap();
    pump(&mut map, &mut controller);

    let result = controller.run_search(&mut map, &FailingProvider).await;

    assert!(result.is_err());
    assert_eq!(map.marker_count(), 1);
    assert_eq!(controller.marker_ids().len(), 1);
}
