//! Headless end-to-end run: search Photon, place markers, print the result.
//!
//! Run with: cargo run --example headless_search -- "brandenburg gate"

use placebar::prelude::*;

#[tokio::main]
async fn main() -> placebar::Result<()> {
    placebar::init_logging();

    let query = std::env::args().nth(1).unwrap_or_else(|| "cafe".to_string());

    let mut map = Map::new(LatLng::new(52.52, 13.40), 12.0, Point::new(800.0, 600.0));
    let mut controller = SearchBarController::new();
    controller.attach(&mut map);

    let provider = PhotonProvider::new();
    controller.search_box_mut().set_query(&query);
    controller.run_search(&mut map, &provider).await?;

    for event in map.process_events() {
        controller.handle_event(&mut map, &event)?;
    }

    println!("query: {:?}", query);
    println!(
        "view: center {} zoom {}",
        map.viewport.center, map.viewport.zoom
    );
    for id in controller.marker_ids() {
        if let Some(marker) = map.marker(&id) {
            println!("  {} @ {} {}", id, marker.position(), marker.title());
        }
    }

    Ok(())
}
