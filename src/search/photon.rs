use crate::{
    core::geo::{LatLng, LatLngBounds},
    search::{place::Geometry, place::Place, provider::SearchProvider},
    Result,
};
use async_trait::async_trait;
use serde::Deserialize;

/// Configuration for the Photon geocoding backend
#[derive(Debug, Clone)]
pub struct PhotonOptions {
    pub base_url: String,
    /// Maximum number of candidates per query
    pub limit: usize,
    /// Optional BCP-47 language code for localized results
    pub language: Option<String>,
}

impl Default for PhotonOptions {
    fn default() -> Self {
        Self {
            base_url: "https://photon.komoot.io".to_string(),
            limit: 10,
            language: None,
        }
    }
}

/// Place-search provider backed by the Komoot Photon geocoding API.
///
/// Photon returns GeoJSON feature collections; features carry an optional
/// `extent` rectangle which maps onto a result viewport. Phone numbers and
/// ratings are not part of the Photon schema and always decode to `None`.
pub struct PhotonProvider {
    client: reqwest::Client,
    options: PhotonOptions,
}

impl PhotonProvider {
    pub fn new() -> Self {
        Self::with_options(PhotonOptions::default())
    }

    pub fn with_options(options: PhotonOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
        }
    }
}

impl Default for PhotonProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for PhotonProvider {
    async fn search(&self, query: &str, bias: Option<&LatLngBounds>) -> Result<Vec<Place>> {
        let url = format!("{}/api", self.options.base_url);

        let mut request = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .query(&[("limit", self.options.limit.to_string())]);

        if let Some(bounds) = bias {
            // Photon bbox order is minLon,minLat,maxLon,maxLat
            request = request.query(&[(
                "bbox",
                format!(
                    "{},{},{},{}",
                    bounds.south_west.lng,
                    bounds.south_west.lat,
                    bounds.north_east.lng,
                    bounds.north_east.lat
                ),
            )]);
        }

        if let Some(lang) = &self.options.language {
            request = request.query(&[("lang", lang)]);
        }

        log::debug!("photon search: {:?}", query);

        let response: PhotonResponse = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.into_places())
    }
}

#[derive(Debug, Deserialize)]
struct PhotonResponse {
    #[serde(default)]
    features: Vec<PhotonFeature>,
}

#[derive(Debug, Deserialize)]
struct PhotonFeature {
    geometry: Option<PhotonGeometry>,
    #[serde(default)]
    properties: PhotonProperties,
}

#[derive(Debug, Deserialize)]
struct PhotonGeometry {
    /// GeoJSON position: [lon, lat]
    coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct PhotonProperties {
    name: Option<String>,
    housenumber: Option<String>,
    street: Option<String>,
    city: Option<String>,
    country: Option<String>,
    /// Bounding box: [minLon, maxLat, maxLon, minLat]
    extent: Option<Vec<f64>>,
}

impl PhotonResponse {
    fn into_places(self) -> Vec<Place> {
        self.features.into_iter().map(PhotonFeature::into_place).collect()
    }
}

impl PhotonFeature {
    fn into_place(self) -> Place {
        let geometry = self.geometry.as_ref().and_then(|g| {
            let (lng, lat) = match g.coordinates.as_slice() {
                [lng, lat, ..] => (*lng, *lat),
                _ => return None,
            };
            Some(Geometry {
                location: LatLng::new(lat, lng),
                viewport: self.properties.extent.as_deref().and_then(extent_to_bounds),
            })
        });

        let props = self.properties;
        let name = props
            .name
            .clone()
            .or_else(|| props.street.clone())
            .or_else(|| props.city.clone())
            .unwrap_or_else(|| "Unnamed place".to_string());

        Place {
            name,
            formatted_address: format_address(&props),
            formatted_phone_number: None,
            rating: None,
            geometry,
        }
    }
}

fn extent_to_bounds(extent: &[f64]) -> Option<LatLngBounds> {
    match extent {
        [min_lon, max_lat, max_lon, min_lat] => Some(LatLngBounds::from_coords(
            *min_lat, *min_lon, *max_lat, *max_lon,
        )),
        _ => None,
    }
}

fn format_address(props: &PhotonProperties) -> Option<String> {
    let street = match (&props.street, &props.housenumber) {
        (Some(street), Some(number)) => Some(format!("{} {}", street, number)),
        (Some(street), None) => Some(street.clone()),
        _ => None,
    };

    let parts: Vec<String> = [street, props.city.clone(), props.country.clone()]
        .into_iter()
        .flatten()
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [13.3888, 52.5170] },
                "properties": {
                    "name": "Brandenburg Gate",
                    "city": "Berlin",
                    "country": "Germany",
                    "extent": [13.3772, 52.5186, 13.3892, 52.5151]
                }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [2.3522, 48.8566] },
                "properties": {
                    "street": "Rue de Rivoli",
                    "housenumber": "1",
                    "city": "Paris",
                    "country": "France"
                }
            },
            {
                "type": "Feature",
                "properties": { "name": "Nowhere" }
            }
        ]
    }"#;

    #[test]
    fn test_response_maps_to_places() {
        let response: PhotonResponse = serde_json::from_str(RESPONSE).unwrap();
        let places = response.into_places();
        assert_eq!(places.len(), 3);

        let gate = &places[0];
        assert_eq!(gate.name, "Brandenburg Gate");
        assert_eq!(gate.formatted_address.as_deref(), Some("Berlin, Germany"));
        assert_eq!(gate.formatted_phone_number, None);
        assert_eq!(gate.rating, None);

        let geometry = gate.geometry.as_ref().unwrap();
        assert_eq!(geometry.location, LatLng::new(52.5170, 13.3888));
        let viewport = geometry.viewport.as_ref().unwrap();
        assert_eq!(viewport.south_west, LatLng::new(52.5151, 13.3772));
        assert_eq!(viewport.north_east, LatLng::new(52.5186, 13.3892));
    }

    #[test]
    fn test_street_name_fallback_and_address_compose() {
        let response: PhotonResponse = serde_json::from_str(RESPONSE).unwrap();
        let places = response.into_places();

        let rivoli = &places[1];
        assert_eq!(rivoli.name, "Rue de Rivoli");
        assert_eq!(
            rivoli.formatted_address.as_deref(),
            Some("Rue de Rivoli 1, Paris, France")
        );
        assert!(rivoli.geometry.as_ref().unwrap().viewport.is_none());
    }

    #[test]
    fn test_feature_without_geometry_yields_geometry_less_place() {
        let response: PhotonResponse = serde_json::from_str(RESPONSE).unwrap();
        let places = response.into_places();

        assert_eq!(places[2].name, "Nowhere");
        assert!(places[2].geometry.is_none());
    }
}
