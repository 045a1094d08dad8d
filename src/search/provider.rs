use crate::{core::geo::LatLngBounds, search::place::Place, Result};
use async_trait::async_trait;

/// A place-search backend.
///
/// The controller treats providers as opaque: how a query is resolved
/// (network, index, fixture data) is entirely the provider's business. The
/// optional bias rectangle is the map's currently visible area; providers
/// should prefer, not filter to, results inside it.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Resolves a free-text query to an ordered sequence of candidate places
    async fn search(&self, query: &str, bias: Option<&LatLngBounds>) -> Result<Vec<Place>>;
}
