use crate::{LookupError, SearchRequest};

/// A service able to find the places around a point.
///
/// Implementations are called from a worker thread, one call per search, so
/// they may block for as long as the request takes.
pub trait PlacesLookup: Send + Sync + 'static {
    /// The record returned by the service. The prompt never looks inside it.
    type Place: Send + 'static;

    fn get_nearby_facilities(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Self::Place>, LookupError>;
}
