//! HTTP client for the nearby-places service used by the region search prompt.

mod place;
mod service;

pub use place::Place;
pub use service::{HttpPlacesService, ServiceConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
