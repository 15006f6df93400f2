use std::time::Duration;

use region_search::{LookupError, PlacesLookup, SearchRequest};
use reqwest::blocking::Client;

use crate::place::{NearbyResponse, Place};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/team4/api/facilities/nearby/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the places service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Looks up nearby places over HTTP.
///
/// Each search is a `GET` on the configured URL with the request fields as
/// query parameters.
pub struct HttpPlacesService {
    client: Client,
    api_url: String,
}

impl HttpPlacesService {
    pub fn new(config: ServiceConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LookupError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl PlacesLookup for HttpPlacesService {
    type Place = Place;

    fn get_nearby_facilities(&self, request: &SearchRequest) -> Result<Vec<Place>, LookupError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(request)
            .send()
            .map_err(|e| LookupError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json::<NearbyResponse>()
            .map(NearbyResponse::into_places)
            .map_err(|e| {
                if e.is_decode() {
                    LookupError::Decode(e.to_string())
                } else {
                    LookupError::Connection(e.to_string())
                }
            })
    }
}
