use std::fmt;

use serde::Serialize;

use crate::{CategoryFilter, Coordinate};

/// Radius of every region search.
pub const SEARCH_RADIUS_METERS: u32 = 5000;

/// Parameters of a single nearby-places lookup.
///
/// Serializes to the query fields the places service expects: `lat`, `lng`,
/// `radius` and, only when filtering, `categories`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    #[serde(rename = "radius")]
    pub radius_meters: u32,
    #[serde(rename = "categories", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SearchRequest {
    /// Builds the request for the region around `center`. Without a center the
    /// search is made around `(0, 0)`.
    pub fn for_region(center: Option<Coordinate>, category: &CategoryFilter) -> Self {
        let center = center.unwrap_or_default();
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            radius_meters: SEARCH_RADIUS_METERS,
            category: category.as_query().map(str::to_string),
        }
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat={} lng={} radius={}m",
            self.latitude, self.longitude, self.radius_meters
        )?;
        if let Some(category) = &self.category {
            write!(f, " category={}", category)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_filter_omits_category() {
        let request = SearchRequest::for_region(
            Some(Coordinate::new(35.7, 51.4)),
            &CategoryFilter::All,
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"lat": 35.7, "lng": 51.4, "radius": 5000})
        );
    }

    #[test]
    fn test_request_without_center_uses_origin() {
        let request = SearchRequest::for_region(None, &CategoryFilter::from("hospital"));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"lat": 0.0, "lng": 0.0, "radius": 5000, "categories": "hospital"})
        );
    }

    #[test]
    fn test_display_includes_category_only_when_filtering() {
        let all = SearchRequest::for_region(None, &CategoryFilter::All);
        let parks = SearchRequest::for_region(None, &CategoryFilter::from("parks"));

        assert_eq!(all.to_string(), "lat=0 lng=0 radius=5000m");
        assert_eq!(parks.to_string(), "lat=0 lng=0 radius=5000m category=parks");
    }
}
