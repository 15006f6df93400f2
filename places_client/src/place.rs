use serde::{de::IgnoredAny, Deserialize};
use serde_json::Value;

/// A facility returned by the places service.
///
/// Field names follow the facility serializers of the service; the aliases
/// accept the longer spellings some endpoints use.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    #[serde(alias = "fac_id", default)]
    pub id: Option<u64>,
    #[serde(alias = "name_fa")]
    pub name: String,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lng: f64,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(alias = "rating", default)]
    pub avg_rating: Option<f64>,
}

impl Place {
    /// A printable category, whether the service sent a plain name or a
    /// nested category object.
    pub fn category_label(&self) -> Option<String> {
        match self.category.as_ref()? {
            Value::String(name) => Some(name.clone()),
            Value::Object(fields) => ["name_en", "name", "name_fa"]
                .iter()
                .find_map(|key| fields.get(*key).and_then(Value::as_str))
                .map(str::to_string),
            _ => None,
        }
    }
}

/// The shapes a nearby-places answer comes in.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum NearbyResponse {
    List(Vec<Place>),
    Nearby { nearby_facilities: Vec<Place> },
    Paged { results: Vec<Place> },
    // Sent instead of an empty list when nothing is in range. Only the key
    // matters, the text is the service's own wording.
    Message {
        #[serde(rename = "message")]
        _text: IgnoredAny,
    },
}

impl NearbyResponse {
    pub(crate) fn into_places(self) -> Vec<Place> {
        match self {
            NearbyResponse::List(places)
            | NearbyResponse::Nearby {
                nearby_facilities: places,
            }
            | NearbyResponse::Paged { results: places } => places,
            NearbyResponse::Message { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Vec<Place> {
        serde_json::from_str::<NearbyResponse>(body)
            .unwrap()
            .into_places()
    }

    #[test]
    fn test_parses_bare_list() {
        let places = parse(r#"[{"id": 7, "name": "Milad Tower", "lat": 35.74, "lng": 51.37}]"#);

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].id, Some(7));
        assert_eq!(places[0].name, "Milad Tower");
        assert_eq!(places[0].category_label(), None);
    }

    #[test]
    fn test_parses_nearby_envelope_with_service_field_names() {
        let places = parse(
            r#"{
                "center": {"fac_id": 1},
                "radius_km": 5,
                "count": 1,
                "nearby_facilities": [{
                    "fac_id": 12,
                    "name_fa": "بیمارستان",
                    "category": {"name_en": "hospital"},
                    "latitude": 35.7,
                    "longitude": 51.4,
                    "distance_km": 1.2
                }]
            }"#,
        );

        assert_eq!(places[0].id, Some(12));
        assert_eq!(places[0].category_label().as_deref(), Some("hospital"));
        assert_eq!(places[0].distance_km, Some(1.2));
    }

    #[test]
    fn test_message_means_no_places() {
        let places = parse(r#"{"message": "nothing in range"}"#);

        assert!(places.is_empty());
    }

    #[test]
    fn test_message_of_any_shape_means_no_places() {
        let places = parse(r#"{"message": {"fa": "هیچ امکاناتی یافت نشد"}}"#);

        assert!(places.is_empty());
    }

    #[test]
    fn test_object_without_known_key_is_rejected() {
        assert!(serde_json::from_str::<NearbyResponse>(r#"{"detail": "x"}"#).is_err());
    }

    #[test]
    fn test_paged_results_are_accepted() {
        let places = parse(
            r#"{"count": 1, "next": null, "results": [{"name": "Cafe", "category": "cafe", "lat": 1.0, "lng": 2.0}]}"#,
        );

        assert_eq!(places[0].category_label().as_deref(), Some("cafe"));
    }
}
