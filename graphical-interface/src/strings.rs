use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::config::ConfigError;

/// User-facing text of the map.
///
/// Defaults are English. A CSV file with `key,text` rows replaces any of
/// them, which is how translations are supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct UiStrings {
    pub window_title: String,
    pub search_this_area: String,
    pub searching_area: String,
    pub search_failed: String,
    pub category: String,
    pub results: String,
    pub no_results: String,
    pub distance: String,
    pub rating: String,
}

impl Default for UiStrings {
    fn default() -> Self {
        Self {
            window_title: "Region Search".to_string(),
            search_this_area: "Search this area".to_string(),
            searching_area: "Searching area...".to_string(),
            search_failed: "Search failed".to_string(),
            category: "Category".to_string(),
            results: "Places".to_string(),
            no_results: "No places found".to_string(),
            distance: "Distance".to_string(),
            rating: "Rating".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StringRow {
    key: String,
    text: String,
}

impl UiStrings {
    pub fn from_csv(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)
            .map_err(|e| ConfigError::Strings(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(file)
    }

    /// Reads `key,text` rows on top of the defaults. Unknown keys are an error
    /// so that typos in translation files do not go unnoticed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let mut strings = Self::default();
        let mut reader = csv::Reader::from_reader(reader);

        for row in reader.deserialize() {
            let row: StringRow = row?;
            let slot = match row.key.trim() {
                "window_title" => &mut strings.window_title,
                "search_this_area" => &mut strings.search_this_area,
                "searching_area" => &mut strings.searching_area,
                "search_failed" => &mut strings.search_failed,
                "category" => &mut strings.category,
                "results" => &mut strings.results,
                "no_results" => &mut strings.no_results,
                "distance" => &mut strings.distance,
                "rating" => &mut strings.rating,
                other => return Err(ConfigError::Strings(format!("unknown key {}", other))),
            };
            *slot = row.text;
        }

        Ok(strings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_override_defaults() {
        let csv = "key,text\nsearch_this_area,جستجوی این منطقه\nsearching_area,جستجوی منطقه...\n";

        let strings = UiStrings::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(strings.search_this_area, "جستجوی این منطقه");
        assert_eq!(strings.searching_area, "جستجوی منطقه...");
        assert_eq!(strings.results, UiStrings::default().results);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let csv = "key,text\nsearch_the_area,Search\n";

        assert!(matches!(
            UiStrings::from_reader(csv.as_bytes()),
            Err(ConfigError::Strings(_))
        ));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = UiStrings::from_csv(Path::new("/nonexistent/strings.csv"));

        assert!(result.is_err());
    }
}
