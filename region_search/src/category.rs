use std::fmt;

/// Category value meaning "do not filter".
pub const ALL_CATEGORIES: &str = "all";

/// The category filter chosen by the owner of the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// The value to send to the lookup service, if any.
    pub fn as_query(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }

    pub fn as_str(&self) -> &str {
        self.as_query().unwrap_or(ALL_CATEGORIES)
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        // Only the exact sentinel disables filtering.
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
