use std::fmt;

/// Errors produced while looking up nearby places.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    Connection(String), // The service could not be reached
    Status(u16),        // The service answered with a non-success status
    Decode(String),     // The response body was not a list of places
    Dispatch(String),   // The lookup could not be started
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Connection(msg) => write!(f, "Connection error: {}", msg),
            LookupError::Status(code) => write!(f, "Places service returned status {}", code),
            LookupError::Decode(msg) => write!(f, "Invalid places response: {}", msg),
            LookupError::Dispatch(msg) => write!(f, "Could not start the search: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}
