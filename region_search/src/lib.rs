//! Core of the "search this area" map overlay.
//!
//! The [`RegionSearchPrompt`] follows the map viewport, offers to search the
//! visible region and hands the places found by a [`PlacesLookup`] back to
//! its owner.

mod category;
mod coordinate;
mod errors;
mod lookup;
mod prompt;
mod request;

pub use category::{CategoryFilter, ALL_CATEGORIES};
pub use coordinate::Coordinate;
pub use errors::LookupError;
pub use lookup::PlacesLookup;
pub use prompt::{PromptState, RegionSearchPrompt, RequestId};
pub use request::{SearchRequest, SEARCH_RADIUS_METERS};
