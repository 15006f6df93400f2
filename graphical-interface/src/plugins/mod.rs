mod places;
pub use places::Places;
