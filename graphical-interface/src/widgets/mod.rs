mod category_picker;
mod place;
mod places_table;
mod search_area;
mod zoom;
pub use category_picker::WidgetCategoryPicker;
pub use place::WidgetPlace;
pub use places_table::WidgetPlacesTable;
pub use search_area::WidgetSearchArea;
pub use zoom::zoom;
