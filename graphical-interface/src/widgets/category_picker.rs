use region_search::ALL_CATEGORIES;

use crate::strings::UiStrings;

/// Categories offered by the picker. The first one disables filtering.
pub const CATEGORIES: [&str; 7] = [
    ALL_CATEGORIES,
    "hotel",
    "restaurant",
    "hospital",
    "park",
    "museum",
    "cafe",
];

/// A combo box choosing the category filter of the region search.
pub struct WidgetCategoryPicker {
    selected: String,
}

impl WidgetCategoryPicker {
    pub fn new(selected: &str) -> Self {
        Self {
            selected: selected.to_string(),
        }
    }

    /// Shows the picker in the top right corner. Returns the new category
    /// when the user picked a different one.
    pub fn show(&mut self, ctx: &egui::Context, strings: &UiStrings) -> Option<String> {
        let previous = self.selected.clone();

        egui::Area::new("category_picker".into())
            .anchor(egui::Align2::RIGHT_TOP, [-10., 10.])
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(&strings.category);
                        egui::ComboBox::from_label("")
                            .selected_text(self.selected.as_str())
                            .show_ui(ui, |ui| {
                                for category in CATEGORIES {
                                    ui.selectable_value(
                                        &mut self.selected,
                                        category.to_string(),
                                        category,
                                    );
                                }
                            });
                    });
                });
            });

        self.changed_from(&previous)
    }

    fn changed_from(&self, previous: &str) -> Option<String> {
        if self.selected != previous {
            Some(self.selected.clone())
        } else {
            None
        }
    }
}
