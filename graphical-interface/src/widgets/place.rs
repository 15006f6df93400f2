use egui::{Color32, RichText};
use places_client::Place;

use crate::strings::UiStrings;

/// A window with the details of the selected place.
pub struct WidgetPlace {
    pub selected_place: Place,
}

impl WidgetPlace {
    pub fn new(selected_place: Place) -> Self {
        Self { selected_place }
    }

    /// Returns false once the user closes the window.
    pub fn show(&mut self, ctx: &egui::Context, strings: &UiStrings) -> bool {
        let mut open = true;
        let screen_width = ctx.screen_rect().width();

        egui::Window::new(self.selected_place.name.as_str())
            .resizable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([screen_width - 310., 60.])
            .show(ctx, |ui| {
                ui.set_max_width(280.);
                ui.label(
                    RichText::new(&self.selected_place.name)
                        .strong()
                        .size(20.)
                        .color(Color32::from_rgb(22, 163, 74)),
                );
                if let Some(category) = self.selected_place.category_label() {
                    ui.label(RichText::new(category).size(16.));
                }
                ui.separator();

                ui.label(format!(
                    "{:.5}, {:.5}",
                    self.selected_place.lat, self.selected_place.lng
                ));
                if let Some(distance) = self.selected_place.distance_km {
                    ui.label(format!("{}: {:.1} km", strings.distance, distance));
                }
                if let Some(rating) = self.selected_place.avg_rating {
                    ui.label(format!("{}: {:.1}", strings.rating, rating));
                }
            });

        open
    }
}
