use egui::{Align2, Color32, RichText};
use region_search::LookupError;

use crate::strings::UiStrings;

/// The "search this area" button floating over the bottom of the map.
///
/// It is only drawn while the prompt is visible. While a search runs the
/// label switches to the searching text with a spinner.
pub struct WidgetSearchArea<'a> {
    strings: &'a UiStrings,
    visible: bool,
    loading: bool,
    error: Option<&'a LookupError>,
}

impl<'a> WidgetSearchArea<'a> {
    pub fn new(
        strings: &'a UiStrings,
        visible: bool,
        loading: bool,
        error: Option<&'a LookupError>,
    ) -> Self {
        Self {
            strings,
            visible,
            loading,
            error,
        }
    }

    /// Returns true when the button was clicked.
    pub fn show(self, ctx: &egui::Context) -> bool {
        let mut clicked = false;

        egui::Area::new("search_area_button".into())
            .anchor(Align2::CENTER_BOTTOM, [0., -20.])
            .show(ctx, |ui| {
                if let Some(error) = self.error {
                    ui.label(
                        RichText::new(format!("{}: {}", self.strings.search_failed, error))
                            .color(Color32::from_rgb(220, 38, 38)),
                    );
                }

                if !self.visible {
                    return;
                }

                let button = egui::Button::new(
                    RichText::new(if self.loading {
                        &self.strings.searching_area
                    } else {
                        &self.strings.search_this_area
                    })
                    .strong()
                    .size(16.),
                )
                .rounding(20.)
                .min_size([180., 44.].into());

                ui.horizontal(|ui| {
                    if ui.add(button).clicked() {
                        clicked = true;
                    }
                    if self.loading {
                        ui.spinner();
                    }
                });
            });

        clicked
    }
}
