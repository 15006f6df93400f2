use egui_extras::{Column, TableBuilder};

use crate::{
    state::{SelectionState, ViewState},
    strings::UiStrings,
};

/// Lists the places of the last search. Clicking a row toggles its selection.
pub struct WidgetPlacesTable<'a, 'b> {
    pub view_state: &'a ViewState,
    pub selection_state: &'b mut SelectionState,
    pub strings: &'a UiStrings,
}

impl<'a, 'b> WidgetPlacesTable<'a, 'b> {
    pub fn new(
        view_state: &'a ViewState,
        selection_state: &'b mut SelectionState,
        strings: &'a UiStrings,
    ) -> Self {
        Self {
            view_state,
            selection_state,
            strings,
        }
    }

    pub fn show(self, ctx: &egui::Context) {
        egui::Window::new(format!(
            "{} ({})",
            self.strings.results,
            self.view_state.places.len()
        ))
        .resizable(false)
        .movable(false)
        .collapsible(true)
        .fixed_pos([20., 20.])
        .show(ctx, |ui| {
            if self.view_state.places.is_empty() {
                ui.label(&self.strings.no_results);
                return;
            }

            egui::ScrollArea::vertical().max_height(300.).show(ui, |ui| {
                TableBuilder::new(ui)
                    .column(Column::remainder())
                    .column(Column::auto())
                    .column(Column::auto())
                    .sense(egui::Sense::click())
                    .header(20., |mut header| {
                        header.col(|ui| {
                            ui.strong("Name");
                        });
                        header.col(|ui| {
                            ui.strong(&self.strings.category);
                        });
                        header.col(|ui| {
                            ui.strong(&self.strings.distance);
                        });
                    })
                    .body(|mut body| {
                        for place in &self.view_state.places {
                            body.row(18., |mut row| {
                                row.set_selected(
                                    self.selection_state
                                        .place
                                        .as_ref()
                                        .is_some_and(|p| p == place),
                                );

                                row.col(|ui| {
                                    ui.label(&place.name);
                                });
                                row.col(|ui| {
                                    ui.label(place.category_label().unwrap_or_default());
                                });
                                row.col(|ui| {
                                    if let Some(distance) = place.distance_km {
                                        ui.label(format!("{:.1} km", distance));
                                    }
                                });

                                if row.response().clicked() {
                                    self.selection_state.toggle_place_selection(place);
                                }
                            });
                        }
                    });
            });
        });
    }
}
