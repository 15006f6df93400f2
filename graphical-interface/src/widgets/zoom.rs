use egui::{Align2, RichText, Ui};
use walkers::MapMemory;

/// Zoom buttons in the bottom right corner of the map.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    egui::Area::new("zoom_buttons".into())
        .anchor(Align2::RIGHT_BOTTOM, [-10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}
