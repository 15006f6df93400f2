use std::{cell::RefCell, rc::Rc};

use egui::{Color32, Rect, Response, Stroke, Vec2};
use places_client::Place;
use walkers::{Plugin, Position, Projector};

use crate::state::SelectionState;

const MARKER_RADIUS: f32 = 8.;

/// Draws the places found by the last search as clickable markers.
pub struct Places<'a> {
    places: &'a Vec<Place>,
    selection_state: Rc<RefCell<SelectionState>>,
}

impl<'a> Places<'a> {
    pub fn new(places: &'a Vec<Place>, selection_state: Rc<RefCell<SelectionState>>) -> Self {
        Self {
            places,
            selection_state,
        }
    }
}

impl Plugin for Places<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for place in self.places {
            place.draw(ui, projector, &mut self.selection_state.borrow_mut());
        }
    }
}

trait Marker {
    fn draw(&self, ui: &mut egui::Ui, projector: &Projector, selection_state: &mut SelectionState);
}

impl Marker for Place {
    fn draw(&self, ui: &mut egui::Ui, projector: &Projector, selection_state: &mut SelectionState) {
        let screen_position = projector
            .project(Position::from_lat_lon(self.lat, self.lng))
            .to_pos2();

        let clickable_area =
            Rect::from_center_size(screen_position, Vec2::splat(MARKER_RADIUS * 2.5));
        let response = ui.allocate_rect(clickable_area, egui::Sense::click());

        let selected = selection_state.place.as_ref() == Some(self);
        let fill = if selected {
            Color32::from_rgb(22, 163, 74)
        } else if response.hovered() {
            Color32::from_rgb(74, 222, 128)
        } else {
            Color32::from_rgb(34, 197, 94)
        };

        ui.painter().circle(
            screen_position,
            MARKER_RADIUS,
            fill,
            Stroke::new(2., Color32::WHITE),
        );

        let response = response.on_hover_text(&self.name);
        if response.clicked() {
            selection_state.toggle_place_selection(self);
        }
    }
}
