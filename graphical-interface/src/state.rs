use places_client::Place;

/// Tracks the place picked on the map or in the list.
pub struct SelectionState {
    pub place: Option<Place>,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self { place: None }
    }

    /// If the provided place is already selected, it will be deselected.
    /// Otherwise, it will be selected.
    pub fn toggle_place_selection(&mut self, place: &Place) {
        if self.place.as_ref() == Some(place) {
            self.place = None;
        } else {
            self.place = Some(place.clone());
        }
    }
}

/// The places of the last successful region search.
pub struct ViewState {
    pub places: Vec<Place>,
}

impl ViewState {
    pub fn new() -> Self {
        Self { places: Vec::new() }
    }

    pub fn replace_places(&mut self, places: Vec<Place>) {
        self.places = places;
    }

    pub fn contains(&self, place: &Place) -> bool {
        self.places.iter().any(|p| p == place)
    }
}
