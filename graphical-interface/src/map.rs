use std::{
    cell::RefCell,
    rc::Rc,
    sync::Arc,
    time::{Duration, Instant},
};

use egui::Context;
use logger::{Color, Logger};
use places_client::HttpPlacesService;
use region_search::{Coordinate, PlacesLookup, RegionSearchPrompt};
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use crate::{
    config::AppConfig,
    plugins,
    state::{SelectionState, ViewState},
    strings::UiStrings,
    viewport::ViewportWatcher,
    widgets::{zoom, WidgetCategoryPicker, WidgetPlace, WidgetPlacesTable, WidgetSearchArea},
};

const SETTLE_AFTER_MS: u64 = 250;
const POLL_TICK_MS: u64 = 100;

/// The map window: tiles, the places found so far and the region search
/// prompt floating over them.
pub struct RegionSearchApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    home: Position,
    prompt: RegionSearchPrompt<HttpPlacesService>,
    viewport: ViewportWatcher,
    view_state: Rc<RefCell<ViewState>>,
    selection_state: Rc<RefCell<SelectionState>>,
    place_widget: Option<WidgetPlace>,
    category_picker: WidgetCategoryPicker,
    strings: UiStrings,
    logger: Option<Logger>,
}

impl RegionSearchApp {
    /// Creates the app and runs the first search around the starting view.
    pub fn new(
        egui_ctx: Context,
        config: AppConfig,
        strings: UiStrings,
        service: HttpPlacesService,
        logger: Option<Logger>,
    ) -> Self {
        let mut map_memory = MapMemory::default();
        if map_memory.set_zoom(config.initial_zoom).is_err() {
            log_warn(
                &logger,
                &format!("invalid initial zoom {}, using default", config.initial_zoom),
            );
        }

        let view_state = Rc::new(RefCell::new(ViewState::new()));
        let found = Rc::clone(&view_state);
        let repaint_ctx = egui_ctx.clone();

        let prompt = start_prompt(
            Arc::new(service),
            &config,
            move |places| {
                found.borrow_mut().replace_places(places);
                repaint_ctx.request_repaint();
            },
            &logger,
        );

        let Coordinate {
            latitude,
            longitude,
        } = config.initial_center;

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory,
            home: Position::from_lat_lon(latitude, longitude),
            prompt,
            viewport: ViewportWatcher::new(Duration::from_millis(SETTLE_AFTER_MS)),
            view_state,
            selection_state: Rc::new(RefCell::new(SelectionState::new())),
            place_widget: None,
            category_picker: WidgetCategoryPicker::new(&config.initial_category),
            strings,
            logger,
        }
    }

    fn current_center(&self) -> Coordinate {
        let center = self.map_memory.detached().unwrap_or(self.home);
        Coordinate::new(center.lat(), center.lon())
    }

    fn show_selected_place(&mut self, ctx: &Context) {
        let selected_place = self.selection_state.borrow().place.clone();
        let Some(place) = selected_place else {
            self.place_widget = None;
            return;
        };

        if !self.view_state.borrow().contains(&place) {
            // The search that found it has been replaced.
            self.selection_state.borrow_mut().place = None;
            self.place_widget = None;
            return;
        }

        let showing = self
            .place_widget
            .as_ref()
            .is_some_and(|widget| widget.selected_place == place);
        if !showing {
            self.place_widget = Some(WidgetPlace::new(place));
        }

        if let Some(widget) = &mut self.place_widget {
            if !widget.show(ctx, &self.strings) {
                self.selection_state.borrow_mut().place = None;
                self.place_widget = None;
            }
        }
    }
}

impl eframe::App for RegionSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.prompt.poll();
        if self.prompt.in_flight() > 0 {
            ctx.request_repaint_after(Duration::from_millis(POLL_TICK_MS));
        }

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let response = {
                    let view_state = self.view_state.borrow();
                    let places_plugin =
                        plugins::Places::new(&view_state.places, self.selection_state.clone());

                    let map = Map::new(Some(self.tiles.as_mut()), &mut self.map_memory, self.home)
                        .with_plugin(places_plugin);

                    ui.add(map)
                };

                let interacting = response.dragged() || response.is_pointer_button_down_on();
                let center = self.current_center();
                if let Some(settled) = self.viewport.observe(
                    center,
                    self.map_memory.zoom(),
                    interacting,
                    Instant::now(),
                ) {
                    self.prompt.on_viewport_changed(settled);
                }
                if self.viewport.is_pending() {
                    ctx.request_repaint_after(Duration::from_millis(SETTLE_AFTER_MS));
                }

                zoom(ui, &mut self.map_memory);
            });

        {
            let view_state = self.view_state.borrow();
            let mut selection_state = self.selection_state.borrow_mut();
            WidgetPlacesTable::new(&view_state, &mut selection_state, &self.strings).show(ctx);
        }

        self.show_selected_place(ctx);

        if let Some(category) = self.category_picker.show(ctx, &self.strings) {
            if let Err(e) = self.prompt.set_category(category) {
                log_warn(&self.logger, &format!("could not search: {}", e));
            }
        }

        let search_clicked = WidgetSearchArea::new(
            &self.strings,
            self.prompt.is_prompt_visible(),
            self.prompt.is_loading(),
            self.prompt.last_error(),
        )
        .show(ctx);

        if search_clicked {
            if let Err(e) = self.prompt.trigger_search() {
                log_warn(&self.logger, &format!("could not search: {}", e));
            }
        }
    }
}

impl Drop for RegionSearchApp {
    fn drop(&mut self) {
        if let Some(logger) = &self.logger {
            let _ = logger.info("map closed", Color::White, false);
        }
    }
}

/// Builds the prompt around the starting view and runs the first search.
/// The prompt stays hidden: only a map move reveals it.
fn start_prompt<L: PlacesLookup>(
    lookup: Arc<L>,
    config: &AppConfig,
    on_find_places: impl FnMut(Vec<L::Place>) + 'static,
    logger: &Option<Logger>,
) -> RegionSearchPrompt<L> {
    let mut prompt =
        RegionSearchPrompt::new(lookup, config.initial_category.as_str(), on_find_places)
            .with_center(config.initial_center);
    if let Some(logger) = logger {
        prompt = prompt.with_logger(logger.clone());
    }

    if let Err(e) = prompt.trigger_search() {
        log_warn(logger, &format!("initial search failed: {}", e));
    }
    prompt
}

fn log_warn(logger: &Option<Logger>, message: &str) {
    match logger {
        Some(logger) => {
            if let Err(e) = logger.warn(message, true) {
                eprintln!("Failed to write log: {}", e);
            }
        }
        None => eprintln!("{}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use region_search::{LookupError, PromptState, SearchRequest};
    use std::sync::Mutex;

    struct StartupLookup {
        requests: Mutex<Vec<SearchRequest>>,
    }

    impl PlacesLookup for StartupLookup {
        type Place = String;

        fn get_nearby_facilities(
            &self,
            request: &SearchRequest,
        ) -> Result<Vec<String>, LookupError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(vec!["Azadi Tower".to_string()])
        }
    }

    #[test]
    fn test_startup_searches_starting_view_with_prompt_hidden() {
        let lookup = Arc::new(StartupLookup {
            requests: Mutex::new(Vec::new()),
        });
        let config = AppConfig {
            initial_category: "museum".to_string(),
            ..AppConfig::default()
        };
        let found = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&found);

        let mut prompt = start_prompt(
            Arc::clone(&lookup),
            &config,
            move |places| sink.borrow_mut().extend(places),
            &None,
        );

        assert!(!prompt.is_prompt_visible());
        assert_eq!(prompt.state(), PromptState::Fetching);

        prompt.poll_timeout(Duration::from_secs(5));

        let requests = lookup.requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].latitude, config.initial_center.latitude);
        assert_eq!(requests[0].longitude, config.initial_center.longitude);
        assert_eq!(requests[0].category.as_deref(), Some("museum"));
        assert_eq!(*found.borrow(), vec!["Azadi Tower".to_string()]);
        assert_eq!(prompt.state(), PromptState::Idle);
    }
}
