use std::{
    sync::{
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
        Arc,
    },
    thread,
    time::Duration,
};

use logger::{Color, Logger};

use crate::{CategoryFilter, Coordinate, LookupError, PlacesLookup, SearchRequest};

/// Identifies one dispatched search.
pub type RequestId = u64;

/// What the prompt is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    Idle,
    PromptShown,
    Fetching,
}

struct Completion<P> {
    id: RequestId,
    result: Result<Vec<P>, LookupError>,
}

/// The "search this area" overlay.
///
/// The prompt is owned and driven by the UI thread: viewport and category
/// changes come in through [`on_viewport_changed`](Self::on_viewport_changed)
/// and [`set_category`](Self::set_category), and finished lookups are applied
/// by [`poll`](Self::poll). Each search runs the lookup on its own worker
/// thread, so a slow service never blocks the UI.
///
/// Searches are never cancelled. When several are in flight, each one that
/// finishes resets `loading` and the prompt and delivers its places, so the
/// last one to finish wins.
pub struct RegionSearchPrompt<L: PlacesLookup> {
    lookup: Arc<L>,
    on_find_places: Box<dyn FnMut(Vec<L::Place>)>,
    category: CategoryFilter,
    current_center: Option<Coordinate>,
    prompt_visible: bool,
    loading: bool,
    in_flight: usize,
    next_request_id: RequestId,
    last_error: Option<LookupError>,
    sender: Sender<Completion<L::Place>>,
    receiver: Receiver<Completion<L::Place>>,
    logger: Option<Logger>,
}

impl<L: PlacesLookup> RegionSearchPrompt<L> {
    /// Creates an idle prompt. `on_find_places` receives the places of every
    /// successful search.
    pub fn new(
        lookup: Arc<L>,
        category: impl Into<CategoryFilter>,
        on_find_places: impl FnMut(Vec<L::Place>) + 'static,
    ) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            lookup,
            on_find_places: Box::new(on_find_places),
            category: category.into(),
            current_center: None,
            prompt_visible: false,
            loading: false,
            in_flight: 0,
            next_request_id: 1,
            last_error: None,
            sender,
            receiver,
            logger: None,
        }
    }

    /// Starts from a known center without showing the prompt, so a first
    /// search covers that region instead of `(0, 0)`.
    pub fn with_center(mut self, center: Coordinate) -> Self {
        self.current_center = Some(center);
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn state(&self) -> PromptState {
        if self.loading {
            PromptState::Fetching
        } else if self.prompt_visible {
            PromptState::PromptShown
        } else {
            PromptState::Idle
        }
    }

    pub fn current_center(&self) -> Option<Coordinate> {
        self.current_center
    }

    pub fn is_prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Number of searches dispatched and not yet applied by `poll`.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// The error of the last search, cleared by the next successful one.
    pub fn last_error(&self) -> Option<&LookupError> {
        self.last_error.as_ref()
    }

    /// Records the center of the viewport the map settled on and shows the prompt.
    pub fn on_viewport_changed(&mut self, new_center: Coordinate) {
        self.current_center = Some(new_center);
        self.prompt_visible = true;
    }

    /// Changes the category filter. A different value starts a search right
    /// away, whatever the prompt is showing.
    pub fn set_category(
        &mut self,
        category: impl Into<CategoryFilter>,
    ) -> Result<Option<RequestId>, LookupError> {
        let category = category.into();
        if category == self.category {
            return Ok(None);
        }

        self.log_info(&format!(
            "category changed from {} to {}",
            self.category, category
        ));
        self.category = category;
        self.trigger_search().map(Some)
    }

    /// Searches the region around the current center.
    ///
    /// Exactly one lookup is dispatched per call. Its result is applied by a
    /// later call to [`poll`](Self::poll) or [`poll_timeout`](Self::poll_timeout).
    pub fn trigger_search(&mut self) -> Result<RequestId, LookupError> {
        let request = SearchRequest::for_region(self.current_center, &self.category);
        let id = self.next_request_id;

        self.log_info(&format!("search #{}: {}", id, request));

        let lookup = Arc::clone(&self.lookup);
        let sender = self.sender.clone();
        thread::Builder::new()
            .name(format!("region-search-{}", id))
            .spawn(move || {
                let result = lookup.get_nearby_facilities(&request);
                // The prompt may have been dropped while the lookup ran.
                let _ = sender.send(Completion { id, result });
            })
            .map_err(|e| LookupError::Dispatch(e.to_string()))?;

        self.next_request_id += 1;
        self.in_flight += 1;
        self.loading = true;
        Ok(id)
    }

    /// Applies every search that has finished. Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.receiver.try_recv() {
            self.complete(completion);
            applied += 1;
        }
        applied
    }

    /// Like [`poll`](Self::poll), but waits up to `timeout` for the first
    /// search to finish.
    pub fn poll_timeout(&mut self, timeout: Duration) -> usize {
        match self.receiver.recv_timeout(timeout) {
            Ok(completion) => {
                self.complete(completion);
                1 + self.poll()
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => 0,
        }
    }

    fn complete(&mut self, completion: Completion<L::Place>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match completion.result {
            Ok(places) => {
                self.log_info(&format!(
                    "search #{}: {} places found",
                    completion.id,
                    places.len()
                ));
                self.last_error = None;
                (self.on_find_places)(places);
            }
            Err(e) => {
                self.log_error(&format!("search #{} failed: {}", completion.id, e));
                self.last_error = Some(e);
            }
        }

        self.prompt_visible = false;
        self.loading = false;
    }

    fn log_info(&self, message: &str) {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.info(message, Color::Cyan, false) {
                eprintln!("Failed to write log: {}", e);
            }
        }
    }

    fn log_error(&self, message: &str) {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.error(message, true) {
                eprintln!("Failed to write log: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc, sync::Mutex};

    const WAIT: Duration = Duration::from_secs(5);

    /// Answers every request with its own category, or fails when told to.
    struct EchoLookup {
        requests: Mutex<Vec<SearchRequest>>,
        fail: bool,
    }

    impl EchoLookup {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                fail,
            })
        }

        fn requests(&self) -> Vec<SearchRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl PlacesLookup for EchoLookup {
        type Place = String;

        fn get_nearby_facilities(
            &self,
            request: &SearchRequest,
        ) -> Result<Vec<String>, LookupError> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(LookupError::Status(500));
            }
            Ok(vec![request.category.clone().unwrap_or_default()])
        }
    }

    fn prompt_with(
        lookup: Arc<EchoLookup>,
        category: &str,
    ) -> (RegionSearchPrompt<EchoLookup>, Rc<RefCell<Vec<Vec<String>>>>) {
        let found = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&found);
        let prompt = RegionSearchPrompt::new(lookup, category, move |places| {
            sink.borrow_mut().push(places)
        });
        (prompt, found)
    }

    #[test]
    fn test_starts_idle() {
        let (prompt, _) = prompt_with(EchoLookup::new(false), "all");

        assert_eq!(prompt.state(), PromptState::Idle);
        assert_eq!(prompt.current_center(), None);
        assert!(!prompt.is_loading());
    }

    #[test]
    fn test_viewport_change_shows_prompt() {
        let (mut prompt, _) = prompt_with(EchoLookup::new(false), "all");

        prompt.on_viewport_changed(Coordinate::new(35.7, 51.4));

        assert!(prompt.is_prompt_visible());
        assert_eq!(prompt.current_center(), Some(Coordinate::new(35.7, 51.4)));
        assert_eq!(prompt.state(), PromptState::PromptShown);
    }

    #[test]
    fn test_search_delivers_places_and_hides_prompt() {
        let lookup = EchoLookup::new(false);
        let (mut prompt, found) = prompt_with(Arc::clone(&lookup), "museum");
        prompt.on_viewport_changed(Coordinate::new(35.7, 51.4));

        prompt.trigger_search().unwrap();
        assert_eq!(prompt.state(), PromptState::Fetching);
        assert_eq!(prompt.poll_timeout(WAIT), 1);

        assert_eq!(*found.borrow(), vec![vec!["museum".to_string()]]);
        assert_eq!(prompt.state(), PromptState::Idle);
        assert_eq!(prompt.in_flight(), 0);
        assert_eq!(lookup.requests().len(), 1);
    }

    #[test]
    fn test_seeded_center_searches_without_showing_prompt() {
        let lookup = EchoLookup::new(false);
        let (prompt, _) = prompt_with(Arc::clone(&lookup), "all");
        let mut prompt = prompt.with_center(Coordinate::new(35.7, 51.4));

        assert_eq!(prompt.state(), PromptState::Idle);
        prompt.trigger_search().unwrap();
        assert_eq!(prompt.state(), PromptState::Fetching);
        assert!(!prompt.is_prompt_visible());

        prompt.poll_timeout(WAIT);
        assert_eq!(lookup.requests()[0].latitude, 35.7);
        assert_eq!(lookup.requests()[0].longitude, 51.4);
    }

    #[test]
    fn test_unchanged_category_does_not_search() {
        let lookup = EchoLookup::new(false);
        let (mut prompt, _) = prompt_with(Arc::clone(&lookup), "all");

        assert_eq!(prompt.set_category("all").unwrap(), None);
        assert_eq!(prompt.in_flight(), 0);
        assert!(lookup.requests().is_empty());
    }

    #[test]
    fn test_failure_resets_state_without_callback() {
        let (mut prompt, found) = prompt_with(EchoLookup::new(true), "all");
        prompt.on_viewport_changed(Coordinate::new(1.0, 2.0));

        prompt.trigger_search().unwrap();
        prompt.poll_timeout(WAIT);

        assert!(found.borrow().is_empty());
        assert!(!prompt.is_loading());
        assert!(!prompt.is_prompt_visible());
        assert_eq!(prompt.last_error(), Some(&LookupError::Status(500)));
    }

    #[test]
    fn test_request_ids_increase() {
        let (mut prompt, _) = prompt_with(EchoLookup::new(false), "all");

        let first = prompt.trigger_search().unwrap();
        let second = prompt.trigger_search().unwrap();

        assert!(second > first);
        assert_eq!(prompt.in_flight(), 2);
    }
}
