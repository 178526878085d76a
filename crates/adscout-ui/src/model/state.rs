//! View state machine for the adscout window.
//!
//! This module defines the state machine and data structures for the UI
//! layer. These types are GPUI-independent to enable testing and clear
//! separation: the GPUI views render whatever is here and translate input
//! events back into these operations.
//!
//! The window shows exactly one panel at a time; `ActiveView` is the tagged
//! union over the panel states. Switching panels discards the outgoing
//! panel's state, so nothing stale survives a round trip through the model
//! selector.

use adscout_core::{Advertisement, KeyCode, ModelInfo, ViewError};

use crate::browser::BrowserOpener;
use crate::model::listeners::{ViewListeners, WiredListeners};

// =============================================================================
// Active View
// =============================================================================

/// Which panel the window is currently showing.
#[derive(Debug, Default)]
pub enum ActiveView {
    /// Nothing shown yet; the initial state.
    #[default]
    Blank,
    /// The model selector panel.
    ModelSelect(ModelSelectState),
    /// The results panel.
    Results(ResultsState),
}

impl ActiveView {
    /// Check whether the results panel is active.
    pub fn is_results(&self) -> bool {
        matches!(self, ActiveView::Results(_))
    }
}

// =============================================================================
// Model Selector State
// =============================================================================

/// Widget state for the model selector panel.
///
/// The panel has no state beyond which choice is highlighted; confirming a
/// choice only emits an event.
#[derive(Debug)]
pub struct ModelSelectState {
    models: Vec<ModelInfo>,
    highlighted: usize,
}

impl ModelSelectState {
    /// Create selector state over the given model choices.
    pub fn new(models: Vec<ModelInfo>) -> Self {
        Self {
            models,
            highlighted: 0,
        }
    }

    /// The model choices, in display order.
    pub fn models(&self) -> &[ModelInfo] {
        &self.models
    }

    /// Index of the highlighted choice.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// The highlighted model, if any choices exist.
    pub fn highlighted_model(&self) -> Option<&ModelInfo> {
        self.models.get(self.highlighted)
    }

    /// Move the highlight up. Stops at the first choice.
    pub fn cursor_up(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
        }
    }

    /// Move the highlight down. Stops at the last choice.
    pub fn cursor_down(&mut self) {
        if self.highlighted + 1 < self.models.len() {
            self.highlighted += 1;
        }
    }

    /// Highlight the choice at `index`, if in bounds.
    pub fn set_highlighted(&mut self, index: usize) {
        if index < self.models.len() {
            self.highlighted = index;
        }
    }
}

// =============================================================================
// Results State
// =============================================================================

/// Outcome of the most recent browser-open attempt, shown as a transient
/// status line in the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenFeedback {
    /// Listings were handed to the browser.
    Opened { count: usize },
    /// At least one open attempt failed.
    Failed { error: String },
}

/// State of the results panel: the displayed list, the selection, and the
/// image cursor within the selected listing.
///
/// Invariants: `selected` is in bounds or `None`; `image_index` is in
/// bounds of the selected listing's image sequence (zero when there are no
/// images) and resets whenever the selection changes.
#[derive(Debug, Default)]
pub struct ResultsState {
    ads: Vec<Advertisement>,
    selected: Option<usize>,
    image_index: usize,
    feedback: Option<OpenFeedback>,
}

impl ResultsState {
    /// Create results state over an initial listing set.
    pub fn new(ads: Vec<Advertisement>) -> Self {
        Self {
            ads,
            selected: None,
            image_index: 0,
            feedback: None,
        }
    }

    /// Replace the displayed list wholesale.
    ///
    /// The selection is cleared; an empty list simply yields an empty
    /// display.
    pub fn populate_results(&mut self, ads: Vec<Advertisement>) {
        self.ads = ads;
        self.selected = None;
        self.image_index = 0;
        self.feedback = None;
    }

    /// The displayed listings, in list order.
    pub fn ads(&self) -> &[Advertisement] {
        &self.ads
    }

    /// Whether the display is empty.
    pub fn is_empty(&self) -> bool {
        self.ads.is_empty()
    }

    /// Current selection index.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected listing, if any.
    pub fn selected_ad(&self) -> Option<&Advertisement> {
        self.selected.and_then(|i| self.ads.get(i))
    }

    /// Set the selection. Out-of-bounds indices clear it.
    ///
    /// Any selection change rewinds the image cursor to the first image.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.ads.len());
        self.image_index = 0;
    }

    /// Move the selection up. Selects the first listing when nothing is
    /// selected; stops at the first listing.
    pub fn select_prev(&mut self) {
        let next = match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.select(if self.ads.is_empty() { None } else { Some(next) });
    }

    /// Move the selection down. Selects the first listing when nothing is
    /// selected; stops at the last listing.
    pub fn select_next(&mut self) {
        let next = match self.selected {
            Some(i) => (i + 1).min(self.ads.len().saturating_sub(1)),
            None => 0,
        };
        self.select(if self.ads.is_empty() { None } else { Some(next) });
    }

    /// Refresh the detail pane for whichever listing is now selected.
    ///
    /// Returns the listing the pane should display. Driven externally after
    /// a selection-changed event fires.
    pub fn update_listing_selection(&mut self) -> Option<&Advertisement> {
        self.selected_ad()
    }

    /// Current image index within the selected listing.
    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// The image reference the detail pane should display.
    pub fn current_image(&self) -> Option<&str> {
        self.selected_ad().and_then(|ad| ad.image(self.image_index))
    }

    /// Advance (`Right`) or retreat (`Left`) the image cursor for the
    /// selected listing. Other keys are ignored. The cursor clamps at both
    /// ends of the image sequence.
    pub fn update_image_selection(&mut self, key: KeyCode) {
        let Some(count) = self.selected_ad().map(Advertisement::image_count) else {
            return;
        };
        if count == 0 {
            return;
        }

        match key {
            KeyCode::Right => {
                self.image_index = (self.image_index + 1).min(count - 1);
            }
            KeyCode::Left => {
                self.image_index = self.image_index.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Open the selected listing in the browser. No-op when nothing is
    /// selected.
    pub fn open_selected(&mut self, opener: &dyn BrowserOpener) {
        let Some(url) = self.selected_ad().map(|ad| ad.url.clone()) else {
            return;
        };

        match opener.open_url(&url) {
            Ok(()) => {
                self.feedback = Some(OpenFeedback::Opened { count: 1 });
            }
            Err(e) => {
                tracing::warn!("failed to open {}: {}", url, e);
                self.feedback = Some(OpenFeedback::Failed {
                    error: e.to_string(),
                });
            }
        }
    }

    /// Open every displayed listing in list order, one attempt each.
    ///
    /// A failed attempt does not stop the remaining ones.
    pub fn open_all(&mut self, opener: &dyn BrowserOpener) {
        if self.ads.is_empty() {
            return;
        }

        let urls: Vec<String> = self.ads.iter().map(|ad| ad.url.clone()).collect();
        let mut opened = 0;
        let mut first_error = None;

        for url in &urls {
            match opener.open_url(url) {
                Ok(()) => opened += 1,
                Err(e) => {
                    tracing::warn!("failed to open {}: {}", url, e);
                    if first_error.is_none() {
                        first_error = Some(e.to_string());
                    }
                }
            }
        }

        self.feedback = match first_error {
            None => Some(OpenFeedback::Opened { count: opened }),
            Some(error) => Some(OpenFeedback::Failed { error }),
        };
    }

    /// The most recent open outcome, if any.
    pub fn feedback(&self) -> Option<&OpenFeedback> {
        self.feedback.as_ref()
    }
}

// =============================================================================
// Search State
// =============================================================================

/// Top-level state for the search window: the active panel, window
/// visibility, the registered listener set, and the search generation
/// counter.
pub struct SearchState {
    models: Vec<ModelInfo>,
    active: ActiveView,
    visible: bool,
    listeners: Option<WiredListeners>,
    generation: u64,
}

impl SearchState {
    /// Create window state over the given model choices. Nothing is shown
    /// until a visibility operation runs.
    pub fn new(models: Vec<ModelInfo>) -> Self {
        Self {
            models,
            active: ActiveView::Blank,
            visible: false,
            listeners: None,
            generation: 0,
        }
    }

    /// The currently active panel.
    pub fn active(&self) -> &ActiveView {
        &self.active
    }

    /// Whether the window is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Register the listener set.
    ///
    /// Fails with `ViewError::MissingListener` when any callback is absent;
    /// nothing is wired in that case.
    pub fn add_listeners(&mut self, listeners: ViewListeners) -> Result<(), ViewError> {
        self.listeners = Some(listeners.wire()?);
        Ok(())
    }

    /// The wired listener set, once registered.
    pub fn listeners(&self) -> Option<&WiredListeners> {
        self.listeners.as_ref()
    }

    /// Make the model selector the active panel and set visibility.
    ///
    /// Any previous results state is discarded; the selector always starts
    /// from a fresh highlight.
    pub fn set_model_selector_visibility(&mut self, visible: bool) {
        self.active = ActiveView::ModelSelect(ModelSelectState::new(self.models.clone()));
        self.visible = visible;
    }

    /// Populate the results panel with the given listings, make it the
    /// active panel, and set visibility. The sole transition into the
    /// results display.
    pub fn update_results_visibility(&mut self, ads: Vec<Advertisement>, visible: bool) {
        self.active = ActiveView::Results(ResultsState::new(ads));
        self.visible = visible;
    }

    /// Start a new search cycle; returns the generation token the eventual
    /// results must present.
    pub fn begin_search(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply search results if they belong to the current generation.
    ///
    /// Stale results (an older generation) are dropped; returns whether the
    /// results were applied.
    pub fn apply_search_results(
        &mut self,
        generation: u64,
        ads: Vec<Advertisement>,
        visible: bool,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "dropping stale search results (generation {} != {})",
                generation,
                self.generation
            );
            return false;
        }
        self.update_results_visibility(ads, visible);
        true
    }

    /// The model selector state, when that panel is active.
    pub fn model_select(&self) -> Option<&ModelSelectState> {
        match &self.active {
            ActiveView::ModelSelect(state) => Some(state),
            _ => None,
        }
    }

    /// Mutable model selector state, when that panel is active.
    pub fn model_select_mut(&mut self) -> Option<&mut ModelSelectState> {
        match &mut self.active {
            ActiveView::ModelSelect(state) => Some(state),
            _ => None,
        }
    }

    /// The results state; a caller error when the results panel is not
    /// active.
    pub fn results(&self) -> Result<&ResultsState, ViewError> {
        match &self.active {
            ActiveView::Results(state) => Ok(state),
            _ => Err(ViewError::ResultsNotActive),
        }
    }

    /// Mutable results state; a caller error when the results panel is not
    /// active.
    pub fn results_mut(&mut self) -> Result<&mut ResultsState, ViewError> {
        match &mut self.active {
            ActiveView::Results(state) => Ok(state),
            _ => Err(ViewError::ResultsNotActive),
        }
    }

    /// Open the selected listing. Delegates to the results panel.
    pub fn open_selected(&mut self, opener: &dyn BrowserOpener) -> Result<(), ViewError> {
        self.results_mut()?.open_selected(opener);
        Ok(())
    }

    /// Open all displayed listings in order. Delegates to the results
    /// panel.
    pub fn open_all(&mut self, opener: &dyn BrowserOpener) -> Result<(), ViewError> {
        self.results_mut()?.open_all(opener);
        Ok(())
    }

    /// Refresh the detail pane for the current selection. Delegates to the
    /// results panel.
    pub fn update_listing_selection(&mut self) -> Result<(), ViewError> {
        self.results_mut()?.update_listing_selection();
        Ok(())
    }

    /// Advance or retreat the displayed image. Delegates to the results
    /// panel.
    pub fn update_image_selection(&mut self, key: KeyCode) -> Result<(), ViewError> {
        self.results_mut()?.update_image_selection(key);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::mock::RecordingBrowser;
    use crate::model::listeners::ViewListeners;

    fn test_ad(n: usize, images: usize) -> Advertisement {
        Advertisement::new(format!("Ad {}", n), format!("https://ads.example/{}", n))
            .with_description(format!("Description {}", n))
            .with_images((0..images).map(|i| format!("img-{}-{}.png", n, i)).collect())
    }

    fn test_ads() -> Vec<Advertisement> {
        vec![test_ad(1, 1), test_ad(2, 3), test_ad(3, 0)]
    }

    fn test_models() -> Vec<ModelInfo> {
        vec![
            ModelInfo::new("kijiji", "Kijiji"),
            ModelInfo::new("craigslist", "Craigslist"),
        ]
    }

    fn complete_listeners() -> ViewListeners {
        ViewListeners::new()
            .on_action(|_| {})
            .on_selection(|_| {})
            .on_key(|_| {})
    }

    // -------------------------------------------------------------------------
    // Model selector state
    // -------------------------------------------------------------------------

    #[test]
    fn test_model_select_cursor_clamps() {
        let mut state = ModelSelectState::new(test_models());
        assert_eq!(state.highlighted(), 0);
        assert_eq!(state.highlighted_model().unwrap().id, "kijiji");

        state.cursor_up();
        assert_eq!(state.highlighted(), 0);

        state.cursor_down();
        assert_eq!(state.highlighted(), 1);

        state.cursor_down();
        assert_eq!(state.highlighted(), 1);
    }

    #[test]
    fn test_model_select_empty() {
        let state = ModelSelectState::new(Vec::new());
        assert!(state.highlighted_model().is_none());
    }

    #[test]
    fn test_model_select_click_out_of_bounds_ignored() {
        let mut state = ModelSelectState::new(test_models());
        state.set_highlighted(5);
        assert_eq!(state.highlighted(), 0);
        state.set_highlighted(1);
        assert_eq!(state.highlighted(), 1);
    }

    // -------------------------------------------------------------------------
    // Results state
    // -------------------------------------------------------------------------

    #[test]
    fn test_populate_resets_selection() {
        let mut results = ResultsState::new(test_ads());
        results.select(Some(2));
        assert!(results.selected_ad().is_some());

        results.populate_results(vec![test_ad(9, 0)]);
        assert_eq!(results.selected_index(), None);
        assert_eq!(results.ads().len(), 1);
        assert_eq!(results.image_index(), 0);
    }

    #[test]
    fn test_populate_empty_is_silent() {
        let mut results = ResultsState::new(test_ads());
        results.populate_results(Vec::new());
        assert!(results.is_empty());
        assert!(results.selected_ad().is_none());
    }

    #[test]
    fn test_select_out_of_bounds_clears() {
        let mut results = ResultsState::new(test_ads());
        results.select(Some(7));
        assert_eq!(results.selected_index(), None);
    }

    #[test]
    fn test_selection_navigation_clamps() {
        let mut results = ResultsState::new(test_ads());

        results.select_next();
        assert_eq!(results.selected_index(), Some(0));

        results.select_next();
        results.select_next();
        assert_eq!(results.selected_index(), Some(2));

        results.select_next();
        assert_eq!(results.selected_index(), Some(2));

        results.select_prev();
        assert_eq!(results.selected_index(), Some(1));

        results.select_prev();
        results.select_prev();
        assert_eq!(results.selected_index(), Some(0));
    }

    #[test]
    fn test_selection_navigation_on_empty_list() {
        let mut results = ResultsState::new(Vec::new());
        results.select_next();
        assert_eq!(results.selected_index(), None);
        results.select_prev();
        assert_eq!(results.selected_index(), None);
    }

    #[test]
    fn test_update_listing_selection_shows_first_image() {
        let mut results = ResultsState::new(test_ads());
        results.select(Some(1));

        let ad = results.update_listing_selection().unwrap();
        assert_eq!(ad.title, "Ad 2");
        assert_eq!(results.image_index(), 0);
        assert_eq!(results.current_image(), Some("img-2-0.png"));
    }

    #[test]
    fn test_image_cycling_clamps_at_both_ends() {
        let mut results = ResultsState::new(test_ads());
        results.select(Some(1)); // three images

        results.update_image_selection(KeyCode::Left);
        assert_eq!(results.image_index(), 0);

        results.update_image_selection(KeyCode::Right);
        assert_eq!(results.image_index(), 1);
        assert_eq!(results.current_image(), Some("img-2-1.png"));

        results.update_image_selection(KeyCode::Right);
        results.update_image_selection(KeyCode::Right);
        assert_eq!(results.image_index(), 2);

        results.update_image_selection(KeyCode::Left);
        assert_eq!(results.image_index(), 1);
    }

    #[test]
    fn test_image_cycling_ignores_other_keys() {
        let mut results = ResultsState::new(test_ads());
        results.select(Some(1));
        results.update_image_selection(KeyCode::Enter);
        results.update_image_selection(KeyCode::Down);
        assert_eq!(results.image_index(), 0);
    }

    #[test]
    fn test_image_cycling_without_selection_or_images() {
        let mut results = ResultsState::new(test_ads());
        results.update_image_selection(KeyCode::Right);
        assert_eq!(results.image_index(), 0);

        results.select(Some(2)); // no images
        results.update_image_selection(KeyCode::Right);
        assert_eq!(results.image_index(), 0);
        assert!(results.current_image().is_none());
    }

    #[test]
    fn test_selection_change_resets_image_index() {
        let mut results = ResultsState::new(test_ads());
        results.select(Some(1));
        results.update_image_selection(KeyCode::Right);
        assert_eq!(results.image_index(), 1);

        results.select(Some(0));
        assert_eq!(results.image_index(), 0);
    }

    #[test]
    fn test_open_selected_opens_exactly_one() {
        let browser = RecordingBrowser::new();
        let mut results = ResultsState::new(test_ads());
        results.select(Some(1));

        results.open_selected(&browser);
        assert_eq!(browser.opened(), vec!["https://ads.example/2"]);
        assert_eq!(results.feedback(), Some(&OpenFeedback::Opened { count: 1 }));
    }

    #[test]
    fn test_open_selected_without_selection_is_noop() {
        let browser = RecordingBrowser::new();
        let mut results = ResultsState::new(test_ads());

        results.open_selected(&browser);
        assert!(browser.opened().is_empty());
        assert!(results.feedback().is_none());
    }

    #[test]
    fn test_open_all_opens_in_list_order() {
        let browser = RecordingBrowser::new();
        let mut results = ResultsState::new(test_ads());

        results.open_all(&browser);
        assert_eq!(
            browser.opened(),
            vec![
                "https://ads.example/1",
                "https://ads.example/2",
                "https://ads.example/3",
            ]
        );
        assert_eq!(results.feedback(), Some(&OpenFeedback::Opened { count: 3 }));
    }

    #[test]
    fn test_open_all_continues_past_failures() {
        let browser = RecordingBrowser::failing();
        let mut results = ResultsState::new(test_ads());

        results.open_all(&browser);
        // Every URL is still attempted exactly once.
        assert_eq!(browser.opened().len(), 3);
        assert!(matches!(
            results.feedback(),
            Some(OpenFeedback::Failed { .. })
        ));
    }

    #[test]
    fn test_open_failure_is_user_visible() {
        let browser = RecordingBrowser::failing();
        let mut results = ResultsState::new(test_ads());
        results.select(Some(0));

        results.open_selected(&browser);
        match results.feedback() {
            Some(OpenFeedback::Failed { error }) => {
                assert!(error.contains("no browser"));
            }
            other => panic!("expected failure feedback, got {:?}", other),
        }
    }

    // -------------------------------------------------------------------------
    // Search state
    // -------------------------------------------------------------------------

    #[test]
    fn test_initial_state_shows_nothing() {
        let state = SearchState::new(test_models());
        assert!(matches!(state.active(), ActiveView::Blank));
        assert!(!state.is_visible());
        assert!(state.listeners().is_none());
    }

    #[test]
    fn test_model_selector_visibility() {
        let mut state = SearchState::new(test_models());
        state.set_model_selector_visibility(true);

        assert!(state.is_visible());
        let selector = state.model_select().unwrap();
        assert_eq!(selector.models().len(), 2);
    }

    #[test]
    fn test_results_visibility_with_empty_list() {
        let mut state = SearchState::new(test_models());
        let browser = RecordingBrowser::new();

        state.update_results_visibility(Vec::new(), true);
        assert!(state.is_visible());
        let results = state.results().unwrap();
        assert!(results.is_empty());
        assert_eq!(results.selected_index(), None);

        // open_selected in the no-selection state opens nothing.
        state.open_selected(&browser).unwrap();
        assert!(browser.opened().is_empty());
    }

    #[test]
    fn test_results_visibility_hidden_still_populates() {
        let mut state = SearchState::new(test_models());
        state.update_results_visibility(test_ads(), false);
        assert!(!state.is_visible());
        assert_eq!(state.results().unwrap().ads().len(), 3);
    }

    #[test]
    fn test_delegation_requires_results_panel() {
        let mut state = SearchState::new(test_models());
        let browser = RecordingBrowser::new();
        state.set_model_selector_visibility(true);

        assert_eq!(
            state.open_selected(&browser).unwrap_err(),
            ViewError::ResultsNotActive
        );
        assert_eq!(state.open_all(&browser).unwrap_err(), ViewError::ResultsNotActive);
        assert_eq!(
            state.update_listing_selection().unwrap_err(),
            ViewError::ResultsNotActive
        );
        assert_eq!(
            state.update_image_selection(KeyCode::Right).unwrap_err(),
            ViewError::ResultsNotActive
        );
        assert!(browser.opened().is_empty());
    }

    #[test]
    fn test_open_all_through_delegation() {
        let mut state = SearchState::new(test_models());
        let browser = RecordingBrowser::new();

        state.update_results_visibility(test_ads(), true);
        state.open_all(&browser).unwrap();
        assert_eq!(browser.opened().len(), 3);
        assert_eq!(browser.opened()[0], "https://ads.example/1");
    }

    #[test]
    fn test_panel_round_trip_discards_results() {
        let mut state = SearchState::new(test_models());
        state.update_results_visibility(test_ads(), true);
        state.results_mut().unwrap().select(Some(2));

        state.set_model_selector_visibility(true);
        assert!(state.results().is_err());

        state.update_results_visibility(vec![test_ad(9, 0)], true);
        let results = state.results().unwrap();
        assert_eq!(results.ads().len(), 1);
        assert_eq!(results.ads()[0].title, "Ad 9");
        assert_eq!(results.selected_index(), None);
    }

    #[test]
    fn test_add_listeners_rejects_incomplete_set() {
        let mut state = SearchState::new(test_models());
        let incomplete = ViewListeners::new().on_action(|_| {});

        assert_eq!(
            state.add_listeners(incomplete).unwrap_err(),
            ViewError::MissingListener("selection")
        );
        assert!(state.listeners().is_none());
    }

    #[test]
    fn test_add_listeners_accepts_complete_set() {
        let mut state = SearchState::new(test_models());
        state.add_listeners(complete_listeners()).unwrap();
        assert!(state.listeners().is_some());
    }

    #[test]
    fn test_stale_search_results_are_dropped() {
        let mut state = SearchState::new(test_models());

        let first = state.begin_search();
        let second = state.begin_search();
        assert_ne!(first, second);

        assert!(!state.apply_search_results(first, test_ads(), true));
        assert!(matches!(state.active(), ActiveView::Blank));

        assert!(state.apply_search_results(second, test_ads(), true));
        assert_eq!(state.results().unwrap().ads().len(), 3);
    }
}
