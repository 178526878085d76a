//! Top-level search view - the window's root composition.
//!
//! `SearchView` owns the view state machine, renders whichever panel is
//! active, and translates GPUI input (clicks, key-bound actions) into the
//! typed listener events. The contract operations (`populate` / `open` /
//! `selection` / `image` updates) are driven externally through the entity
//! handle.

use std::rc::Rc;
use std::sync::Arc;

use gpui::{
    div, prelude::*, px, size, App, ClickEvent, Context, EventEmitter, FocusHandle, Focusable,
    IntoElement, KeyContext, Pixels, Render, Size, Window,
};
use gpui_component::{v_virtual_list, VirtualListScrollHandle};

use adscout_core::{Advertisement, KeyCode, ModelInfo, ViewError, WindowConfig};

use crate::actions::{
    ConfirmModel, CursorDown, CursorUp, Dismiss, NextImage, OpenAll, OpenSelected, PrevImage,
};
use crate::browser::BrowserOpener;
use crate::model::{ActionEvent, ActiveView, SearchState, SelectionEvent, ViewListeners};
use crate::theme::ThemeExt;
use crate::views::{model_selector, results_panel};

// =============================================================================
// Events
// =============================================================================

/// Events emitted by SearchView.
#[derive(Debug, Clone)]
pub enum SearchViewEvent {
    /// Request to hide the window.
    Dismiss,
}

// =============================================================================
// Search View
// =============================================================================

/// The root view: the active panel plus the plumbing around it.
pub struct SearchView {
    /// The GPUI-independent state machine.
    state: SearchState,
    /// Browser launcher for open operations.
    browser: Arc<dyn BrowserOpener>,
    /// Window dimensions per panel.
    window_config: WindowConfig,
    /// Focus handle.
    focus_handle: FocusHandle,
    /// Scroll handle for the results list.
    scroll_handle: VirtualListScrollHandle,
}

impl SearchView {
    /// Create a new search view over the given model choices.
    ///
    /// Nothing is shown until a visibility operation runs.
    pub fn new(
        models: Vec<ModelInfo>,
        browser: Arc<dyn BrowserOpener>,
        window_config: WindowConfig,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            state: SearchState::new(models),
            browser,
            window_config,
            focus_handle: cx.focus_handle(),
            scroll_handle: VirtualListScrollHandle::new(),
        }
    }

    /// Read-only access to the state machine.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    // -------------------------------------------------------------------------
    // Contract Operations
    // -------------------------------------------------------------------------

    /// Register the listener set; rejects incomplete sets without wiring
    /// anything.
    pub fn add_listeners(&mut self, listeners: ViewListeners) -> Result<(), ViewError> {
        self.state.add_listeners(listeners)
    }

    /// Show or hide the model selector panel.
    pub fn set_model_selector_visibility(
        &mut self,
        visible: bool,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.state.set_model_selector_visibility(visible);
        self.apply_window_state(window, cx);
    }

    /// Populate the results panel and show or hide it.
    pub fn update_results_visibility(
        &mut self,
        ads: Vec<Advertisement>,
        visible: bool,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.state.update_results_visibility(ads, visible);
        self.apply_window_state(window, cx);
    }

    /// Start a search cycle; the token must accompany the eventual results.
    pub fn begin_search(&mut self) -> u64 {
        self.state.begin_search()
    }

    /// Apply search results unless they are stale. Returns whether the
    /// results were applied.
    pub fn apply_search_results(
        &mut self,
        generation: u64,
        ads: Vec<Advertisement>,
        visible: bool,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> bool {
        let applied = self.state.apply_search_results(generation, ads, visible);
        if applied {
            self.apply_window_state(window, cx);
        }
        applied
    }

    /// Open the selected listing in the browser.
    pub fn open_selected(&mut self, cx: &mut Context<Self>) -> Result<(), ViewError> {
        let result = self.state.open_selected(self.browser.as_ref());
        cx.notify();
        result
    }

    /// Open all displayed listings in list order.
    pub fn open_all(&mut self, cx: &mut Context<Self>) -> Result<(), ViewError> {
        let result = self.state.open_all(self.browser.as_ref());
        cx.notify();
        result
    }

    /// Refresh the detail pane for the current selection.
    pub fn update_listing_selection(&mut self, cx: &mut Context<Self>) -> Result<(), ViewError> {
        let result = self.state.update_listing_selection();
        cx.notify();
        result
    }

    /// Advance or retreat the displayed image.
    pub fn update_image_selection(
        &mut self,
        key: KeyCode,
        cx: &mut Context<Self>,
    ) -> Result<(), ViewError> {
        let result = self.state.update_image_selection(key);
        cx.notify();
        result
    }

    /// Sync window size and visibility with the state machine.
    fn apply_window_state(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let (width, height) = match self.state.active() {
            ActiveView::Results(_) => (
                self.window_config.results_width,
                self.window_config.results_height,
            ),
            _ => (
                self.window_config.selector_width,
                self.window_config.selector_height,
            ),
        };
        window.resize(size(px(width), px(height)));

        if self.state.is_visible() {
            window.activate_window();
        } else {
            cx.emit(SearchViewEvent::Dismiss);
        }
        cx.notify();
    }

    // -------------------------------------------------------------------------
    // Listener Forwarding
    // -------------------------------------------------------------------------

    fn emit_action(&self, event: ActionEvent) {
        if let Some(listeners) = self.state.listeners() {
            listeners.emit_action(event);
        }
    }

    fn emit_selection(&self, event: SelectionEvent) {
        if let Some(listeners) = self.state.listeners() {
            listeners.emit_selection(event);
        }
    }

    fn emit_key(&self, key: KeyCode) {
        if let Some(listeners) = self.state.listeners() {
            listeners.emit_key(key);
        }
    }

    // -------------------------------------------------------------------------
    // Action Handlers
    // -------------------------------------------------------------------------

    fn on_cursor_up(&mut self, _: &CursorUp, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_cursor(false, cx);
    }

    fn on_cursor_down(&mut self, _: &CursorDown, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_cursor(true, cx);
    }

    fn move_cursor(&mut self, down: bool, cx: &mut Context<Self>) {
        if let Some(selector) = self.state.model_select_mut() {
            if down {
                selector.cursor_down();
            } else {
                selector.cursor_up();
            }
            cx.notify();
            return;
        }

        let moved = match self.state.results_mut() {
            Ok(results) => {
                if down {
                    results.select_next();
                } else {
                    results.select_prev();
                }
                Some(results.selected_index())
            }
            Err(_) => None,
        };

        if let Some(index) = moved {
            results_panel::scroll_to_cursor(&self.scroll_handle, index.unwrap_or(0));
            self.emit_selection(SelectionEvent { index });
            cx.notify();
        }
    }

    fn on_confirm_model(&mut self, _: &ConfirmModel, _window: &mut Window, cx: &mut Context<Self>) {
        let model_id = self
            .state
            .model_select()
            .and_then(|s| s.highlighted_model())
            .map(|m| m.id.clone());

        if let Some(model_id) = model_id {
            tracing::debug!("confirming model {}", model_id);
            self.emit_action(ActionEvent::ConfirmModel { model_id });
            cx.notify();
        }
    }

    fn on_open_selected(&mut self, _: &OpenSelected, _window: &mut Window, _cx: &mut Context<Self>) {
        self.emit_action(ActionEvent::OpenSelected);
    }

    fn on_open_all(&mut self, _: &OpenAll, _window: &mut Window, _cx: &mut Context<Self>) {
        self.emit_action(ActionEvent::OpenAll);
    }

    fn on_next_image(&mut self, _: &NextImage, _window: &mut Window, _cx: &mut Context<Self>) {
        self.emit_key(KeyCode::Right);
    }

    fn on_prev_image(&mut self, _: &PrevImage, _window: &mut Window, _cx: &mut Context<Self>) {
        self.emit_key(KeyCode::Left);
    }

    fn on_dismiss(&mut self, _: &Dismiss, _window: &mut Window, cx: &mut Context<Self>) {
        cx.emit(SearchViewEvent::Dismiss);
    }

    // -------------------------------------------------------------------------
    // Click Handlers
    // -------------------------------------------------------------------------

    fn on_model_click(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Some(selector) = self.state.model_select_mut() {
            selector.set_highlighted(index);
            cx.notify();
        }
    }

    fn on_ad_click(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Ok(results) = self.state.results_mut() {
            results.select(Some(index));
            let event = SelectionEvent {
                index: results.selected_index(),
            };
            self.emit_selection(event);
            cx.notify();
        }
    }

    fn on_ad_double_click(&mut self, index: usize, cx: &mut Context<Self>) {
        self.on_ad_click(index, cx);
        self.emit_action(ActionEvent::OpenSelected);
    }

    // -------------------------------------------------------------------------
    // Render Helpers
    // -------------------------------------------------------------------------

    fn render_model_selector(&mut self, cx: &mut Context<Self>) -> gpui::AnyElement {
        let theme = cx.theme().clone();
        let Some(selector) = self.state.model_select() else {
            return div().into_any_element();
        };

        let mut rows = div().w_full().flex_1().flex().flex_col().px_2();
        for (index, model) in selector.models().iter().enumerate() {
            let is_highlighted = index == selector.highlighted();
            let row = model_selector::render_model_row(model, index, is_highlighted, &theme)
                .on_click(cx.listener(move |this: &mut Self, _: &ClickEvent, _window, cx| {
                    this.on_model_click(index, cx);
                }));
            rows = rows.child(row);
        }

        let confirm = model_selector::render_confirm_button(&theme).on_click(cx.listener(
            |this: &mut Self, _: &ClickEvent, window, cx| {
                this.on_confirm_model(&ConfirmModel, window, cx);
            },
        ));

        div()
            .w_full()
            .h_full()
            .flex()
            .flex_col()
            .child(model_selector::render_header(&theme))
            .child(rows)
            .child(div().w_full().p_2().child(confirm))
            .into_any_element()
    }

    fn render_results(&mut self, cx: &mut Context<Self>) -> gpui::AnyElement {
        let theme = cx.theme().clone();
        let Ok(results) = self.state.results() else {
            return div().into_any_element();
        };

        let results_list = if results.is_empty() {
            results_panel::render_empty(&theme)
        } else {
            let entity = cx.entity().clone();
            let item_sizes: Rc<Vec<Size<Pixels>>> = Rc::new(
                results
                    .ads()
                    .iter()
                    .map(|_| size(px(0.0), theme.item_height))
                    .collect(),
            );

            v_virtual_list(
                entity,
                "results-list",
                item_sizes,
                |this, range, _window, cx| {
                    let theme = cx.theme().clone();
                    let Ok(results) = this.state.results() else {
                        return vec![];
                    };

                    let mut elements = Vec::with_capacity(range.len());
                    for ix in range {
                        let Some(ad) = results.ads().get(ix) else {
                            elements.push(div().into_any_element());
                            continue;
                        };

                        let is_selected = results.selected_index() == Some(ix);
                        let row = results_panel::render_ad_row(ad, ix, is_selected, &theme)
                            .on_click(cx.listener(
                                move |this: &mut Self, event: &ClickEvent, _window, cx| {
                                    if event.click_count() >= 2 {
                                        this.on_ad_double_click(ix, cx);
                                    } else {
                                        this.on_ad_click(ix, cx);
                                    }
                                },
                            ));
                        elements.push(row.into_any_element());
                    }
                    elements
                },
            )
            .track_scroll(&self.scroll_handle)
            .w_full()
            .h_full()
            .into_any_element()
        };

        let open_selected = results_panel::render_button("open-selected", "Open listing", &theme)
            .on_click(cx.listener(|this: &mut Self, _: &ClickEvent, window, cx| {
                this.on_open_selected(&OpenSelected, window, cx);
            }));
        let open_all = results_panel::render_button("open-all", "Open all", &theme).on_click(
            cx.listener(|this: &mut Self, _: &ClickEvent, window, cx| {
                this.on_open_all(&OpenAll, window, cx);
            }),
        );

        let mut panel = div()
            .w_full()
            .h_full()
            .flex()
            .flex_col()
            .child(
                div()
                    .w_full()
                    .p_2()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .border_b_1()
                    .border_color(theme.border)
                    .child(open_selected)
                    .child(open_all),
            )
            .child(
                div()
                    .w_full()
                    .flex_1()
                    .flex()
                    .overflow_hidden()
                    .child(
                        div()
                            .w(px(320.0))
                            .h_full()
                            .p_2()
                            .border_r_1()
                            .border_color(theme.border)
                            .child(results_list),
                    )
                    .child(
                        div()
                            .flex_1()
                            .h_full()
                            .p_3()
                            .child(results_panel::render_detail_pane(results, &theme)),
                    ),
            );

        if let Some(feedback) = results.feedback() {
            panel = panel.child(results_panel::render_feedback(feedback, &theme));
        }

        panel.into_any_element()
    }
}

// =============================================================================
// Focusable
// =============================================================================

impl Focusable for SearchView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

// =============================================================================
// EventEmitter
// =============================================================================

impl EventEmitter<SearchViewEvent> for SearchView {}

// =============================================================================
// Render
// =============================================================================

impl Render for SearchView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        let mut key_context = KeyContext::default();
        key_context.add("SearchView");
        match self.state.active() {
            ActiveView::ModelSelect(_) => key_context.add("ModelSelector"),
            ActiveView::Results(_) => key_context.add("Results"),
            ActiveView::Blank => {}
        }

        let content = if matches!(self.state.active(), ActiveView::ModelSelect(_)) {
            self.render_model_selector(cx)
        } else if matches!(self.state.active(), ActiveView::Results(_)) {
            self.render_results(cx)
        } else {
            div().into_any_element()
        };

        div()
            .id("search-view")
            .key_context(key_context)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_cursor_up))
            .on_action(cx.listener(Self::on_cursor_down))
            .on_action(cx.listener(Self::on_confirm_model))
            .on_action(cx.listener(Self::on_open_selected))
            .on_action(cx.listener(Self::on_open_all))
            .on_action(cx.listener(Self::on_next_image))
            .on_action(cx.listener(Self::on_prev_image))
            .on_action(cx.listener(Self::on_dismiss))
            .w_full()
            .h_full()
            .flex()
            .flex_col()
            .bg(theme.background)
            .text_color(theme.text)
            .overflow_hidden()
            .child(content)
    }
}
