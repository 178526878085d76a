//! Window management for the adscout view.
//!
//! This module owns the window lifecycle and the controller bridge: the
//! registered listeners forward events into a channel, and a task applies
//! the resulting view operations through the entity handle. Listener
//! callbacks never touch GPUI directly.
//!
//! ```text
//! [panel event] --(listener)--> [channel] --(task)--> [view operation]
//! ```

use std::sync::Arc;

use gpui::{
    px, size, App, AppContext, AsyncApp, Bounds, Entity, Task, TitlebarOptions, WindowBounds,
    WindowHandle, WindowKind, WindowOptions,
};
use tokio::sync::mpsc::{self, Receiver};

use adscout_core::{AppConfig, KeyCode, ModelInfo};

use crate::backend::SearchBackend;
use crate::browser::{BrowserOpener, SystemBrowser};
use crate::keymap;
use crate::model::{ActionEvent, SelectionEvent, ViewListeners};
use crate::theme::{Theme, ThemeSettings};
use crate::views::{SearchView, SearchViewEvent};

// =============================================================================
// Window Configuration
// =============================================================================

/// Create window options for the search window.
///
/// Note: Window bounds will be set after creation since we need App context.
fn create_window_options() -> WindowOptions {
    WindowOptions {
        window_bounds: None, // Will be set via Bounds::centered
        titlebar: Some(TitlebarOptions {
            title: Some("adscout".into()),
            ..Default::default()
        }),
        focus: true,
        show: false, // Shown by the first visibility operation
        kind: WindowKind::Normal,
        is_movable: true,
        ..Default::default()
    }
}

// =============================================================================
// Controller Event Channel
// =============================================================================

/// Events sent from the view's listeners to the controller task.
#[derive(Debug, Clone)]
pub enum ControllerEvent {
    /// A panel action fired.
    Action(ActionEvent),
    /// The results selection changed.
    Selection(SelectionEvent),
    /// A key was pressed in the results list.
    Key(KeyCode),
}

// =============================================================================
// Search Window
// =============================================================================

/// The main window manager.
///
/// This struct owns:
/// - The GPUI window handle
/// - The controller task applying listener events to the view
pub struct SearchWindow {
    /// The GPUI window handle.
    window_handle: WindowHandle<SearchView>,
    /// Task draining the controller channel (kept alive).
    _controller_task: Task<()>,
}

impl SearchWindow {
    /// Create the search window and wire the controller.
    ///
    /// Returns `None` if the window couldn't be created or the listeners
    /// couldn't be registered.
    pub fn new(
        config: &AppConfig,
        backend: Arc<dyn SearchBackend>,
        models: Vec<ModelInfo>,
        cx: &mut App,
    ) -> Option<Self> {
        // Create window options with centered bounds at the selector size
        let window_size = size(
            px(config.window.selector_width),
            px(config.window.selector_height),
        );
        let bounds = Bounds::centered(None, window_size, cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..create_window_options()
        };

        let window_config = config.window;
        let browser: Arc<dyn BrowserOpener> = Arc::new(SystemBrowser);

        // Create the window and capture the view entity for subscriptions
        let mut view_entity: Option<Entity<SearchView>> = None;
        let window_handle = cx
            .open_window(options, |_window, cx| {
                let view = cx.new(|cx| {
                    SearchView::new(models.clone(), browser.clone(), window_config, cx)
                });
                view_entity = Some(view.clone());
                view
            })
            .ok()?;

        // Hide the app when the view requests dismissal
        let view_entity = view_entity?;
        cx.subscribe(&view_entity, |_, event: &SearchViewEvent, cx| match event {
            SearchViewEvent::Dismiss => {
                cx.hide();
            }
        })
        .detach();

        // Controller channel (tokio async mpsc)
        let (tx, rx) = mpsc::channel::<ControllerEvent>(32);

        // Listener callbacks only signal; they never touch GPUI.
        // Use try_send to avoid blocking if the channel is full.
        let tx_action = tx.clone();
        let tx_selection = tx.clone();
        let tx_key = tx;
        let listeners = ViewListeners::new()
            .on_action(move |event| {
                let _ = tx_action.try_send(ControllerEvent::Action(event));
            })
            .on_selection(move |event| {
                let _ = tx_selection.try_send(ControllerEvent::Selection(event));
            })
            .on_key(move |key| {
                let _ = tx_key.try_send(ControllerEvent::Key(key));
            });

        match window_handle.update(cx, |view, _window, _cx| view.add_listeners(listeners)) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!("listener registration rejected: {}", e);
                return None;
            }
            Err(e) => {
                tracing::error!("failed to reach search view: {}", e);
                return None;
            }
        }

        // Spawn the controller task
        let handle_clone = window_handle;
        let backend_clone = backend;
        let controller_task = cx.spawn(async move |cx: &mut AsyncApp| {
            Self::drive(rx, handle_clone, backend_clone, cx).await;
        });

        // Start in model selection
        let _ = window_handle.update(cx, |view, window, cx| {
            view.set_model_selector_visibility(true, window, cx);
        });

        Some(Self {
            window_handle,
            _controller_task: controller_task,
        })
    }

    /// Apply listener events to the view.
    ///
    /// This is the external collaborator of the view contract: selection
    /// changes trigger a detail refresh, key presses drive image cycling,
    /// and a confirmed model runs a search whose results repopulate the
    /// results panel.
    async fn drive(
        mut rx: Receiver<ControllerEvent>,
        handle: WindowHandle<SearchView>,
        backend: Arc<dyn SearchBackend>,
        cx: &mut AsyncApp,
    ) {
        while let Some(event) = rx.recv().await {
            match event {
                ControllerEvent::Action(ActionEvent::ConfirmModel { model_id }) => {
                    let Ok(generation) =
                        handle.update(cx, |view, _window, _cx| view.begin_search())
                    else {
                        continue;
                    };

                    match backend.search(model_id.clone()).await {
                        Ok(ads) => {
                            tracing::info!(
                                "search for model '{}' returned {} listings",
                                model_id,
                                ads.len()
                            );
                            let _ = handle.update(cx, |view, window, cx| {
                                view.apply_search_results(generation, ads, true, window, cx);
                            });
                        }
                        Err(e) => {
                            tracing::error!("search for model '{}' failed: {}", model_id, e);
                        }
                    }
                }
                ControllerEvent::Action(ActionEvent::OpenSelected) => {
                    let _ = handle.update(cx, |view, _window, cx| {
                        if let Err(e) = view.open_selected(cx) {
                            tracing::warn!("open selected: {}", e);
                        }
                    });
                }
                ControllerEvent::Action(ActionEvent::OpenAll) => {
                    let _ = handle.update(cx, |view, _window, cx| {
                        if let Err(e) = view.open_all(cx) {
                            tracing::warn!("open all: {}", e);
                        }
                    });
                }
                ControllerEvent::Selection(_) => {
                    let _ = handle.update(cx, |view, _window, cx| {
                        if let Err(e) = view.update_listing_selection(cx) {
                            tracing::warn!("listing selection: {}", e);
                        }
                    });
                }
                ControllerEvent::Key(key) => {
                    let _ = handle.update(cx, |view, _window, cx| {
                        // Keys outside the results display are a no-op.
                        let _ = view.update_image_selection(key, cx);
                    });
                }
            }
        }
    }

    /// Show and activate the search window.
    pub fn show(&self, cx: &mut App) {
        let _ = self.window_handle.update(cx, |_view, window, _cx| {
            window.activate_window();
        });
    }

    /// Get the window handle.
    pub fn handle(&self) -> WindowHandle<SearchView> {
        self.window_handle
    }
}

// =============================================================================
// App Entry Point
// =============================================================================

/// Initialize and run the application.
///
/// Sets up the theme, registers the default keybindings, creates the
/// search window over the given backend, and runs the main loop.
pub fn run_app(config: AppConfig, backend: Arc<dyn SearchBackend>, models: Vec<ModelInfo>) {
    gpui::Application::new().run(move |cx| {
        // Initialize gpui-component
        gpui_component::init(cx);

        // Theme from config
        let settings = ThemeSettings::from_config(&config.appearance);
        let system_is_dark = matches!(
            cx.window_appearance(),
            gpui::WindowAppearance::Dark | gpui::WindowAppearance::VibrantDark
        );
        let theme = Theme::from_settings(&settings, system_is_dark);
        cx.set_global(settings);
        cx.set_global(theme);

        // Default keybindings
        keymap::register_defaults(cx);

        // Create the window
        let Some(window) = SearchWindow::new(&config, backend, models, cx) else {
            tracing::error!("Failed to create search window");
            cx.quit();
            return;
        };

        window.show(cx);

        // Keep the window alive by storing it as a global
        cx.set_global(window);
    });
}

// =============================================================================
// Global Storage
// =============================================================================

impl gpui::Global for SearchWindow {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_options() {
        let options = create_window_options();
        assert!(options.titlebar.is_some());
        assert!(!options.show);
        assert!(matches!(options.kind, WindowKind::Normal));
        assert!(options.is_movable);
    }
}
