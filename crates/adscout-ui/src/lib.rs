//! GPUI frontend for the adscout search view.
//!
//! This crate provides the native user interface including:
//! - SearchWindow for window management
//! - SearchView for panel composition and the view contract
//! - The GPUI-independent state machine and listener plumbing
//! - Backend and browser integration seams

pub mod actions;
pub mod backend;
pub mod browser;
pub mod keymap;
pub mod model;
pub mod theme;
pub mod views;
pub mod window;

// Re-export commonly used types
pub use backend::{SearchBackend, StaticBackend};
pub use browser::{BrowserOpener, SystemBrowser};
pub use model::{
    ActionEvent, ActiveView, ModelSelectState, OpenFeedback, ResultsState, SearchState,
    SelectionEvent, ViewListeners, WiredListeners,
};
pub use theme::{Appearance, Theme, ThemeExt, ThemeSettings};
pub use views::{scroll_to_cursor, SearchView, SearchViewEvent};
pub use window::{run_app, ControllerEvent, SearchWindow};
