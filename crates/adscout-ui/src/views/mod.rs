//! UI views for the adscout window.
//!
//! `SearchView` is the root GPUI component; the panel modules hold its
//! render helpers.

pub mod model_selector;
pub mod results_panel;
mod search_view;

pub use results_panel::scroll_to_cursor;
pub use search_view::{SearchView, SearchViewEvent};
