//! State model for the adscout window.
//!
//! This module contains the state machine and listener plumbing that drive
//! the UI. All types are GPUI-independent for testability.

mod listeners;
mod state;

pub use listeners::{
    ActionEvent, ActionListener, KeyListener, SelectionEvent, SelectionListener, ViewListeners,
    WiredListeners,
};
pub use state::{ActiveView, ModelSelectState, OpenFeedback, ResultsState, SearchState};
