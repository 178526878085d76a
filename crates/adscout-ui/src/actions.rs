//! Centralized actions for the adscout window.
//!
//! This module defines all GPUI actions used throughout the view.
//! Actions are dispatched by GPUI's key binding system.

use gpui::actions;

// =============================================================================
// Navigation Actions
// =============================================================================

actions!(adscout, [CursorUp, CursorDown,]);

// =============================================================================
// Panel Actions
// =============================================================================

actions!(
    adscout,
    [ConfirmModel, OpenSelected, OpenAll, NextImage, PrevImage, Dismiss,]
);

// =============================================================================
// Action Lookup
// =============================================================================

/// Look up an action by name for GPUI registration.
///
/// Returns a boxed action that can be used with `cx.bind_keys()`.
pub fn action_from_name(name: &str) -> Option<Box<dyn gpui::Action>> {
    match name {
        // Navigation
        "cursor_up" => Some(Box::new(CursorUp)),
        "cursor_down" => Some(Box::new(CursorDown)),

        // Panels
        "confirm_model" => Some(Box::new(ConfirmModel)),
        "open_selected" => Some(Box::new(OpenSelected)),
        "open_all" => Some(Box::new(OpenAll)),
        "next_image" => Some(Box::new(NextImage)),
        "prev_image" => Some(Box::new(PrevImage)),
        "dismiss" => Some(Box::new(Dismiss)),

        _ => None,
    }
}

/// Get all available action names.
pub fn available_actions() -> &'static [&'static str] {
    &[
        "cursor_up",
        "cursor_down",
        "confirm_model",
        "open_selected",
        "open_all",
        "next_image",
        "prev_image",
        "dismiss",
    ]
}
