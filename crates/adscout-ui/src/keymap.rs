//! GPUI keybinding registration.
//!
//! This module registers the default key bindings at startup. GPUI uses
//! last-wins semantics at the same context depth, so bindings registered
//! later would override these defaults.

use std::rc::Rc;

use gpui::{App, DummyKeyboardMapper, KeyBinding, KeyBindingContextPredicate};

use crate::actions::action_from_name;

/// Default bindings: keystroke, action name, key context.
///
/// The "SearchView" context is always present; "ModelSelector" and
/// "Results" are added by whichever panel is active.
const DEFAULT_BINDINGS: &[(&str, &str, &str)] = &[
    ("up", "cursor_up", "SearchView"),
    ("down", "cursor_down", "SearchView"),
    ("escape", "dismiss", "SearchView"),
    ("enter", "confirm_model", "ModelSelector"),
    ("enter", "open_selected", "Results"),
    ("cmd+enter", "open_all", "Results"),
    ("right", "next_image", "Results"),
    ("left", "prev_image", "Results"),
];

/// Convert user-friendly keystroke to GPUI format.
///
/// Config files write "cmd+enter"; GPUI expects "cmd-enter".
fn normalize_keystroke(s: &str) -> String {
    s.replace('+', "-")
}

/// Build a GPUI context predicate from a key context name.
fn build_context_predicate(context: &str) -> Option<Rc<KeyBindingContextPredicate>> {
    KeyBindingContextPredicate::parse(context).ok().map(Rc::new)
}

/// Register the default key bindings with GPUI.
///
/// Call once at startup, before the window opens.
pub fn register_defaults(cx: &mut App) {
    for (key, action_name, context) in DEFAULT_BINDINGS {
        apply_binding(key, action_name, context, cx);
    }
}

/// Apply a single binding to GPUI.
fn apply_binding(key: &str, action_name: &str, context: &str, cx: &mut App) {
    let Some(action) = action_from_name(action_name) else {
        tracing::warn!("Unknown action: {}", action_name);
        return;
    };

    let keystroke = normalize_keystroke(key);
    let context_predicate = build_context_predicate(context);

    match KeyBinding::load(
        &keystroke,
        action,
        context_predicate,
        false, // use_key_equivalents
        None,  // action_input
        &DummyKeyboardMapper,
    ) {
        Ok(binding) => {
            cx.bind_keys([binding]);
            tracing::debug!(
                "Registered binding: {} -> {} (context: {})",
                key,
                action_name,
                context
            );
        }
        Err(e) => {
            tracing::warn!("Failed to create binding for '{}': {:?}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keystroke() {
        assert_eq!(normalize_keystroke("cmd+enter"), "cmd-enter");
        assert_eq!(normalize_keystroke("left"), "left");
        assert_eq!(normalize_keystroke("cmd-enter"), "cmd-enter"); // Already normalized
    }

    #[test]
    fn test_default_bindings_use_known_actions() {
        for (_, action_name, _) in DEFAULT_BINDINGS {
            assert!(
                action_from_name(action_name).is_some(),
                "unknown action in defaults: {}",
                action_name
            );
        }
    }
}
