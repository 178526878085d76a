//! Typed listener registration.
//!
//! The view forwards user input to externally registered callbacks, one per
//! event category (action, selection-changed, key-pressed), and never
//! interprets the events itself. Registration is all-or-nothing: a set with
//! any callback missing is rejected before anything is wired.

use std::sync::Arc;

use adscout_core::{KeyCode, ViewError};

// =============================================================================
// Events
// =============================================================================

/// A button-style action triggered in one of the panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEvent {
    /// The user confirmed a model choice in the model selector.
    ConfirmModel { model_id: String },
    /// The "open selected listing" control was triggered.
    OpenSelected,
    /// The "open all listings" control was triggered.
    OpenAll,
}

/// The results-list selection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    /// New selection index, `None` when the selection was cleared.
    pub index: Option<usize>,
}

// =============================================================================
// Callback Handles
// =============================================================================

/// Callback invoked for panel actions.
pub type ActionListener = Arc<dyn Fn(ActionEvent) + Send + Sync>;
/// Callback invoked when the results-list selection changes.
pub type SelectionListener = Arc<dyn Fn(SelectionEvent) + Send + Sync>;
/// Callback invoked for key presses in the results list.
pub type KeyListener = Arc<dyn Fn(KeyCode) + Send + Sync>;

// =============================================================================
// Listener Set
// =============================================================================

/// A listener set under construction.
///
/// All three callbacks must be supplied before the set can be wired into
/// the view; `wire()` rejects incomplete sets without partial effects.
#[derive(Default, Clone)]
pub struct ViewListeners {
    action: Option<ActionListener>,
    selection: Option<SelectionListener>,
    key: Option<KeyListener>,
}

impl ViewListeners {
    /// Create an empty listener set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the action callback.
    pub fn on_action(mut self, f: impl Fn(ActionEvent) + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(f));
        self
    }

    /// Supply the selection-changed callback.
    pub fn on_selection(mut self, f: impl Fn(SelectionEvent) + Send + Sync + 'static) -> Self {
        self.selection = Some(Arc::new(f));
        self
    }

    /// Supply the key-pressed callback.
    pub fn on_key(mut self, f: impl Fn(KeyCode) + Send + Sync + 'static) -> Self {
        self.key = Some(Arc::new(f));
        self
    }

    /// Validate the set and produce wired listeners.
    ///
    /// Fails with `ViewError::MissingListener` naming the first absent
    /// callback; nothing is wired in that case.
    pub fn wire(self) -> Result<WiredListeners, ViewError> {
        let action = self.action.ok_or(ViewError::MissingListener("action"))?;
        let selection = self
            .selection
            .ok_or(ViewError::MissingListener("selection"))?;
        let key = self.key.ok_or(ViewError::MissingListener("key"))?;

        Ok(WiredListeners {
            action,
            selection,
            key,
        })
    }
}

/// A complete, validated listener set.
#[derive(Clone)]
pub struct WiredListeners {
    action: ActionListener,
    selection: SelectionListener,
    key: KeyListener,
}

impl WiredListeners {
    /// Forward an action event to the registered callback.
    pub fn emit_action(&self, event: ActionEvent) {
        (self.action)(event);
    }

    /// Forward a selection change to the registered callback.
    pub fn emit_selection(&self, event: SelectionEvent) {
        (self.selection)(event);
    }

    /// Forward a key press to the registered callback.
    pub fn emit_key(&self, key: KeyCode) {
        (self.key)(key);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_set() -> (ViewListeners, Arc<AtomicUsize>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let actions = Arc::new(AtomicUsize::new(0));
        let selections = Arc::new(AtomicUsize::new(0));
        let keys = Arc::new(AtomicUsize::new(0));

        let a = actions.clone();
        let s = selections.clone();
        let k = keys.clone();
        let listeners = ViewListeners::new()
            .on_action(move |_| {
                a.fetch_add(1, Ordering::SeqCst);
            })
            .on_selection(move |_| {
                s.fetch_add(1, Ordering::SeqCst);
            })
            .on_key(move |_| {
                k.fetch_add(1, Ordering::SeqCst);
            });

        (listeners, actions, selections, keys)
    }

    #[test]
    fn test_complete_set_wires() {
        let (listeners, _, _, _) = counting_set();
        assert!(listeners.wire().is_ok());
    }

    #[test]
    fn test_each_event_reaches_its_callback_exactly_once() {
        let (listeners, actions, selections, keys) = counting_set();
        let wired = listeners.wire().unwrap();

        wired.emit_action(ActionEvent::OpenSelected);
        assert_eq!(actions.load(Ordering::SeqCst), 1);
        assert_eq!(selections.load(Ordering::SeqCst), 0);
        assert_eq!(keys.load(Ordering::SeqCst), 0);

        wired.emit_selection(SelectionEvent { index: Some(2) });
        assert_eq!(selections.load(Ordering::SeqCst), 1);

        wired.emit_key(KeyCode::Right);
        assert_eq!(keys.load(Ordering::SeqCst), 1);
        assert_eq!(actions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_action_listener() {
        let listeners = ViewListeners::new()
            .on_selection(|_| {})
            .on_key(|_| {});
        assert_eq!(
            listeners.wire().unwrap_err(),
            ViewError::MissingListener("action")
        );
    }

    #[test]
    fn test_missing_selection_listener() {
        let listeners = ViewListeners::new().on_action(|_| {}).on_key(|_| {});
        assert_eq!(
            listeners.wire().unwrap_err(),
            ViewError::MissingListener("selection")
        );
    }

    #[test]
    fn test_missing_key_listener() {
        let listeners = ViewListeners::new()
            .on_action(|_| {})
            .on_selection(|_| {});
        assert_eq!(
            listeners.wire().unwrap_err(),
            ViewError::MissingListener("key")
        );
    }

    #[test]
    fn test_empty_set_names_action_first() {
        assert_eq!(
            ViewListeners::new().wire().unwrap_err(),
            ViewError::MissingListener("action")
        );
    }
}
