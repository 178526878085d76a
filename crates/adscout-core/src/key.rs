//! Key-press vocabulary forwarded across the listener boundary.

use serde::{Deserialize, Serialize};

/// A key press observed in the results list.
///
/// The view forwards these verbatim to the registered key listener; it does
/// not interpret them. The results panel's own image cycling reacts to
/// `Left` and `Right` and ignores everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCode {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&KeyCode::Left).unwrap(), "\"left\"");
        let back: KeyCode = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(back, KeyCode::Right);
    }
}
