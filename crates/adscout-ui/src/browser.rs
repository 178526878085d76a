//! Browser launch integration.
//!
//! Opening a listing is a fire-and-forget side effect: one attempt per URL,
//! no awaited completion, no retry. The `BrowserOpener` trait keeps the
//! side effect mockable for testing.

use std::io;

/// Trait for opening a URL in the system's default browser.
pub trait BrowserOpener: Send + Sync {
    /// Open the given URL. One attempt; the caller decides how to surface
    /// a failure.
    fn open_url(&self, url: &str) -> io::Result<()>;
}

/// Real implementation backed by the `open` crate.
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open_url(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

// =============================================================================
// Recording Browser for Testing
// =============================================================================

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;

    /// Test opener that records every URL in call order.
    pub struct RecordingBrowser {
        opened: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingBrowser {
        /// Create a recording opener that always succeeds.
        pub fn new() -> Self {
            Self {
                opened: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        /// Create a recording opener whose every attempt fails.
        pub fn failing() -> Self {
            Self {
                opened: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        /// URLs opened so far, in call order.
        pub fn opened(&self) -> Vec<String> {
            self.opened.lock().clone()
        }
    }

    impl Default for RecordingBrowser {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BrowserOpener for RecordingBrowser {
        fn open_url(&self, url: &str) -> io::Result<()> {
            self.opened.lock().push(url.to_string());
            if self.fail {
                Err(io::Error::new(io::ErrorKind::NotFound, "no browser available"))
            } else {
                Ok(())
            }
        }
    }
}
