//! Backend integration for the adscout view.
//!
//! The `SearchBackend` trait is the seam to the search/model subsystem: it
//! supplies the selectable models and runs a search for a confirmed model.
//! The trait is GPUI-independent and returns futures, allowing the caller
//! to spawn them however it wants. This enables testing with mock backends.

use std::collections::HashMap;

use futures::future::BoxFuture;

use adscout_core::{Advertisement, BackendError, ModelInfo};

// =============================================================================
// Backend Trait
// =============================================================================

/// Trait for backend operations.
///
/// The view never calls these directly; the controller does, feeding the
/// results back into the view.
pub trait SearchBackend: Send + Sync {
    /// The selectable search models, in display order.
    fn models(&self) -> BoxFuture<'static, Result<Vec<ModelInfo>, BackendError>>;

    /// Run a search against the given model. Returns the advertisements to
    /// display, in ranked order.
    fn search(&self, model_id: String)
        -> BoxFuture<'static, Result<Vec<Advertisement>, BackendError>>;
}

// =============================================================================
// Static Backend
// =============================================================================

/// Backend over a fixed, in-memory data set.
///
/// Real search execution is an external concern; this implementation backs
/// the binary with canned listings and is the reference for wiring a real
/// engine behind the same trait.
pub struct StaticBackend {
    models: Vec<ModelInfo>,
    ads_by_model: HashMap<String, Vec<Advertisement>>,
}

impl StaticBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            ads_by_model: HashMap::new(),
        }
    }

    /// Register a model together with the listings a search returns for it.
    pub fn with_model(mut self, model: ModelInfo, ads: Vec<Advertisement>) -> Self {
        self.ads_by_model.insert(model.id.clone(), ads);
        self.models.push(model);
        self
    }

    /// A small demo data set for running the binary standalone.
    pub fn sample() -> Self {
        Self::new()
            .with_model(
                ModelInfo::new("bikes", "Bicycles").with_description("Local bike listings"),
                vec![
                    Advertisement::new("Commuter bike, 54cm", "https://ads.example/bikes/1")
                        .with_description("Single owner, recently serviced.")
                        .with_images(vec![
                            "https://ads.example/bikes/1/a.jpg".into(),
                            "https://ads.example/bikes/1/b.jpg".into(),
                        ]),
                    Advertisement::new("Kids bike 20\"", "https://ads.example/bikes/2")
                        .with_description("Outgrown, some scratches."),
                ],
            )
            .with_model(
                ModelInfo::new("furniture", "Furniture").with_description("Used furniture"),
                vec![Advertisement::new(
                    "Oak dining table",
                    "https://ads.example/furniture/1",
                )
                .with_description("Seats six, minor wear.")
                .with_images(vec!["https://ads.example/furniture/1/a.jpg".into()])],
            )
    }
}

impl Default for StaticBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBackend for StaticBackend {
    fn models(&self) -> BoxFuture<'static, Result<Vec<ModelInfo>, BackendError>> {
        let models = self.models.clone();
        Box::pin(async move { Ok(models) })
    }

    fn search(
        &self,
        model_id: String,
    ) -> BoxFuture<'static, Result<Vec<Advertisement>, BackendError>> {
        let ads = self.ads_by_model.get(&model_id).cloned();
        Box::pin(async move { ads.ok_or(BackendError::UnknownModel(model_id)) })
    }
}

// =============================================================================
// Mock Backend for Testing
// =============================================================================

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    /// Mock backend with canned results and an optional artificial delay.
    pub struct MockBackend {
        pub models: Arc<Mutex<Vec<ModelInfo>>>,
        pub results: Arc<Mutex<Vec<Advertisement>>>,
        pub search_delay: Duration,
    }

    impl MockBackend {
        /// Create a mock backend with no models and no results.
        pub fn new() -> Self {
            Self {
                models: Arc::new(Mutex::new(Vec::new())),
                results: Arc::new(Mutex::new(Vec::new())),
                search_delay: Duration::ZERO,
            }
        }

        /// Set the search results.
        pub fn with_results(self, results: Vec<Advertisement>) -> Self {
            *self.results.lock() = results;
            self
        }

        /// Set the search delay.
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.search_delay = delay;
            self
        }
    }

    impl Default for MockBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SearchBackend for MockBackend {
        fn models(&self) -> BoxFuture<'static, Result<Vec<ModelInfo>, BackendError>> {
            let models = self.models.clone();
            Box::pin(async move { Ok(models.lock().clone()) })
        }

        fn search(
            &self,
            _model_id: String,
        ) -> BoxFuture<'static, Result<Vec<Advertisement>, BackendError>> {
            let results = self.results.clone();
            let delay = self.search_delay;

            Box::pin(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(results.lock().clone())
            })
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
