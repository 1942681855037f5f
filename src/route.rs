//! Route entries, their metadata, and the deferred loader cell.
//!
//! A [`RouteEntry`] pairs a path segment with [`Metadata`] and a loader that
//! yields the nested [`RouteRegistry`] of a feature module. The loader is not
//! run when the entry is built; it runs the first time the host router calls
//! [`RouteEntry::load`], and a successful result is kept for the rest of the
//! process lifetime.
//!
//! ```text
//!            load() ok
//! Unresolved ─────────▶ Resolved (terminal, cached)
//!     │    ▲
//!     │    │ load() again
//!     ▼    │
//!   Failed ┘
//! ```
//!
//! # Examples
//!
//! ```
//! use lazy_route_registry::{LoadError, LoadState, RouteEntry, RouteRegistry};
//!
//! let entry = RouteEntry::new("meta", || async { Ok::<_, LoadError>(RouteRegistry::empty()) })
//!     .title("testeApp.meta.home.title");
//!
//! assert_eq!(entry.segment(), "meta");
//! assert_eq!(entry.metadata().page_title(), Some("testeApp.meta.home.title"));
//! assert_eq!(entry.load_state(), LoadState::Unresolved);
//!
//! let nested = pollster::block_on(entry.load()).unwrap();
//! assert!(nested.is_empty());
//! assert_eq!(entry.load_state(), LoadState::Resolved);
//! ```

use crate::error::{LoadError, NavigationError};
use crate::registry::RouteRegistry;
use crate::{debug_log, trace_log, warn_log};
use futures::future::{BoxFuture, FutureExt};
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

// ============================================================================
// Metadata
// ============================================================================

/// Display-oriented key/value data attached to a route entry.
///
/// Values are opaque to the registry. `pageTitle` holds a lookup key into an
/// external localization store and is never rendered here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    values: BTreeMap<String, String>,
}

impl Metadata {
    /// Key of the page title entry.
    pub const PAGE_TITLE: &'static str = "pageTitle";

    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the page title key.
    pub fn with_page_title(self, key: impl Into<String>) -> Self {
        self.with(Self::PAGE_TITLE, key)
    }

    /// Builder: set an arbitrary key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The `pageTitle` localization key, if set.
    pub fn page_title(&self) -> Option<&str> {
        self.get(Self::PAGE_TITLE)
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return `true` if no values are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

// ============================================================================
// Loader
// ============================================================================

/// Future returned by a loader.
pub type LoadFuture = BoxFuture<'static, Result<RouteRegistry, LoadError>>;

/// Deferred reference to a nested route table.
pub type Loader = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// Observable state of an entry's loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// The loader has not completed successfully and the last attempt did not fail.
    Unresolved,
    /// The nested registry is cached.
    Resolved,
    /// The most recent attempt failed. Calling `load` again retries.
    Failed,
}

// ============================================================================
// RouteEntry
// ============================================================================

/// One row of a route registry.
pub struct RouteEntry {
    segment: String,
    metadata: Metadata,
    loader: Loader,
    resolved: OnceLock<Arc<RouteRegistry>>,
    failed: AtomicBool,
    invocations: AtomicUsize,
}

impl RouteEntry {
    /// Create an entry whose nested table is produced by `loader`.
    ///
    /// `loader` is called at most once per successful resolution; it may be
    /// called again after a failure.
    pub fn new<F, Fut>(segment: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RouteRegistry, LoadError>> + Send + 'static,
    {
        Self::from_loader(segment, Arc::new(move || loader().boxed()))
    }

    /// Create an entry from an already boxed loader.
    pub fn from_loader(segment: impl Into<String>, loader: Loader) -> Self {
        Self {
            segment: segment.into(),
            metadata: Metadata::new(),
            loader,
            resolved: OnceLock::new(),
            failed: AtomicBool::new(false),
            invocations: AtomicUsize::new(0),
        }
    }

    /// Create a terminal entry whose nested table is empty.
    pub fn leaf(segment: impl Into<String>) -> Self {
        Self::new(segment, empty_routes)
    }

    /// Builder: set the `pageTitle` metadata key.
    pub fn title(mut self, key: impl Into<String>) -> Self {
        self.metadata.insert(Metadata::PAGE_TITLE, key);
        self
    }

    /// Builder: set an arbitrary metadata value.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Builder: replace the whole metadata record.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// The path segment this entry matches.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// The entry's metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Current state of the loader.
    pub fn load_state(&self) -> LoadState {
        if self.resolved.get().is_some() {
            LoadState::Resolved
        } else if self.failed.load(Ordering::Acquire) {
            LoadState::Failed
        } else {
            LoadState::Unresolved
        }
    }

    /// Return `true` once the nested registry is cached.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// The cached nested registry, if any.
    pub fn resolved(&self) -> Option<Arc<RouteRegistry>> {
        self.resolved.get().cloned()
    }

    /// How many times the loader has been invoked.
    pub fn loader_invocations(&self) -> usize {
        self.invocations.load(Ordering::Acquire)
    }

    /// Acquire the nested route table.
    ///
    /// Once resolved, the cached registry is returned without running the
    /// loader. Concurrent first loads may each run the loader; the first
    /// result stored wins and every caller receives it.
    pub async fn load(&self) -> Result<Arc<RouteRegistry>, NavigationError> {
        if let Some(registry) = self.resolved.get() {
            trace_log!("Routes for '{}' already resolved", self.segment);
            return Ok(Arc::clone(registry));
        }

        let attempt = self.invocations.fetch_add(1, Ordering::AcqRel) + 1;
        debug_log!(
            "Loading nested routes for '{}' (attempt {})",
            self.segment,
            attempt
        );

        match (self.loader)().await {
            Ok(registry) => {
                let stored = self.resolved.get_or_init(|| Arc::new(registry));
                self.failed.store(false, Ordering::Release);
                debug_log!(
                    "Resolved '{}' with {} nested entries",
                    self.segment,
                    stored.len()
                );
                Ok(Arc::clone(stored))
            }
            Err(source) => {
                if self.resolved.get().is_none() {
                    self.failed.store(true, Ordering::Release);
                }
                warn_log!("Loader for '{}' failed: {}", self.segment, source);
                Err(NavigationError::LoadFailure {
                    segment: self.segment.clone(),
                    source,
                })
            }
        }
    }
}

async fn empty_routes() -> Result<RouteRegistry, LoadError> {
    Ok(RouteRegistry::empty())
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("segment", &self.segment)
            .field("metadata", &self.metadata)
            .field("state", &self.load_state())
            .finish()
    }
}
