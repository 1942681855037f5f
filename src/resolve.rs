//! Top-down descent through nested registries.
//!
//! The host router resolves one segment per level: match the segment in the
//! current registry, load the matched entry's nested table, then move on to
//! the next segment inside that table. [`resolve_match_stack`] does that walk
//! for a whole path and records one [`MatchEntry`] per level.
//!
//! # Example
//!
//! Given the entity table:
//! ```text
//! authority  → [new, view, edit]
//! meta       → [new, view, edit]
//! aluno      → [new, view, edit]
//! ```
//!
//! For path `/meta/edit`, the match stack is:
//! ```text
//! [0] meta  pageTitle=testeApp.meta.home.title
//! [1] edit  pageTitle=testeApp.meta.home.createOrEditLabel
//! ```
//!
//! A loader runs only for entries that matched. Entries that were scanned
//! past stay `Unresolved`.

use crate::error::NavigationError;
use crate::path::{normalize_path, split_path};
use crate::registry::RouteRegistry;
use crate::route::RouteEntry;
use crate::{debug_log, warn_log};
use std::sync::Arc;

#[cfg(feature = "cache")]
use crate::cache::RouteCache;

/// Default maximum nesting depth for a descent.
pub const MAX_DEPTH: usize = 16;

// ============================================================================
// Match Stack
// ============================================================================

/// A single level of a resolved path.
#[derive(Debug, Clone)]
pub struct MatchEntry {
    /// The entry that matched at this level
    pub entry: Arc<RouteEntry>,
    /// The entry's loaded nested registry
    pub children: Arc<RouteRegistry>,
    /// Depth in the hierarchy (0 = top-level registry)
    pub depth: usize,
}

impl MatchEntry {
    /// The matched segment.
    pub fn segment(&self) -> &str {
        self.entry.segment()
    }

    /// The matched entry's `pageTitle` key.
    pub fn page_title(&self) -> Option<&str> {
        self.entry.metadata().page_title()
    }
}

/// The resolved chain of entries for one path.
#[derive(Debug, Clone, Default)]
pub struct MatchStack {
    entries: Vec<MatchEntry>,
}

impl MatchStack {
    /// Create an empty match stack
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Get entry at a specific depth
    pub fn at_depth(&self, depth: usize) -> Option<&MatchEntry> {
        self.entries.get(depth)
    }

    /// Get the top-level entry
    pub fn root(&self) -> Option<&MatchEntry> {
        self.entries.first()
    }

    /// Get the deepest entry
    pub fn leaf(&self) -> Option<&MatchEntry> {
        self.entries.last()
    }

    /// Total number of matched levels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty (root path)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get all entries as a slice
    pub fn entries(&self) -> &[MatchEntry] {
        &self.entries
    }

    /// Matched segments from the top level down.
    pub fn segments(&self) -> Vec<&str> {
        self.entries.iter().map(MatchEntry::segment).collect()
    }

    /// `pageTitle` keys from the top level down, skipping levels without one.
    ///
    /// This is the breadcrumb trail a localization layer renders.
    pub fn page_titles(&self) -> Vec<&str> {
        self.entries.iter().filter_map(MatchEntry::page_title).collect()
    }

    /// The normalized path this stack matched.
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }

    /// Pretty-print for debugging
    pub fn debug_string(&self) -> String {
        if self.entries.is_empty() {
            return "MatchStack: (empty)".to_string();
        }

        let mut lines = vec!["MatchStack:".to_string()];
        for entry in &self.entries {
            let indent = "  ".repeat(entry.depth);
            let title = entry
                .page_title()
                .map(|t| format!(" pageTitle={t}"))
                .unwrap_or_default();
            lines.push(format!(
                "{}[{}] {}{} ({} children)",
                indent,
                entry.depth,
                entry.segment(),
                title,
                entry.children.len()
            ));
        }
        lines.join("\n")
    }
}

// ============================================================================
// Resolution Algorithm
// ============================================================================

/// Resolve every segment of `path`, loading each matched entry's nested table.
///
/// The root path yields an empty stack. The first segment that matches
/// nothing yields [`NavigationError::NotFound`] with its depth; a loader
/// failure yields [`NavigationError::LoadFailure`] and leaves the loader
/// retryable.
///
/// # Examples
///
/// ```
/// use lazy_route_registry::{resolve_match_stack, RouteEntry, RouteRegistry, MAX_DEPTH};
///
/// let registry = RouteRegistry::builder()
///     .register(RouteEntry::leaf("meta"))
///     .build()
///     .unwrap();
///
/// let stack = pollster::block_on(resolve_match_stack(&registry, "/meta", MAX_DEPTH)).unwrap();
/// assert_eq!(stack.segments(), ["meta"]);
/// ```
pub async fn resolve_match_stack(
    registry: &RouteRegistry,
    path: &str,
    max_depth: usize,
) -> Result<MatchStack, NavigationError> {
    let segments = split_path(path);

    if segments.len() > max_depth {
        warn_log!(
            "Path '{}' has {} segments, more than the maximum nesting depth ({})",
            path,
            segments.len(),
            max_depth
        );
        return Err(NavigationError::DepthExceeded { max_depth });
    }

    let mut stack = MatchStack::new();
    let mut nested: Option<Arc<RouteRegistry>> = None;

    for (depth, segment) in segments.iter().enumerate() {
        let entry = {
            let level = nested.as_deref().unwrap_or(registry);
            Arc::clone(level.resolve_at(segment, depth)?)
        };

        let children = entry.load().await?;
        stack.entries.push(MatchEntry {
            entry,
            children: Arc::clone(&children),
            depth,
        });
        nested = Some(children);
    }

    debug_log!(
        "Resolved path '{}' → {} levels: [{}]",
        path,
        stack.len(),
        stack.segments().join(" → ")
    );

    Ok(stack)
}

// ============================================================================
// Resolver
// ============================================================================

/// Path resolver bound to one top-level registry.
///
/// Wraps [`resolve_match_stack`] with a configurable depth limit and, with
/// the `cache` feature, an LRU cache of successful resolutions.
///
/// # Examples
///
/// ```
/// use lazy_route_registry::{Resolver, RouteEntry, RouteRegistry};
///
/// let registry = RouteRegistry::builder()
///     .register(RouteEntry::leaf("aluno").title("testeApp.aluno.home.title"))
///     .build()
///     .unwrap();
///
/// let mut resolver = Resolver::new(&registry).max_depth(4);
/// let stack = pollster::block_on(resolver.resolve("aluno/")).unwrap();
/// assert_eq!(stack.page_titles(), ["testeApp.aluno.home.title"]);
/// ```
#[derive(Debug)]
pub struct Resolver<'r> {
    registry: &'r RouteRegistry,
    max_depth: usize,
    #[cfg(feature = "cache")]
    cache: RouteCache,
}

impl<'r> Resolver<'r> {
    /// Create a resolver with the default depth limit.
    pub fn new(registry: &'r RouteRegistry) -> Self {
        Self {
            registry,
            max_depth: MAX_DEPTH,
            #[cfg(feature = "cache")]
            cache: RouteCache::new(),
        }
    }

    /// Builder: set the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder: set how many resolved paths are cached.
    #[cfg(feature = "cache")]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = RouteCache::with_capacity(capacity);
        self
    }

    /// The top-level registry.
    pub fn registry(&self) -> &'r RouteRegistry {
        self.registry
    }

    /// The configured depth limit.
    pub fn depth_limit(&self) -> usize {
        self.max_depth
    }

    /// The resolution cache.
    #[cfg(feature = "cache")]
    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }

    /// Drop every cached resolution.
    #[cfg(feature = "cache")]
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Resolve `path` against the registry.
    pub async fn resolve(&mut self, path: &str) -> Result<MatchStack, NavigationError> {
        let key = normalize_path(path);

        #[cfg(feature = "cache")]
        if let Some(stack) = self.cache.get(&key) {
            return Ok(stack);
        }

        let stack = resolve_match_stack(self.registry, &key, self.max_depth).await?;

        #[cfg(feature = "cache")]
        self.cache.insert(key.into_owned(), stack.clone());

        Ok(stack)
    }
}
