//! Error types for the route registry.
//!
//! Three failure domains are kept apart:
//!
//! - [`RegistryError`] — a registry literal is malformed (duplicate or empty
//!   segment). This is a build defect and is reported by
//!   [`RegistryBuilder::build`](crate::RegistryBuilder::build).
//! - [`LoadError`] — what a deferred loader returns when its nested route
//!   table cannot be materialized.
//! - [`NavigationError`] — what the host router sees: a segment that matched
//!   nothing, a matched entry whose loader failed, or a descent that went too
//!   deep.
//!
//! # Examples
//!
//! ```
//! use lazy_route_registry::NavigationError;
//!
//! let err = NavigationError::not_found("unknown", 0);
//! assert!(err.is_not_found());
//! assert!(!err.is_load_failure());
//! assert_eq!(err.to_string(), "Route not found: 'unknown' (depth 0)");
//! ```

use thiserror::Error;

/// A boxed error type carried as the source of a [`LoadError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Construction-time defects of a route registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two sibling entries share a segment.
    #[error("Duplicate route segment '{segment}' at positions {first} and {second}")]
    DuplicateSegment {
        /// The repeated segment.
        segment: String,
        /// Position of the entry registered first.
        first: usize,
        /// Position of the offending entry.
        second: usize,
    },

    /// An entry was registered with an empty segment.
    #[error("Empty route segment at position {position}")]
    EmptySegment {
        /// Position of the offending entry.
        position: usize,
    },
}

/// Failure reported by a deferred loader.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl LoadError {
    /// Create a load error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a load error wrapping an underlying cause.
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<RegistryError> for LoadError {
    fn from(err: RegistryError) -> Self {
        Self::with_source("nested route table is malformed", err)
    }
}

/// Outcome of a failed lookup or descent, surfaced to the host router.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// No entry at `depth` matches `segment`.
    #[error("Route not found: '{segment}' (depth {depth})")]
    NotFound {
        /// The segment that matched nothing.
        segment: String,
        /// Nesting level of the registry that was searched (0 = top level).
        depth: usize,
    },

    /// The entry for `segment` matched but its nested table could not be loaded.
    #[error("Failed to load routes for '{segment}': {source}")]
    LoadFailure {
        /// Segment of the entry whose loader failed.
        segment: String,
        /// The loader's error.
        #[source]
        source: LoadError,
    },

    /// The path nests deeper than the resolver allows.
    #[error("Maximum route nesting depth ({max_depth}) exceeded")]
    DepthExceeded {
        /// The configured limit.
        max_depth: usize,
    },
}

impl NavigationError {
    /// Shorthand for [`NavigationError::NotFound`].
    pub fn not_found(segment: impl Into<String>, depth: usize) -> Self {
        Self::NotFound {
            segment: segment.into(),
            depth,
        }
    }

    /// Check if the segment matched nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if a matched entry failed to load
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::LoadFailure { .. })
    }

    /// Check if the descent exceeded its depth limit
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, Self::DepthExceeded { .. })
    }

    /// The segment involved, if any.
    pub fn segment(&self) -> Option<&str> {
        match self {
            Self::NotFound { segment, .. } | Self::LoadFailure { segment, .. } => Some(segment),
            Self::DepthExceeded { .. } => None,
        }
    }
}
