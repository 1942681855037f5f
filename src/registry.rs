//! The route registry: an ordered, immutable table of route entries.
//!
//! Entries are matched by an exact, case-sensitive comparison of their
//! segment, scanning in insertion order. The first match wins. Since the
//! builder rejects duplicate siblings, at most one entry can match.
//!
//! New entries are appended through [`RegistryBuilder::register`]; nothing
//! mutates a registry after [`RegistryBuilder::build`].
//!
//! # Examples
//!
//! ```
//! use lazy_route_registry::{RouteEntry, RouteRegistry};
//!
//! let registry = RouteRegistry::builder()
//!     .register(RouteEntry::leaf("authority").title("testeApp.adminAuthority.home.title"))
//!     .register(RouteEntry::leaf("meta").title("testeApp.meta.home.title"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.segments().collect::<Vec<_>>(), ["authority", "meta"]);
//! assert!(registry.resolve("meta").is_ok());
//! assert!(registry.resolve("Meta").unwrap_err().is_not_found());
//! ```

use crate::error::{NavigationError, RegistryError};
use crate::route::RouteEntry;
use crate::{error_log, trace_log};
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered collection of route entries.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    entries: Vec<Arc<RouteEntry>>,
}

impl RouteRegistry {
    /// A registry with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry from entries in the given order.
    pub fn new(entries: impl IntoIterator<Item = RouteEntry>) -> Result<Self, RegistryError> {
        entries
            .into_iter()
            .fold(RegistryBuilder::new(), RegistryBuilder::register)
            .build()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Arc<RouteEntry>] {
        &self.entries
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Arc<RouteEntry>> {
        self.entries.get(index)
    }

    /// Segments in insertion order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.segment())
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry whose segment equals `segment` exactly.
    ///
    /// No normalization, prefix, or wildcard matching is performed. A miss is
    /// reported as [`NavigationError::NotFound`] at depth 0.
    pub fn resolve(&self, segment: &str) -> Result<&Arc<RouteEntry>, NavigationError> {
        self.resolve_at(segment, 0)
    }

    pub(crate) fn resolve_at(
        &self,
        segment: &str,
        depth: usize,
    ) -> Result<&Arc<RouteEntry>, NavigationError> {
        let found = self.entries.iter().find(|entry| entry.segment() == segment);
        trace_log!(
            "resolve: segment='{}', depth={}, entries={}, matched={}",
            segment,
            depth,
            self.entries.len(),
            found.is_some()
        );
        found.ok_or_else(|| NavigationError::not_found(segment, depth))
    }

    /// Acquire the nested registry of `entry`.
    ///
    /// See [`RouteEntry::load`].
    pub async fn load(&self, entry: &RouteEntry) -> Result<Arc<RouteRegistry>, NavigationError> {
        entry.load().await
    }
}

/// Append-only builder for a [`RouteRegistry`].
///
/// Validation is deferred to [`build`](Self::build) so a registry literal can
/// be written as one chain of `register` calls.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<Arc<RouteEntry>>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the entries of an existing registry.
    ///
    /// Entries are shared, not copied, so loader state already resolved in
    /// `registry` carries over.
    pub fn from_registry(registry: &RouteRegistry) -> Self {
        Self {
            entries: registry.entries.clone(),
        }
    }

    /// Append an entry.
    pub fn register(mut self, entry: RouteEntry) -> Self {
        self.entries.push(Arc::new(entry));
        self
    }

    /// Append an already shared entry.
    pub fn register_shared(mut self, entry: Arc<RouteEntry>) -> Self {
        self.entries.push(entry);
        self
    }

    /// Return the number of entries registered so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate and freeze the registry.
    ///
    /// Fails on the first empty segment or on the first segment that repeats
    /// an earlier sibling.
    pub fn build(self) -> Result<RouteRegistry, RegistryError> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(self.entries.len());

        for (position, entry) in self.entries.iter().enumerate() {
            let segment = entry.segment();
            if segment.is_empty() {
                error_log!("Rejected route registry: empty segment at position {}", position);
                return Err(RegistryError::EmptySegment { position });
            }
            if let Some(&first) = seen.get(segment) {
                error_log!(
                    "Rejected route registry: segment '{}' at positions {} and {}",
                    segment,
                    first,
                    position
                );
                return Err(RegistryError::DuplicateSegment {
                    segment: segment.to_string(),
                    first,
                    second: position,
                });
            }
            seen.insert(segment, position);
        }

        Ok(RouteRegistry {
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RouteRegistry {
        RouteRegistry::builder()
            .register(RouteEntry::leaf("authority"))
            .register(RouteEntry::leaf("meta"))
            .register(RouteEntry::leaf("aluno"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let registry = sample();
        assert_eq!(
            registry.segments().collect::<Vec<_>>(),
            vec!["authority", "meta", "aluno"]
        );
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(1).unwrap().segment(), "meta");
        assert!(registry.get(3).is_none());
    }

    #[test]
    fn test_resolve_exact_match() {
        let registry = sample();
        let entry = registry.resolve("aluno").unwrap();
        assert_eq!(entry.segment(), "aluno");
    }

    #[test]
    fn test_resolve_is_case_sensitive_and_unnormalized() {
        let registry = sample();
        for candidate in ["Aluno", "aluno/", "/aluno", " aluno", "alu", "alunos", ""] {
            let err = registry.resolve(candidate).unwrap_err();
            assert!(err.is_not_found(), "'{}' should not match", candidate);
            assert_eq!(err.segment(), Some(candidate));
        }
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = RouteRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.resolve("meta").unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_segment_rejected() {
        let err = RouteRegistry::builder()
            .register(RouteEntry::leaf("meta"))
            .register(RouteEntry::leaf("aluno"))
            .register(RouteEntry::leaf("meta"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateSegment {
                segment: "meta".to_string(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn test_empty_segment_rejected() {
        let err = RouteRegistry::new([RouteEntry::leaf("meta"), RouteEntry::leaf("")]).unwrap_err();
        assert_eq!(err, RegistryError::EmptySegment { position: 1 });
    }

    #[test]
    fn test_from_registry_shares_entries() {
        let base = sample();
        let grown = RegistryBuilder::from_registry(&base)
            .register(RouteEntry::leaf("curso"))
            .build()
            .unwrap();
        assert_eq!(grown.len(), 4);
        assert!(Arc::ptr_eq(&base.entries()[0], &grown.entries()[0]));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_from_registry_rejects_existing_segment() {
        let base = sample();
        let err = RegistryBuilder::from_registry(&base)
            .register(RouteEntry::leaf("authority"))
            .build()
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateSegment { first: 0, second: 3, .. }));
    }

    #[test]
    fn test_register_shared_reuses_entry() {
        let shared = Arc::new(RouteEntry::leaf("meta"));
        let builder = RouteRegistry::builder().register_shared(Arc::clone(&shared));
        assert_eq!(builder.len(), 1);
        assert!(!builder.is_empty());

        let registry = builder.build().unwrap();
        assert!(Arc::ptr_eq(registry.resolve("meta").unwrap(), &shared));
    }

    #[test]
    fn test_register_shared_duplicate_rejected() {
        let shared = Arc::new(RouteEntry::leaf("meta"));
        let err = RouteRegistry::builder()
            .register_shared(Arc::clone(&shared))
            .register_shared(shared)
            .build()
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateSegment { first: 0, second: 1, .. }));
    }
}
