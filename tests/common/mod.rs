//! Test utilities for registry and descent tests
//!
//! Provides fixtures, counting loaders, and assertion helpers.

#![allow(dead_code)]

use lazy_route_registry::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The three entity entries, each with a nested table of `new`, `view`, `edit`
pub fn scenario_registry() -> RouteRegistry {
    scenario_builder().build().unwrap()
}

/// Builder holding the three entity entries, ready for more to be appended
pub fn scenario_builder() -> RegistryBuilder {
    RouteRegistry::builder()
        .register(entity_entry("authority", "testeApp.adminAuthority"))
        .register(entity_entry("meta", "testeApp.meta"))
        .register(entity_entry("aluno", "testeApp.aluno"))
}

/// Entry whose nested table holds the standard entity pages
pub fn entity_entry(segment: &str, prefix: &str) -> RouteEntry {
    let nested_prefix = prefix.to_string();
    RouteEntry::new(segment, move || {
        let prefix = nested_prefix.clone();
        async move { entity_pages(&prefix) }
    })
    .title(format!("{prefix}.home.title"))
}

fn entity_pages(prefix: &str) -> Result<RouteRegistry, LoadError> {
    let registry = RouteRegistry::builder()
        .register(RouteEntry::leaf("new").title(format!("{prefix}.home.createOrEditLabel")))
        .register(RouteEntry::leaf("view").title(format!("{prefix}.detail.title")))
        .register(RouteEntry::leaf("edit").title(format!("{prefix}.home.createOrEditLabel")))
        .build()?;
    Ok(registry)
}

/// Entry whose loader fails the first `failures` times, then yields an empty table.
///
/// Returns the entry and a counter of loader invocations.
pub fn flaky_entry(segment: &str, failures: usize) -> (RouteEntry, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let entry = RouteEntry::new(segment, move || {
        let attempt = counter.fetch_add(1, Ordering::SeqCst);
        async move {
            if attempt < failures {
                Err(LoadError::new(format!("chunk load failed (attempt {})", attempt + 1)))
            } else {
                Ok(RouteRegistry::empty())
            }
        }
    });
    (entry, calls)
}

/// Entry whose loader always fails
pub fn failing_entry(segment: &str, title: &str) -> RouteEntry {
    RouteEntry::new(segment, || async {
        Err::<RouteRegistry, _>(LoadError::new("network unavailable"))
    })
    .title(title)
}

/// Collect a registry's segments
pub fn segments_of(registry: &RouteRegistry) -> Vec<String> {
    registry.segments().map(String::from).collect()
}

/// Collect `(segment, metadata)` pairs, the observable shape of a registry
pub fn shape_of(registry: &RouteRegistry) -> Vec<(String, Metadata)> {
    registry
        .entries()
        .iter()
        .map(|entry| (entry.segment().to_string(), entry.metadata().clone()))
        .collect()
}

/// Assert that `segment` resolves to an entry with the given `pageTitle`
pub fn assert_resolves_with_title(registry: &RouteRegistry, segment: &str, title: &str) {
    let entry = registry
        .resolve(segment)
        .unwrap_or_else(|err| panic!("'{}' should resolve: {}", segment, err));
    assert_eq!(entry.segment(), segment);
    assert_eq!(
        entry.metadata().page_title(),
        Some(title),
        "Entry '{}' has wrong pageTitle",
        segment
    );
}
