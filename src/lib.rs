//! # lazy-route-registry
//!
//! A declarative route registry whose entries point at lazily loaded nested
//! route tables.
//!
//! Each [`RouteEntry`] pairs a path segment with display [`Metadata`] and a
//! deferred loader. A [`RouteRegistry`] is an ordered, immutable list of
//! entries; the host router asks it to [`resolve`](RouteRegistry::resolve) one
//! segment at a time and only then [`load`](RouteEntry::load)s the matched
//! entry's nested table.
//!
//! ## Features
//!
//! - Exact, case-sensitive, first-match-wins segment lookup
//! - Duplicate and empty segments rejected when the registry is built
//! - Memoized loaders: `Unresolved` → `Resolved`, with retry after `Failed`
//! - Multi-level descent with breadcrumbs ([`Resolver`], [`MatchStack`])
//! - Optional LRU cache of resolved paths (`cache` feature)
//! - Logging through `log` or `tracing`
//!
//! ## Quick Start
//!
//! ```
//! use lazy_route_registry::{LoadError, RouteEntry, RouteRegistry};
//!
//! async fn meta_routes() -> Result<RouteRegistry, LoadError> {
//!     Ok(RouteRegistry::builder()
//!         .register(RouteEntry::leaf("new").title("testeApp.meta.home.createOrEditLabel"))
//!         .build()?)
//! }
//!
//! let routes = RouteRegistry::builder()
//!     .register(RouteEntry::new("meta", meta_routes).title("testeApp.meta.home.title"))
//!     .build()
//!     .unwrap();
//!
//! let entry = routes.resolve("meta").unwrap();
//! let nested = pollster::block_on(routes.load(entry)).unwrap();
//! assert!(nested.resolve("new").is_ok());
//! assert!(routes.resolve("unknown").unwrap_err().is_not_found());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

#[cfg(feature = "cache")]
pub mod cache;
pub mod entities;
pub mod error;
pub mod path;
pub mod registry;
pub mod resolve;
pub mod route;

pub use error::{BoxError, LoadError, NavigationError, RegistryError};
pub use path::{normalize_path, split_path};
pub use registry::{RegistryBuilder, RouteRegistry};
pub use resolve::{resolve_match_stack, MatchEntry, MatchStack, Resolver, MAX_DEPTH};
pub use route::{LoadFuture, LoadState, Loader, Metadata, RouteEntry};

#[cfg(feature = "cache")]
pub use cache::{CacheStats, RouteCache};
