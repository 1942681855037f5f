//! The application's entity route table.
//!
//! Each top-level segment belongs to an independently loaded feature module.
//! [`entity_routes`] builds the table once, on first access, and keeps it for
//! the life of the process.
//!
//! | Segment     | `pageTitle`                            | Feature module |
//! |-------------|----------------------------------------|----------------|
//! | `authority` | `testeApp.adminAuthority.home.title`   | [`authority`]  |
//! | `meta`      | `testeApp.meta.home.title`             | [`meta`]       |
//! | `aluno`     | `testeApp.aluno.home.title`            | [`aluno`]      |
//!
//! # Examples
//!
//! ```
//! use lazy_route_registry::entities::entity_routes;
//!
//! let routes = entity_routes();
//! assert_eq!(routes.segments().collect::<Vec<_>>(), ["authority", "meta", "aluno"]);
//!
//! let meta = routes.resolve("meta").unwrap();
//! assert_eq!(meta.metadata().page_title(), Some("testeApp.meta.home.title"));
//! ```

pub mod aluno;
pub mod authority;
pub mod meta;

use crate::error::LoadError;
use crate::info_log;
use crate::registry::{RegistryBuilder, RouteRegistry};
use crate::route::RouteEntry;
use std::sync::LazyLock;

static ENTITY_ROUTES: LazyLock<RouteRegistry> = LazyLock::new(|| {
    let registry = register_entity_routes(RouteRegistry::builder())
        .build()
        .unwrap_or_else(|err| panic!("entity route table is malformed: {err}"));
    info_log!(
        "Entity route table ready: [{}]",
        registry.segments().collect::<Vec<_>>().join(", ")
    );
    registry
});

/// The process-wide entity route table.
///
/// # Panics
///
/// Panics on first access if [`register_entity_routes`] registers the same
/// segment twice. That is a build defect, not a runtime condition.
pub fn entity_routes() -> &'static RouteRegistry {
    &ENTITY_ROUTES
}

/// Append the entity routes to `builder`.
///
/// New entity modules are registered by appending one more `.register(..)`
/// at the end of this chain. Existing entries keep their position.
pub fn register_entity_routes(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .register(
            RouteEntry::new("authority", authority::routes)
                .title("testeApp.adminAuthority.home.title"),
        )
        .register(RouteEntry::new("meta", meta::routes).title("testeApp.meta.home.title"))
        .register(RouteEntry::new("aluno", aluno::routes).title("testeApp.aluno.home.title"))
}

/// Pages shared by every entity module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntityPage {
    New,
    View,
    Edit,
}

impl EntityPage {
    fn entry(self, title_prefix: &str) -> RouteEntry {
        match self {
            Self::New => {
                RouteEntry::leaf("new").title(format!("{title_prefix}.home.createOrEditLabel"))
            }
            Self::View => RouteEntry::leaf("view").title(format!("{title_prefix}.detail.title")),
            Self::Edit => {
                RouteEntry::leaf("edit").title(format!("{title_prefix}.home.createOrEditLabel"))
            }
        }
    }
}

/// Build a feature module's nested table from its pages.
pub(crate) fn entity_pages(
    title_prefix: &str,
    pages: &[EntityPage],
) -> Result<RouteRegistry, LoadError> {
    let registry = pages
        .iter()
        .fold(RouteRegistry::builder(), |builder, page| {
            builder.register(page.entry(title_prefix))
        })
        .build()?;
    Ok(registry)
}
