//! Learning goals (`Meta`): grade targets per ENEM subject area.

use super::{entity_pages, EntityPage};
use crate::error::LoadError;
use crate::registry::RouteRegistry;

/// Nested routes of the `meta` feature module.
pub async fn routes() -> Result<RouteRegistry, LoadError> {
    entity_pages(
        "testeApp.meta",
        &[EntityPage::New, EntityPage::View, EntityPage::Edit],
    )
}
