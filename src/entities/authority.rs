//! Security authorities (`Authority`).
//!
//! Authorities are identified by name and cannot be edited once created, so
//! the module has no `edit` page.

use super::{entity_pages, EntityPage};
use crate::error::LoadError;
use crate::registry::RouteRegistry;

/// Nested routes of the `authority` feature module.
pub async fn routes() -> Result<RouteRegistry, LoadError> {
    entity_pages("testeApp.adminAuthority", &[EntityPage::New, EntityPage::View])
}
