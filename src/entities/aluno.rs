//! Students (`Aluno`).

use super::{entity_pages, EntityPage};
use crate::error::LoadError;
use crate::registry::RouteRegistry;

/// Nested routes of the `aluno` feature module.
pub async fn routes() -> Result<RouteRegistry, LoadError> {
    entity_pages(
        "testeApp.aluno",
        &[EntityPage::New, EntityPage::View, EntityPage::Edit],
    )
}
