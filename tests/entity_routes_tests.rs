//! Integration tests for the process-wide entity route table

use lazy_route_registry::entities::{entity_routes, register_entity_routes};
use lazy_route_registry::*;
use std::sync::Arc;

#[test]
fn test_entity_table_order_and_titles() {
    let routes = entity_routes();
    assert_eq!(
        routes.segments().collect::<Vec<_>>(),
        vec!["authority", "meta", "aluno"]
    );

    let titles: Vec<_> = routes
        .entries()
        .iter()
        .map(|entry| entry.metadata().page_title().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "testeApp.adminAuthority.home.title",
            "testeApp.meta.home.title",
            "testeApp.aluno.home.title",
        ]
    );
}

#[test]
fn test_entity_table_is_built_once() {
    assert!(std::ptr::eq(entity_routes(), entity_routes()));
}

#[test]
fn test_entity_table_rejects_unknown() {
    assert!(entity_routes().resolve("unknown").unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_feature_modules_load() {
    let routes = entity_routes();

    let meta = routes.load(routes.resolve("meta").unwrap()).await.unwrap();
    assert_eq!(meta.segments().collect::<Vec<_>>(), vec!["new", "view", "edit"]);

    let aluno = routes.load(routes.resolve("aluno").unwrap()).await.unwrap();
    assert_eq!(
        aluno.resolve("view").unwrap().metadata().page_title(),
        Some("testeApp.aluno.detail.title")
    );

    let authority = routes.load(routes.resolve("authority").unwrap()).await.unwrap();
    assert_eq!(authority.segments().collect::<Vec<_>>(), vec!["new", "view"]);
}

#[tokio::test]
async fn test_feature_module_load_is_stable() {
    let entry = entity_routes().resolve("meta").unwrap();
    let first = entry.load().await.unwrap();
    let second = entry.load().await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_entity_breadcrumbs() {
    let mut resolver = Resolver::new(entity_routes());
    let stack = resolver.resolve("/authority/view").await.unwrap();
    assert_eq!(
        stack.page_titles(),
        vec!["testeApp.adminAuthority.home.title", "testeApp.adminAuthority.detail.title"]
    );
}

#[test]
fn test_generated_entry_is_appended_last() {
    let registry = register_entity_routes(RouteRegistry::builder())
        .register(RouteEntry::leaf("curso").title("testeApp.curso.home.title"))
        .build()
        .unwrap();
    assert_eq!(registry.get(3).unwrap().segment(), "curso");
    assert_eq!(registry.resolve("meta").unwrap().segment(), "meta");
}
