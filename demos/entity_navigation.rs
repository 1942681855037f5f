//! Entity navigation demo
//!
//! Resolves a few request paths against the entity route table and prints
//! the breadcrumb keys of each, or the navigation error.
//!
//! Run with: `RUST_LOG=debug cargo run --example entity_navigation`

use lazy_route_registry::entities::entity_routes;
use lazy_route_registry::{LoadState, Resolver};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let routes = entity_routes();
    println!("Top-level segments:");
    for entry in routes.entries() {
        println!(
            "  {:<10} pageTitle={}",
            entry.segment(),
            entry.metadata().page_title().unwrap_or("-")
        );
    }

    let mut resolver = Resolver::new(routes);
    for path in ["/meta", "/aluno/edit", "/authority/edit", "/curso", "/meta/view"] {
        match resolver.resolve(path).await {
            Ok(stack) => {
                println!("\n{path} → {}", stack.page_titles().join(" › "));
                println!("{}", stack.debug_string());
            }
            Err(err) => println!("\n{path} → {err}"),
        }
    }

    println!("\nLoader states:");
    for entry in routes.entries() {
        let state = match entry.load_state() {
            LoadState::Unresolved => "unresolved",
            LoadState::Resolved => "resolved",
            LoadState::Failed => "failed",
        };
        println!("  {:<10} {}", entry.segment(), state);
    }

    #[cfg(feature = "cache")]
    println!(
        "\nCache: {} paths, hit rate {:.0}%",
        resolver.cache().len(),
        resolver.cache().stats().hit_rate() * 100.0
    );
}
