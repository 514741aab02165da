use axum::{
    Router,
    extract::Extension,
    routing::{delete, get, post},
};
use distributed_cache::coordinator::handlers::{
    handle_add_node, handle_get, handle_put, handle_rebalance, handle_remove_node,
    handle_set_strategy, handle_stats,
};
use distributed_cache::coordinator::protocol::*;
use distributed_cache::coordinator::service::CacheCoordinator;
use std::net::SocketAddr;
use std::sync::Arc;

type Value = serde_json::Value;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} --bind <addr:port> [--nodes <count>]", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:6000", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:6000 --nodes 5", args[0]);

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut initial_nodes: usize = 3;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--nodes" => {
                initial_nodes = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.expect("--bind is required");

    tracing::info!("Starting cache coordinator on {}", bind_addr);

    // 1. Coordinator and initial cluster:
    let coordinator = Arc::new(CacheCoordinator::<Value>::new());

    for _ in 0..initial_nodes {
        let id = coordinator.add_node().await;
        tracing::info!("Seeded node {}", id);
    }

    // 2. HTTP Router:
    let app = Router::new()
        .route(ENDPOINT_PUT, post(handle_put::<Value>))
        .route(&format!("{}/:key", ENDPOINT_GET), get(handle_get::<Value>))
        .route(ENDPOINT_NODES, post(handle_add_node::<Value>))
        .route(
            &format!("{}/:id", ENDPOINT_NODES),
            delete(handle_remove_node::<Value>),
        )
        .route(ENDPOINT_REBALANCE, post(handle_rebalance::<Value>))
        .route(ENDPOINT_STRATEGY, post(handle_set_strategy::<Value>))
        .route(ENDPOINT_STATS, get(handle_stats::<Value>))
        .layer(Extension(coordinator.clone()));

    // 3. Spawn stats reporter:
    let stats_coordinator = coordinator.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(5));

        loop {
            interval.tick().await;
            for line in stats_coordinator.statistics_report().await.lines() {
                tracing::info!("{}", line);
            }
        }
    });

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
