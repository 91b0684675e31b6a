use axum::{
    Json, Router,
    http::Method,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};

use std::{net::SocketAddr, sync::Arc};

use crate::{Clock, accounts, analytics, budget_goals, categories, transactions};
use api_types::health::Health;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub clock: Clock,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// Full application router, every route mounted under `/api`.
pub fn router(engine: Arc<Engine>, clock: Clock) -> Router {
    let state = ServerState { engine, clock };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/transactions/{id}",
            put(transactions::update).delete(transactions::delete),
        )
        .route(
            "/analytics/financial-overview",
            get(analytics::financial_overview),
        )
        .route(
            "/analytics/spending-by-category",
            get(analytics::spending_by_category),
        )
        .route(
            "/budget-goals",
            get(budget_goals::get).post(budget_goals::save),
        )
        .route("/accounts", get(accounts::list).post(accounts::create))
        .route("/categories", get(categories::list))
        .route("/health", get(health));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}

pub async fn run(engine: Engine, clock: Clock, addr: SocketAddr) {
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, clock, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    clock: Clock,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine), clock)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    clock: Clock,
    listener: tokio::net::TcpListener,
) -> Result<SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, clock, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
