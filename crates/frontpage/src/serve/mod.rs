mod cli;

pub use cli::ServeOptions;

use crate::prelude::{eprintln, *};
use axum::{
    extract::{RawQuery, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use frontpage_core::environment::Environment;
use frontpage_core::page::PageOptions;
use frontpage_core::query::PageParams;
use frontpage_core::resolver::ResolverOptions;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::environment::SystemEnvironment;

/// Response header carrying the page's invalidation key
pub const DEPENDS_HEADER: &str = "x-depends";

/// Read-only state shared by every request
pub struct AppState {
    pub options: ResolverOptions,
    pub page: PageOptions,
    pub env: Arc<dyn Environment + Send + Sync>,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    let state = Arc::new(AppState {
        options: global.resolver_options()?,
        page: PageOptions::HOME,
        env: Arc::new(SystemEnvironment),
    });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind {
            addr: addr.clone(),
            source,
        })?;

    log::info!("front page server listening on http://{}", addr);
    if global.verbose {
        eprintln!("Page endpoint: http://{}/api/page", addr);
        eprintln!("Health endpoint: http://{}/health", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("shutting down");
        })
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Build the HTTP router over `state`
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/page", get(page_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

async fn page_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let params = PageParams::from_query_string(query.as_deref().unwrap_or_default());
    log::debug!("GET /api/page {:?}", params);

    let page = crate::load::load_data(&params, &state.options, state.env.as_ref());

    ([(DEPENDS_HEADER, state.page.depends)], Json(page))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
