mod config;
mod proxy;

use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing_subscriber::EnvFilter;

use config::Config;
use proxy::ParserClient;

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary
/// directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

/// Build the full application router.
fn build_app(parser: ParserClient, dist_dir: &Path) -> Router {
    // Hashed bundles are immutable; the rest of dist revalidates daily
    let static_files = Router::new()
        .nest(
            "/assets",
            cached_static_router(&dist_dir.join("assets"), CACHE_IMMUTABLE),
        )
        .nest("/dist", cached_static_router(dist_dir, CACHE_1DAY));

    let index_dir = dist_dir.to_path_buf();
    Router::new()
        .route("/api/parse", post(proxy::parse_handler))
        .with_state(parser)
        .route("/", get(move || serve_index(index_dir.clone())))
        .merge(static_files)
        .layer(CorsLayer::permissive())
}

async fn serve_index(dist_dir: PathBuf) -> Html<String> {
    // Try to serve the built frontend, fall back to a simple message
    match std::fs::read_to_string(dist_dir.join("index.html")) {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"<!DOCTYPE html>
<html>
<head><title>Mission Viewer</title></head>
<body>
<h1>Mission Viewer</h1>
<p>Frontend not built yet. POST a mission file to <code>/api/parse</code> to use the relay directly.</p>
</body>
</html>"#
                .to_string(),
        ),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(parser_url = %config.parser_url, "Using parser service");

    let parser = ParserClient::new(config.parser_url.clone());
    let app = build_app(parser, &config.dist_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running at http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
