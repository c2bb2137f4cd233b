use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub mod orders;
pub mod products;
pub mod users;

pub use orders::OrderHttpServer;
pub use products::ProductHttpServer;
pub use users::UserHttpServer;

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: String,
}

/// Binds the router on the configured port with the shared middleware
/// stack: a per-request tracing span carrying a request id, and
/// wildcard CORS.
pub(crate) async fn serve(app: Router, port: &str) -> anyhow::Result<()> {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            let request_id = Uuid::new_v4();
            tracing::info_span!(
                "http_request",
                %request_id,
                method = %request.method(),
                uri
            )
        })
        .on_request(
            |request: &axum::extract::Request<_>, span: &tracing::Span| {
                tracing::info!(
                    parent: span,
                    method = %request.method(),
                    uri = %request.uri(),
                    "request"
                );
            },
        )
        .on_response(
            |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                tracing::info!(
                    parent: span,
                    status = %response.status(),
                    latency_ms = %latency.as_millis(),
                    "response"
                );
            },
        );

    let app = app.layer(trace_layer).layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    tracing::info!("starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
