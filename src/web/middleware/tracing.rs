//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Opens one span per request, keyed by method and path.
///
/// The query string is left out: it carries search terms typed into the
/// filter forms. Static assets get `DEBUG` spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSpan;

impl<B> MakeSpan<B> for PathSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let path = request.uri().path();
        if path.starts_with("/static/") {
            tracing::debug_span!("asset", path = %path)
        } else {
            tracing::info_span!("request", method = %request.method(), path = %path)
        }
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// ```text
/// INFO request{method=GET path=/newsletters/table}: finished processing request latency=41 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, PathSpan> {
    TraceLayer::new_for_http()
        .make_span_with(PathSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
