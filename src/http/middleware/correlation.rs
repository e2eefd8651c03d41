use crate::domain::context::{CorrelationContext, TRACEPARENT};
use crate::telemetry::ServiceInfo;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

/// Builds the request's [`CorrelationContext`], exposes it to handlers as an
/// extension, and runs the rest of the stack inside a span carrying its ids.
/// The response echoes the context back in `traceparent`.
pub async fn propagate(
    State(service): State<ServiceInfo>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let context = CorrelationContext::from_headers(request.headers());
    let span = tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        trace_id = context.trace_id(),
        span_id = context.span_id(),
        service = %service.service,
        env = %service.env,
        version = %service.version,
    );

    let traceparent = HeaderValue::from_str(&context.traceparent()).ok();
    request.extensions_mut().insert(context);

    let mut response = next.run(request).instrument(span).await;
    if let Some(value) = traceparent {
        response.headers_mut().insert(TRACEPARENT, value);
    }
    response
}
