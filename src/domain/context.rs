use axum::http::HeaderMap;
use rand::Rng;
use uuid::Uuid;

/// W3C trace context header carried on every inter-service call.
pub const TRACEPARENT: &str = "traceparent";

/// Trace/span identifier pair for one inbound request.
///
/// Built once when a request enters a service and passed by reference to every
/// outbound call and log record made while handling it. There are no setters:
/// a context is never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationContext {
    trace_id: String,
    span_id: String,
}

impl CorrelationContext {
    /// Starts a new trace with a fresh 128-bit trace id.
    pub fn new_root() -> Self {
        Self {
            trace_id: Uuid::new_v4().simple().to_string(),
            span_id: new_span_id(),
        }
    }

    /// Continues an existing trace on a new hop.
    pub fn child_of(trace_id: &str) -> Self {
        Self {
            trace_id: trace_id.to_ascii_lowercase(),
            span_id: new_span_id(),
        }
    }

    /// Reuses the caller's trace id when a valid `traceparent` is present,
    /// otherwise mints a new trace.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(TRACEPARENT)
            .and_then(|h| h.to_str().ok())
            .and_then(parse_traceparent)
            .map(Self::child_of)
            .unwrap_or_else(Self::new_root)
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    pub fn span_id(&self) -> &str {
        &self.span_id
    }

    /// Header value announcing this hop as the parent of the next one.
    pub fn traceparent(&self) -> String {
        format!("00-{}-{}-01", self.trace_id, self.span_id)
    }
}

/// Extracts the trace id from a version-00 `traceparent` value.
pub fn parse_traceparent(value: &str) -> Option<&str> {
    let mut parts = value.trim().split('-');
    let version = parts.next()?;
    let trace_id = parts.next()?;
    let parent_id = parts.next()?;
    let flags = parts.next()?;
    if parts.next().is_some() || version != "00" {
        return None;
    }
    if !is_hex_id(trace_id, 32) || !is_hex_id(parent_id, 16) || !is_hex_field(flags, 2) {
        return None;
    }
    Some(trace_id)
}

fn is_hex_field(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_hex_id(s: &str, len: usize) -> bool {
    is_hex_field(s, len) && s.bytes().any(|b| b != b'0')
}

fn new_span_id() -> String {
    format!("{:016x}", rand::thread_rng().gen_range(1..=u64::MAX))
}
