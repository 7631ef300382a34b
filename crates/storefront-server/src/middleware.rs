use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Reuses a non-empty inbound `x-request-id`, otherwise mints a UUIDv4.
fn resolve_request_id(inbound: Option<&HeaderValue>) -> String {
    inbound
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

/// Middleware that assigns a request ID.
///
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = resolve_request_id(req.headers().get(REQUEST_ID_HEADER));

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_request_id_is_reused() {
        let header = HeaderValue::from_static("req-abc");
        assert_eq!(resolve_request_id(Some(&header)), "req-abc");
    }

    #[test]
    fn blank_request_id_is_replaced() {
        let header = HeaderValue::from_static("  ");
        let id = resolve_request_id(Some(&header));
        assert!(Uuid::parse_str(&id).is_ok(), "expected uuid, got {id}");
    }

    #[test]
    fn missing_request_id_mints_uuid() {
        let id = resolve_request_id(None);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
