//! Request ID resolution and response header helpers.

use salvo::{http::header::HeaderValue, prelude::Response};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Reuse the caller's request id when it sent a usable one.
pub(super) fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(request_id, "could not encode request id header: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_request_id;

    #[test]
    fn caller_request_id_is_kept() {
        assert_eq!(resolve_request_id(Some(" abc-123 ".to_string())), "abc-123");
    }

    #[test]
    fn blank_or_missing_request_id_is_generated() {
        assert!(!resolve_request_id(None).is_empty());
        assert!(!resolve_request_id(Some("  ".to_string())).trim().is_empty());
    }
}
