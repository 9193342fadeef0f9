//! Request correlation IDs.

use uuid::Uuid;

/// Header carrying the request correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request context with correlation ID.
#[derive(Clone, Debug)]
pub struct RequestContext {
    request_id: String,
}

impl RequestContext {
    /// Creates a new request context with a generated ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }

    /// Creates a request context from a caller-supplied ID, generating one
    /// when the value is missing or blank.
    #[must_use]
    pub fn from_header(value: Option<&str>) -> Self {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or_else(Self::new, Self::from_id)
    }

    /// Creates a new request context with an existing request ID.
    #[must_use]
    pub fn from_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Returns the request ID.
    #[must_use]
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_keeps_supplied_id() {
        let context = RequestContext::from_header(Some(" abc-123 "));
        assert_eq!(context.request_id(), "abc-123");
    }

    #[test]
    fn test_from_header_generates_when_blank() {
        let context = RequestContext::from_header(Some("  "));
        assert!(Uuid::parse_str(context.request_id()).is_ok());
        assert!(Uuid::parse_str(RequestContext::from_header(None).request_id()).is_ok());
    }
}
