//! Structured error body returned by the backend.

use serde::{Deserialize, Serialize};

/// Error body attached to most non-2xx responses.
///
/// Not every endpoint uses it: the resource endpoints answer with an ad-hoc
/// `{"error": ...}` object instead, which deliberately does not decode into
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable reason supplied by the server.
    pub error_message: String,
}

impl ErrorMessage {
    /// Try to extract a server message from a raw response body.
    ///
    /// Returns `None` for empty bodies, non-JSON bodies and JSON values
    /// without an `error_message` string.
    pub fn from_body(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<Self>(body).ok().map(|e| e.error_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_server_message() {
        let body = br#"{"error_message":"Incorrect user password"}"#;
        assert_eq!(ErrorMessage::from_body(body).as_deref(), Some("Incorrect user password"));
    }

    #[test]
    fn resource_style_error_is_not_structured() {
        let body = br#"{"error":"empty payload array"}"#;
        assert_eq!(ErrorMessage::from_body(body), None);
    }

    #[test]
    fn empty_and_garbage_bodies_yield_none() {
        assert_eq!(ErrorMessage::from_body(b""), None);
        assert_eq!(ErrorMessage::from_body(b"<html>502</html>"), None);
    }
}
