//! Response envelopes shared by every endpoint.

use serde::Serialize;

/// Success envelope: `{"message": ..., "data": ...}`.
///
/// `data` carries the RPC-translated payload; it is only absent in the
/// failure envelope, which is a different shape entirely.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T> JsonResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Failure envelope: `{"error": ...}`.
#[derive(Debug, Serialize)]
pub struct JsonErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = JsonResponse::new("OK", vec!["a", "b"]);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["message"], "OK");
        assert_eq!(json["data"][1], "b");
    }
}
