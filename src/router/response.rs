use serde::Serialize;
use serde_json::{json, Value};

pub const CONTENT_TYPE: &str = "application/json";
pub const CACHE_CONTROL: &str = "no-store";

/// Status plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self::new(200, value),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response body");
                Self::new(500, json!({ "error": "Internal Server Error" }))
            }
        }
    }

    pub fn not_found() -> Self {
        Self::new(404, json!({ "error": "Not Found" }))
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(400, json!({ "error": message }))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Every response is JSON and must not be cached.
    pub fn headers(&self) -> [(&'static str, &'static str); 2] {
        [("Content-Type", CONTENT_TYPE), ("Cache-Control", CACHE_CONTROL)]
    }
}
