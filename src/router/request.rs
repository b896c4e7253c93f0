use std::collections::HashMap;

use serde_json::Value;
use url::form_urlencoded;

use crate::error::{FakeIdentityError, Result};
use crate::types::CountryCode;

/// Parameter bag shared by query strings and JSON payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Like `get`, but an empty value counts as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Percent-decoded `key=value&...` pairs. Later duplicates win.
    pub fn from_query(query: &str) -> Self {
        let values = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect();
        Self { values }
    }

    /// Flatten a JSON object into string parameters.
    ///
    /// Booleans and numbers are stringified, `null` is dropped. Nested values
    /// keep their JSON text.
    pub fn from_json(payload: &Value) -> Result<Self> {
        let object = payload.as_object().ok_or_else(|| {
            FakeIdentityError::InvalidRequest("JSON payload must be an object".to_string())
        })?;
        let mut params = Self::new();
        for (key, value) in object {
            match value {
                Value::Null => {}
                Value::String(s) => params.insert(key.as_str(), s.as_str()),
                other => params.insert(key.as_str(), other.to_string()),
            }
        }
        Ok(params)
    }

    pub fn merge(&mut self, other: Params) {
        self.values.extend(other.values);
    }

    /// Upper-cased country, `US` when absent or unknown.
    pub fn country(&self) -> CountryCode {
        self.get("country")
            .unwrap_or("US")
            .parse()
            .unwrap_or_default()
    }

    /// `true` unless the literal string `"false"` was supplied.
    pub fn format_valid(&self) -> bool {
        self.get("format_valid") != Some("false")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub path: String,
    pub params: Params,
}

impl Request {
    pub fn new(path: impl Into<String>, params: Params) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Split a `path?query` target.
    pub fn parse(target: &str) -> Self {
        match target.split_once('?') {
            Some((path, query)) => Self::new(path, Params::from_query(query)),
            None => Self::new(target, Params::new()),
        }
    }

    /// Request with a structured payload. Any query on `target` is kept, the
    /// payload overrides it key by key.
    pub fn with_json(target: &str, payload: &Value) -> Result<Self> {
        let mut request = Self::parse(target);
        request.params.merge(Params::from_json(payload)?);
        Ok(request)
    }

    /// Parse one request line: `[GET|POST] target [json]`.
    pub fn from_line(line: &str) -> Result<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim_start()),
            None => (line, ""),
        };
        if head.is_empty() {
            return Err(FakeIdentityError::InvalidRequest("empty request line".to_string()));
        }

        if head.eq_ignore_ascii_case("POST") {
            let (target, body) = match rest.split_once(char::is_whitespace) {
                Some((target, body)) => (target, body.trim()),
                None => (rest, ""),
            };
            if target.is_empty() {
                return Err(FakeIdentityError::InvalidRequest("missing request target".to_string()));
            }
            if body.is_empty() {
                return Ok(Self::parse(target));
            }
            let payload: Value = serde_json::from_str(body)?;
            return Self::with_json(target, &payload);
        }

        let (target, trailing) = if head.eq_ignore_ascii_case("GET") {
            match rest.split_once(char::is_whitespace) {
                Some((target, trailing)) => (target, trailing.trim()),
                None => (rest, ""),
            }
        } else {
            (head, rest)
        };
        if target.is_empty() {
            return Err(FakeIdentityError::InvalidRequest("missing request target".to_string()));
        }
        if !trailing.is_empty() {
            return Err(FakeIdentityError::InvalidRequest(format!(
                "unexpected input after target: {}",
                trailing
            )));
        }
        Ok(Self::parse(target))
    }
}
