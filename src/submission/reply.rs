//! Wire types for the generator service.

use crate::submission::error::RequestError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /generate_script`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest<'a> {
    pub movie: &'a str,
    pub prompt: &'a str,
}

/// A response that arrived, before its body is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawReply {
    pub http_status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    status: Option<Value>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

const SUCCESS: &str = "success";

impl RawReply {
    pub fn new(http_status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            http_status,
            body: body.into(),
        }
    }

    /// Parse the body and branch on its `status` field. The HTTP status code
    /// does not decide the outcome; only the body does.
    pub fn decode(&self) -> Result<ScriptPayload, RequestError> {
        let response: GenerateResponse =
            serde_json::from_slice(&self.body).map_err(|e| RequestError::Decode {
                status: self.http_status,
                message: e.to_string(),
            })?;

        match response.status {
            Some(Value::String(ref s)) if s == SUCCESS => Ok(ScriptPayload {
                fields: response.fields,
            }),
            status => Err(RequestError::Rejected {
                status: status.map(|v| match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                }),
                message: response
                    .fields
                    .get("error")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
        }
    }
}

/// The fields of a successful reply, minus `status`. Their meaning belongs to
/// whoever renders them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScriptPayload {
    pub fields: Map<String, Value>,
}

impl ScriptPayload {
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Body of `POST /check_movie`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCheckRequest<'a> {
    pub movie: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieCheck {
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub movie: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
