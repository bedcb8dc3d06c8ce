//! JSON method codec.
//!
//! Calls travel as `{"method": ..., "args": ...}`. Replies are envelopes:
//! `[result]` on success, `[code, message, details]` on failure.

use serde_json::{json, Value};
use thiserror::Error;

use super::types::{ErrorCode, MethodCall, MethodError, MethodResult};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed reply envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Unknown error code '{0}'")]
    UnknownErrorCode(String),
}

pub struct JsonMethodCodec;

impl JsonMethodCodec {
    pub fn encode_method_call(call: &MethodCall) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(call)?)
    }

    pub fn decode_method_call(bytes: &[u8]) -> Result<MethodCall, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn encode_envelope(result: &MethodResult) -> Result<Vec<u8>, CodecError> {
        let envelope = match result {
            Ok(value) => json!([value]),
            Err(error) => json!([error.code.as_str(), error.message, error.details]),
        };
        Ok(serde_json::to_vec(&envelope)?)
    }

    pub fn decode_envelope(bytes: &[u8]) -> Result<MethodResult, CodecError> {
        let value: Value = serde_json::from_slice(bytes)?;
        let Value::Array(mut parts) = value else {
            return Err(CodecError::MalformedEnvelope(
                "expected a JSON array".to_string(),
            ));
        };

        match parts.len() {
            1 => Ok(Ok(parts.remove(0))),
            3 => {
                let details = parts.pop().filter(|details| !details.is_null());
                let message = match parts.pop() {
                    Some(Value::String(message)) => Some(message),
                    Some(Value::Null) | None => None,
                    Some(other) => {
                        return Err(CodecError::MalformedEnvelope(format!(
                            "error message must be a string, got {}",
                            other
                        )))
                    }
                };
                let code = match parts.pop() {
                    Some(Value::String(code)) => code,
                    _ => {
                        return Err(CodecError::MalformedEnvelope(
                            "error code must be a string".to_string(),
                        ))
                    }
                };
                let code = ErrorCode::parse(&code).ok_or(CodecError::UnknownErrorCode(code))?;
                Ok(Err(MethodError {
                    code,
                    message,
                    details,
                }))
            }
            n => Err(CodecError::MalformedEnvelope(format!(
                "expected 1 or 3 elements, got {}",
                n
            ))),
        }
    }
}
