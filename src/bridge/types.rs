use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::oneshot;

/// Host → control: assign the selection.
pub const METHOD_SET_SELECTED_INDEX: &str = "setSelectedIndex";
/// Control → host: the user pressed a button.
pub const METHOD_ON_BUTTON_TAP: &str = "onButtonTap";

/// Host-assigned identifier of one embedded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(pub i64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `{prefix}_{view_id}`, e.g. `liquid_glass_7`.
pub fn channel_name(prefix: &str, view_id: ViewId) -> String {
    format!("{}_{}", prefix, view_id)
}

/// Inverse of [`channel_name`]. Returns `None` for names from another prefix.
pub fn parse_channel_name(prefix: &str, name: &str) -> Option<ViewId> {
    let id = name.strip_prefix(prefix)?.strip_prefix('_')?;
    id.parse().ok().map(ViewId)
}

#[derive(Debug)]
pub enum BridgeError {
    Disconnected,
    Timeout,
    /// A local press that does not land on any button.
    InvalidTap { index: usize, item_count: usize },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Disconnected => write!(f, "Bridge channel disconnected"),
            BridgeError::Timeout => write!(f, "Bridge request timed out"),
            BridgeError::InvalidTap { index, item_count } => {
                write!(f, "Tap index {} is outside the {} buttons", index, item_count)
            }
        }
    }
}

impl std::error::Error for BridgeError {}

/// A named method invocation travelling in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }

    pub fn set_selected_index(index: i64) -> Self {
        Self::new(METHOD_SET_SELECTED_INDEX, Value::from(index))
    }

    pub fn on_button_tap(index: usize) -> Self {
        Self::new(METHOD_ON_BUTTON_TAP, Value::from(index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "INVALID_ARGUMENT")]
    InvalidArgument,
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::NotImplemented => "NOT_IMPLEMENTED",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "INVALID_ARGUMENT" => Some(ErrorCode::InvalidArgument),
            "NOT_IMPLEMENTED" => Some(ErrorCode::NotImplemented),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured failure returned to the host for one call.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code}: {}", .message.as_deref().unwrap_or("no message"))]
pub struct MethodError {
    pub code: ErrorCode,
    pub message: Option<String>,
    pub details: Option<Value>,
}

impl MethodError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidArgument,
            message: Some(message.into()),
            details: None,
        }
    }

    pub fn not_implemented(method: &str) -> Self {
        Self {
            code: ErrorCode::NotImplemented,
            message: None,
            details: Some(Value::from(method)),
        }
    }
}

/// Reply to an inbound call: a value (`null` for void) or a structured error.
pub type MethodResult = Result<Value, MethodError>;

pub enum InstanceCommand {
    /// Local button press, already hit-tested to a valid index.
    Tap { index: usize },
    Invoke {
        call: MethodCall,
        respond_to: oneshot::Sender<MethodResult>,
    },
    Shutdown,
}
