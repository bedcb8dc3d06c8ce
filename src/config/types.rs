use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bar: BarConfig,
    #[serde(default)]
    pub bridge: BridgeConfig,
}

/// Selector contents used when the host does not supply its own items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarConfig {
    /// Ordered icon references, one button per entry.
    #[serde(default = "default_items")]
    pub items: Vec<String>,
}

/// Host channel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Channel names are `{channel_prefix}_{view_id}`.
    #[serde(default = "default_channel_prefix")]
    pub channel_prefix: String,
    /// Identifier the factory is registered under on the host side.
    #[serde(default = "default_view_type")]
    pub view_type: String,
    /// Upper bound on how long a host call waits for the instance to reply (default: 1000).
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl BridgeConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn default_items() -> Vec<String> {
    vec![
        "book.fill".to_string(),
        "pencil".to_string(),
        "gearshape.fill".to_string(),
    ]
}

fn default_channel_prefix() -> String {
    "liquid_glass".to_string()
}

fn default_view_type() -> String {
    "liquid_glass_view".to_string()
}

fn default_request_timeout_ms() -> u64 {
    1000
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_prefix: default_channel_prefix(),
            view_type: default_view_type(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}
