//! Configuration for the embedded selector.
//!
//! Loaded once at startup from `config.toml`; every embedding created by a
//! factory reads its defaults from the same immutable snapshot.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BarConfig, BridgeConfig, Config};
