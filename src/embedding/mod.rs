//! Embedding boundary: one selector per host-assigned view id.

mod factory;
mod types;

pub use factory::EmbeddingFactory;
pub use types::{CreationParams, EmbedError, EmbeddedView};
