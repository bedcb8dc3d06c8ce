//! Embeddable segmented selector rendered as a translucent glass bar.
//!
//! A host embeds any number of selectors through an [`embedding::EmbeddingFactory`].
//! Each one owns its selection ([`ui::SelectionController`]) and talks to the
//! host over its own channel ([`bridge`]): taps flow out as `onButtonTap`,
//! the host pushes `setSelectedIndex` back in, and pushes are never echoed.

pub mod bridge;
pub mod config;
pub mod embedding;
pub mod logging;
pub mod ui;
