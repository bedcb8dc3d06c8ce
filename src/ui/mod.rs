//! The selector itself: items, selection state, and what gets painted.

pub mod controller;
pub mod item;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod selection;
pub mod theme;

pub use controller::{SelectionController, SelectionError, SelectionEvent};
pub use item::{items_from_ids, Item, ItemId};
pub use layout::{BarLayout, Point, Rect};
pub use render::{ImpactStyle, RenderFrame, RootView, Surface, ViewSnapshot, VisualState};
pub use selection::{SelectionIntent, SelectionReducer, SelectionState};
