//! Single owner of one selector's state.
//!
//! Two entry points with different post-conditions:
//!
//! | entry point              | state | visuals | haptic | outbound event |
//! |--------------------------|-------|---------|--------|----------------|
//! | [`on_user_tap`]          | set   | applied | light  | exactly one    |
//! | [`on_host_set_selection`]| set   | applied | none   | none           |
//!
//! The controller never talks to the host. Tap events wait in an outbox
//! until the bridge drains them with [`take_events`].
//!
//! [`on_user_tap`]: SelectionController::on_user_tap
//! [`on_host_set_selection`]: SelectionController::on_host_set_selection
//! [`take_events`]: SelectionController::take_events

use std::collections::VecDeque;

use thiserror::Error;

use crate::ui::item::Item;
use crate::ui::mvi::Reducer;
use crate::ui::render::{render, ImpactStyle, Surface};
use crate::ui::selection::{SelectionIntent, SelectionReducer, SelectionState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Index {index} is outside [0, {item_count})")]
    InvalidArgument { index: i64, item_count: usize },
}

/// Published by the controller for the bridge to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Changed { index: usize },
}

pub struct SelectionController {
    items: Vec<Item>,
    state: SelectionState,
    surface: Box<dyn Surface>,
    outbox: VecDeque<SelectionEvent>,
}

impl SelectionController {
    /// Builds the controller and paints the initial, all-default frame.
    pub fn new(items: Vec<Item>, surface: Box<dyn Surface>) -> Self {
        let state = SelectionState::new(items.len());
        let mut controller = Self {
            items,
            state,
            surface,
            outbox: VecDeque::new(),
        };
        controller.apply_visuals();
        controller
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Local press on the button at `index`.
    ///
    /// Callers check the index against the layout first; a press that
    /// still misses every button is logged and dropped.
    pub fn on_user_tap(&mut self, index: usize) {
        if !self.state.contains(index) {
            tracing::warn!(index, item_count = self.items.len(), "Ignoring out-of-range tap");
            return;
        }

        self.reduce(SelectionIntent::Tapped { index });
        self.apply_visuals();
        self.surface.impact(ImpactStyle::Light);
        self.outbox.push_back(SelectionEvent::Changed { index });
        tracing::debug!(index, "Selection tapped");
    }

    /// Host-assigned selection. Never produces an outbound event.
    pub fn on_host_set_selection(&mut self, index: i64) -> Result<(), SelectionError> {
        let item_count = self.items.len();
        let index = usize::try_from(index)
            .ok()
            .filter(|index| self.state.contains(*index))
            .ok_or(SelectionError::InvalidArgument { index, item_count })?;

        self.reduce(SelectionIntent::Assigned { index });
        self.apply_visuals();
        tracing::debug!(index, "Selection assigned by host");
        Ok(())
    }

    /// Drains pending events in the order they were produced.
    pub fn take_events(&mut self) -> Vec<SelectionEvent> {
        self.outbox.drain(..).collect()
    }

    fn reduce(&mut self, intent: SelectionIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = SelectionReducer::reduce(state, intent);
    }

    fn apply_visuals(&mut self) {
        let frame = render(&self.items, &self.state);
        self.surface.apply(frame);
    }
}
