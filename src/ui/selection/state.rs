use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    item_count: usize,
    selected: Option<usize>,
}

impl UiState for SelectionState {}

impl SelectionState {
    /// Fresh state with nothing selected.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            selected: None,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.item_count
    }

    pub(crate) fn with_selected(self, index: usize) -> Self {
        Self {
            selected: Some(index),
            ..self
        }
    }
}
