use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionIntent {
    /// User pressed the button at `index`. Re-pressing the active button is
    /// still a transition.
    Tapped { index: usize },
    /// Host assigned the selection. The index has been range-checked.
    Assigned { index: usize },
}

impl Intent for SelectionIntent {}
