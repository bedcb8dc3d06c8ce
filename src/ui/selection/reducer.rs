use crate::ui::mvi::Reducer;
use crate::ui::selection::intent::SelectionIntent;
use crate::ui::selection::state::SelectionState;

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Tapped { index } | SelectionIntent::Assigned { index } => {
                if state.contains(index) {
                    state.with_selected(index)
                } else {
                    state
                }
            }
        }
    }
}
