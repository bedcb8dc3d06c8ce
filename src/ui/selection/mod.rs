mod intent;
mod reducer;
mod state;

pub use intent::SelectionIntent;
pub use reducer::SelectionReducer;
pub use state::SelectionState;
