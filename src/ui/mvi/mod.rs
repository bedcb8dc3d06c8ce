//! Model-View-Intent (MVI) primitives for the selector.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Visuals
//!    ↑                                │
//!    └── tap / host push ─────────────┘
//! ```
//!
//! - **State**: what is selected, nothing else
//! - **Intent**: a tap from the user or an assignment from the host
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
