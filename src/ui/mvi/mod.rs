//! Model-View-Intent primitives shared by the screen's state machines.
//!
//! ```text
//! key / catalog event ──→ Intent ──→ Reducer ──→ State ──→ render
//!          ↑                                                │
//!          └────────────────────────────────────────────────┘
//! ```
//!
//! Reducers are the only place state changes; side effects (network
//! requests) are started by the owner of the state after dispatching.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
