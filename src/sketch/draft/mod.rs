//! Draft interaction machine.
//!
//! Turns a stream of pointer and key events into polylines. The machine has
//! three states:
//!
//! - **Idle**: no draft. A click starts one.
//! - **OnePoint**: one committed vertex and a preview vertex following the
//!   pointer. A click commits the second vertex.
//! - **ManyPoints**: two or more committed vertices and a preview. Clicks keep
//!   committing until the vertex cap finalizes the line; Enter finalizes
//!   early, Backspace removes the last committed vertex.
//!
//! Escape discards the draft from either drawing state. Events without a
//! transition in the current state are ignored.
//!
//! ## Module Structure
//!
//! - [`events`] - DraftEvent enum and key name mapping
//! - [`state`] - Draft, DraftState and the pure transition function
//! - [`machine`] - DraftMachine, the stateful dispatch wrapper

mod events;
mod machine;
mod state;

#[cfg(test)]
mod tests;

// Re-exports
pub use events::DraftEvent;
pub use machine::DraftMachine;
pub use state::{Draft, DraftOutcome, DraftPhase};
