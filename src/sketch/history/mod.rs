//! Undo/Redo system for sketch edits.
//!
//! Every committed edit is recorded as a [`SketchCommand`] that knows how to
//! apply and reverse itself against a surface. [`CommandHistory`] keeps the
//! applied commands on an undo stack and the reversed ones on a redo stack;
//! executing a new command discards the redo stack, so history is linear.
//!
//! ## Supported Operations
//!
//! - Line creation (removed on undo)
//! - Stroke color changes (previous color restored on undo)
//!
//! ## Module Structure
//!
//! - [`commands`] - SketchCommand enum with apply/reverse
//! - [`command_history`] - CommandHistory stacks and status observers

mod command_history;
mod commands;


// Re-exports
pub use command_history::{CommandHistory, HistoryObserver, HistoryStatus};
pub use commands::SketchCommand;
