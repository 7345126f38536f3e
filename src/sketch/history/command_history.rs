//! Command history for tracking undo/redo state.

use bevy::prelude::*;

use super::super::error::SurfaceError;
use super::super::surface::Surface;
use super::commands::SketchCommand;

/// Snapshot of what the history can do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Callback invoked after every history mutation
pub type HistoryObserver = Box<dyn FnMut(HistoryStatus) + Send + Sync>;

/// Linear undo/redo history of sketch commands
#[derive(Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone (most recent last)
    undo_stack: Vec<SketchCommand>,
    /// Stack of commands that can be redone (most recent last)
    redo_stack: Vec<SketchCommand>,
    /// Oldest commands are dropped past this depth; `None` keeps everything.
    /// Never zero, so the latest edit is always undoable.
    limit: Option<usize>,
    observers: Vec<HistoryObserver>,
}

impl CommandHistory {
    /// A limit of zero is raised to one
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit: limit.map(|limit| limit.max(1)),
            ..Default::default()
        }
    }

    /// Apply a new command and record it
    pub fn execute<S: Surface + ?Sized>(
        &mut self,
        command: SketchCommand,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        command.apply(surface)?;
        debug!("Executed {} on {}", command.label(), command.target());

        // A new action invalidates everything that was undone
        self.redo_stack.clear();
        self.undo_stack.push(command);

        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.remove(0);
            }
        }

        self.notify();
        Ok(())
    }

    /// Reverse the most recent command. Returns `false` if there was nothing
    /// to undo.
    pub fn undo<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<bool, SurfaceError> {
        let Some(command) = self.undo_stack.pop() else {
            return Ok(false);
        };

        command.reverse(surface)?;
        debug!("Undid {} on {}", command.label(), command.target());
        self.redo_stack.push(command);
        self.notify();
        Ok(true)
    }

    /// Re-apply the most recently undone command. Returns `false` if there
    /// was nothing to redo.
    pub fn redo<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<bool, SurfaceError> {
        let Some(command) = self.redo_stack.pop() else {
            return Ok(false);
        };

        command.apply(surface)?;
        debug!("Redid {} on {}", command.label(), command.target());
        self.undo_stack.push(command);
        self.notify();
        Ok(true)
    }

    /// Check if there are commands to undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands to redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn status(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Get the count of undoable commands
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the count of redoable commands
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Applied commands, oldest first
    #[allow(dead_code)]
    pub fn undo_stack(&self) -> &[SketchCommand] {
        &self.undo_stack
    }

    /// Undone commands, oldest undo last
    #[allow(dead_code)]
    pub fn redo_stack(&self) -> &[SketchCommand] {
        &self.redo_stack
    }

    /// Register a callback run after every mutation
    pub fn subscribe(&mut self, observer: HistoryObserver) {
        self.observers.push(observer);
    }

    /// Forget all history without touching the surface
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.notify();
    }

    fn notify(&mut self) {
        let status = self.status();
        for observer in &mut self.observers {
            observer(status);
        }
    }
}
