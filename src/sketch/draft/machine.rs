//! Event dispatch wrapper around [`DraftState`].

use bevy::prelude::*;

use crate::constants::MIN_MAX_VERTICES;

use super::events::DraftEvent;
use super::state::{Draft, DraftOutcome, DraftPhase, DraftState};

/// Owns the current draft and feeds it events one at a time.
#[derive(Debug)]
pub struct DraftMachine {
    state: DraftState,
    max_vertices: usize,
}

impl DraftMachine {
    /// `max_vertices` is raised to [`MIN_MAX_VERTICES`] if smaller
    pub fn new(max_vertices: usize) -> Self {
        Self {
            state: DraftState::Idle,
            max_vertices: max_vertices.max(MIN_MAX_VERTICES),
        }
    }

    pub fn handle(&mut self, event: &DraftEvent) -> DraftOutcome {
        let previous = self.state.phase();
        let (next, outcome) = std::mem::take(&mut self.state).transition(event, self.max_vertices);

        if outcome == DraftOutcome::Ignored {
            trace!("Ignored {:?} in {:?}", event, previous);
        } else if next.phase() != previous {
            debug!("Draft {:?} -> {:?} on {:?}", previous, next.phase(), event);
        }

        self.state = next;
        outcome
    }

    pub fn phase(&self) -> DraftPhase {
        self.state.phase()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.state.draft()
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }
}
