//! Draft states and the pure transition function.

use bevy::prelude::*;

use super::events::DraftEvent;

/// An in-progress polyline: committed vertices plus a trailing preview vertex
/// that follows the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    committed: Vec<Vec2>,
    preview: Vec2,
}

impl Draft {
    fn start(at: Vec2) -> Self {
        Self {
            committed: vec![at],
            preview: at,
        }
    }

    pub fn committed(&self) -> &[Vec2] {
        &self.committed
    }

    pub fn committed_count(&self) -> usize {
        self.committed.len()
    }

    #[allow(dead_code)]
    pub fn preview(&self) -> Vec2 {
        self.preview
    }

    /// Committed vertices followed by the preview vertex
    pub fn vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.committed
            .iter()
            .copied()
            .chain(std::iter::once(self.preview))
    }

    /// Pin a vertex at `at` and leave a fresh preview on top of it
    fn commit(&mut self, at: Vec2) {
        self.committed.push(at);
        self.preview = at;
    }

    /// Drop the preview, keeping only committed vertices
    fn into_committed(self) -> Vec<Vec2> {
        self.committed
    }
}

/// Field-less view of [`DraftState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    Idle,
    OnePoint,
    ManyPoints,
}

impl DraftPhase {
    pub fn display_name(&self) -> &'static str {
        match self {
            DraftPhase::Idle => "Idle",
            DraftPhase::OnePoint => "First point",
            DraftPhase::ManyPoints => "Drawing",
        }
    }
}

/// Machine state. The draft lives inside the state that owns it, so there is
/// no draft while idle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DraftState {
    #[default]
    Idle,
    /// One committed vertex plus preview
    OnePoint(Draft),
    /// At least two committed vertices plus preview
    ManyPoints(Draft),
}

/// What a transition did to the draft
#[derive(Debug, Clone, PartialEq)]
pub enum DraftOutcome {
    /// No transition defined for this (state, event) pair
    Ignored,
    /// The draft was created or mutated in place
    Updated,
    /// The draft was thrown away without producing anything
    Discarded,
    /// The draft was completed; holds the committed vertices, preview stripped
    Finalized(Vec<Vec2>),
}

impl DraftState {
    pub fn phase(&self) -> DraftPhase {
        match self {
            DraftState::Idle => DraftPhase::Idle,
            DraftState::OnePoint(_) => DraftPhase::OnePoint,
            DraftState::ManyPoints(_) => DraftPhase::ManyPoints,
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            DraftState::Idle => None,
            DraftState::OnePoint(draft) | DraftState::ManyPoints(draft) => Some(draft),
        }
    }

    /// Consume an event and produce the next state.
    ///
    /// A click that brings the committed count to `max_vertices` finalizes
    /// immediately, so a finished draft never holds more than `max_vertices`
    /// committed vertices.
    pub fn transition(self, event: &DraftEvent, max_vertices: usize) -> (DraftState, DraftOutcome) {
        match (self, event) {
            (DraftState::Idle, DraftEvent::Click(at)) => {
                (DraftState::OnePoint(Draft::start(*at)), DraftOutcome::Updated)
            }

            (DraftState::OnePoint(mut draft), DraftEvent::Click(at)) => {
                draft.commit(*at);
                (DraftState::ManyPoints(draft), DraftOutcome::Updated)
            }
            (DraftState::OnePoint(mut draft), DraftEvent::Move(at)) => {
                draft.preview = *at;
                (DraftState::OnePoint(draft), DraftOutcome::Updated)
            }

            (DraftState::ManyPoints(mut draft), DraftEvent::Click(at)) => {
                draft.commit(*at);
                if draft.committed.len() >= max_vertices {
                    (DraftState::Idle, DraftOutcome::Finalized(draft.into_committed()))
                } else {
                    (DraftState::ManyPoints(draft), DraftOutcome::Updated)
                }
            }
            (DraftState::ManyPoints(mut draft), DraftEvent::Move(at)) => {
                draft.preview = *at;
                (DraftState::ManyPoints(draft), DraftOutcome::Updated)
            }
            (DraftState::ManyPoints(draft), DraftEvent::Enter) => {
                (DraftState::Idle, DraftOutcome::Finalized(draft.into_committed()))
            }
            (DraftState::ManyPoints(mut draft), DraftEvent::Backspace) => {
                draft.committed.pop();
                if draft.committed.len() >= 2 {
                    (DraftState::ManyPoints(draft), DraftOutcome::Updated)
                } else {
                    (DraftState::OnePoint(draft), DraftOutcome::Updated)
                }
            }

            (DraftState::OnePoint(_) | DraftState::ManyPoints(_), DraftEvent::Escape) => {
                (DraftState::Idle, DraftOutcome::Discarded)
            }

            (state, _) => (state, DraftOutcome::Ignored),
        }
    }
}
