//! Unit tests for the draft module.

use bevy::math::Vec2;
use proptest::prelude::*;

use super::events::DraftEvent;
use super::machine::DraftMachine;
use super::state::{DraftOutcome, DraftPhase, DraftState};
use crate::constants::{DEFAULT_MAX_VERTICES, MIN_MAX_VERTICES};

fn click(x: f32, y: f32) -> DraftEvent {
    DraftEvent::Click(Vec2::new(x, y))
}

fn moved(x: f32, y: f32) -> DraftEvent {
    DraftEvent::Move(Vec2::new(x, y))
}

/// Machine in ManyPoints with `count` committed vertices at (i, 0)
fn machine_with_committed(count: usize) -> DraftMachine {
    let mut machine = DraftMachine::new(DEFAULT_MAX_VERTICES);
    for i in 0..count {
        machine.handle(&click(i as f32, 0.0));
    }
    machine
}

#[test]
fn test_first_click_starts_draft_with_coincident_vertices() {
    let mut machine = DraftMachine::new(DEFAULT_MAX_VERTICES);
    assert_eq!(machine.handle(&click(3.0, 4.0)), DraftOutcome::Updated);

    assert_eq!(machine.phase(), DraftPhase::OnePoint);
    let draft = machine.draft().unwrap();
    assert_eq!(draft.committed(), &[Vec2::new(3.0, 4.0)]);
    assert_eq!(draft.preview(), Vec2::new(3.0, 4.0));
}

#[test]
fn test_move_overwrites_preview_only() {
    let mut machine = DraftMachine::new(DEFAULT_MAX_VERTICES);
    machine.handle(&click(0.0, 0.0));
    machine.handle(&moved(5.0, 5.0));
    machine.handle(&moved(6.0, 7.0));

    let draft = machine.draft().unwrap();
    assert_eq!(draft.committed(), &[Vec2::ZERO]);
    assert_eq!(draft.preview(), Vec2::new(6.0, 7.0));
    assert_eq!(draft.vertices().count(), 2);
}

#[test]
fn test_second_click_enters_many_points() {
    let mut machine = DraftMachine::new(DEFAULT_MAX_VERTICES);
    machine.handle(&click(0.0, 0.0));
    machine.handle(&click(10.0, 0.0));

    assert_eq!(machine.phase(), DraftPhase::ManyPoints);
    let draft = machine.draft().unwrap();
    assert_eq!(draft.committed(), &[Vec2::ZERO, Vec2::new(10.0, 0.0)]);
    assert_eq!(draft.preview(), Vec2::new(10.0, 0.0));

    machine.handle(&moved(10.0, 10.0));
    let vertices: Vec<_> = machine.draft().unwrap().vertices().collect();
    assert_eq!(
        vertices,
        vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]
    );
}

#[test]
fn test_idle_ignores_everything_but_click() {
    let mut machine = DraftMachine::new(DEFAULT_MAX_VERTICES);
    for event in [
        moved(1.0, 1.0),
        DraftEvent::Escape,
        DraftEvent::Enter,
        DraftEvent::Backspace,
        DraftEvent::OtherKey("Tab".to_string()),
    ] {
        assert_eq!(machine.handle(&event), DraftOutcome::Ignored);
        assert_eq!(machine.phase(), DraftPhase::Idle);
    }
}

#[test]
fn test_one_point_ignores_enter_and_backspace() {
    let mut machine = DraftMachine::new(DEFAULT_MAX_VERTICES);
    machine.handle(&click(0.0, 0.0));

    assert_eq!(machine.handle(&DraftEvent::Enter), DraftOutcome::Ignored);
    assert_eq!(machine.handle(&DraftEvent::Backspace), DraftOutcome::Ignored);
    assert_eq!(machine.phase(), DraftPhase::OnePoint);
    assert_eq!(machine.draft().unwrap().committed_count(), 1);
}

#[test]
fn test_escape_discards_from_both_drawing_states() {
    let mut machine = DraftMachine::new(DEFAULT_MAX_VERTICES);
    machine.handle(&click(0.0, 0.0));
    assert_eq!(machine.handle(&DraftEvent::Escape), DraftOutcome::Discarded);
    assert_eq!(machine.phase(), DraftPhase::Idle);
    assert!(machine.draft().is_none());

    let mut machine = machine_with_committed(4);
    assert_eq!(machine.handle(&DraftEvent::Escape), DraftOutcome::Discarded);
    assert!(machine.draft().is_none());
}

#[test]
fn test_enter_with_minimum_vertices_strips_preview() {
    let mut machine = machine_with_committed(2);
    machine.handle(&moved(50.0, 50.0));

    let outcome = machine.handle(&DraftEvent::Enter);
    assert_eq!(
        outcome,
        DraftOutcome::Finalized(vec![Vec2::ZERO, Vec2::new(1.0, 0.0)])
    );
    assert_eq!(machine.phase(), DraftPhase::Idle);
}

#[test]
fn test_backspace_above_two_stays_in_many_points() {
    let mut machine = machine_with_committed(4);
    machine.handle(&moved(9.0, 9.0));

    assert_eq!(machine.handle(&DraftEvent::Backspace), DraftOutcome::Updated);
    assert_eq!(machine.phase(), DraftPhase::ManyPoints);
    let draft = machine.draft().unwrap();
    assert_eq!(draft.committed_count(), 3);
    assert_eq!(draft.preview(), Vec2::new(9.0, 9.0));
}

#[test]
fn test_backspace_at_two_collapses_then_escape_discards() {
    let mut machine = machine_with_committed(2);

    assert_eq!(machine.handle(&DraftEvent::Backspace), DraftOutcome::Updated);
    assert_eq!(machine.phase(), DraftPhase::OnePoint);
    assert_eq!(machine.draft().unwrap().committed(), &[Vec2::ZERO]);

    assert_eq!(machine.handle(&DraftEvent::Escape), DraftOutcome::Discarded);
    assert_eq!(machine.phase(), DraftPhase::Idle);
}

#[test]
fn test_backspace_collapse_then_click_resumes() {
    let mut machine = machine_with_committed(2);
    machine.handle(&DraftEvent::Backspace);
    machine.handle(&click(7.0, 7.0));

    assert_eq!(machine.phase(), DraftPhase::ManyPoints);
    assert_eq!(
        machine.draft().unwrap().committed(),
        &[Vec2::ZERO, Vec2::new(7.0, 7.0)]
    );
}

#[test]
fn test_cap_click_finalizes_with_exactly_max_vertices() {
    let mut machine = machine_with_committed(DEFAULT_MAX_VERTICES - 1);
    assert_eq!(machine.phase(), DraftPhase::ManyPoints);
    assert_eq!(
        machine.draft().unwrap().committed_count(),
        DEFAULT_MAX_VERTICES - 1
    );

    match machine.handle(&click(99.0, 99.0)) {
        DraftOutcome::Finalized(vertices) => {
            assert_eq!(vertices.len(), DEFAULT_MAX_VERTICES);
            assert_eq!(vertices.last(), Some(&Vec2::new(99.0, 99.0)));
        }
        other => panic!("expected finalize, got {:?}", other),
    }
    assert_eq!(machine.phase(), DraftPhase::Idle);
}

#[test]
fn test_max_vertices_is_clamped() {
    assert_eq!(DraftMachine::new(0).max_vertices(), MIN_MAX_VERTICES);
    assert_eq!(DraftMachine::new(25).max_vertices(), 25);
}

#[test]
fn test_transition_is_pure() {
    let state = DraftState::Idle;
    let (next, outcome) = state.clone().transition(&click(1.0, 2.0), DEFAULT_MAX_VERTICES);

    assert_eq!(state, DraftState::Idle);
    assert_eq!(outcome, DraftOutcome::Updated);
    assert_eq!(next.phase(), DraftPhase::OnePoint);

    let (again, outcome) = next.clone().transition(&DraftEvent::Enter, DEFAULT_MAX_VERTICES);
    assert_eq!(outcome, DraftOutcome::Ignored);
    assert_eq!(again, next);
}

proptest! {
    /// The committed count never passes the cap, and the click that reaches
    /// it finalizes a line of exactly `max` vertices.
    #[test]
    fn prop_cap_boundary(max in MIN_MAX_VERTICES..16usize, clicks in 1usize..40) {
        let mut machine = DraftMachine::new(max);
        let mut finalized = Vec::new();

        for i in 0..clicks {
            if let DraftOutcome::Finalized(vertices) = machine.handle(&click(i as f32, 0.0)) {
                finalized.push(vertices.len());
            }
            if let Some(draft) = machine.draft() {
                prop_assert!(draft.committed_count() < max);
            }
        }

        prop_assert_eq!(finalized.len(), clicks / max);
        prop_assert!(finalized.iter().all(|&len| len == max));
    }

    /// Moves never change the committed vertices.
    #[test]
    fn prop_moves_only_touch_preview(
        committed in 1usize..9,
        moves in proptest::collection::vec((-100.0f32..100.0, -100.0f32..100.0), 0..20),
    ) {
        let mut machine = machine_with_committed(committed);
        let before = machine.draft().unwrap().committed().to_vec();

        for (x, y) in &moves {
            prop_assert_eq!(machine.handle(&moved(*x, *y)), DraftOutcome::Updated);
        }

        let draft = machine.draft().unwrap();
        prop_assert_eq!(draft.committed(), before.as_slice());
        if let Some((x, y)) = moves.last() {
            prop_assert_eq!(draft.preview(), Vec2::new(*x, *y));
        }
    }
}
