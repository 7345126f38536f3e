//! Canvas input: forwards pointer and key presses to the sketch session and
//! handles the undo/redo shortcuts.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::sketch::{DraftEvent, SketchSession};

use super::params::{is_cursor_over_ui, ui_wants_keyboard, CameraParams};

fn ctrl_pressed(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight)
}

fn shift_pressed(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight)
}

/// Send a move when the cursor's canvas position changes, and a click on
/// left press
pub fn handle_pointer(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    mut session: ResMut<SketchSession>,
    mut last_position: Local<Option<Vec2>>,
) -> Result {
    if is_cursor_over_ui(&mut contexts) {
        return Ok(());
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return Ok(());
    };

    if *last_position != Some(world_pos) {
        *last_position = Some(world_pos);
        session.on_pointer_move(world_pos)?;
    }

    if mouse_button.just_pressed(MouseButton::Left) {
        session.on_pointer_click(world_pos)?;
    }
    Ok(())
}

/// Forward key presses to the draft machine.
///
/// Chords with Ctrl belong to the shortcuts below and are not forwarded.
pub fn handle_draft_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut session: ResMut<SketchSession>,
) -> Result {
    if ctrl_pressed(&keyboard) || ui_wants_keyboard(&mut contexts) {
        return Ok(());
    }

    for key in keyboard.get_just_pressed() {
        session.handle_event(DraftEvent::from_key_code(*key))?;
    }
    Ok(())
}

/// System to handle undo keyboard shortcut (Ctrl+Z)
pub fn handle_undo(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<SketchSession>,
) -> Result {
    // Ctrl+Z (without shift) = undo
    if ctrl_pressed(&keyboard) && !shift_pressed(&keyboard) && keyboard.just_pressed(KeyCode::KeyZ)
    {
        session.request_undo()?;
    }
    Ok(())
}

/// System to handle redo keyboard shortcut (Ctrl+Y or Ctrl+Shift+Z)
pub fn handle_redo(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<SketchSession>,
) -> Result {
    let ctrl = ctrl_pressed(&keyboard);

    // Ctrl+Y or Ctrl+Shift+Z = redo
    let redo_pressed = (ctrl && keyboard.just_pressed(KeyCode::KeyY))
        || (ctrl && shift_pressed(&keyboard) && keyboard.just_pressed(KeyCode::KeyZ));

    if redo_pressed {
        session.request_redo()?;
    }
    Ok(())
}
