mod camera;
mod input;
mod params;
mod rendering;

use bevy::prelude::*;

use crate::config::ConfigLoaded;
use crate::sketch::{SketchInput, SketchSession};

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<rendering::SketchGizmoGroup>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    rendering::configure_sketch_gizmos.after(ConfigLoaded),
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                ),
            )
            .add_systems(
                Update,
                (
                    input::handle_pointer,
                    input::handle_draft_keys,
                    input::handle_undo,
                    input::handle_redo,
                )
                    .chain()
                    .in_set(SketchInput)
                    .run_if(resource_exists::<SketchSession>),
            )
            .add_systems(
                Update,
                (rendering::render_committed, rendering::render_draft)
                    .after(SketchInput)
                    .run_if(resource_exists::<SketchSession>),
            );
    }
}
