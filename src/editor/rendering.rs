//! Gizmo rendering of the sketch: committed polylines and the draft overlay.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

use crate::config::SketchConfig;
use crate::constants::{DRAFT_ALPHA, DRAFT_VERTEX_RADIUS};
use crate::sketch::SketchSession;

/// Gizmo group for everything drawn on the canvas
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct SketchGizmoGroup;

/// Apply the configured stroke width to the sketch gizmos
pub fn configure_sketch_gizmos(
    config: Res<SketchConfig>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    let (gizmo_config, _) = config_store.config_mut::<SketchGizmoGroup>();
    gizmo_config.line.width = config.data.stroke_width;
}

pub fn render_committed(mut gizmos: Gizmos<SketchGizmoGroup>, session: Res<SketchSession>) {
    for (_, geometry) in session.surface().iter() {
        for (start, end) in geometry.segments() {
            gizmos.line_2d(start, end, geometry.color);
        }
    }
}

/// Draft in the stroke color at reduced opacity, with markers on the
/// committed vertices
pub fn render_draft(mut gizmos: Gizmos<SketchGizmoGroup>, session: Res<SketchSession>) {
    let Some(draft) = session.draft() else {
        return;
    };

    let color = session.stroke_color().with_alpha(DRAFT_ALPHA);
    gizmos.linestrip_2d(draft.vertices(), color);

    for vertex in draft.committed() {
        gizmos.circle_2d(
            Isometry2d::from_translation(*vertex),
            DRAFT_VERTEX_RADIUS,
            color,
        );
    }
}
