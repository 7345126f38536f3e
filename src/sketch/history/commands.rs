//! Sketch command enum for undo/redo operations.

use bevy::prelude::*;

use super::super::error::SurfaceError;
use super::super::geometry::{Geometry, GeometryId};
use super::super::surface::{Surface, SurfaceLayer};

/// A reversible mutation of a sketch surface
#[derive(Clone, Debug, PartialEq)]
pub enum SketchCommand {
    /// A finalized polyline was added
    AddGeometry { id: GeometryId, geometry: Geometry },
    /// A polyline's stroke color was changed
    ChangeColor {
        id: GeometryId,
        new_color: Color,
        /// Color observed when the command was built
        old_color: Color,
    },
}

impl SketchCommand {
    pub fn add_geometry(id: GeometryId, geometry: Geometry) -> Self {
        SketchCommand::AddGeometry { id, geometry }
    }

    /// Build a color change, capturing the current color as the undo value.
    /// Returns `None` if the geometry is not on the surface.
    pub fn change_color<S: Surface + ?Sized>(
        surface: &S,
        id: GeometryId,
        new_color: Color,
    ) -> Option<Self> {
        let old_color = surface.color(id)?;
        Some(SketchCommand::ChangeColor {
            id,
            new_color,
            old_color,
        })
    }

    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        match self {
            SketchCommand::AddGeometry { id, geometry } => {
                surface.add_geometry(*id, geometry.clone())?;
            }
            SketchCommand::ChangeColor { id, new_color, .. } => {
                surface.set_color(*id, *new_color)?;
            }
        }
        surface.request_redraw(SurfaceLayer::Committed);
        Ok(())
    }

    pub fn reverse<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        match self {
            SketchCommand::AddGeometry { id, .. } => {
                surface.remove_geometry(*id)?;
            }
            SketchCommand::ChangeColor { id, old_color, .. } => {
                surface.set_color(*id, *old_color)?;
            }
        }
        surface.request_redraw(SurfaceLayer::Committed);
        Ok(())
    }

    /// Id of the geometry this command targets
    pub fn target(&self) -> GeometryId {
        match self {
            SketchCommand::AddGeometry { id, .. } | SketchCommand::ChangeColor { id, .. } => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SketchCommand::AddGeometry { .. } => "Add line",
            SketchCommand::ChangeColor { .. } => "Change color",
        }
    }
}
