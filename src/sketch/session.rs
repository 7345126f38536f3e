//! Sketch session: the entry point the editor feeds input into.

use bevy::prelude::*;

use super::draft::{Draft, DraftEvent, DraftMachine, DraftOutcome, DraftPhase};
use super::error::SurfaceError;
use super::geometry::{Geometry, GeometryId};
use super::history::{CommandHistory, HistoryObserver, SketchCommand};
use super::surface::{SketchSurface, Surface, SurfaceLayer};

/// Owns the draft machine, the command history and the surface they act on.
///
/// Input events go to the machine; a finalized draft becomes an
/// `AddGeometry` command executed through the history. Undo and redo only
/// touch the history, never the draft.
#[derive(Resource)]
pub struct SketchSession {
    machine: DraftMachine,
    history: CommandHistory,
    surface: SketchSurface,
    /// Color given to newly finalized polylines
    stroke_color: Color,
    /// Most recently finalized polyline, target of color changes
    last_finalized: Option<GeometryId>,
    next_id: u64,
}

impl SketchSession {
    pub fn new(max_vertices: usize, history_limit: Option<usize>, stroke_color: Color) -> Self {
        Self {
            machine: DraftMachine::new(max_vertices),
            history: CommandHistory::new(history_limit),
            surface: SketchSurface::new(),
            stroke_color,
            last_finalized: None,
            next_id: 0,
        }
    }

    pub fn on_pointer_click(&mut self, at: Vec2) -> Result<(), SurfaceError> {
        self.handle_event(DraftEvent::Click(at))
    }

    pub fn on_pointer_move(&mut self, at: Vec2) -> Result<(), SurfaceError> {
        self.handle_event(DraftEvent::Move(at))
    }

    /// Key input by name, for shells that report keys as strings
    #[allow(dead_code)]
    pub fn on_key(&mut self, key_name: &str) -> Result<(), SurfaceError> {
        self.handle_event(DraftEvent::from_key_name(key_name))
    }

    /// Run one event through the draft machine and carry out its side effects
    pub fn handle_event(&mut self, event: DraftEvent) -> Result<(), SurfaceError> {
        match self.machine.handle(&event) {
            DraftOutcome::Ignored => {}
            DraftOutcome::Updated | DraftOutcome::Discarded => {
                self.surface.request_redraw(SurfaceLayer::Temporary);
            }
            DraftOutcome::Finalized(vertices) => {
                self.surface.request_redraw(SurfaceLayer::Temporary);
                self.finalize(vertices)?;
            }
        }
        Ok(())
    }

    fn finalize(&mut self, vertices: Vec<Vec2>) -> Result<(), SurfaceError> {
        let id = GeometryId(self.next_id);
        self.next_id += 1;

        info!("Finalized polyline {} with {} vertices", id, vertices.len());
        let geometry = Geometry::new(vertices, self.stroke_color);
        self.history
            .execute(SketchCommand::add_geometry(id, geometry), &mut self.surface)?;
        self.last_finalized = Some(id);
        Ok(())
    }

    pub fn request_undo(&mut self) -> Result<(), SurfaceError> {
        if !self.history.undo(&mut self.surface)? {
            trace!("Nothing to undo");
        }
        Ok(())
    }

    pub fn request_redo(&mut self) -> Result<(), SurfaceError> {
        if !self.history.redo(&mut self.surface)? {
            trace!("Nothing to redo");
        }
        Ok(())
    }

    /// Recolor the most recently finalized polyline as an undoable command.
    ///
    /// Does nothing if no polyline has been finalized yet, or if that
    /// polyline is currently undone.
    pub fn request_color_change(&mut self, color: Color) -> Result<(), SurfaceError> {
        let Some(id) = self.last_finalized else {
            debug!("Color change ignored: no polyline yet");
            return Ok(());
        };
        let Some(command) = SketchCommand::change_color(&self.surface, id, color) else {
            debug!("Color change ignored: polyline {} is not on the surface", id);
            return Ok(());
        };
        self.history.execute(command, &mut self.surface)
    }

    /// Color for polylines finalized from now on
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    pub fn subscribe(&mut self, observer: HistoryObserver) {
        self.history.subscribe(observer);
    }

    pub fn phase(&self) -> DraftPhase {
        self.machine.phase()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.machine.draft()
    }

    pub fn max_vertices(&self) -> usize {
        self.machine.max_vertices()
    }

    pub fn surface(&self) -> &SketchSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut SketchSurface {
        &mut self.surface
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    #[allow(dead_code)]
    pub fn last_finalized(&self) -> Option<GeometryId> {
        self.last_finalized
    }
}
