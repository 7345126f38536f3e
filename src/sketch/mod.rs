//! Polyline sketching core: draft state machine, undoable history and the
//! surface both of them draw onto.
//!
//! Everything below this module is plain data and logic; [`SketchPlugin`]
//! is the only place that touches the ECS.

mod draft;
mod error;
mod geometry;
mod history;
mod session;
mod surface;

pub use draft::{DraftEvent, DraftPhase};
pub use history::HistoryStatus;
pub use session::SketchSession;

use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use bevy::window::RequestRedraw;

use crate::config::{ConfigLoaded, SketchConfig};

/// Undo/redo affordances for the toolbar, kept current by the history observer
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryAffordances(pub HistoryStatus);

/// Latest status pushed by the history observer, not yet copied into
/// [`HistoryAffordances`]
#[derive(Resource, Default, Clone)]
struct HistoryStatusSlot(Arc<Mutex<Option<HistoryStatus>>>);

/// Create the session once the configuration is on hand
fn setup_session(
    mut commands: Commands,
    config: Res<SketchConfig>,
    slot: Res<HistoryStatusSlot>,
) {
    let data = &config.data;
    let mut session = SketchSession::new(
        data.max_vertices(),
        data.history_limit,
        data.stroke_color(),
    );

    let sink = slot.0.clone();
    session.subscribe(Box::new(move |status: HistoryStatus| {
        if let Ok(mut latest) = sink.lock() {
            *latest = Some(status);
        }
    }));

    info!(
        "Sketch session ready (max {} vertices, history limit {:?})",
        session.max_vertices(),
        data.history_limit
    );
    commands.insert_resource(session);
}

fn sync_history_affordances(
    slot: Res<HistoryStatusSlot>,
    mut affordances: ResMut<HistoryAffordances>,
) {
    let Some(status) = slot.0.lock().ok().and_then(|mut latest| latest.take()) else {
        return;
    };
    affordances.set_if_neq(HistoryAffordances(status));
}

/// Forward surface redraw requests to the winit loop
fn forward_redraw_requests(
    mut session: ResMut<SketchSession>,
    mut redraw: MessageWriter<RequestRedraw>,
) {
    // Bypass change detection, the session is polled every frame
    if session.bypass_change_detection().surface_mut().take_pending_redraw() {
        redraw.write(RequestRedraw);
    }
}

/// System set for the systems that feed input into the session
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SketchInput;

pub struct SketchPlugin;

impl Plugin for SketchPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HistoryAffordances>()
            .init_resource::<HistoryStatusSlot>()
            .add_systems(Startup, setup_session.after(ConfigLoaded))
            .add_systems(
                PostUpdate,
                (sync_history_affordances, forward_redraw_requests)
                    .run_if(resource_exists::<SketchSession>),
            );
    }
}
