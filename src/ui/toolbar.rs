use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{SetStrokeColorRequest, SketchConfig};
use crate::sketch::{DraftPhase, HistoryAffordances, SketchSession};

fn egui_color(color: Color) -> egui::Color32 {
    let [red, green, blue] = color.to_srgba().to_u8_array_no_alpha();
    egui::Color32::from_rgb(red, green, blue)
}

fn same_color(a: Color, b: Color) -> bool {
    let (a, b) = (a.to_srgba(), b.to_srgba());
    (a.red - b.red).abs() < 0.01
        && (a.green - b.green).abs() < 0.01
        && (a.blue - b.blue).abs() < 0.01
}

/// Status text for the draft, e.g. "Drawing 4/10"
fn draft_status(session: &SketchSession) -> String {
    match session.draft() {
        Some(draft) => format!(
            "{} {}/{}",
            session.phase().display_name(),
            draft.committed_count(),
            session.max_vertices()
        ),
        None => DraftPhase::Idle.display_name().to_string(),
    }
}

/// Line count and history depth, e.g. "3 lines, 4 undo, 1 redo"
fn history_status(session: &SketchSession) -> String {
    let lines = session.surface().len();
    let history = session.history();
    format!(
        "{} {}, {} undo, {} redo",
        lines,
        if lines == 1 { "line" } else { "lines" },
        history.undo_count(),
        history.redo_count()
    )
}

/// Main toolbar: undo/redo, stroke palette and draft status
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut session: ResMut<SketchSession>,
    affordances: Res<HistoryAffordances>,
    config: Res<SketchConfig>,
    mut stroke_events: MessageWriter<SetStrokeColorRequest>,
) -> Result {
    let mut undo_clicked = false;
    let mut redo_clicked = false;
    let mut picked = None;
    let status = affordances.0;

    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                undo_clicked = ui
                    .add_enabled(status.can_undo, egui::Button::new("Undo"))
                    .on_hover_text("Ctrl+Z")
                    .clicked();
                redo_clicked = ui
                    .add_enabled(status.can_redo, egui::Button::new("Redo"))
                    .on_hover_text("Ctrl+Y / Ctrl+Shift+Z")
                    .clicked();

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                ui.label("Color:");
                for swatch in &config.data.palette {
                    let color = swatch.color();
                    let is_selected = same_color(session.stroke_color(), color);

                    let button = egui::Button::new("")
                        .fill(egui_color(color))
                        .min_size(egui::vec2(18.0, 18.0))
                        .stroke(if is_selected {
                            egui::Stroke::new(2.0, egui::Color32::WHITE)
                        } else {
                            egui::Stroke::new(1.0, egui::Color32::DARK_GRAY)
                        });

                    let response = ui.add(button);
                    if response.clicked() {
                        picked = Some(swatch.rgb);
                    }
                    response.on_hover_text(&swatch.name);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(draft_status(&session)).color(egui::Color32::GRAY));
                    ui.separator();
                    ui.label(
                        egui::RichText::new(history_status(&session)).color(egui::Color32::GRAY),
                    );
                });
            });
        });

    // Apply after the panel closure so the session borrow stays simple
    if undo_clicked {
        session.request_undo()?;
    }
    if redo_clicked {
        session.request_redo()?;
    }
    if let Some(rgb) = picked {
        let color = crate::config::srgb_color(rgb);
        session.request_color_change(color)?;
        session.set_stroke_color(color);
        stroke_events.write(SetStrokeColorRequest { rgb });
    }
    Ok(())
}
