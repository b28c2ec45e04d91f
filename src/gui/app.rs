//! Plan-list window implemented with egui/eframe
//!
//! A single scrollable list of plan names. Clicking a row activates
//! that plan; a rejected change pops a modal dialog and the window
//! stays up. The window's last observed outer position is written to
//! the position store when the window closes.

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info, warn};

use super::constants::*;
use crate::constants::app;
use crate::error::ApplyError;
use crate::geometry::{format_geometry, offset_suffix, parse_offset};
use crate::position::PositionStore;
use crate::powercfg::PowerTool;
use crate::selection::{SelectionController, SelectionOutcome};

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

struct SwitcherApp {
    controller: SelectionController,
    tool: Box<dyn PowerTool>,
    store: PositionStore,
    status_message: Option<StatusMessage>,
    apply_error: Option<ApplyError>,
    last_outer_rect: Option<egui::Rect>,
    scroll_to_selected: bool,
}

impl SwitcherApp {
    fn new(
        _cc: &CreationContext<'_>,
        controller: SelectionController,
        tool: Box<dyn PowerTool>,
        store: PositionStore,
    ) -> Self {
        info!(plans = controller.plans().len(), "Initializing plan window");
        Self {
            controller,
            tool,
            store,
            status_message: None,
            apply_error: None,
            last_outer_rect: None,
            scroll_to_selected: true,
        }
    }

    fn handle_selection(&mut self, index: usize) {
        match self.controller.select(index, self.tool.as_ref()) {
            SelectionOutcome::Applied(plan) => {
                self.status_message = Some(StatusMessage {
                    text: format!("Switched to {}", plan.name),
                    color: STATUS_OK,
                });
            }
            SelectionOutcome::Failed(err) => {
                error!(error = %err, "Plan change failed");
                self.status_message = None;
                self.apply_error = Some(err);
            }
            SelectionOutcome::Ignored => {}
        }
    }

    fn apply_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(err) = &self.apply_error else {
            return;
        };
        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("apply-error")).show(ctx, |ui| {
            ui.heading("Error");
            ui.add_space(ITEM_SPACING);
            ui.colored_label(STATUS_ERROR, err.to_string());
            ui.add_space(ITEM_SPACING);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
        if dismissed || modal.should_close() {
            self.apply_error = None;
        }
    }

    fn save_position(&self) {
        let Some(rect) = self.last_outer_rect else {
            warn!("No window geometry observed, skipping position save");
            return;
        };
        let geometry = format_geometry(rect.width(), rect.height(), rect.min.x, rect.min.y);
        let Some(offset) = offset_suffix(&geometry) else {
            warn!(geometry = %geometry, "Geometry has no offset suffix, skipping position save");
            return;
        };
        if let Err(err) = self.store.save(offset) {
            error!(error = ?err, "Failed to save window position");
        }
    }
}

impl eframe::App for SwitcherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.last_outer_rect = Some(rect);
        }

        let mut clicked_row = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(PANEL_PADDING);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (index, plan) in self.controller.plans().iter().enumerate() {
                        let is_selected = self.controller.selected() == Some(index);
                        let row = ui.selectable_label(
                            is_selected,
                            egui::RichText::new(&plan.name).size(LIST_TEXT_SIZE),
                        );
                        if is_selected && self.scroll_to_selected {
                            row.scroll_to_me(Some(egui::Align::Center));
                        }
                        if row.clicked() {
                            clicked_row = Some(index);
                        }
                    }
                });
            self.scroll_to_selected = false;

            if let Some(message) = &self.status_message {
                ui.add_space(ITEM_SPACING);
                ui.colored_label(message.color, &message.text);
            }
        });

        if let Some(index) = clicked_row {
            self.handle_selection(index);
        }

        self.apply_error_dialog(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_position();
        info!("Plan window exiting");
    }
}

/// Launch the plan window, restoring this host's stored position first.
/// No stored record keeps the system-default placement.
pub fn run_gui(
    controller: SelectionController,
    tool: Box<dyn PowerTool>,
    store: PositionStore,
) -> Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_title(app::WINDOW_TITLE);

    match store.load()? {
        Some(offset) => match parse_offset(&offset) {
            Some((x, y)) => {
                info!(offset = %offset, "Restoring window position");
                viewport = viewport.with_position([x as f32, y as f32]);
            }
            None => {
                warn!(offset = %offset, "Stored offset unparseable, using default placement");
            }
        },
        None => info!("No stored position for this host, using default placement"),
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        app::NAME,
        options,
        Box::new(move |cc| Ok(Box::new(SwitcherApp::new(cc, controller, tool, store)))),
    )
    .map_err(|err| anyhow!("Failed to launch plan window: {err}"))
}
