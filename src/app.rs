use anyhow::{anyhow, Result};
use eframe::egui;

use crate::state::ChartState;
use crate::ui::{panels, plot};
use crate::window::{positioner_for, window_anchor};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FilterPlotApp {
    pub state: ChartState,
}

impl FilterPlotApp {
    pub fn new(state: ChartState) -> Self {
        Self { state }
    }
}

impl eframe::App for FilterPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::sample_plot(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// Viewport for the chart window, placed by the backend's positioner.
pub fn chart_viewport(state: &ChartState, backend: &str) -> egui::ViewportBuilder {
    let viewport = egui::ViewportBuilder::default()
        .with_title(state.display.title.clone())
        .with_inner_size([800.0, 600.0])
        .with_min_inner_size([400.0, 300.0]);

    let positioner = positioner_for(backend);
    let anchor = window_anchor(state.display.x_offset);
    log::debug!(
        "Placing window at ({}, {}) via {} for backend {backend:?}",
        anchor.x,
        anchor.y,
        positioner.name()
    );
    positioner.place(viewport, anchor)
}

/// Open the chart window and block until the user closes it.
pub fn present(state: ChartState, backend: &str) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: chart_viewport(&state, backend),
        ..Default::default()
    };
    let app_name = state.display.title.clone();

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| Ok(Box::new(FilterPlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("failed to open the chart window: {e}"))
}
