use eframe::egui::{Color32, RichText, Ui};

use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Top bar – title and ingestion status
// ---------------------------------------------------------------------------

/// Render the chart title and a one-line summary of the input.
pub fn top_bar(ui: &mut Ui, state: &ChartState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&state.display.title);
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} samples", state.samples.parsed_count()));

        ui.separator();

        match &state.first_rejection {
            Some(first) => {
                let text = format!(
                    "{} lines skipped (first: line {} {:?}, {})",
                    state.rejected_lines, first.line_no, first.text, first.reason
                );
                ui.label(RichText::new(text).color(Color32::RED));
            }
            None => {
                ui.label("0 lines skipped");
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
