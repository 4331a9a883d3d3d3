use eframe::egui::{RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: current plot title, matrix shape, RMS readout, and a
/// hint while further spectrograms are queued.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        let view = state.current_view();

        ui.heading(RichText::new(&view.title).strong());

        ui.separator();
        ui.label(format!("{} bins", view.matrix.shape_label()));

        ui.separator();
        ui.label(format!("RMS difference: {:.6e}", state.rms));

        if state.remaining() > 0 {
            ui.separator();
            ui.label(format!(
                "close the window to show the next spectrogram ({} left)",
                state.remaining()
            ));
        }
    });
}
