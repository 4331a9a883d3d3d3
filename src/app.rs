use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpectroDiffApp {
    pub state: AppState,
    /// Rasterized mesh of the current view, rebuilt when the view changes.
    texture: Option<egui::TextureHandle>,
}

impl SpectroDiffApp {
    pub fn new(state: AppState) -> Self {
        SpectroDiffApp {
            state,
            texture: None,
        }
    }
}

impl eframe::App for SpectroDiffApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Sequential presentation ----
        // A close request on a non-final view is swallowed and advances to
        // the next spectrogram; the last close actually quits.
        if ctx.input(|i| i.viewport().close_requested()) && self.state.advance() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                self.state.current_view().title.clone(),
            ));
            self.texture = None;
            log::info!("advancing to '{}'", self.state.current_view().title);
        }

        let current = self.state.current;
        let view = self.state.current_view();
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture(
                format!("mesh_{current}"),
                plot::mesh_image(&view.matrix),
                egui::TextureOptions::NEAREST,
            )
        });

        // ---- Top panel: title, shape, RMS readout ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: pseudocolor mesh ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::mesh_plot(ui, view, texture);
        });
    }
}
