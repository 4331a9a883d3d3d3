mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::SpectroDiffApp;
use data::loader::load_matrix;
use data::metric::rms_difference;
use eframe::egui;
use state::{AppState, SpectrogramView};

/// Spectrogram dumped by the C++ implementation, stored transposed.
const CPP_SPECTROGRAM: &str = "MajorTom16.wav.txt";
/// Reference spectrogram exported from MATLAB.
const MATLAB_SPECTROGRAM: &str = "MajorTomSpectrogram.txt";

fn main() -> Result<()> {
    env_logger::init();

    // The C++ dump stores time along rows; transpose it to the MATLAB
    // orientation before comparing. This mirrors the producers' conventions.
    let data_cpp = load_matrix(Path::new(CPP_SPECTROGRAM))?.transposed();
    let data_matlab = load_matrix(Path::new(MATLAB_SPECTROGRAM))?;

    log::info!(
        "loaded {} ({}) and {} ({})",
        CPP_SPECTROGRAM,
        data_cpp.shape_label(),
        MATLAB_SPECTROGRAM,
        data_matlab.shape_label()
    );

    let rms = rms_difference(&data_cpp, &data_matlab)
        .context("comparing the two spectrograms")?;
    println!("{rms}");

    let views = vec![
        SpectrogramView {
            title: "CPP spectrogram".to_string(),
            x_label: "Time [sec]".to_string(),
            y_label: "Frequency [Hz]".to_string(),
            matrix: data_cpp,
        },
        SpectrogramView {
            title: "MATLAB spectrogram".to_string(),
            x_label: "Time [sec]".to_string(),
            y_label: "Frequency [Hz]".to_string(),
            matrix: data_matlab,
        },
    ];
    let state = AppState::new(views, rms);
    let first_title = state.current_view().title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(first_title)
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    eframe::run_native(
        "spectro-diff",
        options,
        Box::new(move |_cc| Ok(Box::new(SpectroDiffApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the viewer: {e}"))?;

    Ok(())
}
