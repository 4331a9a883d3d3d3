use eframe::egui::{Color32, ColorImage, TextureHandle, Ui, vec2};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::color::ColorScale;
use crate::data::matrix::Matrix;
use crate::state::SpectrogramView;

// ---------------------------------------------------------------------------
// Pseudocolor mesh plot (central panel)
// ---------------------------------------------------------------------------

/// Rasterize a matrix into a mesh image: one pixel per cell, colour encoding
/// magnitude, matrix row 0 at the bottom (so frequency bins read upwards).
pub fn mesh_image(matrix: &Matrix) -> ColorImage {
    let scale = ColorScale::from_matrix(matrix);
    let mut image = ColorImage::new([matrix.cols.max(1), matrix.rows.max(1)], Color32::GRAY);

    for row in 0..matrix.rows {
        // Image pixels run top-to-bottom, the plot's y axis bottom-to-top.
        let pixel_row = matrix.rows - 1 - row;
        for col in 0..matrix.cols {
            image.pixels[pixel_row * matrix.cols + col] = scale.color_for(matrix.get(row, col));
        }
    }
    image
}

/// Render the current spectrogram as a pseudocolor mesh with axis labels.
pub fn mesh_plot(ui: &mut Ui, view: &SpectrogramView, texture: &TextureHandle) {
    let cols = view.matrix.cols as f64;
    let rows = view.matrix.rows as f64;

    Plot::new("mesh_plot")
        .x_axis_label(view.x_label.as_str())
        .y_axis_label(view.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Centre the mesh so cell (r, c) spans [c, c+1] x [r, r+1].
            let image = PlotImage::new(
                texture.id(),
                PlotPoint::new(cols / 2.0, rows / 2.0),
                vec2(cols as f32, rows as f32),
            );
            plot_ui.image(image);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_image_has_one_pixel_per_cell() {
        let m = Matrix::from_rows(vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);
        let image = mesh_image(&m);
        assert_eq!(image.size, [3, 2]);
        assert_eq!(image.pixels.len(), 6);
    }

    #[test]
    fn matrix_row_zero_lands_at_the_bottom() {
        let m = Matrix::from_rows(vec![vec![0.0, 0.0], vec![10.0, 10.0]]);
        let scale = ColorScale::from_matrix(&m);
        let image = mesh_image(&m);

        // Bottom image row (index 1) holds matrix row 0.
        assert_eq!(image.pixels[2], scale.color_for(0.0));
        assert_eq!(image.pixels[0], scale.color_for(10.0));
    }
}
