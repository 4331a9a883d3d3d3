use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::matrix::Matrix;

// ---------------------------------------------------------------------------
// Color scale: matrix value → Color32
// ---------------------------------------------------------------------------

/// Maps scalar magnitudes onto a continuous cold-to-hot gradient.
///
/// Low values render dark blue, high values bright yellow, so a spectrogram
/// reads the way the usual pseudocolor plots do.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    /// Build a scale spanning the matrix's finite value range.
    /// A matrix without finite values gets a degenerate 0..=1 scale.
    pub fn from_matrix(matrix: &Matrix) -> Self {
        let (min, max) = matrix.value_range().unwrap_or((0.0, 1.0));
        ColorScale { min, max }
    }

    /// Colour for a single value. Non-finite cells render gray.
    pub fn color_for(&self, value: f64) -> Color32 {
        if !value.is_finite() {
            return Color32::GRAY;
        }

        let range = self.max - self.min;
        let t = if range.abs() < f64::EPSILON {
            0.5
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        } as f32;

        // Hue sweeps from deep blue (250°) through green to yellow (60°),
        // brightening along the way.
        let hue = 250.0 - 190.0 * t;
        let lightness = 0.18 + 0.42 * t;
        let hsl = Hsl::new(hue, 0.85, lightness);
        let rgb: Srgb = hsl.into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_get_distinct_colors() {
        let m = Matrix::from_rows(vec![vec![0.0, 10.0]]);
        let scale = ColorScale::from_matrix(&m);
        assert_ne!(scale.color_for(0.0), scale.color_for(10.0));
    }

    #[test]
    fn values_are_clamped_to_the_range() {
        let m = Matrix::from_rows(vec![vec![0.0, 1.0]]);
        let scale = ColorScale::from_matrix(&m);
        assert_eq!(scale.color_for(-5.0), scale.color_for(0.0));
        assert_eq!(scale.color_for(99.0), scale.color_for(1.0));
    }

    #[test]
    fn constant_matrix_does_not_divide_by_zero() {
        let m = Matrix::from_rows(vec![vec![3.0, 3.0], vec![3.0, 3.0]]);
        let scale = ColorScale::from_matrix(&m);
        // A flat matrix maps everywhere to the mid-scale colour.
        assert_eq!(scale.color_for(3.0), scale.color_for(3.0));
        assert_ne!(scale.color_for(3.0), Color32::GRAY);
    }

    #[test]
    fn non_finite_values_are_gray() {
        let m = Matrix::from_rows(vec![vec![0.0, 1.0]]);
        let scale = ColorScale::from_matrix(&m);
        assert_eq!(scale.color_for(f64::NAN), Color32::GRAY);
        assert_eq!(scale.color_for(f64::INFINITY), Color32::GRAY);
    }
}
