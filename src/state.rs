use crate::data::matrix::Matrix;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One spectrogram to display: the matrix plus its plot labelling.
pub struct SpectrogramView {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub matrix: Matrix,
}

/// The full UI state, independent of rendering.
///
/// Views are shown one at a time; a close request on the window advances to
/// the next view until none remain.
pub struct AppState {
    /// The spectrograms, in presentation order.
    pub views: Vec<SpectrogramView>,

    /// Index of the view currently on screen.
    pub current: usize,

    /// RMS difference between the two matrices, shown in the top bar.
    pub rms: f64,
}

impl AppState {
    pub fn new(views: Vec<SpectrogramView>, rms: f64) -> Self {
        AppState {
            views,
            current: 0,
            rms,
        }
    }

    /// The view currently on screen.
    pub fn current_view(&self) -> &SpectrogramView {
        &self.views[self.current]
    }

    /// Number of views still queued after the current one.
    pub fn remaining(&self) -> usize {
        self.views.len().saturating_sub(self.current + 1)
    }

    /// Move to the next view. Returns `false` when the current view is the
    /// last one, in which case the caller should let the window close.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.views.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_views() -> AppState {
        let mk = |title: &str| SpectrogramView {
            title: title.to_string(),
            x_label: "Time [sec]".to_string(),
            y_label: "Frequency [Hz]".to_string(),
            matrix: Matrix::from_rows(vec![vec![0.0]]),
        };
        AppState::new(vec![mk("first"), mk("second")], 0.0)
    }

    #[test]
    fn views_advance_in_order_then_stop() {
        let mut state = two_views();
        assert_eq!(state.current_view().title, "first");
        assert_eq!(state.remaining(), 1);

        assert!(state.advance());
        assert_eq!(state.current_view().title, "second");
        assert_eq!(state.remaining(), 0);

        // Last view: no further advance, window may close.
        assert!(!state.advance());
        assert_eq!(state.current_view().title, "second");
    }
}
