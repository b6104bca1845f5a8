// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;

/// Widget-side state that is not part of the filter criteria.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Price slider positions; pushed into the session on change.
    pub price_min: f64,
    pub price_max: f64,

    /// Last acknowledgment shown under the toolbar.
    pub status: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            price_min: 0.0,
            price_max: 0.0,
            status: s!("Idle"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
