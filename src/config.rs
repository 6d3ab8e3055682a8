//! Desktop tunables.

use crate::constants::{CASCADE_STEP_PX, MIN_WINDOW_HEIGHT_PX, MIN_WINDOW_WIDTH_PX};
use crate::layout::{OriginMode, Size};
use crate::snap::SnapPolicy;

/// Tunables for a [`crate::desktop::Desktop`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesktopConfig {
    /// Pixel offset between cascaded windows.
    pub cascade_step: f64,
    /// Where the cascade restarts after wrapping.
    pub origin: OriginMode,
    /// Pixel floor for derived framings and resize gestures.
    pub min_window_size: Size,
    pub snap: SnapPolicy,
    /// Seed for randomized cascade origins. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            cascade_step: CASCADE_STEP_PX,
            origin: OriginMode::Center,
            min_window_size: Size::new(MIN_WINDOW_WIDTH_PX, MIN_WINDOW_HEIGHT_PX),
            snap: SnapPolicy::default(),
            seed: None,
        }
    }
}
