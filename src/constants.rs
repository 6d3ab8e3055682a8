//! Shared crate-wide constants.

/// Offset, in container pixels, between a newly placed window and the
/// window it cascades from. Applied on both axes.
pub const CASCADE_STEP_PX: f64 = 12.0;

/// Percent size used for a new window when neither the caller nor the
/// application supplies one.
pub const DEFAULT_WINDOW_SIZE_PERCENT: f64 = 90.0;

/// Smallest pixel size a derived framing may shrink a window to.
pub const MIN_WINDOW_WIDTH_PX: f64 = 160.0;
pub const MIN_WINDOW_HEIGHT_PX: f64 = 120.0;

/// Horizontal distance, in pixels, from the container's left or right edge
/// within which a dragged pointer proposes a half-container snap.
pub const SNAP_EDGE_THRESHOLD_PX: f64 = 24.0;

/// Smallest container that accepts a snap. Halving anything smaller leaves
/// windows too narrow to use.
pub const SNAP_MIN_CONTAINER_WIDTH_PX: f64 = 720.0;
pub const SNAP_MIN_CONTAINER_HEIGHT_PX: f64 = 540.0;

/// Virtual pixel size of one terminal cell when the desktop is hosted in a
/// terminal. Only the host uses these; the core works in pixels throughout.
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;
