//! Host-reported surface state.

use crate::layout::Size;

/// Container size as last reported by the hosting surface.
///
/// Updates are push-based and idempotent: a repeated size or a non-positive
/// one (seen transiently while the host lays itself out) is not a change.
#[derive(Debug, Default, Clone, Copy)]
pub struct SurfaceState {
    size: Option<Size>,
    size_dirty: bool,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until the host has measured the container once.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Record a measurement. Returns `true` when the stored size changed.
    pub fn set_size(&mut self, width: f64, height: f64) -> bool {
        if !(width > 0.0 && height > 0.0) {
            return false;
        }
        let next = Size::new(width, height);
        if self.size == Some(next) {
            return false;
        }
        self.size = Some(next);
        self.size_dirty = true;
        true
    }

    /// Take the pending size change, if any, for consumers that react once.
    pub fn take_size_change(&mut self) -> Option<Size> {
        if self.size_dirty {
            self.size_dirty = false;
            self.size
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_updates_are_idempotent() {
        let mut s = SurfaceState::new();
        assert!(s.size().is_none());
        assert!(s.set_size(800.0, 600.0));
        assert_eq!(s.take_size_change(), Some(Size::new(800.0, 600.0)));
        // same value -> no change recorded
        assert!(!s.set_size(800.0, 600.0));
        assert!(s.take_size_change().is_none());
        // non-positive sizes are skipped
        assert!(!s.set_size(0.0, 600.0));
        assert!(!s.set_size(800.0, -1.0));
        assert_eq!(s.size(), Some(Size::new(800.0, 600.0)));
        assert!(s.set_size(1024.0, 768.0));
        assert_eq!(s.take_size_change(), Some(Size::new(1024.0, 768.0)));
        assert!(s.take_size_change().is_none());
    }
}
