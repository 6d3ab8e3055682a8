//! Cascading placement for newly opened windows.
//!
//! Each new window is offset from the current top window by a fixed pixel
//! step so that stacked windows stay visually distinguishable. Once the
//! staircase would run off the container it wraps back to an origin point.

use rand::Rng;

use super::{
    Framing, Point, Size, clamp_percent_framing, centered_window_framing,
    default_window_framing, to_percent_framing, to_pixel_framing,
};
use crate::constants::CASCADE_STEP_PX;

/// Where the staircase restarts after wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OriginMode {
    /// The base framing's own position.
    #[default]
    Center,
    /// A caller supplied point, in percent of the container.
    Custom(Point),
    /// A uniformly sampled point, memoized in an [`OriginSlot`] until the
    /// next wrap.
    Random,
}

/// Caller-owned memo for the random cascade origin.
///
/// Keeping this outside the placement function means a cascade session is
/// reproducible: seed the rng, or preload the slot, and placement is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OriginSlot {
    origin: Option<Point>,
}

impl OriginSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot preloaded with a pixel origin.
    pub fn with_origin(origin: Point) -> Self {
        Self {
            origin: Some(origin),
        }
    }

    pub fn get(&self) -> Option<Point> {
        self.origin
    }

    pub fn reset(&mut self) {
        self.origin = None;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CascadeOptions {
    /// Container size in pixels.
    pub bounds: Size,
    /// Preferred percent size of the new window.
    pub size: Option<Size>,
    /// Explicit framing to start from; wins over `size`.
    pub base_framing: Option<Framing>,
    /// Current framing of the top window, if any.
    pub top_framing: Option<Framing>,
    /// Pixel offset between consecutive windows.
    pub step: f64,
    /// Pixel minimum the result is clamped to.
    pub min_size: Size,
    pub origin: OriginMode,
}

impl CascadeOptions {
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            size: None,
            base_framing: None,
            top_framing: None,
            step: CASCADE_STEP_PX,
            min_size: Size::default(),
            origin: OriginMode::Center,
        }
    }
}

/// Compute the percent framing for the next window in a cascade.
///
/// Returns the base framing unchanged when the container cannot hold the
/// anchor window at all.
pub fn cascading_window_framing<R: Rng>(
    options: &CascadeOptions,
    slot: &mut OriginSlot,
    rng: &mut R,
) -> Framing {
    let bounds = options.bounds;
    let base = options
        .base_framing
        .map(|framing| to_percent_framing(framing, bounds))
        .or_else(|| options.size.map(centered_window_framing))
        .unwrap_or_else(default_window_framing);

    let anchor = to_pixel_framing(options.top_framing.unwrap_or(base), bounds);
    if bounds.width <= anchor.size.width || bounds.height <= anchor.size.height {
        return base;
    }

    let max_x = bounds.width - anchor.size.width;
    let max_y = bounds.height - anchor.size.height;

    let origin = match options.origin {
        OriginMode::Center => to_pixel_framing(base, bounds).position,
        OriginMode::Custom(point) => Point::new(
            point.x / 100.0 * bounds.width,
            point.y / 100.0 * bounds.height,
        ),
        OriginMode::Random => *slot.origin.get_or_insert_with(|| {
            Point::new(rng.random_range(0.0..=max_x), rng.random_range(0.0..=max_y))
        }),
    };
    let origin = Point::new(origin.x.clamp(0.0, max_x), origin.y.clamp(0.0, max_y));

    let candidate = Point::new(
        anchor.position.x + options.step,
        anchor.position.y + options.step,
    );
    let next = if candidate.x > max_x || candidate.y > max_y {
        if options.origin == OriginMode::Random {
            slot.reset();
        }
        tracing::trace!(x = origin.x, y = origin.y, "cascade wrapped to origin");
        origin
    } else {
        candidate
    };

    let placed = Framing::px(
        next.x.clamp(0.0, max_x),
        next.y.clamp(0.0, max_y),
        anchor.size.width,
        anchor.size.height,
    );
    clamp_percent_framing(
        to_percent_framing(placed, bounds),
        bounds,
        options.min_size,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn px_of(framing: Framing, bounds: Size) -> Point {
        to_pixel_framing(framing, bounds).position
    }

    #[test]
    fn first_window_steps_off_the_base() {
        let bounds = Size::new(1000.0, 1000.0);
        let mut options = CascadeOptions::new(bounds);
        options.size = Some(Size::new(50.0, 50.0));
        let mut slot = OriginSlot::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let out = cascading_window_framing(&options, &mut slot, &mut rng);
        let p = px_of(out, bounds);
        assert!((p.x - 262.0).abs() < 1e-6);
        assert!((p.y - 262.0).abs() < 1e-6);
    }

    #[test]
    fn returns_base_when_container_is_too_small() {
        let bounds = Size::new(100.0, 100.0);
        let mut options = CascadeOptions::new(bounds);
        options.base_framing = Some(Framing::percent(0.0, 0.0, 100.0, 100.0));
        let mut slot = OriginSlot::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let out = cascading_window_framing(&options, &mut slot, &mut rng);
        assert_eq!(out, Framing::percent(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn wraps_to_custom_origin() {
        let bounds = Size::new(1000.0, 1000.0);
        let mut options = CascadeOptions::new(bounds);
        options.size = Some(Size::new(50.0, 50.0));
        options.origin = OriginMode::Custom(Point::new(10.0, 5.0));
        // Top window already sits at the bottom-right limit.
        options.top_framing = Some(Framing::percent(50.0, 50.0, 50.0, 50.0));
        let mut slot = OriginSlot::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let out = cascading_window_framing(&options, &mut slot, &mut rng);
        let p = px_of(out, bounds);
        assert!((p.x - 100.0).abs() < 1e-6);
        assert!((p.y - 50.0).abs() < 1e-6);
    }

    #[test]
    fn random_origin_is_memoized_until_wrap() {
        let bounds = Size::new(1000.0, 800.0);
        let mut options = CascadeOptions::new(bounds);
        options.size = Some(Size::new(50.0, 50.0));
        options.origin = OriginMode::Random;
        let mut slot = OriginSlot::new();
        let mut rng = SmallRng::seed_from_u64(7);

        cascading_window_framing(&options, &mut slot, &mut rng);
        let first = slot.get().expect("origin drawn");
        cascading_window_framing(&options, &mut slot, &mut rng);
        assert_eq!(slot.get(), Some(first));

        // Force a wrap: the memoized origin is used, then cleared.
        options.top_framing = Some(Framing::percent(50.0, 50.0, 50.0, 50.0));
        let wrapped = cascading_window_framing(&options, &mut slot, &mut rng);
        let p = px_of(wrapped, bounds);
        assert!((p.x - first.x).abs() < 1e-6);
        assert!((p.y - first.y).abs() < 1e-6);
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn preloaded_slot_is_used_as_origin() {
        let bounds = Size::new(1000.0, 1000.0);
        let mut options = CascadeOptions::new(bounds);
        options.size = Some(Size::new(50.0, 50.0));
        options.origin = OriginMode::Random;
        options.top_framing = Some(Framing::percent(50.0, 50.0, 50.0, 50.0));
        let mut slot = OriginSlot::with_origin(Point::new(40.0, 30.0));
        let mut rng = SmallRng::seed_from_u64(3);
        let out = cascading_window_framing(&options, &mut slot, &mut rng);
        let p = px_of(out, bounds);
        assert!((p.x - 40.0).abs() < 1e-6);
        assert!((p.y - 30.0).abs() < 1e-6);
    }
}
