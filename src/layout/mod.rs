//! Resolution-independent window geometry.
//!
//! Window framing is stored as percentages of the desktop container so that
//! it survives container resizes. Interaction and rendering need absolute
//! pixels, so everything here converts between the two and clamps derived
//! framings back inside the container.

pub mod cascade;

pub use cascade::{CascadeOptions, OriginMode, OriginSlot, cascading_window_framing};

use crate::constants::DEFAULT_WINDOW_SIZE_PERCENT;

/// Percent framing that covers the whole container.
pub const FULL_FRAMING: Framing = Framing {
    position: Point { x: 0.0, y: 0.0 },
    size: Size {
        width: 100.0,
        height: 100.0,
    },
    unit: Unit::Percent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Percent,
    Px,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Position and size of a window, tagged with the unit they are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Framing {
    pub position: Point,
    pub size: Size,
    pub unit: Unit,
}

impl Framing {
    pub const fn percent(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point { x, y },
            size: Size { width, height },
            unit: Unit::Percent,
        }
    }

    pub const fn px(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point { x, y },
            size: Size { width, height },
            unit: Unit::Px,
        }
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }
}

/// Pixel rectangle with an origin, as reported by the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

impl From<Framing> for Rect {
    fn from(framing: Framing) -> Self {
        Rect::new(
            framing.position.x,
            framing.position.y,
            framing.size.width,
            framing.size.height,
        )
    }
}

fn guard(dimension: f64) -> f64 {
    if dimension > 0.0 { dimension } else { 1.0 }
}

/// Express a framing as percentages of `bounds`.
pub fn to_percent_framing(framing: Framing, bounds: Size) -> Framing {
    if framing.unit == Unit::Percent {
        return framing;
    }
    let bw = guard(bounds.width);
    let bh = guard(bounds.height);
    Framing::percent(
        framing.position.x / bw * 100.0,
        framing.position.y / bh * 100.0,
        framing.size.width / bw * 100.0,
        framing.size.height / bh * 100.0,
    )
}

/// Resolve a framing to absolute pixels inside `bounds`. The resulting size is
/// never smaller than one pixel.
pub fn to_pixel_framing(framing: Framing, bounds: Size) -> Framing {
    if framing.unit == Unit::Px {
        return framing;
    }
    let bw = guard(bounds.width);
    let bh = guard(bounds.height);
    Framing::px(
        framing.position.x / 100.0 * bw,
        framing.position.y / 100.0 * bh,
        (framing.size.width / 100.0 * bw).max(1.0),
        (framing.size.height / 100.0 * bh).max(1.0),
    )
}

/// Pixel offset that centers `size` inside `bounds`, never negative.
pub fn centered_position(bounds: Size, size: Size) -> Point {
    Point::new(
        ((bounds.width - size.width) / 2.0).max(0.0),
        ((bounds.height - size.height) / 2.0).max(0.0),
    )
}

/// Percent framing for a window of percent `size` centered in the container.
pub fn centered_window_framing(size: Size) -> Framing {
    Framing::percent(
        (50.0 - size.width / 2.0).max(0.0),
        (50.0 - size.height / 2.0).max(0.0),
        size.width,
        size.height,
    )
}

/// The framing new windows get when nothing more specific is known.
pub fn default_window_framing() -> Framing {
    centered_window_framing(Size::new(
        DEFAULT_WINDOW_SIZE_PERCENT,
        DEFAULT_WINDOW_SIZE_PERCENT,
    ))
}

/// Clamp a framing so it fits inside the container and respects the pixel
/// `min_size` (and `max_size` when given).
///
/// The result is always in percent. When `bounds` is not positive on both
/// axes there is nothing to clamp against and the framing is returned as is.
pub fn clamp_percent_framing(
    framing: Framing,
    bounds: Size,
    min_size: Size,
    max_size: Option<Size>,
) -> Framing {
    if !bounds.is_positive() {
        return framing;
    }
    let framing = to_percent_framing(framing, bounds);

    let min_w = clamp_axis(min_size.width / bounds.width * 100.0, 0.0, 100.0);
    let min_h = clamp_axis(min_size.height / bounds.height * 100.0, 0.0, 100.0);
    let (max_w, max_h) = match max_size {
        Some(max) => (
            (max.width / bounds.width * 100.0).min(100.0).max(min_w),
            (max.height / bounds.height * 100.0).min(100.0).max(min_h),
        ),
        None => (100.0, 100.0),
    };

    let width = clamp_axis(framing.size.width, min_w, max_w);
    let height = clamp_axis(framing.size.height, min_h, max_h);
    let x = clamp_axis(framing.position.x, 0.0, 100.0 - width);
    let y = clamp_axis(framing.position.y, 0.0, 100.0 - height);

    Framing::percent(x, y, width, height)
}

// `f64::clamp` passes NaN through; treat it as the lower bound so a bad
// input can never leave the container.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}
