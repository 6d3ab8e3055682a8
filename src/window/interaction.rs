//! Pointer gestures on a single window.
//!
//! A gesture captures the window's pixel framing when it starts and turns
//! every later pointer sample into a framing proposal. Proposals are never
//! written to the registry while the gesture runs; the owner commits the
//! final one when the pointer is released.

use crate::layout::{Framing, Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    fn moves_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    fn moves_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    fn moves_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }
}

/// Which resize grip of `rect` the pointer is on, if any. `grip` is the
/// thickness of the grab zone along each border, measured inward.
pub fn resize_edge_at(rect: Rect, pointer: Point, grip: f64) -> Option<ResizeEdge> {
    if !rect.contains(pointer) {
        return None;
    }
    let left = pointer.x < rect.x + grip;
    let right = pointer.x >= rect.right() - grip;
    let top = pointer.y < rect.y + grip;
    let bottom = pointer.y >= rect.bottom() - grip;
    match (left, right, top, bottom) {
        (_, true, _, true) => Some(ResizeEdge::BottomRight),
        (true, _, _, true) => Some(ResizeEdge::BottomLeft),
        (_, true, true, _) => Some(ResizeEdge::TopRight),
        (true, _, true, _) => Some(ResizeEdge::TopLeft),
        (true, _, _, _) => Some(ResizeEdge::Left),
        (_, true, _, _) => Some(ResizeEdge::Right),
        (_, _, _, true) => Some(ResizeEdge::Bottom),
        (_, _, true, _) => Some(ResizeEdge::Top),
        _ => None,
    }
}

/// Title-bar drag.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveGesture {
    pub id: String,
    pub start_pointer: Point,
    pub start_framing: Framing,
}

impl MoveGesture {
    pub fn new(id: impl Into<String>, start_pointer: Point, start_framing: Framing) -> Self {
        Self {
            id: id.into(),
            start_pointer,
            start_framing,
        }
    }

    /// Pixel framing translated by the pointer delta. Size is unchanged.
    pub fn framing_at(&self, pointer: Point) -> Framing {
        let dx = pointer.x - self.start_pointer.x;
        let dy = pointer.y - self.start_pointer.y;
        Framing::px(
            self.start_framing.position.x + dx,
            self.start_framing.position.y + dy,
            self.start_framing.size.width,
            self.start_framing.size.height,
        )
    }
}

/// Border or corner drag.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    pub id: String,
    pub edge: ResizeEdge,
    pub start_pointer: Point,
    pub start_framing: Framing,
    pub min_size: Size,
}

impl ResizeGesture {
    pub fn new(
        id: impl Into<String>,
        edge: ResizeEdge,
        start_pointer: Point,
        start_framing: Framing,
        min_size: Size,
    ) -> Self {
        Self {
            id: id.into(),
            edge,
            start_pointer,
            start_framing,
            min_size,
        }
    }

    /// Pixel framing with the dragged borders moved by the pointer delta.
    ///
    /// Width and height never drop below `min_size`; when a left or top
    /// border hits the minimum, the opposite border stays where it was.
    pub fn framing_at(&self, pointer: Point) -> Framing {
        let dx = pointer.x - self.start_pointer.x;
        let dy = pointer.y - self.start_pointer.y;
        let start = self.start_framing;
        let mut x = start.position.x;
        let mut y = start.position.y;
        let mut width = start.size.width;
        let mut height = start.size.height;

        if self.edge.moves_left() {
            x += dx;
            width -= dx;
        } else if self.edge.moves_right() {
            width += dx;
        }
        if self.edge.moves_top() {
            y += dy;
            height -= dy;
        } else if self.edge.moves_bottom() {
            height += dy;
        }

        let min_w = self.min_size.width.max(1.0);
        let min_h = self.min_size.height.max(1.0);
        if width < min_w {
            if self.edge.moves_left() {
                x -= min_w - width;
            }
            width = min_w;
        }
        if height < min_h {
            if self.edge.moves_top() {
                y -= min_h - height;
            }
            height = min_h;
        }

        Framing::px(x, y, width, height)
    }
}
