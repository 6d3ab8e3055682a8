//! Snap assist: half-container docking offered while a window is dragged.
//!
//! Only the horizontal axis matters. A pointer close to the container's left
//! or right edge proposes the matching half; the proposal is advisory until
//! the drag is dropped.

use crate::constants::{
    SNAP_EDGE_THRESHOLD_PX, SNAP_MIN_CONTAINER_HEIGHT_PX, SNAP_MIN_CONTAINER_WIDTH_PX,
};
use crate::layout::{Framing, Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapTarget {
    Left,
    Right,
}

impl SnapTarget {
    /// Percent framing of the container half this target docks to.
    pub fn framing(self) -> Framing {
        match self {
            SnapTarget::Left => Framing::percent(0.0, 0.0, 50.0, 100.0),
            SnapTarget::Right => Framing::percent(50.0, 0.0, 50.0, 100.0),
        }
    }
}

/// Thresholds deciding when a snap is offered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPolicy {
    pub edge_threshold: f64,
    pub min_container: Size,
}

impl Default for SnapPolicy {
    fn default() -> Self {
        Self {
            edge_threshold: SNAP_EDGE_THRESHOLD_PX,
            min_container: Size::new(SNAP_MIN_CONTAINER_WIDTH_PX, SNAP_MIN_CONTAINER_HEIGHT_PX),
        }
    }
}

impl SnapPolicy {
    pub fn target(&self, pointer: Point, container: Rect) -> Option<SnapTarget> {
        if pointer.x <= container.x + self.edge_threshold {
            Some(SnapTarget::Left)
        } else if pointer.x >= container.right() - self.edge_threshold {
            Some(SnapTarget::Right)
        } else {
            None
        }
    }

    /// Framing for `target`, or `None` when the container is too small for
    /// a half to be usable.
    pub fn target_framing(&self, target: Option<SnapTarget>, container: Size) -> Option<Framing> {
        let target = target?;
        if container.width < self.min_container.width
            || container.height < self.min_container.height
        {
            return None;
        }
        Some(target.framing())
    }
}

/// Snap target for a pointer using the default threshold.
pub fn snap_target(pointer: Point, container: Rect) -> Option<SnapTarget> {
    SnapPolicy::default().target(pointer, container)
}

/// Snap framing for a target using the default minimum container size.
pub fn snap_target_framing(target: Option<SnapTarget>, container: Size) -> Option<Framing> {
    SnapPolicy::default().target_framing(target, container)
}

/// The highlight drawn while a snap is pending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPreview {
    pub target: SnapTarget,
    pub framing: Framing,
}

/// Per-drag snap state.
#[derive(Debug, Clone, Default)]
pub struct SnapAssist {
    policy: SnapPolicy,
    preview: Option<SnapPreview>,
}

impl SnapAssist {
    pub fn new(policy: SnapPolicy) -> Self {
        Self {
            policy,
            preview: None,
        }
    }

    pub fn policy(&self) -> SnapPolicy {
        self.policy
    }

    pub fn preview(&self) -> Option<SnapPreview> {
        self.preview
    }

    pub fn begin_drag(&mut self) {
        self.preview = None;
    }

    fn evaluate(&self, pointer: Point, container: Rect) -> Option<SnapPreview> {
        let target = self.policy.target(pointer, container)?;
        let framing = self.policy.target_framing(Some(target), container.size())?;
        Some(SnapPreview { target, framing })
    }

    /// Re-evaluate the pending snap for a pointer sample.
    pub fn drag_move(&mut self, pointer: Point, container: Rect) -> Option<SnapPreview> {
        self.preview = self.evaluate(pointer, container);
        self.preview
    }

    /// Final decision for a drop. The pending state is cleared either way.
    pub fn drop(&mut self, pointer: Point, container: Rect) -> Option<Framing> {
        let result = self.evaluate(pointer, container).map(|preview| preview.framing);
        self.preview = None;
        result
    }

    pub fn cancel(&mut self) {
        self.preview = None;
    }
}
