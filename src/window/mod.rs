//! Window instances, the registry that owns them, and pointer gestures.

pub mod interaction;
mod registry;

pub use interaction::{MoveGesture, ResizeEdge, ResizeGesture, resize_edge_at};
pub use registry::{WindowLease, WindowRegistry};

use crate::layout::Framing;

/// One mounted window.
///
/// The id is shared with the owning application, so there is at most one
/// window per application. Instances are only ever mutated through
/// [`WindowRegistry`] operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    id: String,
    z_index: u32,
    framing: Option<Framing>,
    is_fullscreen: bool,
    is_hidden: bool,
    previous_framing: Option<Framing>,
}

impl Window {
    fn new(id: String, z_index: u32) -> Self {
        Self {
            id,
            z_index,
            framing: None,
            is_fullscreen: false,
            is_hidden: false,
            previous_framing: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    /// Percent framing; `None` until the window has been placed.
    pub fn framing(&self) -> Option<Framing> {
        self.framing
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Framing saved when entering fullscreen.
    pub fn previous_framing(&self) -> Option<Framing> {
        self.previous_framing
    }
}
