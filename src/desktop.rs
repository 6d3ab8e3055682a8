//! The desktop: one owned state object tying the window registry, the
//! application catalog, container measurements, snap assist and pointer
//! gestures together.
//!
//! Hosting surfaces hold a `&mut Desktop` and funnel every change through
//! its methods; nothing else keeps window state.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::apps::{AppCatalog, AppDescriptor};
use crate::config::DesktopConfig;
use crate::error::Result;
use crate::layout::{
    CascadeOptions, Framing, OriginSlot, Point, Rect, Size, cascading_window_framing,
    to_percent_framing, to_pixel_framing,
};
use crate::snap::{SnapAssist, SnapPreview};
use crate::state::SurfaceState;
use crate::window::{MoveGesture, ResizeEdge, ResizeGesture, WindowRegistry};

#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Move(MoveGesture),
    Resize(ResizeGesture),
}

impl Gesture {
    pub fn id(&self) -> &str {
        match self {
            Gesture::Move(g) => &g.id,
            Gesture::Resize(g) => &g.id,
        }
    }

    fn framing_at(&self, pointer: Point) -> Framing {
        match self {
            Gesture::Move(g) => g.framing_at(pointer),
            Gesture::Resize(g) => g.framing_at(pointer),
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveGesture {
    gesture: Gesture,
    // Latest uncommitted pixel framing.
    proposal: Framing,
}

pub struct Desktop {
    config: DesktopConfig,
    registry: WindowRegistry,
    apps: AppCatalog,
    surface: SurfaceState,
    snap: SnapAssist,
    cascade_origin: OriginSlot,
    rng: SmallRng,
    gesture: Option<ActiveGesture>,
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl Desktop {
    pub fn new(config: DesktopConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            config,
            registry: WindowRegistry::new(),
            apps: AppCatalog::new(),
            surface: SurfaceState::new(),
            snap: SnapAssist::new(config.snap),
            cascade_origin: OriginSlot::new(),
            rng,
            gesture: None,
        }
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WindowRegistry {
        &mut self.registry
    }

    pub fn apps(&self) -> &AppCatalog {
        &self.apps
    }

    pub fn register_app(&mut self, app: AppDescriptor) -> Result<()> {
        self.apps.register(app)
    }

    pub fn container_size(&self) -> Option<Size> {
        self.surface.size()
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container_size()
            .map(|size| Rect::new(0.0, 0.0, size.width, size.height))
    }

    /// Push a container measurement from the host. Returns `true` when the
    /// size changed. Windows mounted before the first measurement are placed
    /// as soon as a size is known.
    pub fn set_container_size(&mut self, width: f64, height: f64) -> bool {
        if !self.surface.set_size(width, height) {
            return false;
        }
        if let Some(size) = self.surface.take_size_change() {
            tracing::debug!(width = size.width, height = size.height, "container resized");
            self.place_unplaced(size);
        }
        true
    }

    fn place_unplaced(&mut self, bounds: Size) {
        let pending: Vec<String> = self
            .registry
            .windows()
            .filter(|window| window.framing().is_none())
            .map(|window| window.id().to_owned())
            .collect();
        for id in pending {
            let framing = self.placement_for(&id, bounds);
            self.registry.set_framing(&id, framing);
        }
    }

    /// Cascaded framing for a new window, anchored on the current top
    /// placed window other than `id`.
    fn placement_for(&mut self, id: &str, bounds: Size) -> Framing {
        let top_framing = self
            .registry
            .windows()
            .filter(|window| window.id() != id && !window.is_hidden())
            .filter_map(|window| window.framing())
            .last();
        let mut options = CascadeOptions::new(bounds);
        options.size = self.apps.get(id).and_then(|app| app.default_size);
        options.top_framing = top_framing;
        options.step = self.config.cascade_step;
        options.min_size = self.config.min_window_size;
        options.origin = self.config.origin;
        cascading_window_framing(&options, &mut self.cascade_origin, &mut self.rng)
    }

    pub fn is_running(&self, app_id: &str) -> Result<bool> {
        self.apps.require(app_id)?;
        Ok(self.registry.contains(app_id))
    }

    /// Open the application's window, or bring the existing one forward.
    pub fn launch(&mut self, app_id: &str) -> Result<()> {
        self.apps.require(app_id)?;
        if self.registry.contains(app_id) {
            self.registry.activate_window(app_id);
            return Ok(());
        }
        self.registry.mount(app_id);
        if let Some(bounds) = self.container_size() {
            let framing = self.placement_for(app_id, bounds);
            self.registry.set_framing(app_id, framing);
        }
        tracing::debug!(app_id, "launched application");
        Ok(())
    }

    pub fn close(&mut self, app_id: &str) -> Result<()> {
        self.apps.require(app_id)?;
        self.drop_gesture_for(app_id);
        self.registry.unmount(app_id);
        Ok(())
    }

    pub fn activate(&mut self, id: &str) {
        self.registry.activate_window(id);
    }

    pub fn hide(&mut self, id: &str) {
        self.drop_gesture_for(id);
        self.registry.hide_window(id);
    }

    pub fn show(&mut self, id: &str) {
        self.registry.show_window(id);
    }

    pub fn toggle_fullscreen(&mut self, id: &str) {
        self.drop_gesture_for(id);
        self.registry.toggle_fullscreen(id);
    }

    /// Raise the bottom-most visible window, rotating through the stack.
    pub fn focus_next(&mut self) {
        let next = self
            .registry
            .windows()
            .find(|window| !window.is_hidden())
            .map(|window| window.id().to_owned());
        if let Some(id) = next {
            self.registry.activate_window(&id);
        }
    }

    fn drop_gesture_for(&mut self, id: &str) {
        if self.gesture_target() == Some(id) {
            self.cancel_gesture();
        }
    }

    // Pixel framing a gesture on `id` starts from. Hidden, fullscreen and
    // unplaced windows cannot be dragged.
    fn gesture_start(&self, id: &str) -> Option<Framing> {
        let bounds = self.container_size()?;
        let window = self.registry.window_data(id)?;
        if window.is_hidden() || window.is_fullscreen() {
            return None;
        }
        Some(to_pixel_framing(window.framing()?, bounds))
    }

    /// Start dragging a window by its title bar. Returns `false` when the
    /// window cannot be moved.
    pub fn begin_move(&mut self, id: &str, pointer: Point) -> bool {
        let Some(start) = self.gesture_start(id) else {
            return false;
        };
        self.registry.activate_window(id);
        self.snap.begin_drag();
        self.gesture = Some(ActiveGesture {
            gesture: Gesture::Move(MoveGesture::new(id, pointer, start)),
            proposal: start,
        });
        true
    }

    /// Start resizing a window from `edge`.
    pub fn begin_resize(&mut self, id: &str, edge: ResizeEdge, pointer: Point) -> bool {
        let Some(start) = self.gesture_start(id) else {
            return false;
        };
        self.registry.activate_window(id);
        self.snap.cancel();
        self.gesture = Some(ActiveGesture {
            gesture: Gesture::Resize(ResizeGesture::new(
                id,
                edge,
                pointer,
                start,
                self.config.min_window_size,
            )),
            proposal: start,
        });
        true
    }

    /// Feed a pointer sample to the running gesture. Returns the live pixel
    /// framing proposal; nothing is committed.
    pub fn pointer_moved(&mut self, pointer: Point) -> Option<Framing> {
        let container = self.container_rect()?;
        let active = self.gesture.as_mut()?;
        active.proposal = active.gesture.framing_at(pointer);
        if let Gesture::Move(_) = active.gesture {
            self.snap.drag_move(pointer, container);
        }
        Some(active.proposal)
    }

    /// Finish the running gesture and commit its framing once. A pending
    /// snap overrides the natural drop position.
    pub fn end_gesture(&mut self, pointer: Point) -> Option<Framing> {
        let active = self.gesture.take()?;
        let Some(container) = self.container_rect() else {
            self.snap.cancel();
            return None;
        };
        let natural = active.gesture.framing_at(pointer);
        let snapped = match active.gesture {
            Gesture::Move(_) => self.snap.drop(pointer, container),
            Gesture::Resize(_) => None,
        };
        self.snap.cancel();

        let id = active.gesture.id();
        if !self.registry.contains(id) {
            return None;
        }
        let framing = snapped.unwrap_or_else(|| to_percent_framing(natural, container.size()));
        self.registry.set_framing(id, framing);
        tracing::debug!(window_id = id, snapped = snapped.is_some(), ?framing, "committed gesture");
        Some(framing)
    }

    /// Abandon the running gesture; the stored framing is untouched.
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
        self.snap.cancel();
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref().map(|active| &active.gesture)
    }

    pub fn gesture_target(&self) -> Option<&str> {
        self.gesture().map(Gesture::id)
    }

    pub fn snap_preview(&self) -> Option<SnapPreview> {
        self.snap.preview()
    }

    /// Pixel rectangle to render `id` at; a live gesture proposal wins over
    /// the stored framing.
    pub fn pixel_framing(&self, id: &str) -> Option<Framing> {
        if let Some(active) = &self.gesture
            && active.gesture.id() == id
        {
            return Some(active.proposal);
        }
        let bounds = self.container_size()?;
        Some(to_pixel_framing(self.registry.framing(id)?, bounds))
    }

    /// Topmost visible window under the pointer.
    pub fn window_at(&self, pointer: Point) -> Option<&str> {
        let windows: Vec<_> = self.registry.windows().collect();
        windows.into_iter().rev().find_map(|window| {
            if window.is_hidden() {
                return None;
            }
            let rect = Rect::from(self.pixel_framing(window.id())?);
            rect.contains(pointer).then_some(window.id())
        })
    }
}
