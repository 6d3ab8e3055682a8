use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use super::Window;
use crate::layout::{FULL_FRAMING, Framing};

/// Authoritative table of mounted windows.
///
/// Holds the stacking order as an explicit list next to an id-keyed map; both
/// always contain the same ids, and the list is kept in ascending z-index
/// order. Every operation is total: unknown ids are ignored rather than
/// reported, because the hosting surface may legitimately race a mutation
/// against an unmount.
#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    order: Vec<String>,
    map: BTreeMap<String, Window>,
    focused: Option<String>,
    // Highest z-index handed out this session.
    last_z: u32,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_z_index(&mut self) -> u32 {
        self.last_z = self.last_z.saturating_add(1);
        self.last_z
    }

    fn insert(&mut self, id: &str) -> &mut Window {
        let z_index = self.next_z_index();
        self.order.push(id.to_owned());
        self.map
            .entry(id.to_owned())
            .or_insert_with(|| Window::new(id.to_owned(), z_index))
    }

    fn top_visible_id(&self) -> Option<String> {
        self.top_window().map(|window| window.id.clone())
    }

    /// Register a window and focus it. Mounting a present id does nothing.
    pub fn mount(&mut self, id: &str) {
        if self.map.contains_key(id) {
            return;
        }
        let z_index = self.insert(id).z_index;
        self.focused = Some(id.to_owned());
        tracing::debug!(window_id = id, z_index, "mounted window");
    }

    /// Remove a window. Focus falls back to the top remaining window.
    pub fn unmount(&mut self, id: &str) {
        if self.map.remove(id).is_none() {
            return;
        }
        self.order.retain(|entry| entry != id);
        if self.focused.as_deref() == Some(id) {
            self.focused = self.top_visible_id();
        }
        tracing::debug!(window_id = id, focused = ?self.focused, "unmounted window");
    }

    /// Bring a window to the front, un-hide it and focus it.
    ///
    /// Z-indices are renumbered densely as `1..=N` in the new order, so they
    /// never collide and never grow without bound.
    pub fn activate_window(&mut self, id: &str) {
        let Some(pos) = self.order.iter().position(|entry| entry == id) else {
            return;
        };
        let entry = self.order.remove(pos);
        self.order.push(entry);
        let mut z_index = 0u32;
        for entry in &self.order {
            z_index = z_index.saturating_add(1);
            if let Some(window) = self.map.get_mut(entry) {
                window.z_index = z_index;
            }
        }
        self.last_z = self.last_z.max(z_index);
        if let Some(window) = self.map.get_mut(id) {
            window.is_hidden = false;
        }
        self.focused = Some(id.to_owned());
        tracing::debug!(window_id = id, "activated window");
    }

    /// Hide a window without touching its z-index.
    pub fn hide_window(&mut self, id: &str) {
        let Some(window) = self.map.get_mut(id) else {
            return;
        };
        window.is_hidden = true;
        if self.focused.as_deref() == Some(id) {
            self.focused = self.top_visible_id();
        }
        tracing::debug!(window_id = id, focused = ?self.focused, "hid window");
    }

    /// Clear the hidden flag. Focus and stacking are left alone; pair with
    /// [`WindowRegistry::activate_window`] to also raise the window.
    pub fn show_window(&mut self, id: &str) {
        if let Some(window) = self.map.get_mut(id) {
            window.is_hidden = false;
        }
    }

    /// Store a framing as given. An entry is created if the window has not
    /// been mounted yet, so framing may land before the mount call.
    pub fn set_framing(&mut self, id: &str, framing: Framing) {
        if !self.map.contains_key(id) {
            self.insert(id);
        }
        if let Some(window) = self.map.get_mut(id) {
            window.framing = Some(framing);
        }
    }

    /// Toggle between the window's own framing and the full container.
    pub fn toggle_fullscreen(&mut self, id: &str) {
        let Some(window) = self.map.get_mut(id) else {
            return;
        };
        let Some(current) = window.framing else {
            return;
        };
        if window.is_fullscreen {
            let restored = window.previous_framing.take().unwrap_or_else(|| {
                // Nothing was saved before entering fullscreen, so there is
                // nothing to go back to but the fullscreen framing itself.
                tracing::warn!(window_id = id, "no framing saved before fullscreen; keeping current");
                current
            });
            window.framing = Some(restored);
            window.is_fullscreen = false;
        } else {
            window.previous_framing = Some(current);
            window.framing = Some(FULL_FRAMING);
            window.is_fullscreen = true;
        }
        tracing::debug!(window_id = id, fullscreen = window.is_fullscreen, "toggled fullscreen");
    }

    /// Mount `id` for the lifetime of the returned lease.
    ///
    /// A window that was already mounted is borrowed, not acquired: dropping
    /// the lease leaves it in place.
    pub fn lease(&mut self, id: &str) -> WindowLease<'_> {
        let owned = !self.contains(id);
        self.mount(id);
        WindowLease {
            registry: self,
            id: id.to_owned(),
            owned,
        }
    }

    pub fn window_data(&self, id: &str) -> Option<&Window> {
        self.map.get(id)
    }

    pub fn framing(&self, id: &str) -> Option<Framing> {
        self.map.get(id).and_then(|window| window.framing)
    }

    pub fn is_fullscreen(&self, id: &str) -> bool {
        self.map.get(id).is_some_and(|window| window.is_fullscreen)
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.map.get(id).is_some_and(|window| window.is_hidden)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// The visible window with the greatest z-index.
    pub fn top_window(&self) -> Option<&Window> {
        self.map
            .values()
            .filter(|window| !window.is_hidden)
            .max_by_key(|window| window.z_index)
    }

    /// Windows in stacking order, bottom first.
    pub fn windows(&self) -> impl Iterator<Item = &Window> + '_ {
        self.order.iter().filter_map(|id| self.map.get(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check the structural invariants: list and map hold the same ids, the
    /// list is in ascending z-index order without duplicates, and focus
    /// points at a present window.
    pub fn is_consistent(&self) -> bool {
        let same_ids = self.order.len() == self.map.len()
            && self.order.iter().all(|id| self.map.contains_key(id));
        let ascending = self
            .windows()
            .zip(self.windows().skip(1))
            .all(|(a, b)| a.z_index < b.z_index);
        let focus_valid = self
            .focused
            .as_deref()
            .is_none_or(|id| self.map.contains_key(id));
        same_ids && ascending && focus_valid
    }
}

/// Scoped ownership of a mounted window.
///
/// A hosting surface takes a lease when it starts showing a window; the
/// window it mounted is unmounted when the lease is dropped, on every exit
/// path.
pub struct WindowLease<'a> {
    registry: &'a mut WindowRegistry,
    id: String,
    owned: bool,
}

impl WindowLease<'_> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn window(&self) -> Option<&Window> {
        self.registry.window_data(&self.id)
    }

    /// Whether this lease mounted the window and will unmount it on drop.
    pub fn owns_window(&self) -> bool {
        self.owned
    }
}

impl Deref for WindowLease<'_> {
    type Target = WindowRegistry;

    fn deref(&self) -> &Self::Target {
        self.registry
    }
}

impl DerefMut for WindowLease<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.registry
    }
}

impl Drop for WindowLease<'_> {
    fn drop(&mut self) {
        if self.owned {
            self.registry.unmount(&self.id);
        }
    }
}
