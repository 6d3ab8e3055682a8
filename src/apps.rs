//! Applications known to the desktop.
//!
//! An application's id doubles as its window id, so launching an application
//! twice focuses its existing window instead of opening a second one.

use crate::error::{DesktopError, Result};
use crate::layout::Size;

#[derive(Debug, Clone, PartialEq)]
pub struct AppDescriptor {
    pub id: String,
    pub title: String,
    /// Preferred percent size of the window on first launch.
    pub default_size: Option<Size>,
}

impl AppDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            default_size: None,
        }
    }

    pub fn with_default_size(mut self, size: Size) -> Self {
        self.default_size = Some(size);
        self
    }
}

/// Registration-ordered set of applications.
#[derive(Debug, Clone, Default)]
pub struct AppCatalog {
    apps: Vec<AppDescriptor>,
}

impl AppCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, app: AppDescriptor) -> Result<()> {
        if self.get(&app.id).is_some() {
            return Err(DesktopError::DuplicateApp(app.id));
        }
        tracing::debug!(app_id = %app.id, "registered application");
        self.apps.push(app);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Like [`AppCatalog::get`], but an unknown id is a wiring error.
    pub fn require(&self, id: &str) -> Result<&AppDescriptor> {
        self.get(id)
            .ok_or_else(|| DesktopError::UnregisteredApp(id.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> + '_ {
        self.apps.iter()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
