//! Window lifecycle and geometry engine for a simulated desktop.
//!
//! The core ([`layout`], [`window`], [`snap`], [`apps`], [`desktop`]) is pure
//! state and arithmetic. The remaining modules host it in a terminal.

pub mod apps;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod layout;
pub mod runner;
pub mod snap;
pub mod state;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use apps::{AppCatalog, AppDescriptor};
pub use config::DesktopConfig;
pub use desktop::{Desktop, Gesture};
pub use error::{DesktopError, Result};
pub use layout::{Framing, Point, Rect, Size, Unit};
pub use snap::{SnapAssist, SnapPolicy, SnapPreview, SnapTarget};
pub use window::{Window, WindowLease, WindowRegistry};
