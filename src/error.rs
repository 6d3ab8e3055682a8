//! Errors surfaced by the desktop.
//!
//! Window operations never fail; unknown window ids are ignored. What does
//! fail is wiring: asking the desktop about an application it was never told
//! about, or registering the same application twice. Those are bugs in the
//! caller and are reported loudly instead of being papered over.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("application `{0}` is not registered with this desktop")]
    UnregisteredApp(String),
    #[error("application `{0}` is already registered")]
    DuplicateApp(String),
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = DesktopError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_application() {
        let err = DesktopError::UnregisteredApp("notes".into());
        assert_eq!(
            err.to_string(),
            "application `notes` is not registered with this desktop"
        );
        let err = DesktopError::DuplicateApp("notes".into());
        assert_eq!(err.to_string(), "application `notes` is already registered");
    }

    #[test]
    fn io_errors_convert() {
        let err: DesktopError = io::Error::other("boom").into();
        assert!(matches!(err, DesktopError::Io(_)));
    }
}
