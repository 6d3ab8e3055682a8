use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

/// Writer handed out per event. The terminal belongs to the desktop while it
/// runs, so output goes to the log file or nowhere.
pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(File),
    Sink(io::Sink),
}

impl DelegatingWriter {
    fn new(file: Option<&File>) -> Self {
        let inner = match file.map(File::try_clone) {
            Some(Ok(file)) => DelegatingInner::File(file),
            _ => DelegatingInner::Sink(io::sink()),
        };
        DelegatingWriter { inner }
    }
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(f) => f.write(buf),
            DelegatingInner::Sink(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(f) => f.flush(),
            DelegatingInner::Sink(s) => s.flush(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SubscriberMakeWriter {
    file: Option<Arc<File>>,
}

impl SubscriberMakeWriter {
    pub fn to_file(file: File) -> Self {
        Self {
            file: Some(Arc::new(file)),
        }
    }

    pub fn sink() -> Self {
        Self::default()
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter::new(self.file.as_deref())
    }
}

/// Install the global subscriber. Log lines are appended to `log_file` when
/// given and discarded otherwise. Later calls leave the first subscriber in
/// place.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let writer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            SubscriberMakeWriter::to_file(file)
        }
        None => SubscriberMakeWriter::sink(),
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn sink_writer_swallows_output() {
        let make = SubscriberMakeWriter::sink();
        let mut writer = make.make_writer();
        assert_eq!(writer.write(b"dropped").unwrap(), 7);
        writer.flush().unwrap();
    }
}
