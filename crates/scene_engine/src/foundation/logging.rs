//! Logging utilities and the warning sink used by the scene layer
//!
//! Engine diagnostics go through the `log` facade. Recoverable misuse of the
//! scene registry (lookup misses, name collisions) is reported through a
//! [`WarningLog`] together with the source file and line that noticed it.

use std::cell::RefCell;
use std::rc::Rc;

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Destination for scene warnings
pub trait WarningLog {
    /// Record a warning raised at `source:line`
    fn record(&self, message: &str, source: &str, line: u32);
}

/// Forwards warnings to `log::warn!`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWarnings;

impl WarningLog for LogWarnings {
    fn record(&self, message: &str, source: &str, line: u32) {
        log::warn!("{message} ({source}:{line})");
    }
}

/// A warning captured by [`WarningBuffer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWarning {
    /// Rendered warning text
    pub message: String,
    /// Source file that raised it
    pub source: String,
    /// Line within `source`
    pub line: u32,
}

/// In-memory warning log
///
/// Clones share the same buffer, so one handle can be given to the registry
/// while another is kept for inspection (debug overlays, tests).
#[derive(Debug, Default, Clone)]
pub struct WarningBuffer {
    entries: Rc<RefCell<Vec<RecordedWarning>>>,
}

impl WarningBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of warnings recorded so far
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Copy of every recorded warning, oldest first
    pub fn entries(&self) -> Vec<RecordedWarning> {
        self.entries.borrow().clone()
    }

    /// Drain the buffer
    pub fn take(&self) -> Vec<RecordedWarning> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }
}

impl WarningLog for WarningBuffer {
    fn record(&self, message: &str, source: &str, line: u32) {
        log::warn!("{message} ({source}:{line})");
        self.entries.borrow_mut().push(RecordedWarning {
            message: message.to_string(),
            source: source.to_string(),
            line,
        });
    }
}

/// Record a warning on a [`WarningLog`], tagging it with the caller's file and line
#[macro_export]
macro_rules! record_warning {
    ($log:expr, $warning:expr) => {
        $log.record(&$warning.to_string(), file!(), line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_clones_share_entries() {
        let buffer = WarningBuffer::new();
        let handle = buffer.clone();

        handle.record("first", "scene.rs", 10);
        record_warning!(handle, "second");

        assert_eq!(buffer.len(), 2);
        let entries = buffer.take();
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[0].line, 10);
        assert_eq!(entries[1].message, "second");
        assert!(entries[1].source.ends_with("logging.rs"));
        assert!(buffer.is_empty());
    }
}
