//! The surfaces the compile orchestrator reads from and writes to
//!
//! The orchestrator never reaches for global UI state. It is handed an
//! [`EditorSurface`], a [`PresentationSink`] and a [`TriggerControl`] at
//! construction, so it runs the same against the terminal UI, the headless
//! one-shot compiler or a test double.
//!
//! All methods take `&self`: implementations own their interior mutability.
//! The terminal UI keeps each surface in an `Arc<Mutex<_>>` and implements the
//! traits on the `Mutex` itself, locking only for the duration of one call.

use std::sync::{Mutex, MutexGuard};

use crate::buffer::EditorBuffer;

/// Where source text is read from and example text is written to
pub trait EditorSurface: Send + Sync {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// Output and error display
pub trait PresentationSink: Send + Sync {
    fn show_output(&self, text: &str);
    /// Set the error text and make the error surface visible
    fn show_error(&self, text: &str);
    fn hide_error(&self);
}

/// The control that starts a compile
pub trait TriggerControl: Send + Sync {
    fn set_enabled(&self, enabled: bool);
    fn set_label(&self, label: &str);
}

/// Lock a surface mutex, recovering the data if a previous holder panicked
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl EditorSurface for Mutex<EditorBuffer> {
    fn text(&self) -> String {
        lock(self).text()
    }

    fn set_text(&self, text: &str) {
        lock(self).set_text(text);
    }
}

/// What the output and error areas currently show
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPanes {
    pub output: String,
    pub error: String,
    pub error_visible: bool,
}

impl OutputPanes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error text if the error surface is visible
    pub fn visible_error(&self) -> Option<&str> {
        self.error_visible.then_some(self.error.as_str())
    }
}

impl PresentationSink for Mutex<OutputPanes> {
    fn show_output(&self, text: &str) {
        let mut panes = lock(self);
        panes.output.clear();
        panes.output.push_str(text);
    }

    fn show_error(&self, text: &str) {
        let mut panes = lock(self);
        panes.error.clear();
        panes.error.push_str(text);
        panes.error_visible = true;
    }

    fn hide_error(&self) {
        lock(self).error_visible = false;
    }
}
