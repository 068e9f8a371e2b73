//! Compile orchestration
//!
//! One `compile()` call is one request/response cycle:
//!
//! 1. read the editor text as-is (no trimming or validation),
//! 2. mark the trigger busy and hide any stale error,
//! 3. send the text to the compiler service once (no timeout, no retry),
//! 4. route the translation, the rejection message or a transport failure to
//!    the presentation sink,
//! 5. restore the trigger through the busy guard on every exit path.
//!
//! Overlapping calls are allowed (Ctrl+Enter works even while busy). Each call
//! takes a generation number; only the most recently dispatched request gets
//! to update the presentation, and older responses are dropped as
//! [`CompileOutcome::Superseded`].

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use super::error::TransportError;
use super::guard::BusyGuard;
use super::protocol::{CompileRequest, CompileResult};
use super::service::CompilerService;
use crate::catalog::ExampleCatalog;
use crate::view::surface::{EditorSurface, OutputPanes, PresentationSink, TriggerControl};

/// Shown in the error surface when the service could not be reached or understood
pub const TRANSPORT_ERROR_MESSAGE: &str = "Error: Failed to connect to compiler";

/// Output placeholder after the compiler rejected the input
pub const REJECTED_PLACEHOLDER: &str = "// Compilation failed. See error above.";

/// Output placeholder after a transport failure
pub const TRANSPORT_PLACEHOLDER: &str = "// Compilation failed";

/// What a single `compile()` call ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileOutcome {
    /// Translation shown in the output surface
    Succeeded,
    /// Compiler message shown in the error surface
    Rejected,
    /// Generic transport error shown
    TransportFailed,
    /// A newer compile was dispatched before this one resolved; nothing shown
    Superseded,
}

/// UI state derived from the trigger and presentation surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileUiState {
    Idle,
    Compiling,
    Succeeded,
    Failed,
}

impl CompileUiState {
    pub fn derive(trigger_enabled: bool, panes: &OutputPanes) -> Self {
        if !trigger_enabled {
            CompileUiState::Compiling
        } else if panes.error_visible {
            CompileUiState::Failed
        } else if !panes.output.is_empty() {
            CompileUiState::Succeeded
        } else {
            CompileUiState::Idle
        }
    }

    /// Everything except `Compiling` accepts a new compile from the trigger
    pub fn is_idle(self) -> bool {
        self != CompileUiState::Compiling
    }
}

/// The surfaces an orchestrator drives
#[derive(Clone)]
pub struct Surfaces {
    pub editor: Arc<dyn EditorSurface>,
    pub sink: Arc<dyn PresentationSink>,
    pub trigger: Arc<dyn TriggerControl>,
}

/// Owns the compile request lifecycle
pub struct CompileOrchestrator {
    service: Arc<dyn CompilerService>,
    surfaces: Surfaces,
    catalog: Arc<ExampleCatalog>,
    /// Generation of the most recently dispatched compile
    generation: AtomicU64,
    /// Compiles currently holding a busy guard
    in_flight: Arc<AtomicUsize>,
}

impl CompileOrchestrator {
    pub fn new(
        service: Arc<dyn CompilerService>,
        surfaces: Surfaces,
        catalog: Arc<ExampleCatalog>,
    ) -> Self {
        Self {
            service,
            surfaces,
            catalog,
            generation: AtomicU64::new(0),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn catalog(&self) -> &ExampleCatalog {
        &self.catalog
    }

    /// Whether any compile is outstanding
    pub fn is_compiling(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Compile the current editor text and present the result.
    pub async fn compile(&self) -> CompileOutcome {
        let code = self.surfaces.editor.text();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let _busy = BusyGuard::acquire(self.surfaces.trigger.clone(), self.in_flight.clone());
        self.surfaces.sink.hide_error();

        tracing::info!("Compile #{} dispatched ({} bytes)", generation, code.len());
        let response = self.service.compile(CompileRequest::new(code)).await;

        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            tracing::debug!(
                "Compile #{} resolved after #{} was dispatched, dropping result",
                generation,
                latest
            );
            return CompileOutcome::Superseded;
        }

        let outcome = self.present(response);
        tracing::info!("Compile #{} finished: {:?}", generation, outcome);
        outcome
    }

    fn present(&self, response: Result<CompileResult, TransportError>) -> CompileOutcome {
        let sink = &self.surfaces.sink;
        match response {
            Ok(CompileResult::Success { translated_code }) => {
                sink.show_output(&translated_code);
                sink.hide_error();
                CompileOutcome::Succeeded
            }
            Ok(CompileResult::Failure { message }) => {
                sink.show_error(&message);
                sink.show_output(REJECTED_PLACEHOLDER);
                CompileOutcome::Rejected
            }
            Err(e) => {
                tracing::warn!("Compile request failed: {}", e);
                sink.show_error(TRANSPORT_ERROR_MESSAGE);
                sink.show_output(TRANSPORT_PLACEHOLDER);
                CompileOutcome::TransportFailed
            }
        }
    }

    /// Replace the editor text with a catalog example.
    ///
    /// Unknown names leave the editor untouched and return `false`.
    pub fn select_example(&self, name: &str) -> bool {
        match self.catalog.lookup(name) {
            Some(body) => {
                tracing::info!("Loading example '{}'", name);
                self.surfaces.editor.set_text(body);
                true
            }
            None => {
                tracing::debug!("Ignoring unknown example '{}'", name);
                false
            }
        }
    }

    /// Load an example and compile it. `None` (and no compile) for unknown names.
    pub async fn load_example(&self, name: &str) -> Option<CompileOutcome> {
        if !self.select_example(name) {
            return None;
        }
        Some(self.compile().await)
    }
}
