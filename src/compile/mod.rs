//! Compile request lifecycle: wire protocol, compiler service and orchestration

pub mod error;
pub mod guard;
pub mod orchestrator;
pub mod protocol;
pub mod service;

pub use error::TransportError;
pub use guard::BusyGuard;
pub use orchestrator::{
    CompileOrchestrator, CompileOutcome, CompileUiState, Surfaces, REJECTED_PLACEHOLDER,
    TRANSPORT_ERROR_MESSAGE, TRANSPORT_PLACEHOLDER,
};
pub use protocol::{decode_response, CompileRequest, CompileResponse, CompileResult};
pub use service::{CompilerService, HttpCompiler, DEFAULT_COMPILER_URL};
