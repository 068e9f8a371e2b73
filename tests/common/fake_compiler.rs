//! In-process compiler service whose responses can be held back

use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::Semaphore;

use voltpad::compile::{CompileRequest, CompileResult, CompilerService, TransportError};

pub struct FakeCompiler {
    requests: Mutex<Vec<String>>,
    gate: Semaphore,
    reply: CompileResult,
}

impl FakeCompiler {
    /// Answers immediately with `reply`
    pub fn immediate(reply: CompileResult) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            gate: Semaphore::new(Semaphore::MAX_PERMITS),
            reply,
        }
    }

    /// Holds every request until [`FakeCompiler::release`] is called
    pub fn gated(reply: CompileResult) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            gate: Semaphore::new(0),
            reply,
        }
    }

    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompilerService for FakeCompiler {
    async fn compile(&self, request: CompileRequest) -> Result<CompileResult, TransportError> {
        self.requests.lock().unwrap().push(request.code);
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| TransportError::Task(e.to_string()))?;
        Ok(self.reply.clone())
    }
}

pub fn translation(cpp: &str) -> CompileResult {
    CompileResult::Success {
        translated_code: cpp.to_string(),
    }
}
