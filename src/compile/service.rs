//! Compiler service clients
//!
//! The orchestrator only sees the [`CompilerService`] trait. The HTTP
//! implementation talks to the VoltScript compile endpoint with `ureq`; since
//! `ureq` blocks, each request runs on tokio's blocking pool.

use std::io::Read;
use std::sync::Arc;

use async_trait::async_trait;

use super::error::TransportError;
use super::protocol::{decode_response, CompileRequest, CompileResult};

/// Default compile endpoint of a locally running compiler service
pub const DEFAULT_COMPILER_URL: &str = "http://127.0.0.1:5000/compile";

/// Something that turns source text into a [`CompileResult`]
#[async_trait]
pub trait CompilerService: Send + Sync {
    async fn compile(&self, request: CompileRequest) -> Result<CompileResult, TransportError>;
}

#[async_trait]
impl<T: CompilerService + ?Sized> CompilerService for Arc<T> {
    async fn compile(&self, request: CompileRequest) -> Result<CompileResult, TransportError> {
        (**self).compile(request).await
    }
}

/// Compiler service reached over HTTP
#[derive(Clone)]
pub struct HttpCompiler {
    agent: ureq::Agent,
    url: String,
}

impl HttpCompiler {
    /// Create a client for `url`. No request timeout is configured; the
    /// agent's transport defaults apply.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one request and wait for the complete response (blocking)
    pub fn compile_blocking(&self, request: &CompileRequest) -> Result<CompileResult, TransportError> {
        let body = request.to_json()?;
        tracing::debug!("POST {} ({} bytes)", self.url, body.len());

        let response = self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_string(&body);

        match response {
            Ok(response) => {
                let text = read_body(response).map_err(|e| TransportError::Decode(e.to_string()))?;
                decode_response(&text)
            }
            Err(ureq::Error::Status(code, response)) => {
                // Error pages only count as compiler output if they carry a payload
                let text = read_body(response).unwrap_or_default();
                decode_response(&text).map_err(|e| {
                    tracing::debug!("Status {} without compiler payload: {}", code, e);
                    TransportError::Status(code)
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(TransportError::Request(transport.to_string()))
            }
        }
    }
}

/// Read the whole response body. Unlike `Response::into_string` there is no
/// size cap, so large translations arrive intact.
fn read_body(response: ureq::Response) -> std::io::Result<String> {
    let mut text = String::new();
    response.into_reader().read_to_string(&mut text)?;
    Ok(text)
}

#[async_trait]
impl CompilerService for HttpCompiler {
    async fn compile(&self, request: CompileRequest) -> Result<CompileResult, TransportError> {
        let client = self.clone();
        tokio::task::spawn_blocking(move || client.compile_blocking(&request))
            .await
            .map_err(|e| TransportError::Task(e.to_string()))?
    }
}
