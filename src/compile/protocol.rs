//! Compiler service protocol types
//!
//! JSON over HTTP. The request carries the full editor text; the response
//! carries a success flag plus either the translated code or a message:
//!
//! ```text
//! -> {"code": "int x = 1;"}
//! <- {"success": true, "cpp_code": "#include <iostream>..."}
//! <- {"success": false, "error": "Syntax Error: ..."}
//! ```

use serde::{Deserialize, Serialize};

use super::error::TransportError;

/// One compile attempt's request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileRequest {
    pub code: String,
}

impl CompileRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn to_json(&self) -> Result<String, TransportError> {
        serde_json::to_string(self).map_err(|e| TransportError::Encode(e.to_string()))
    }
}

/// Response body as sent by the service
#[derive(Debug, Clone, Deserialize)]
pub struct CompileResponse {
    pub success: bool,
    /// Translated code (success only)
    #[serde(default, alias = "translated_code")]
    pub cpp_code: Option<String>,
    /// Diagnostic message (failure only)
    #[serde(default)]
    pub error: Option<String>,
}

impl CompileResponse {
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
    }

    /// Interpret the payload.
    ///
    /// A success without code or a failure without a message cannot be shown
    /// meaningfully and is reported as malformed.
    pub fn into_result(self) -> Result<CompileResult, TransportError> {
        match (self.success, self.cpp_code, self.error) {
            (true, Some(translated_code), _) => Ok(CompileResult::Success { translated_code }),
            (true, None, _) => Err(TransportError::Malformed(
                "success response without translated code".to_string(),
            )),
            (false, _, Some(message)) => Ok(CompileResult::Failure { message }),
            (false, _, None) => Err(TransportError::Malformed(
                "failure response without an error message".to_string(),
            )),
        }
    }
}

/// Outcome reported by a compiler service that processed the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileResult {
    Success { translated_code: String },
    /// The service ran and rejected the input
    Failure { message: String },
}

impl CompileResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileResult::Success { .. })
    }
}

/// Decode a raw response body straight into a result
pub fn decode_response(body: &str) -> Result<CompileResult, TransportError> {
    CompileResponse::from_json(body)?.into_result()
}
