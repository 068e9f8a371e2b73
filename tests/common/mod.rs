//! Shared test utilities

pub mod fake_compiler;
pub mod harness;
pub mod mock_compiler;
