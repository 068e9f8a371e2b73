//! Process-level services: logging and terminal mode management

pub mod terminal_modes;
pub mod tracing_setup;
