// voltpad library - exposes all core modules for the binaries and tests

pub mod app;
pub mod buffer;
pub mod catalog;
pub mod compile;
pub mod config;
pub mod headless;
pub mod input;
pub mod services;
pub mod view;

// Re-export commonly used types
pub use app::App;
pub use catalog::ExampleCatalog;
pub use compile::{CompileOrchestrator, CompileOutcome};
