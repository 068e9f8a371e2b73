//! Key handling for the editor surface

pub mod handler;
pub mod interceptor;
pub mod shortcuts;
pub mod text_editing;

pub use handler::{dispatch_input, DeferredAction, InputContext, InputHandler, InputResult};
pub use interceptor::{is_compile_chord, is_indent_key, KeyboardInterceptor, INDENT};
pub use shortcuts::AppShortcuts;
pub use text_editing::TextEditing;
