//! Code-editing affordances layered on top of plain text entry
//!
//! A bare text surface has no notion of an indent unit or of compiling, so
//! two chords are intercepted before default editing sees them:
//!
//! - `Tab` (with any modifiers, including Shift+Tab) replaces the selection
//!   with [`INDENT`] and puts the caret after it.
//! - `Ctrl+Enter` (or `Super`/`Meta`+`Enter`) requests a compile and never
//!   inserts a newline.
//!
//! Every other key is ignored here and falls through.

use crossterm::event::{KeyCode, KeyEvent};

use super::handler::{
    has_primary_modifier, DeferredAction, InputContext, InputHandler, InputResult,
};
use crate::buffer::EditorBuffer;

/// Inserted by the Tab key
pub const INDENT: &str = "    ";

/// Intercepts indentation and the compile chord on an editor buffer
pub struct KeyboardInterceptor<'a> {
    buffer: &'a mut EditorBuffer,
}

impl<'a> KeyboardInterceptor<'a> {
    pub fn new(buffer: &'a mut EditorBuffer) -> Self {
        Self { buffer }
    }

    fn indent(&mut self) {
        let (start, _) = self.buffer.selection();
        let caret = self.buffer.replace_selection(INDENT);
        tracing::trace!("Indented at {} (caret now {})", start, caret);
    }
}

/// Whether `event` is the indentation key, whatever modifiers it carries
pub fn is_indent_key(event: &KeyEvent) -> bool {
    matches!(event.code, KeyCode::Tab | KeyCode::BackTab)
}

/// Whether `event` is the compile chord
pub fn is_compile_chord(event: &KeyEvent) -> bool {
    event.code == KeyCode::Enter && has_primary_modifier(event)
}

impl InputHandler for KeyboardInterceptor<'_> {
    fn handle_key_event(&mut self, event: &KeyEvent, ctx: &mut InputContext) -> InputResult {
        if is_indent_key(event) {
            self.indent();
            return InputResult::Consumed;
        }

        if is_compile_chord(event) {
            tracing::debug!("Compile chord pressed");
            ctx.defer(DeferredAction::Compile);
            return InputResult::Consumed;
        }

        InputResult::Ignored
    }
}
