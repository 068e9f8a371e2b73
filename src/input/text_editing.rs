//! Default text-entry behavior of the editor surface

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::handler::{InputContext, InputHandler, InputResult};
use crate::buffer::EditorBuffer;

/// Plain typing, deletion and caret movement
pub struct TextEditing<'a> {
    buffer: &'a mut EditorBuffer,
}

impl<'a> TextEditing<'a> {
    pub fn new(buffer: &'a mut EditorBuffer) -> Self {
        Self { buffer }
    }
}

impl InputHandler for TextEditing<'_> {
    fn handle_key_event(&mut self, event: &KeyEvent, _ctx: &mut InputContext) -> InputResult {
        let extend = event.modifiers.contains(KeyModifiers::SHIFT);
        let plain = event.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        if !plain {
            return InputResult::Ignored;
        }

        match event.code {
            KeyCode::Char(c) => self.buffer.insert_char(c),
            KeyCode::Enter => self.buffer.insert_newline(),
            KeyCode::Backspace => self.buffer.backspace(),
            KeyCode::Delete => self.buffer.delete_forward(),
            KeyCode::Left => self.buffer.move_left(extend),
            KeyCode::Right => self.buffer.move_right(extend),
            KeyCode::Up => self.buffer.move_up(extend),
            KeyCode::Down => self.buffer.move_down(extend),
            KeyCode::Home => self.buffer.move_home(extend),
            KeyCode::End => self.buffer.move_end(extend),
            _ => return InputResult::Ignored,
        }
        InputResult::Consumed
    }
}
