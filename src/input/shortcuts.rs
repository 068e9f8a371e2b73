//! Application-level shortcuts, checked before any editing layer

use crossterm::event::{KeyCode, KeyEvent};

use super::handler::{
    is_key, is_key_with_alt, is_key_with_ctrl, DeferredAction, InputContext, InputHandler,
    InputResult,
};
use crate::catalog::ExampleCatalog;

/// Quit, trigger button and example selection keys
pub struct AppShortcuts<'a> {
    catalog: &'a ExampleCatalog,
}

impl<'a> AppShortcuts<'a> {
    pub fn new(catalog: &'a ExampleCatalog) -> Self {
        Self { catalog }
    }
}

impl InputHandler for AppShortcuts<'_> {
    fn handle_key_event(&mut self, event: &KeyEvent, ctx: &mut InputContext) -> InputResult {
        if is_key_with_ctrl(event, 'q') {
            ctx.defer(DeferredAction::Quit);
            return InputResult::Consumed;
        }
        if is_key(event, KeyCode::F(5)) {
            ctx.defer(DeferredAction::PressTrigger);
            return InputResult::Consumed;
        }
        if is_key(event, KeyCode::F(2)) {
            ctx.defer(DeferredAction::NextExample);
            return InputResult::Consumed;
        }

        for digit in '1'..='9' {
            if is_key_with_alt(event, KeyCode::Char(digit)) {
                let index = digit as usize - '1' as usize;
                if let Some(name) = self.catalog.name_at(index) {
                    ctx.defer(DeferredAction::LoadExample(name.to_string()));
                }
                // Out-of-range digits are swallowed so they never reach the editor
                return InputResult::Consumed;
            }
        }

        InputResult::Ignored
    }
}
