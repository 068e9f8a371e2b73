//! Layered input handling
//!
//! Key events flow through a stack of handlers. Each handler either consumes
//! the event (stopping propagation) or ignores it so the next layer can try:
//!
//! 1. **App shortcuts**: quit, trigger button, example selection.
//! 2. **Keyboard interceptor**: Tab indentation and the compile chord.
//! 3. **Text editing**: the default behavior of the editor surface.
//!
//! Handlers never call back into the app directly. Anything that needs more
//! than the handler's own state is pushed into the [`InputContext`] as a
//! [`DeferredAction`] and executed once dispatch has finished.
//!
//! ## Example
//!
//! ```ignore
//! impl InputHandler for MyLayer {
//!     fn handle_key_event(&mut self, event: &KeyEvent, ctx: &mut InputContext) -> InputResult {
//!         match event.code {
//!             KeyCode::F(5) => { ctx.defer(DeferredAction::PressTrigger); InputResult::Consumed }
//!             _ => InputResult::Ignored // let the next layer handle it
//!         }
//!     }
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// The input was handled - stop propagation.
    Consumed,
    /// The input was not handled - try the next layer.
    Ignored,
}

impl InputResult {
    /// Returns true if the input was consumed.
    pub fn is_consumed(self) -> bool {
        self == InputResult::Consumed
    }

    /// Combines two results - consumed if either is consumed.
    pub fn or(self, other: InputResult) -> InputResult {
        if self == InputResult::Consumed || other == InputResult::Consumed {
            InputResult::Consumed
        } else {
            InputResult::Ignored
        }
    }
}

/// Context passed to input handlers, collecting work for after dispatch.
#[derive(Debug, Default)]
pub struct InputContext {
    /// Actions to execute after input handling
    pub deferred_actions: Vec<DeferredAction>,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, action: DeferredAction) {
        self.deferred_actions.push(action);
    }

    /// Take the queued actions, leaving the context empty
    pub fn take_actions(&mut self) -> Vec<DeferredAction> {
        std::mem::take(&mut self.deferred_actions)
    }
}

/// Actions that need to be executed after input handling completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    /// Start a compile regardless of the trigger button's state
    Compile,
    /// Activate the trigger button (a no-op while it is disabled)
    PressTrigger,
    /// Replace the editor text with a named example and compile it
    LoadExample(String),
    /// Load the example after the current one
    NextExample,
    Quit,
}

/// Trait for layers that can handle key events.
pub trait InputHandler {
    /// Handle a key event. Returns whether the event was consumed.
    fn handle_key_event(&mut self, event: &KeyEvent, ctx: &mut InputContext) -> InputResult;
}

/// Run an event through `layers` in order until one consumes it.
pub fn dispatch_input(
    layers: &mut [&mut dyn InputHandler],
    event: &KeyEvent,
    ctx: &mut InputContext,
) -> InputResult {
    for layer in layers.iter_mut() {
        if layer.handle_key_event(event, ctx).is_consumed() {
            return InputResult::Consumed;
        }
    }
    InputResult::Ignored
}

/// Helper to check for common key combinations.
pub fn is_key(event: &KeyEvent, code: KeyCode) -> bool {
    event.code == code && event.modifiers.is_empty()
}

pub fn is_key_with_ctrl(event: &KeyEvent, c: char) -> bool {
    event.code == KeyCode::Char(c) && event.modifiers == KeyModifiers::CONTROL
}

pub fn is_key_with_alt(event: &KeyEvent, code: KeyCode) -> bool {
    event.code == code && event.modifiers == KeyModifiers::ALT
}

/// Ctrl, or the platform command modifier (Super/Meta)
pub fn has_primary_modifier(event: &KeyEvent) -> bool {
    event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}
