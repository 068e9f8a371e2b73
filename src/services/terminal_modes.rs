//! Terminal mode management
//!
//! Raw mode, the alternate screen, mouse capture and (when the terminal
//! supports it) the kitty keyboard protocol are entered together and left
//! together when [`TerminalModes`] is dropped. The keyboard protocol is what
//! lets Ctrl+Enter arrive as a distinct chord instead of a bare Enter.

use std::io::{self, stdout};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};

/// Keyboard protocol flags pushed when the terminal supports them.
///
/// With all keys reported as escape codes, shifted characters arrive as the
/// base key plus SHIFT unless alternate keys are requested too; without them
/// Shift+9 would type `9` instead of `(`.
pub fn keyboard_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
}

/// Guard for the terminal modes the UI needs
pub struct TerminalModes {
    keyboard_enhanced: bool,
}

impl TerminalModes {
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;

        let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if keyboard_enhanced {
            execute!(stdout(), PushKeyboardEnhancementFlags(keyboard_flags()))?;
        } else {
            tracing::info!("Keyboard enhancement unsupported, Ctrl+Enter may arrive as Enter");
        }
        tracing::debug!("Terminal modes enabled (keyboard_enhanced={})", keyboard_enhanced);

        Ok(Self { keyboard_enhanced })
    }

    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        tracing::debug!("Terminal modes restored");
    }
}

/// Best-effort restore from a panic hook, where the guard may never drop
pub fn emergency_cleanup() {
    let _ = execute!(
        stdout(),
        PopKeyboardEnhancementFlags,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();
}
