//! Compile trigger button
//!
//! Renders as: `[ Compile → ]`, or `[ Compiling… ]` while busy.
//!
//! This module provides:
//! - State management (`TriggerButtonState`)
//! - Rendering (`render_trigger_button`)
//! - Layout/hit testing (`TriggerButtonLayout`)

mod render;

use std::sync::Mutex;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use render::render_trigger_button;

use super::FocusState;
use crate::view::surface::{lock, TriggerControl};

/// Label while the button is ready
pub const READY_LABEL: &str = "Compile →";

/// Label while a compile is outstanding
pub const BUSY_LABEL: &str = "Compiling…";

/// State for the trigger button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerButtonState {
    /// Text shown inside the brackets
    pub label: String,
    /// Focus state; `Disabled` while a compile is outstanding
    pub focus: FocusState,
}

impl TriggerButtonState {
    /// A ready, enabled button
    pub fn new() -> Self {
        Self {
            label: READY_LABEL.to_string(),
            focus: FocusState::Normal,
        }
    }

    /// Set the focus state
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    /// Check if the control is enabled
    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Press the button. Returns whether the press should start a compile.
    pub fn press(&self) -> bool {
        self.is_enabled()
    }
}

impl Default for TriggerButtonState {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerControl for Mutex<TriggerButtonState> {
    fn set_enabled(&self, enabled: bool) {
        let mut state = lock(self);
        state.focus = match (enabled, state.focus) {
            (false, _) => FocusState::Disabled,
            (true, FocusState::Disabled) => FocusState::Normal,
            (true, focus) => focus,
        };
    }

    fn set_label(&self, label: &str) {
        let mut state = lock(self);
        state.label.clear();
        state.label.push_str(label);
    }
}

/// Colors for the trigger button
#[derive(Debug, Clone, Copy)]
pub struct TriggerButtonColors {
    pub label: Color,
    pub border: Color,
    pub focused: Color,
    pub disabled: Color,
}

impl Default for TriggerButtonColors {
    fn default() -> Self {
        Self {
            label: Color::Black,
            border: Color::Gray,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl TriggerButtonColors {
    /// Create colors from theme
    pub fn from_theme(theme: &crate::view::theme::Theme) -> Self {
        Self {
            label: theme.button_fg,
            border: theme.button_bg,
            focused: theme.accent,
            disabled: theme.muted_fg,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerButtonLayout {
    pub area: Rect,
}

impl TriggerButtonLayout {
    /// Check if a point is on the button
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.area.x
            && x < self.area.x + self.area.width
            && y >= self.area.y
            && y < self.area.y + self.area.height
    }
}
