//! Reusable UI controls

pub mod trigger_button;

pub use trigger_button::{
    render_trigger_button, TriggerButtonColors, TriggerButtonLayout, TriggerButtonState,
    BUSY_LABEL, READY_LABEL,
};

/// Interaction state shared by controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Normal,
    Focused,
    Hovered,
    Disabled,
}
