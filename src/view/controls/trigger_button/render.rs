//! Trigger button rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{FocusState, TriggerButtonColors, TriggerButtonLayout, TriggerButtonState};

/// Render the trigger button at the left edge of `area`
///
/// # Returns
/// Layout information for hit testing (empty if the area is too small)
pub fn render_trigger_button(
    frame: &mut Frame,
    area: Rect,
    state: &TriggerButtonState,
    colors: &TriggerButtonColors,
) -> TriggerButtonLayout {
    let text = format!(" {} ", state.label);
    let width = (text.width() + 2) as u16;
    if area.height == 0 || area.width < width {
        return TriggerButtonLayout::default();
    }

    let (label_style, border_color) = match state.focus {
        FocusState::Normal => (
            Style::default().fg(colors.label).bg(colors.border),
            colors.border,
        ),
        FocusState::Focused | FocusState::Hovered => (
            Style::default()
                .fg(colors.label)
                .bg(colors.focused)
                .add_modifier(Modifier::BOLD),
            colors.focused,
        ),
        FocusState::Disabled => (
            Style::default()
                .fg(colors.disabled)
                .add_modifier(Modifier::ITALIC),
            colors.disabled,
        ),
    };

    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(border_color)),
        Span::styled(text, label_style),
        Span::styled("]", Style::default().fg(border_color)),
    ]);

    let button_area = Rect::new(area.x, area.y, width, 1);
    frame.render_widget(Paragraph::new(line), button_area);

    TriggerButtonLayout { area: button_area }
}
