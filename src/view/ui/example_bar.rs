//! Example selector rendering for the header line

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::catalog::ExampleCatalog;
use crate::view::theme::Theme;

/// Hit area for one example entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleHitArea {
    pub name: String,
    pub area: Rect,
}

/// Layout information for hit testing example clicks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleBarLayout {
    pub entries: Vec<ExampleHitArea>,
}

impl ExampleBarLayout {
    /// Example under the given screen position
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| {
                let area = entry.area;
                x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
            })
            .map(|entry| entry.name.as_str())
    }
}

/// Render `1:hello 2:loop ...` into `area`, highlighting `current`.
///
/// Entries that do not fit are left out.
pub fn render_example_bar(
    frame: &mut Frame,
    area: Rect,
    catalog: &ExampleCatalog,
    current: Option<&str>,
    theme: &Theme,
) -> ExampleBarLayout {
    let mut layout = ExampleBarLayout::default();
    let mut spans = Vec::new();
    let mut x = area.x;
    let right = area.x + area.width;

    for (index, name) in catalog.names().enumerate() {
        let label = if index < 9 {
            format!(" {}:{} ", index + 1, name)
        } else {
            format!(" {} ", name)
        };
        let width = label.width() as u16;
        if x + width > right {
            break;
        }

        let style = if current == Some(name) {
            Style::default()
                .fg(theme.example_active_fg)
                .bg(theme.example_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted_fg)
        };
        spans.push(Span::styled(label, style));
        layout.entries.push(ExampleHitArea {
            name: name.to_string(),
            area: Rect::new(x, area.y, width, 1),
        });
        x += width;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    layout
}
