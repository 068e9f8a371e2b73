//! Editor pane rendering: gutter, text, selection and caret

use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::buffer::EditorBuffer;
use crate::view::theme::Theme;

/// First visible line so that `caret_line` stays on screen
pub fn scroll_to_caret(top: usize, caret_line: usize, height: usize) -> usize {
    if height == 0 {
        return top;
    }
    if caret_line < top {
        caret_line
    } else if caret_line >= top + height {
        caret_line + 1 - height
    } else {
        top
    }
}

/// Render the buffer into `area` starting at line `top`.
///
/// Returns the (possibly adjusted) top line.
pub fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    buffer: &EditorBuffer,
    top: usize,
    title: &str,
    theme: &Theme,
) -> usize {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_fg))
        .title(Span::styled(format!(" {} ", title), Style::default().fg(theme.title_fg)))
        .style(Style::default().bg(theme.editor_bg).fg(theme.editor_fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return top;
    }

    let (caret_line, caret_col) = buffer.caret_position();
    let top = scroll_to_caret(top, caret_line, inner.height as usize);
    let gutter_width = buffer.line_count().to_string().len() + 1;
    let (sel_start, sel_end) = buffer.selection();

    let mut lines = Vec::with_capacity(inner.height as usize);
    for line in top..(top + inner.height as usize).min(buffer.line_count()) {
        let content = buffer.line_content(line);
        let start = buffer.line_to_byte(line);
        let mut spans = vec![Span::styled(
            format!("{:>width$} ", line + 1, width = gutter_width - 1),
            Style::default().fg(theme.line_number_fg),
        )];
        spans.extend(selection_spans(
            content,
            start,
            sel_start,
            sel_end,
            Style::default().bg(theme.selection_bg),
        ));
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    let prefix: String = buffer.line_content(caret_line).chars().take(caret_col).collect();
    let x = inner.x as usize + gutter_width + prefix.width();
    let y = inner.y as usize + (caret_line - top);
    let max_x = (inner.x + inner.width).saturating_sub(1) as usize;
    frame.set_cursor_position(Position::new(x.min(max_x) as u16, y as u16));

    top
}

/// Split one line into plain and selected spans
fn selection_spans(
    content: &str,
    line_start: usize,
    sel_start: usize,
    sel_end: usize,
    selected: Style,
) -> Vec<Span<'_>> {
    let line_end = line_start + content.len();
    if sel_start == sel_end || sel_end <= line_start || sel_start >= line_end {
        return vec![Span::raw(content)];
    }
    let from = sel_start.max(line_start) - line_start;
    let to = sel_end.min(line_end) - line_start;
    vec![
        Span::raw(&content[..from]),
        Span::styled(&content[from..to], selected),
        Span::raw(&content[to..]),
    ]
}
