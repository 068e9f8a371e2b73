//! Screen layout and rendering
//!
//! ```text
//! VoltScript Playground  1:conditional 2:hello 3:loop    [ Compile → ]
//! ┌ VoltScript ──────────────┐┌ C++ ─────────────────────┐
//! │ editor                   ││ output                   │
//! └──────────────────────────┘└──────────────────────────┘
//!  error line (only while an error is visible)
//!  key help
//! ```

pub mod editor_pane;
pub mod example_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::buffer::EditorBuffer;
use crate::catalog::ExampleCatalog;
use crate::view::controls::{
    render_trigger_button, TriggerButtonColors, TriggerButtonLayout, TriggerButtonState,
};
use crate::view::surface::OutputPanes;
use crate::view::theme::Theme;

pub use editor_pane::{render_editor_pane, scroll_to_caret};
pub use example_bar::{render_example_bar, ExampleBarLayout, ExampleHitArea};

const TITLE: &str = "VoltScript Playground";

const KEY_HELP: &[(&str, &str)] = &[
    ("Ctrl+Enter/F5", "compile"),
    ("Alt+1-9", "example"),
    ("F2", "next example"),
    ("Tab", "indent"),
    ("Ctrl+Q", "quit"),
];

/// Everything the screen shows, borrowed for one frame
pub struct ScreenState<'a> {
    pub buffer: &'a EditorBuffer,
    pub panes: &'a OutputPanes,
    pub button: &'a TriggerButtonState,
    pub catalog: &'a ExampleCatalog,
    pub current_example: Option<&'a str>,
    pub editor_top: usize,
    pub theme: &'a Theme,
}

/// Hit areas and scroll state produced by a frame
#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    pub button: TriggerButtonLayout,
    pub examples: ExampleBarLayout,
    pub editor_area: Rect,
    pub editor_top: usize,
}

pub fn render_screen(frame: &mut Frame, state: &ScreenState) -> ScreenLayout {
    let error = state.panes.visible_error();
    let error_height = error.map_or(0, |text| text.lines().count().clamp(1, 3) as u16);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(error_height),
            Constraint::Length(1),
        ])
        .split(frame.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let (button, examples) = render_header(frame, rows[0], state);
    let editor_top = render_editor_pane(
        frame,
        panes[0],
        state.buffer,
        state.editor_top,
        "VoltScript",
        state.theme,
    );
    render_output(frame, panes[1], &state.panes.output, state.theme);
    if let Some(text) = error {
        render_error(frame, rows[2], text, state.theme);
    }
    render_help(frame, rows[3], state.theme);

    ScreenLayout {
        button,
        examples,
        editor_area: panes[0],
        editor_top,
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &ScreenState,
) -> (TriggerButtonLayout, ExampleBarLayout) {
    let theme = state.theme;
    let title = format!(" {} ", TITLE);
    let title_width = (title.width() as u16).min(area.width);
    let button_width =
        (format!(" {} ", state.button.label).width() as u16 + 2).min(area.width - title_width);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(title_width),
            Constraint::Min(0),
            Constraint::Length(button_width),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            title,
            Style::default()
                .fg(theme.title_fg)
                .add_modifier(Modifier::BOLD),
        )),
        columns[0],
    );
    let examples = render_example_bar(
        frame,
        columns[1],
        state.catalog,
        state.current_example,
        theme,
    );
    let button = render_trigger_button(
        frame,
        columns[2],
        state.button,
        &TriggerButtonColors::from_theme(theme),
    );
    (button, examples)
}

fn render_output(frame: &mut Frame, area: Rect, output: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_fg))
        .title(Span::styled(" C++ ", Style::default().fg(theme.title_fg)))
        .style(Style::default().bg(theme.output_bg).fg(theme.output_fg));
    frame.render_widget(Paragraph::new(output).block(block), area);
}

fn render_error(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let style = Style::default().fg(theme.error_fg).bg(theme.error_bg);
    let lines: Vec<Line> = text
        .lines()
        .take(area.height as usize)
        .map(|line| Line::from(Span::styled(format!(" {}", line), style)))
        .collect();
    frame.render_widget(Paragraph::new(lines).style(style), area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans = Vec::new();
    for (key, action) in KEY_HELP {
        spans.push(Span::styled(
            format!(" {}", key),
            Style::default()
                .fg(theme.help_key_fg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {} ", action),
            Style::default().fg(theme.help_fg),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
