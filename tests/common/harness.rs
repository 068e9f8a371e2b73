//! Test harness driving [`App`] on ratatui's `TestBackend`

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::runtime::Runtime;

use voltpad::app::App;
use voltpad::catalog::ExampleCatalog;
use voltpad::compile::{CompilerService, HttpCompiler};
use voltpad::view::theme::Theme;

const WAIT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct AppTestHarness {
    app: App,
    terminal: Terminal<TestBackend>,
    // Declared last so spawned compiles outlive the app
    _runtime: Runtime,
}

impl AppTestHarness {
    /// App talking to `service`, not started yet
    pub fn new(
        width: u16,
        height: u16,
        service: Arc<dyn CompilerService>,
    ) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        let app = App::new(
            service,
            Arc::new(ExampleCatalog::builtin()),
            Theme::dark(),
            runtime.handle().clone(),
        );
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let mut harness = Self {
            app,
            terminal,
            _runtime: runtime,
        };
        harness.render()?;
        Ok(harness)
    }

    /// App talking HTTP to `url`
    pub fn with_url(width: u16, height: u16, url: &str) -> anyhow::Result<Self> {
        Self::new(width, height, Arc::new(HttpCompiler::new(url)))
    }

    /// Start the app with `example` and wait for its compile to settle
    pub fn start(&mut self, example: &str) -> anyhow::Result<()> {
        self.app.start(example);
        self.wait_for_idle()
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.app.handle_key(KeyEvent::new(code, modifiers));
        self.render()
    }

    pub fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        }
        self.render()
    }

    pub fn click(&mut self, column: u16, row: u16) -> anyhow::Result<()> {
        self.app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.render()
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    /// Poll `condition` (re-rendering in between) until it holds
    pub fn wait_until<F>(&mut self, mut condition: F) -> anyhow::Result<()>
    where
        F: FnMut(&mut App) -> bool,
    {
        let start = Instant::now();
        loop {
            if condition(&mut self.app) {
                return self.render();
            }
            if start.elapsed() > WAIT_TIMEOUT {
                anyhow::bail!("condition not met within {:?}", WAIT_TIMEOUT);
            }
            std::thread::sleep(Duration::from_millis(10));
            self.render()?;
        }
    }

    /// Wait until every dispatched compile has settled
    pub fn wait_for_idle(&mut self) -> anyhow::Result<()> {
        self.wait_until(|app| app.pending_compiles() == 0)
    }

    pub fn buffer_content(&self) -> String {
        self.app.buffer_text()
    }

    pub fn assert_buffer_content(&self, expected: &str) {
        assert_eq!(self.buffer_content(), expected);
    }

    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }
}
