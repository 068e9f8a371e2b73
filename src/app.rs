//! The interactive playground
//!
//! `App` owns the shared surfaces and routes terminal events into them. Key
//! events run through the input layers (shortcuts, interceptor, text editing)
//! while holding the editor lock; the deferred actions they produce run once
//! the lock is released. Compiles run as tasks on the tokio runtime so the
//! event loop keeps drawing while a request is outstanding.

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::buffer::EditorBuffer;
use crate::catalog::ExampleCatalog;
use crate::compile::{CompileOrchestrator, CompileOutcome, CompilerService, Surfaces};
use crate::input::{
    dispatch_input, AppShortcuts, DeferredAction, InputContext, InputHandler, InputResult,
    KeyboardInterceptor, TextEditing,
};
use crate::view::controls::TriggerButtonState;
use crate::view::surface::{lock, OutputPanes};
use crate::view::theme::Theme;
use crate::view::ui::{render_screen, ScreenLayout, ScreenState};

pub struct App {
    buffer: Arc<Mutex<EditorBuffer>>,
    panes: Arc<Mutex<OutputPanes>>,
    button: Arc<Mutex<TriggerButtonState>>,
    orchestrator: Arc<CompileOrchestrator>,
    catalog: Arc<ExampleCatalog>,
    runtime: Handle,
    theme: Theme,
    current_example: Option<String>,
    layout: ScreenLayout,
    editor_top: usize,
    tasks: Vec<JoinHandle<CompileOutcome>>,
    should_quit: bool,
}

impl App {
    pub fn new(
        service: Arc<dyn CompilerService>,
        catalog: Arc<ExampleCatalog>,
        theme: Theme,
        runtime: Handle,
    ) -> Self {
        let buffer = Arc::new(Mutex::new(EditorBuffer::new()));
        let panes = Arc::new(Mutex::new(OutputPanes::new()));
        let button = Arc::new(Mutex::new(TriggerButtonState::new()));
        let surfaces = Surfaces {
            editor: buffer.clone(),
            sink: panes.clone(),
            trigger: button.clone(),
        };
        let orchestrator = Arc::new(CompileOrchestrator::new(service, surfaces, catalog.clone()));

        Self {
            buffer,
            panes,
            button,
            orchestrator,
            catalog,
            runtime,
            theme,
            current_example: None,
            layout: ScreenLayout::default(),
            editor_top: 0,
            tasks: Vec::new(),
            should_quit: false,
        }
    }

    /// Load the startup example and compile it
    pub fn start(&mut self, example: &str) {
        tracing::info!("Starting with example '{}'", example);
        if !self.load_example(example) {
            tracing::warn!("Startup example '{}' not in catalog", example);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_compiling(&self) -> bool {
        self.orchestrator.is_compiling()
    }

    pub fn current_example(&self) -> Option<&str> {
        self.current_example.as_deref()
    }

    pub fn buffer_text(&self) -> String {
        lock(&self.buffer).text()
    }

    pub fn caret(&self) -> usize {
        lock(&self.buffer).caret()
    }

    pub fn panes(&self) -> OutputPanes {
        lock(&self.panes).clone()
    }

    pub fn button(&self) -> TriggerButtonState {
        lock(&self.button).clone()
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Number of compiles dispatched that have not been reaped yet
    pub fn pending_compiles(&mut self) -> usize {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.len()
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> InputResult {
        tracing::trace!("Key {:?} with {:?}", event.code, event.modifiers);

        let mut ctx = InputContext::new();
        let result = {
            let mut buffer = lock(&self.buffer);
            let mut shortcuts = AppShortcuts::new(&self.catalog);
            let mut interceptor = KeyboardInterceptor::new(&mut buffer);
            let result = dispatch_input(&mut [&mut shortcuts, &mut interceptor], &event, &mut ctx);
            if result.is_consumed() {
                result
            } else {
                TextEditing::new(&mut buffer).handle_key_event(&event, &mut ctx)
            }
        };

        for action in ctx.take_actions() {
            self.run_action(action);
        }
        result
    }

    /// Returns whether the event changed anything on screen
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        if self.layout.button.contains(event.column, event.row) {
            self.run_action(DeferredAction::PressTrigger);
            return true;
        }
        if let Some(name) = self.layout.examples.hit_test(event.column, event.row) {
            let name = name.to_string();
            self.run_action(DeferredAction::LoadExample(name));
            return true;
        }
        false
    }

    fn run_action(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::Compile => self.spawn_compile(),
            DeferredAction::PressTrigger => {
                if lock(&self.button).press() {
                    self.spawn_compile();
                } else {
                    tracing::debug!("Trigger pressed while disabled");
                }
            }
            DeferredAction::LoadExample(name) => {
                self.load_example(&name);
            }
            DeferredAction::NextExample => {
                let next = self
                    .catalog
                    .next_after(self.current_example.as_deref())
                    .map(str::to_string);
                if let Some(name) = next {
                    self.load_example(&name);
                }
            }
            DeferredAction::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn load_example(&mut self, name: &str) -> bool {
        if !self.orchestrator.select_example(name) {
            return false;
        }
        self.current_example = Some(name.to_string());
        self.editor_top = 0;
        self.spawn_compile();
        true
    }

    fn spawn_compile(&mut self) {
        let orchestrator = self.orchestrator.clone();
        self.tasks.retain(|task| !task.is_finished());
        self.tasks
            .push(self.runtime.spawn(async move { orchestrator.compile().await }));
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let buffer = lock(&self.buffer);
        let panes = lock(&self.panes);
        let button = lock(&self.button);
        let state = ScreenState {
            buffer: &buffer,
            panes: &panes,
            button: &button,
            catalog: &self.catalog,
            current_example: self.current_example.as_deref(),
            editor_top: self.editor_top,
            theme: &self.theme,
        };
        let layout = render_screen(frame, &state);
        drop((buffer, panes, button));

        self.editor_top = layout.editor_top;
        self.layout = layout;
    }
}
