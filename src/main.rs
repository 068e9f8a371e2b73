use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use voltpad::app::App;
use voltpad::catalog::ExampleCatalog;
use voltpad::compile::{CompilerService, HttpCompiler};
use voltpad::config::Config;
use voltpad::headless;
use voltpad::services::terminal_modes::{self, TerminalModes};
use voltpad::services::tracing_setup;
use voltpad::view::theme::Theme;

/// A terminal playground for the VoltScript compiler
#[derive(Parser, Debug)]
#[command(name = "voltpad")]
#[command(about = "Edit VoltScript and see the generated C++")]
#[command(version)]
struct Cli {
    /// Path to a config file (default: <config dir>/voltpad/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Compile endpoint URL
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Example to load at startup
    #[arg(long, value_name = "NAME")]
    example: Option<String>,

    /// Path to log file for the interactive session
    #[arg(long, value_name = "LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Compile FILE without starting the UI
    #[arg(long, value_name = "FILE")]
    compile: Option<PathBuf>,

    /// Output file for --compile (default: FILE with a .cpp extension)
    #[arg(long, value_name = "FILE", requires = "compile")]
    output: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> AnyhowResult<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.url {
        config.compiler.url = url.clone();
    }
    if let Some(example) = &cli.example {
        config.editor.default_example = example.clone();
    }
    Ok(config)
}

fn main() -> AnyhowResult<()> {
    let cli = Cli::parse();

    if let Some(input) = cli.compile.clone() {
        if let Err(e) = tracing_setup::init_stderr() {
            eprintln!("{:#}", e);
        }
        let config = load_config(&cli)?;
        return run_headless(&config, input, cli.output.clone());
    }

    let config = load_config(&cli)?;
    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    tracing_setup::init_global(&log_file)?;
    tracing::info!("voltpad starting, compiler at {}", config.compiler.url);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let service: Arc<dyn CompilerService> = Arc::new(HttpCompiler::new(&config.compiler.url));
    let mut app = App::new(
        service,
        Arc::new(ExampleCatalog::builtin()),
        Theme::from_name(&config.theme),
        runtime.handle().clone(),
    );

    let _terminal_modes = TerminalModes::enable().context("Failed to set up terminal")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).context("Failed to create terminal")?;
    terminal.clear()?;

    app.start(&config.editor.default_example);
    let result = run_event_loop(&mut app, &mut terminal);

    tracing::info!("voltpad exiting");
    // Requests still blocked on the network must not hold up exit
    runtime.shutdown_background();
    result
}

fn run_headless(config: &Config, input: PathBuf, output: Option<PathBuf>) -> AnyhowResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;
    let service: Arc<dyn CompilerService> = Arc::new(HttpCompiler::new(&config.compiler.url));

    match runtime.block_on(headless::compile_file(service, &input, output.as_deref())) {
        Ok(output) => {
            println!("{}", headless::success_message(&input, &output));
            Ok(())
        }
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run_event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    const FRAME_DURATION: Duration = Duration::from_millis(16); // 60fps
    let mut last_render = Instant::now();
    let mut needs_render = true;
    let mut was_compiling = false;

    loop {
        if app.should_quit() {
            break;
        }

        // Compiles finish on the runtime; redraw while busy and once after
        let compiling = app.pending_compiles() > 0;
        if compiling || was_compiling {
            needs_render = true;
        }
        was_compiling = compiling;

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal.draw(|frame| app.render(frame))?;
            last_render = Instant::now();
            needs_render = false;
        }

        let timeout = if needs_render {
            FRAME_DURATION.saturating_sub(last_render.elapsed())
        } else {
            Duration::from_millis(50)
        };
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    app.handle_key(key_event);
                    needs_render = true;
                }
            }
            CrosstermEvent::Mouse(mouse_event) => {
                if app.handle_mouse(mouse_event) {
                    needs_render = true;
                }
            }
            CrosstermEvent::Resize(_, _) => {
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}
