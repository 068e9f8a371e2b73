//! One-shot compilation of a source file without the terminal UI
//!
//! Runs the file through the same orchestrator the UI uses, with the editor,
//! presentation and trigger surfaces held in memory.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context};

use crate::buffer::EditorBuffer;
use crate::catalog::ExampleCatalog;
use crate::compile::{CompileOrchestrator, CompileOutcome, CompilerService, Surfaces};
use crate::view::controls::TriggerButtonState;
use crate::view::surface::{lock, OutputPanes};

/// Output file for `input` when none is given: `.volt` becomes `.cpp`, any
/// other name gets `.cpp` appended so the source is never overwritten.
pub fn default_output_path(input: &Path) -> PathBuf {
    match input.extension() {
        Some(ext) if ext == "volt" => input.with_extension("cpp"),
        _ => {
            let mut name = input.as_os_str().to_owned();
            name.push(".cpp");
            PathBuf::from(name)
        }
    }
}

/// Compile `input` and write the translation. Returns the output path.
///
/// Error messages are meant to be shown to the user as-is.
pub async fn compile_file(
    service: Arc<dyn CompilerService>,
    input: &Path,
    output: Option<&Path>,
) -> anyhow::Result<PathBuf> {
    if !input.exists() {
        bail!("Error: File '{}' not found", input.display());
    }
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Error: Failed to read '{}'", input.display()))?;

    let panes = Arc::new(Mutex::new(OutputPanes::new()));
    let surfaces = Surfaces {
        editor: Arc::new(Mutex::new(EditorBuffer::from_str(&source))),
        sink: panes.clone(),
        trigger: Arc::new(Mutex::new(TriggerButtonState::new())),
    };
    let orchestrator =
        CompileOrchestrator::new(service, surfaces, Arc::new(ExampleCatalog::builtin()));

    let outcome = orchestrator.compile().await;
    let panes = lock(&panes).clone();
    match outcome {
        CompileOutcome::Succeeded => {}
        CompileOutcome::Rejected | CompileOutcome::TransportFailed => {
            bail!("{}", panes.error);
        }
        CompileOutcome::Superseded => bail!("Error: compilation was superseded"),
    }

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    std::fs::write(&output, &panes.output)
        .with_context(|| format!("Error: Failed to write '{}'", output.display()))?;

    tracing::info!("Wrote {} ({} bytes)", output.display(), panes.output.len());
    Ok(output)
}

/// Line printed after a successful run
pub fn success_message(input: &Path, output: &Path) -> String {
    format!(
        "Successfully compiled '{}' to '{}'",
        input.display(),
        output.display()
    )
}
