use anyhow::Context;
use codepad::cli;
use codepad::config::CodepadConfig;
use codepad::editor::Editor;
use codepad::ui::renderer::{TerminalGuard, TuiRenderer, install_panic_hook};
use crossterm::event::{Event, KeyEventKind, read};

/// Parse arguments, load configuration, open the requested file and run the
/// editor until the user quits. The terminal guard restores the screen on
/// errors and panics as well as on a normal quit.
fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();

    // Initialize logger (set RUST_LOG env var to control verbosity)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match &cli_args.config {
        Some(path) => CodepadConfig::from_file(path),
        None => CodepadConfig::discover(),
    }
    .context("Failed to load configuration")?;
    let mode = cli_args.completion.unwrap_or(config.completion);

    let mut editor = Editor::new(config.font, mode);
    if let Some(path) = &cli_args.file {
        let path = path.to_string_lossy();
        if cli_args.exists() {
            editor
                .open_file(&path)
                .with_context(|| format!("Error opening file '{}'", path))?;
        } else {
            // New file: written on first save
            editor.set_file_path(&path);
        }
    }

    install_panic_hook();
    let guard = TerminalGuard::enter().context("Failed to set up the terminal")?;
    let result = run(&mut editor);
    drop(guard);
    result
}

fn run(editor: &mut Editor) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new()?;
    loop {
        renderer.draw(editor)?;
        match read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if editor.handle_key(&key_event) {
                    return Ok(());
                }
            }
            // Resizes are picked up by the next draw.
            _ => {}
        }
    }
}
