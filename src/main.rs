use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use ghostpad::app::App;
use ghostpad::config;
use ghostpad::store::{self, NoteStore};

/// A distraction-free writing pad with inline AI continuations
#[derive(Parser)]
#[command(name = "ghostpad", version, about)]
struct Cli {
    /// Path to the config file (default: ~/.config/ghostpad/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the persisted note (default: ~/.config/ghostpad/note.txt)
    #[arg(long)]
    note: Option<PathBuf>,

    /// Directory exported documents are written to (default: current dir)
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

/// How often the main loop wakes to poll the idle timer and the worker
const TICK_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    // An explicitly requested config file must parse; the default location
    // is best-effort
    let config = match &cli.config {
        Some(path) => config::require_config_from_path(path)?,
        None => config::load_config(),
    };

    let note_path = cli.note.clone().or_else(store::note_path);
    let note_store = NoteStore::load(note_path);
    let export_dir = cli.export_dir.clone().unwrap_or_else(|| PathBuf::from("."));

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let app = App::new(&config, note_store, export_dir);
    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events, waking periodically so ticks fire without input
        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key);
                }
            }
        }

        // Drain streamed chunks and fire the idle trigger
        app.on_tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
