//! TCALC - Terminal Calculator
//!
//! A four-function calculator for the terminal. Buttons are pressed with the
//! mouse or by moving the keypad selection; `--batch` replays JSON actions
//! from stdin instead of starting the UI.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;

use tcalc::application::{self, App, AppConfig};
use tcalc::infrastructure::init_logging;
use tcalc::presentation::{render_ui, InputHandler};

#[derive(Parser)]
#[command(name = "tcalc")]
#[command(about = "A basic four-function calculator for the terminal", long_about = None)]
struct Cli {
    /// Enable verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file while the UI is running
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Do not capture mouse clicks
    #[arg(long)]
    no_mouse: bool,

    /// Read newline-delimited JSON actions from stdin and print the display after each
    #[arg(long)]
    batch: bool,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        AppConfig {
            verbose: cli.verbose,
            ..AppConfig::default()
        }
        .with_log_file(cli.log_file)
        .with_mouse(!cli.no_mouse)
        .with_batch(cli.batch)
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from(Cli::parse());
    init_logging(&config).context("Failed to initialize logging")?;

    if config.batch {
        let stdin = io::stdin();
        let stdout = io::stdout();
        application::replay(stdin.lock(), stdout.lock()).context("Batch replay failed")?;
        return Ok(());
    }

    run_terminal(&config)
}

/// Sets up the terminal, runs the UI and restores the terminal afterwards.
fn run_terminal(config: &AppConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("starting terminal UI");
    let mut app = App::default();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    if config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Terminal UI failed")
}

/// Main event loop: draw, wait for one event, handle it, repeat.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render_ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
            Event::Mouse(mouse) => InputHandler::handle_mouse_event(app, mouse),
            _ => {}
        }
    }
    info!("quit requested");
    Ok(())
}
