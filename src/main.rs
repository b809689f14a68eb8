//! deskcalc entry point.
//!
//! Starts the TUI by default; `--replay` runs a recorded program headless
//! and prints the outcome instead.

use std::io;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use deskcalc::core::{format_value, Evaluator, Program};
use deskcalc::tui::{render, CalculatorApp, InputHandler};

#[derive(Debug, Parser)]
#[command(name = "deskcalc", version, about = "Single-window calculator with a replayable brain")]
struct Cli {
    /// Replay a recorded program (a JSON array of operands and operator
    /// symbols, e.g. '[3, "+", 4, "="]') and print the outcome.
    #[arg(long, value_name = "JSON")]
    replay: Option<String>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid program: {0}")]
    Program(#[from] serde_json::Error),
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(json) = cli.replay {
        // Logging stays off in TUI mode; the alternate screen owns the
        // terminal there.
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
        return replay(&json);
    }

    run_tui()
}

fn replay(json: &str) -> Result<(), AppError> {
    let program = Program::from_json(json)?;
    tracing::info!(entries = program.len(), "replaying program");

    let mut brain = Evaluator::new();
    brain.set_program(&program);

    let suffix = if brain.is_partial_result() { "..." } else { "=" };
    println!("{}{suffix}", brain.description());
    println!("{}", format_value(brain.result()));
    Ok(())
}

fn run_tui() -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<(), AppError> {
    let mut app = CalculatorApp::new();
    let input = InputHandler::new();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if let Event::Key(key) = event::read()? {
            if app.apply(input.handle_key(key)) {
                break;
            }
        }
    }

    Ok(())
}
