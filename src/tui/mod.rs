//! Terminal UI shell around the game core.

mod app;
mod input;
mod ui;

use crate::cli::Cli;
use crate::game::{RandomSource, SeededRandom, ThreadRandom, TurnController};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, info};

use app::App;

/// Runs the TUI session until the user quits.
pub async fn run(cli: Cli) -> Result<()> {
    // Log to a file so tracing output never fights the TUI for the
    // terminal.
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(seed = ?cli.seed, delay_ms = cli.delay_ms, "Starting noughts TUI");

    let rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };
    let controller =
        TurnController::new(rng).with_computer_delay(Duration::from_millis(cli.delay_ms));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_session(&mut terminal, App::new(controller)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Session loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Event loop: draw, fire the due computer move, handle one key.
async fn run_session<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let controller = app.controller();
            ui::draw(
                frame,
                controller.board(),
                app.cursor(),
                controller.score(),
                app.status(),
            );
        })?;

        // The one deferred callback: the computer's move after its
        // visible delay.
        app.tick(Instant::now());

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("User quit");
                    return Ok(());
                }
                KeyCode::Char('r') => {
                    app.restart();
                }
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    app.set_cursor(input::move_cursor(app.cursor(), key.code));
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let pos = app.cursor();
                    debug!(?pos, "Cursor move submitted");
                    app.submit(pos);
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    // Digits 1-9 address cells directly, row-major.
                    if let Some(digit) = c.to_digit(10)
                        && (1..=9).contains(&digit)
                        && let Some(pos) = crate::game::Position::from_index(digit as usize - 1)
                    {
                        debug!(?pos, "Digit move submitted");
                        app.set_cursor(pos);
                        app.submit(pos);
                    }
                }
                _ => {}
            }
        }
    }
}
