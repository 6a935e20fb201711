//! Click Tutorial - interactive terminal tutorial for clicking and right-clicking.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Tutorial rules (see `click_tutorial::tutorial`).
//! - Configuration parsing (see `click_tutorial_config`).
//!
//! Invariants:
//! - The TUI enters raw mode, the alternate screen and mouse capture on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - The deferred transition is cancelled before the terminal is restored.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{channel, error::TrySendError};

use click_tutorial::action::Action;
use click_tutorial::app::App;
use click_tutorial::cli::Cli;
use click_tutorial::runtime::{
    config::load_config, deferred::DeferredTransition, logging::init_file_logging,
    terminal::TerminalGuard,
};
use click_tutorial::tutorial::Effect;
use click_tutorial_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_FRAME_TICK_MS};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // _log_guard must live for entire main() duration to ensure logs are flushed
    let _log_guard = init_file_logging(&cli.log_dir)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting click-tutorial");

    let config = load_config(&cli)?;

    // Restores the terminal on panic or early return
    let terminal_guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Spawn input stream task with backpressure handling
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let event = match event_result {
                Ok(event) => event,
                Err(e) => {
                    tracing::error!(error = %e, "Terminal event stream failed");
                    break;
                }
            };

            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Mouse(mouse) => Action::Mouse(mouse),
                Event::Resize(width, height) => Action::Resize(width, height),
                _ => continue,
            };

            // Key and resize events carry user intent and are never dropped.
            // Mouse events can flood the channel (movement), so they are.
            if matches!(action, Action::Mouse(_)) {
                match tx_input.try_send(action) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::trace!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            } else if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    let mut app = App::new(config);
    let mut deferred = DeferredTransition::new();

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_FRAME_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                if action.is_noisy() {
                    tracing::trace!(?action, "Handling action");
                } else {
                    tracing::debug!(?action, "Handling action");
                }

                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(action) = action else {
                    continue;
                };
                if action == Action::Quit {
                    tracing::info!("Quit requested");
                    break;
                }

                if let Some(Effect::ScheduleAdvance(delay)) = app.update(action) {
                    deferred.schedule(delay, tx.clone());
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Graceful shutdown: stop the timer before the screen goes away
    deferred.cancel();
    input_task.abort();

    terminal_guard.restore()?;
    terminal.show_cursor()?;

    tracing::info!(stage = %app.tutorial().stage(), "Exiting click-tutorial");
    Ok(())
}
