//! Terminal setup, teardown, and main event loop.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tokio::sync::oneshot::{self, Receiver, error::TryRecvError};
use tracing::{error, info};

use qc_core::QuoteBank;
use qc_data::{DataResult, Sources};

use crate::app::QuizApp;
use crate::view;

/// How long to wait for input before redrawing.
const TICK: Duration = Duration::from_millis(100);

/// Launch the TUI application.
///
/// Quotes load in the background while the loading screen is shown. A load
/// failure is logged and the loading screen stays up until the player quits.
pub fn run(mut app: QuizApp, sources: Sources) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("runtime error: {e}"))?;
    let mut banks = spawn_load(&runtime, sources);

    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app, &mut banks);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    runtime.shutdown_background();
    result
}

/// Start loading both collections on the runtime.
fn spawn_load(
    runtime: &tokio::runtime::Runtime,
    sources: Sources,
) -> Receiver<DataResult<QuoteBank>> {
    let (tx, rx) = oneshot::channel();
    runtime.spawn(async move {
        // The receiver is gone only once the app has quit.
        let _ = tx.send(sources.load().await);
    });
    rx
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut QuizApp,
    banks: &mut Receiver<DataResult<QuoteBank>>,
) -> Result<(), String> {
    let mut waiting = true;
    loop {
        if waiting {
            waiting = receive_bank(app, banks);
        }

        app.tick(Instant::now());
        if app.take_bell() {
            ring_bell(terminal);
        }

        terminal
            .draw(|frame| view::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(TICK).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
        }
    }
}

/// Install the bank if it has arrived. Returns whether to keep waiting.
fn receive_bank(app: &mut QuizApp, banks: &mut Receiver<DataResult<QuoteBank>>) -> bool {
    match banks.try_recv() {
        Ok(Ok(bank)) => {
            info!(quotes = bank.len(), "quote bank ready");
            app.install_bank(bank);
            false
        }
        Ok(Err(e)) => {
            error!(error = %e, "failed to load quotes");
            false
        }
        Err(TryRecvError::Empty) => true,
        Err(TryRecvError::Closed) => {
            error!("quote loader stopped without a result");
            false
        }
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut QuizApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, Instant::now()),
        _ => {}
    }
}

/// Write a terminal bell. Audio is best-effort.
fn ring_bell(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    let backend = terminal.backend_mut();
    let _ = backend.write_all(b"\x07");
    let _ = Write::flush(backend);
}
