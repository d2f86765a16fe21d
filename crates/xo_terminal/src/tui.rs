//! Interactive terminal session.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

use crate::app::{App, Transition};
use crate::config::TerminalConfig;
use crate::ui::{self, BoardLayout};

/// One step of putting the terminal back.
type RestoreStep = (&'static str, fn() -> io::Result<()>);

fn leave_alternate_screen() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

fn show_cursor() -> io::Result<()> {
    execute!(io::stdout(), Show)
}

/// Steps that undo [`TerminalGuard::enter`], in order.
const RESTORE_STEPS: [RestoreStep; 3] = [
    ("disable raw mode", disable_raw_mode),
    ("leave alternate screen", leave_alternate_screen),
    ("show cursor", show_cursor),
];

/// Runs every step even when an earlier one fails and returns the first error.
fn run_restore_steps(steps: &[RestoreStep]) -> io::Result<()> {
    let mut first_err = None;
    for (name, step) in steps {
        if let Err(e) = step() {
            warn!(step = *name, error = %e, "Terminal restore step failed");
            if first_err.is_none() {
                first_err = Some(e);
            }
        }
    }
    first_err.map_or(Ok(()), Err)
}

/// Guard for raw mode, the alternate screen and mouse capture.
///
/// Restores the terminal on drop, so early returns and panics inside the
/// event loop leave a usable shell behind.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Switches the terminal into board mode.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Created before the next fallible step so a failure still restores.
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Restores the terminal now and reports the first failure.
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        run_restore_steps(&RESTORE_STEPS)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        debug!("Restoring terminal from guard");
        let _ = run_restore_steps(&RESTORE_STEPS);
    }
}

/// Runs the board until the user quits.
///
/// The terminal is restored before returning, including on error or panic.
#[instrument(skip(config))]
pub fn run_tui(config: TerminalConfig) -> Result<()> {
    info!("Starting xo terminal board");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res?;
    restored?;
    Ok(())
}

/// Draws, then blocks for the next event and handles it to completion.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut layout = BoardLayout::default();
        terminal.draw(|frame| layout = ui::draw(frame, app))?;

        let transition = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, &layout),
            other => {
                debug!(event = ?other, "Unhandled terminal event");
                Transition::Stay
            }
        };

        if transition == Transition::Quit {
            return Ok(());
        }
    }
}
