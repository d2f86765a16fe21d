//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info, instrument, warn};
use xo_board::{Click, Position, Session};

use crate::config::TerminalConfig;
use crate::input::move_cursor;
use crate::ui::BoardLayout;

/// What the event loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Leave the board and restore the terminal.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    config: TerminalConfig,
}

impl App {
    /// Creates a new application with a fresh board.
    #[instrument(skip(config))]
    pub fn new(config: TerminalConfig) -> Self {
        Self {
            session: Session::new(),
            cursor: Position::Center,
            config,
        }
    }

    /// Gets the board session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the configuration.
    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        if key.kind != KeyEventKind::Press {
            return Transition::Stay;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return Transition::Quit;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click_cell(self.cursor.to_index());
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    let index = digit as usize - 1;
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.click_cell(index);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
        Transition::Stay
    }

    /// Handles a mouse event against the layout of the last frame.
    #[instrument(skip(self, layout), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &BoardLayout) -> Transition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Transition::Stay;
        }

        if layout.is_restart(mouse.column, mouse.row) {
            self.restart();
        } else if let Some(index) = layout.cell_at(mouse.column, mouse.row) {
            if let Some(pos) = Position::from_index(index) {
                self.cursor = pos;
            }
            self.click_cell(index);
        }
        Transition::Stay
    }

    /// Clicks a cell on the board.
    pub fn click_cell(&mut self, index: usize) -> Click {
        let cell = Position::from_index(index).map_or("off-board", Position::label);
        let click = self.session.click(index);
        match click {
            Click::Accepted { mark, outcome, .. } => {
                debug!(index, cell, %mark, %outcome, "Move applied to board");
            }
            Click::Ignored(reason) => {
                warn!(index, cell, %reason, "Click ignored");
            }
        }
        click
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.session.reset();
    }
}
