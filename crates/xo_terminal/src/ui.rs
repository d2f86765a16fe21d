//! Stateless rendering of the board screen.
//!
//! [`BoardLayout::compute`] is the single source of screen geometry: the
//! renderer draws into its rects and the event loop hit-tests mouse clicks
//! against the same rects.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use xo_board::{CELL_COUNT, Cell, Mark, Position};

use crate::app::App;
use crate::config::HighlightColor;

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const BUTTON_WIDTH: u16 = 13;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    /// Title line.
    pub title: Rect,
    /// Status box.
    pub status: Rect,
    /// The 9 cells in board order.
    pub cells: [Rect; CELL_COUNT],
    /// Horizontal separators between rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators, two per row.
    pub col_separators: [Rect; 6],
    /// Restart button.
    pub restart: Rect,
    /// Key help line.
    pub help: Rect,
}

impl BoardLayout {
    /// Splits `area` into the board screen regions.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // Title
                Constraint::Length(3),            // Status
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Restart
                Constraint::Length(1),            // Help
            ])
            .split(area);

        let board_area = center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board_area);

        let mut cells = [Rect::default(); CELL_COUNT];
        let mut col_separators = [Rect::default(); 6];
        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(rows[row * 2]);
            for col in 0..3 {
                cells[row * 3 + col] = cols[col * 2];
            }
            col_separators[row * 2] = cols[1];
            col_separators[row * 2 + 1] = cols[3];
        }

        Self {
            title: chunks[0],
            status: chunks[1],
            cells,
            row_separators: [rows[1], rows[3]],
            col_separators,
            restart: center_rect(chunks[3], BUTTON_WIDTH, 3),
            help: chunks[4],
        }
    }

    /// Returns the index of the cell under a screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = ScreenPosition::new(column, row);
        self.cells.iter().position(|cell| cell.contains(point))
    }

    /// Returns true if the coordinate lies on the restart button.
    pub fn is_restart(&self, column: u16, row: u16) -> bool {
        self.restart.contains(ScreenPosition::new(column, row))
    }
}

/// Maps the configured highlight to a terminal color.
pub fn highlight_color(highlight: HighlightColor) -> Color {
    match highlight {
        HighlightColor::Green => Color::Green,
        HighlightColor::Yellow => Color::Yellow,
        HighlightColor::Magenta => Color::Magenta,
        HighlightColor::Cyan => Color::Cyan,
        HighlightColor::White => Color::White,
    }
}

/// Renders the whole screen and returns the layout that was used.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let layout = BoardLayout::compute(frame.area());
    let highlight = highlight_color(*app.config().highlight());

    let title = Paragraph::new("xo - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_status(frame, layout.status, app, highlight);

    for (index, area) in layout.cells.iter().enumerate() {
        draw_cell(frame, *area, app, index, highlight);
    }
    for area in layout.row_separators {
        let sep = Paragraph::new("─".repeat(area.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
    for area in layout.col_separators {
        let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }

    let restart = Paragraph::new("Restart")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(restart, layout.restart);

    let help = Paragraph::new("arrows move · enter/space or 1-9 play · click cells · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, highlight: Color) {
    let spans: Vec<Span> = app
        .session()
        .status()
        .segments()
        .into_iter()
        .map(|segment| {
            if segment.emphasis {
                Span::styled(
                    segment.text,
                    Style::default().fg(highlight).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(segment.text)
            }
        })
        .collect();

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize, highlight: Color) {
    let session = app.session();
    let (symbol, mut style) = match session.board().get(index) {
        Some(Cell::Marked(Mark::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Marked(Mark::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ if *app.config().show_cell_numbers() => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        _ => (String::new(), Style::default()),
    };

    if session.is_highlighted(index) {
        style = style.bg(highlight).fg(Color::Black);
    }
    if Position::from_index(index) == Some(app.cursor()) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let mut lines = vec![Line::from(""); area.height as usize];
    if let Some(middle) = lines.get_mut(area.height as usize / 2) {
        *middle = Line::from(symbol);
    }
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_cells_hit_test_to_their_index() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 24));
        for (index, cell) in layout.cells.iter().enumerate() {
            let (x, y) = center(*cell);
            assert_eq!(layout.cell_at(x, y), Some(index));
        }
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 24));
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in layout.cells.iter().skip(i + 1) {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_separators_and_title_are_not_cells() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 24));
        let (x, y) = center(layout.col_separators[0]);
        assert_eq!(layout.cell_at(x, y), None);
        let (x, y) = center(layout.title);
        assert_eq!(layout.cell_at(x, y), None);
    }

    #[test]
    fn test_restart_button_hit() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 24));
        let (x, y) = center(layout.restart);
        assert!(layout.is_restart(x, y));
        assert_eq!(layout.cell_at(x, y), None);
        assert!(!layout.is_restart(0, 0));
    }
}
