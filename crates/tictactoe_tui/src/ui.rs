//! Stateless UI rendering for tic-tac-toe.
//!
//! Layout is computed by pure functions so mouse hit-testing and
//! drawing always agree on where the squares are.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Player, Position, RESET_LABEL, Square};

use super::app::App;

/// Width of one square, in terminal cells.
const CELL_WIDTH: u16 = 11;
/// Height of one square, in terminal rows.
const CELL_HEIGHT: u16 = 3;
/// Full board width: three squares plus two separator columns.
const BOARD_WIDTH: u16 = 3 * CELL_WIDTH + 2;
/// Full board height: three squares plus two separator rows.
const BOARD_HEIGHT: u16 = 3 * CELL_HEIGHT + 2;

/// Renders the whole screen: title, board, status, and controls.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    // Live status region: always the projection of the latest state.
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(vec![
        Line::from(app.cursor_label()),
        Line::from(format!(
            "←↑↓→ move  ·  Enter/Space place  ·  1-9 squares  ·  [r] {RESET_LABEL}  ·  [q] quit"
        )),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Maps a terminal coordinate to the square under it, if any.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    let board = screen_chunks(area)[1];
    if board.width < BOARD_WIDTH || board.height < BOARD_HEIGHT {
        return None;
    }
    let point = ratatui::layout::Position::new(column, row);
    board_cells(board)
        .iter()
        .zip(Position::ALL)
        .find(|(cell, _)| cell.contains(point))
        .map(|(_, pos)| pos)
}

fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                // Title
            Constraint::Min(BOARD_HEIGHT),        // Board
            Constraint::Length(3),                // Status
            Constraint::Length(2),                // Controls
        ])
        .split(area)
}

/// Screen rectangles of the nine squares, in board index order.
fn board_cells(area: Rect) -> [Rect; 9] {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    Position::ALL.map(|pos| {
        let (row, col) = pos.coords();
        Rect::new(
            board.x + col as u16 * (CELL_WIDTH + 1),
            board.y + row as u16 * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    })
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    if area.width < BOARD_WIDTH || area.height < BOARD_HEIGHT {
        let warning = Paragraph::new("Terminal too small")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(warning, area);
        return;
    }

    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    draw_separators(frame, board);

    let game = app.game();
    for (cell, pos) in board_cells(area).iter().zip(Position::ALL) {
        render_square(
            frame,
            *cell,
            game.board().get(pos),
            pos.to_index() + 1,
            pos == app.cursor(),
            game.is_enabled(pos),
        );
    }
}

/// Renders one square. Stateless: everything it shows comes in as
/// explicit parameters.
fn render_square(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    number: usize,
    selected: bool,
    enabled: bool,
) {
    let (symbol, base_style) = match square {
        Square::Empty if enabled => (
            number.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Blank first line vertically centers the mark in the 3-row square.
    let text = Text::from(vec![Line::default(), Line::from(Span::styled(symbol, style))]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separators(frame: &mut Frame, board: Rect) {
    let style = Style::default().fg(Color::DarkGray);

    for gap in 1..3u16 {
        let y = board.y + gap * (CELL_HEIGHT + 1) - 1;
        let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize)).style(style);
        frame.render_widget(sep, Rect::new(board.x, y, BOARD_WIDTH, 1));
    }

    for gap in 1..3u16 {
        let x = board.x + gap * (CELL_WIDTH + 1) - 1;
        for band in 0..3u16 {
            let y = board.y + band * (CELL_HEIGHT + 1);
            let sep = Paragraph::new("│\n│\n│").style(style);
            frame.render_widget(sep, Rect::new(x, y, 1, CELL_HEIGHT));
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
