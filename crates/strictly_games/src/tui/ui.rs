//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{GameStatus, Mark, Position};

use super::view::{BoardView, CellVisual};
use crate::config::Settings;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen and returns the area of each cell, in index
/// order, for mouse hit-testing.
pub fn draw(
    frame: &mut Frame,
    view: &BoardView,
    cursor: Position,
    settings: &Settings,
) -> [Rect; 9] {
    let area = frame.area();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH + 4), Constraint::Length(24)])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Length(1),         // Turn indicator
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Controls
        ])
        .split(columns[0]);

    let title = Paragraph::new(settings.display().title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_turn(frame, chunks[1], view, settings);
    let cells = draw_board(frame, chunks[2], view, cursor, settings);
    draw_status(frame, chunks[3], view);
    draw_controls(frame, chunks[4], *view.replay_visible());
    draw_move_log(frame, columns[1], view, settings);

    cells
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Cross => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::Circle => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn draw_turn(frame: &mut Frame, area: Rect, view: &BoardView, settings: &Settings) {
    let turn = *view.turn();
    let line = Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(settings.symbol(turn).to_string(), mark_style(turn)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    view: &BoardView,
    cursor: Position,
    settings: &Settings,
) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
        board_area,
    );

    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        let rect = Rect::new(
            board_area.x + 1 + pos.col() as u16 * CELL_WIDTH,
            board_area.y + 1 + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area);
        cells[pos.to_index()] = rect;
        draw_cell(frame, rect, view.cell(pos), pos, pos == cursor, settings);
    }
    cells
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: CellVisual,
    pos: Position,
    has_cursor: bool,
    settings: &Settings,
) {
    let (symbol, mut style) = match cell.mark {
        Some(mark) => (settings.symbol(mark).to_string(), mark_style(mark)),
        None => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if has_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &BoardView) {
    let status = *view.status();
    let color = match status {
        GameStatus::Loading | GameStatus::Playing => Color::Yellow,
        GameStatus::Ended => Color::Magenta,
        GameStatus::XWin | GameStatus::OWin => Color::Green,
    };
    let status_text = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, replay_visible: bool) {
    let text = if replay_visible {
        "[r] Replay   [q] Quit"
    } else {
        "Click a cell or press 1-9   [q] Quit"
    };
    let style = if replay_visible {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(text).style(style).alignment(Alignment::Center), area);
}

fn draw_move_log(frame: &mut Frame, area: Rect, view: &BoardView, settings: &Settings) {
    let lines: Vec<Line> = view
        .moves()
        .iter()
        .enumerate()
        .map(|(i, mov)| {
            Line::from(vec![
                Span::raw(format!("{:>2}. ", i + 1)),
                Span::styled(settings.symbol(mov.mark).to_string(), mark_style(mov.mark)),
                Span::raw(format!(" {}", mov.position.label())),
            ])
        })
        .collect();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(log, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
