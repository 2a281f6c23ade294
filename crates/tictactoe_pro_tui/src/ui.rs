//! Board, scoreboard and status line rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_pro::{Coordinate, GameEngine, Square};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Draws the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_message(f, chunks[0], app);
    render_scoreboard(f, chunks[1], app.engine());
    render_board(f, chunks[2], app);
    render_help(f, chunks[3]);
}

/// Parses a player color, falling back to the terminal default.
fn parse_color(name: &str) -> Color {
    name.parse().unwrap_or(Color::Reset)
}

fn label_color(engine: &GameEngine, label: &str) -> Color {
    engine
        .players()
        .iter()
        .find(|p| p.label() == label)
        .map(|p| parse_color(p.color()))
        .unwrap_or(Color::Reset)
}

fn render_message(f: &mut Frame, area: Rect, app: &App) {
    let message = app.message();
    let color = message.color.as_deref().map(parse_color).unwrap_or(Color::Reset);
    let paragraph = Paragraph::new(message.text.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(paragraph, area);
}

fn render_scoreboard(f: &mut Frame, area: Rect, engine: &GameEngine) {
    let mut spans = Vec::new();
    for (player, score) in engine.scoreboard().standings() {
        if !spans.is_empty() {
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled(
            format!("{}: {}", player.label(), score),
            Style::default().fg(parse_color(player.color())),
        ));
    }
    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let size = u16::try_from(app.engine().board_size()).unwrap_or(u16::MAX);
    let board_area = center_rect(area, span(size, CELL_WIDTH), span(size, CELL_HEIGHT));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(separated(size, CELL_HEIGHT))
        .split(board_area);

    // Even chunks hold cells, odd chunks hold separators.
    let mut cell_areas = Vec::new();
    for (i, row_area) in rows.iter().enumerate() {
        if i % 2 == 1 {
            render_separator(f, *row_area);
            continue;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(separated(size, CELL_WIDTH))
            .split(*row_area);
        for sep in cols.iter().skip(1).step_by(2) {
            render_vertical_sep(f, *sep);
        }
        cell_areas.push(cols);
    }

    for (coordinate, square) in app.engine().board().cells() {
        let area = cell_areas
            .get(coordinate.row)
            .and_then(|cols| cols.get(coordinate.col * 2));
        if let Some(area) = area {
            render_square(f, *area, app, coordinate, square);
        }
    }
}

/// Total length of `count` cells of `length` plus the separators between.
fn span(count: u16, length: u16) -> u16 {
    count
        .saturating_mul(length)
        .saturating_add(count.saturating_sub(1))
}

/// Constraints for `count` cells of `length` with 1-wide separators between.
fn separated(count: u16, length: u16) -> Vec<Constraint> {
    (0..count)
        .flat_map(|i| {
            let cell = std::iter::once(Constraint::Length(length));
            let sep = (i + 1 < count).then_some(Constraint::Length(1));
            cell.chain(sep)
        })
        .collect()
}

fn render_square(f: &mut Frame, area: Rect, app: &App, coordinate: Coordinate, square: &Square) {
    let engine = app.engine();
    let (text, mut style) = match square {
        Square::Marked(label) => (
            label.clone(),
            Style::default()
                .fg(label_color(engine, label))
                .add_modifier(Modifier::BOLD),
        ),
        Square::Empty => (String::new(), Style::default()),
    };

    if engine.winning_combo().contains(&coordinate) {
        style = style.bg(Color::Red).fg(Color::White);
    }
    if app.cursor() == coordinate {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad so the mark sits on the middle line of the cell.
    let padding = "\n".repeat(usize::from(CELL_HEIGHT / 2));
    let paragraph = Paragraph::new(format!("{padding}{text}"))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n".repeat(area.height as usize))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("arrows/hjkl: move   enter/space: play   r: play again   q: exit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separated_constraints() {
        assert_eq!(
            separated(3, 7),
            vec![
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
            ]
        );
        assert_eq!(separated(1, 3), vec![Constraint::Length(3)]);
    }

    #[test]
    fn test_span_saturates() {
        assert_eq!(span(3, CELL_WIDTH), 23);
        assert_eq!(span(1, CELL_HEIGHT), 3);
        assert_eq!(span(10_000, CELL_WIDTH), u16::MAX);
        assert_eq!(span(u16::MAX, CELL_HEIGHT), u16::MAX);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("green"), Color::Green);
        assert_eq!(parse_color("not a color"), Color::Reset);
    }
}
