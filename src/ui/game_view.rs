use crate::game::{GameSession, Level, Operator};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, GRID_WIDTH};

/// Something on screen the player can click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Operator(Operator),
    Level(Level),
    Submit,
    Cell(usize),
    Palette(usize),
}

/// Where the clickable things landed in the last frame.
#[derive(Debug, Clone, Default)]
pub struct ClickMap {
    targets: Vec<(ClickTarget, Rect)>,
}

impl ClickMap {
    fn push(&mut self, target: ClickTarget, area: Rect) {
        self.targets.push((target, area));
    }

    /// Target under the given terminal cell, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        self.targets
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(target, _)| *target)
    }

    pub fn area_of(&self, target: ClickTarget) -> Option<Rect> {
        self.targets
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, area)| *area)
    }
}

/// Keyboard cursor over the bean grid or the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCursor {
    Cell(usize),
    Palette(usize),
}

const BUTTON_WIDTH: u16 = 10;

pub fn render(frame: &mut Frame, session: &GameSession, cursor: BoardCursor) -> ClickMap {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Operators
        Constraint::Length(3), // Levels
        Constraint::Length(3), // Equation
        Constraint::Length(3), // Message
        Constraint::Length(7), // Bean grid
        Constraint::Length(3), // Palette
        Constraint::Length(3), // Controls
        Constraint::Min(0),
    ])
    .split(frame.area());

    let mut map = ClickMap::default();
    render_operators(frame, session.operator(), chunks[0], &mut map);
    render_levels(frame, session.level(), chunks[1], &mut map);
    render_equation(frame, session, chunks[2], &mut map);
    render_message(frame, session.message(), chunks[3]);
    render_board(frame, session, cursor, chunks[4], chunks[5], &mut map);
    render_controls(frame, chunks[6]);
    map
}

fn button(label: &str, active: bool) -> Paragraph<'_> {
    let (border, text) = if active {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };
    Paragraph::new(Span::styled(label, text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border))
}

fn button_row(area: Rect, count: usize) -> Vec<Rect> {
    Layout::horizontal(vec![Constraint::Length(BUTTON_WIDTH); count])
        .flex(Flex::Center)
        .spacing(1)
        .split(area)
        .to_vec()
}

fn render_operators(frame: &mut Frame, current: Operator, area: Rect, map: &mut ClickMap) {
    for (operator, rect) in Operator::ALL.into_iter().zip(button_row(area, Operator::ALL.len())) {
        frame.render_widget(button(operator.glyph(), operator == current), rect);
        map.push(ClickTarget::Operator(operator), rect);
    }
}

fn render_levels(frame: &mut Frame, current: Level, area: Rect, map: &mut ClickMap) {
    for (level, rect) in Level::ALL.into_iter().zip(button_row(area, Level::ALL.len())) {
        frame.render_widget(button(level.stars(), level == current), rect);
        map.push(ClickTarget::Level(level), rect);
    }
}

fn render_equation(frame: &mut Frame, session: &GameSession, area: Rect, map: &mut ClickMap) {
    let question = format!("{} = ", session.problem());
    let answer = format!("{:>4}", session.answer());
    let equation_width = (question.chars().count() + answer.chars().count()) as u16 + 2;

    let [equation_area, submit_area] = Layout::horizontal([
        Constraint::Length(equation_width),
        Constraint::Length(6),
    ])
    .flex(Flex::Center)
    .spacing(1)
    .areas(area);

    let line = Line::from(vec![
        Span::styled(question, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            answer,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]);
    let equation = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(equation, equation_area);

    frame.render_widget(button("✅", session.can_answer()), submit_area);
    map.push(ClickTarget::Submit, submit_area);
}

fn render_message(frame: &mut Frame, message: &str, area: Rect) {
    // Hidden entirely while there is nothing to say
    if message.is_empty() {
        return;
    }
    let msg_widget = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    cursor: BoardCursor,
    grid_area: Rect,
    palette_area: Rect,
    map: &mut ClickMap,
) {
    let [grid_area] = Layout::horizontal([Constraint::Length(GRID_WIDTH + 2)])
        .flex(Flex::Center)
        .areas(grid_area);
    let [palette_area] = Layout::horizontal([Constraint::Length(GRID_WIDTH + 2)])
        .flex(Flex::Center)
        .areas(palette_area);

    let count = session.beans().count();
    let grid_block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Beans: {count}"));
    let grid_inner = grid_block.inner(grid_area);
    frame.render_widget(grid_block, grid_area);

    let cell_cursor = match cursor {
        BoardCursor::Cell(index) => Some(index),
        BoardCursor::Palette(_) => None,
    };
    let cells = board_widget::render_grid(frame, session.beans(), cell_cursor, grid_inner);
    for (index, rect) in cells.into_iter().enumerate() {
        map.push(ClickTarget::Cell(index), rect);
    }

    let palette_block = Block::default().borders(Borders::ALL).title("Add a bean");
    let palette_inner = palette_block.inner(palette_area);
    frame.render_widget(palette_block, palette_area);

    let palette_cursor = match cursor {
        BoardCursor::Palette(index) => Some(index),
        BoardCursor::Cell(_) => None,
    };
    let colors = board_widget::render_palette(frame, palette_cursor, palette_inner);
    for (index, rect) in colors.into_iter().enumerate() {
        map.push(ClickTarget::Palette(index), rect);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "0-9/-: Answer  |  Enter: Check  |  Esc: Reset  |  o/l: Operator/Level  |  Arrows+Space: Beans  |  Q: Quit",
    );
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
