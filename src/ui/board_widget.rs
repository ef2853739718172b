use crate::game::{BeanBoard, BeanColor, BOARD_CELLS, BOARD_COLUMNS, BOARD_ROWS, PALETTE_SIZE};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Terminal color for each palette index.
pub const BEAN_COLORS: [Color; PALETTE_SIZE] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::LightRed,
    Color::White,
];

const CELL_WIDTH: u16 = 4;

/// Width needed for one row of the grid
pub const GRID_WIDTH: u16 = CELL_WIDTH * BOARD_COLUMNS as u16;

fn bean_span(color: Option<BeanColor>, highlighted: bool) -> Span<'static> {
    let (symbol, style) = match color {
        None => (" .  ", Style::default().fg(Color::DarkGray)),
        Some(c) => match BEAN_COLORS.get(c as usize) {
            Some(&fg) => (" \u{25cf}  ", Style::default().fg(fg)),
            None => (" ?  ", Style::default().fg(Color::Gray)),
        },
    };
    let style = if highlighted {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    Span::styled(symbol, style)
}

fn cell_row(area: Rect, cells: usize) -> Vec<Rect> {
    Layout::horizontal(vec![Constraint::Length(CELL_WIDTH); cells])
        .flex(Flex::Center)
        .split(area)
        .to_vec()
}

/// Render the 10x5 bean grid and return one rect per cell, in board order.
///
/// Beans past the last cell are counted but not drawn.
pub fn render_grid(frame: &mut Frame, board: &BeanBoard, cursor: Option<usize>, area: Rect) -> Vec<Rect> {
    let rows = Layout::vertical(vec![Constraint::Length(1); BOARD_ROWS]).split(area);

    let mut cells = Vec::with_capacity(BOARD_CELLS);
    for row_area in rows.iter() {
        cells.extend(cell_row(*row_area, BOARD_COLUMNS));
    }

    for (index, rect) in cells.iter().enumerate() {
        let span = bean_span(board.get(index), cursor == Some(index));
        frame.render_widget(Paragraph::new(span), *rect);
    }
    cells
}

/// Render the row of palette beans and return one rect per color.
pub fn render_palette(frame: &mut Frame, cursor: Option<usize>, area: Rect) -> Vec<Rect> {
    let cells = cell_row(area, PALETTE_SIZE);
    for (index, rect) in cells.iter().enumerate() {
        let span = bean_span(Some(index as BeanColor), cursor == Some(index));
        frame.render_widget(Paragraph::new(span), *rect);
    }
    cells
}
