use crate::game::{
    BeanColor, FocusHint, GameKey, GameSession, KeyReaction, BOARD_CELLS, BOARD_COLUMNS,
    PALETTE_SIZE,
};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::debug;
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::game_view::{self, BoardCursor, ClickMap, ClickTarget};

pub struct App {
    session: GameSession,
    cursor: BoardCursor,
    click_map: ClickMap,
    should_quit: bool,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        App {
            session,
            cursor: BoardCursor::Palette(0),
            click_map: ClickMap::default(),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let mut click_map = ClickMap::default();
            terminal.draw(|f| click_map = game_view::render(f, &self.session, self.cursor))?;
            self.click_map = click_map;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                self.session.handle_key(GameKey::Enter);
            }
            KeyCode::Esc => {
                self.session.handle_key(GameKey::Escape);
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => self.type_answer(c),
            KeyCode::Backspace => {
                let mut answer = self.session.answer().to_string();
                answer.pop();
                self.session.set_answer(answer);
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                let next = self.session.operator().next();
                self.session.change_operator(next);
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let next = self.session.level().next();
                self.session.change_level(next);
            }
            KeyCode::Char(' ') => self.activate_cursor(),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Char(c) => {
                self.session.handle_key(GameKey::Char(c));
            }
            _ => {}
        }
    }

    /// Digit or minus: let the session re-arm, then edit the answer the way a
    /// focused input would.
    fn type_answer(&mut self, c: char) {
        if let KeyReaction::FocusAnswer(hint) = self.session.handle_key(GameKey::Char(c)) {
            let answer = match hint {
                FocusHint::SelectAll => c.to_string(),
                FocusHint::PlaceCursor => format!("{}{}", self.session.answer(), c),
            };
            self.session.set_answer(answer);
        }
    }

    fn activate_cursor(&mut self) {
        match self.cursor {
            BoardCursor::Cell(index) => self.session.remove_bean(index),
            BoardCursor::Palette(index) => self.session.add_bean(index as BeanColor),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(target) = self.click_map.hit(mouse.column, mouse.row) else {
            return;
        };
        debug!("clicked {:?}", target);

        match target {
            ClickTarget::Operator(operator) => self.session.change_operator(operator),
            ClickTarget::Level(level) => self.session.change_level(level),
            ClickTarget::Submit => {
                self.session.submit();
            }
            ClickTarget::Cell(index) => {
                self.cursor = BoardCursor::Cell(index);
                self.session.remove_bean(index);
            }
            ClickTarget::Palette(index) => {
                self.cursor = BoardCursor::Palette(index);
                self.session.add_bean(index as BeanColor);
            }
        }
    }
}

/// Move the board cursor one step; the palette sits below the last grid row.
fn move_cursor(cursor: BoardCursor, code: KeyCode) -> BoardCursor {
    let last_row_start = BOARD_CELLS - BOARD_COLUMNS;
    match (cursor, code) {
        (BoardCursor::Cell(i), KeyCode::Left) if i % BOARD_COLUMNS > 0 => BoardCursor::Cell(i - 1),
        (BoardCursor::Cell(i), KeyCode::Right) if i % BOARD_COLUMNS < BOARD_COLUMNS - 1 => {
            BoardCursor::Cell(i + 1)
        }
        (BoardCursor::Cell(i), KeyCode::Up) if i >= BOARD_COLUMNS => {
            BoardCursor::Cell(i - BOARD_COLUMNS)
        }
        (BoardCursor::Cell(i), KeyCode::Down) if i < last_row_start => {
            BoardCursor::Cell(i + BOARD_COLUMNS)
        }
        (BoardCursor::Cell(i), KeyCode::Down) => {
            BoardCursor::Palette((i % BOARD_COLUMNS).min(PALETTE_SIZE - 1))
        }
        (BoardCursor::Palette(i), KeyCode::Left) if i > 0 => BoardCursor::Palette(i - 1),
        (BoardCursor::Palette(i), KeyCode::Right) if i < PALETTE_SIZE - 1 => {
            BoardCursor::Palette(i + 1)
        }
        (BoardCursor::Palette(i), KeyCode::Up) => BoardCursor::Cell(last_row_start + i),
        (unchanged, _) => unchanged,
    }
}
