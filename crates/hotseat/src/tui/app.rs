//! Application state and key handling.

use crate::DisplayController;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hotseat_core::Position;
use tracing::{debug, instrument};

use super::input::move_cursor;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Name entry before a game.
    Setup,
    /// The board.
    Board,
}

/// Which name input has focus on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// Name of the X player.
    X,
    /// Name of the O player.
    O,
}

impl NameField {
    fn toggle(self) -> Self {
        match self {
            NameField::X => NameField::O,
            NameField::O => NameField::X,
        }
    }
}

/// Main application state.
pub struct App {
    controller: DisplayController,
    screen: Screen,
    name_x: String,
    name_o: String,
    focus: NameField,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates the app on the setup screen with the name inputs pre-filled.
    pub fn new(controller: DisplayController, name_x: String, name_o: String) -> Self {
        Self {
            controller,
            screen: Screen::Setup,
            name_x,
            name_o,
            focus: NameField::X,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Setup => self.handle_setup_key(key.code),
            Screen::Board => self.handle_board_key(key.code),
        }
    }

    fn handle_setup_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Backspace => {
                self.focused_name_mut().pop();
            }
            KeyCode::Char(c) => self.focused_name_mut().push(c),
            KeyCode::Enter => {
                self.controller.start_game(&self.name_x, &self.name_o);
                self.screen = Screen::Board;
                self.cursor = Position::Center;
            }
            _ => {}
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') if self.controller.restart_visible() => self.controller.restart(),
            KeyCode::Char('n') => {
                debug!("Back to name entry");
                self.screen = Screen::Setup;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let number = c.to_digit(10).map(|d| d as usize).unwrap_or_default();
                if let Some(position) = Position::from_number(number) {
                    self.cursor = position;
                    self.controller.select_cell(position.to_index());
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.select_cell(self.cursor.to_index());
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    fn focused_name_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::X => &mut self.name_x,
            NameField::O => &mut self.name_o,
        }
    }

    /// The controller behind the board.
    pub fn controller(&self) -> &DisplayController {
        &self.controller
    }

    /// Screen currently showing.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Text typed into the X name input.
    pub fn name_x(&self) -> &str {
        &self.name_x
    }

    /// Text typed into the O name input.
    pub fn name_o(&self) -> &str {
        &self.name_o
    }

    /// Name input with focus.
    pub fn focus(&self) -> NameField {
        self.focus
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
