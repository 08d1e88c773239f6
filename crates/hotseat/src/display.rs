//! Presentation state bound to one game.
//!
//! [`DisplayController`] sits between whatever draws the board and the
//! rule engine. It forwards cell selections, start and restart actions to
//! the [`Game`] and keeps the text and affordances the user sees in sync
//! with the outcome of each round. It knows nothing about terminals, so
//! the TUI and the headless replay share it.

use hotseat_core::{CELL_COUNT, Cell, Game, Player, RoundOutcome};
use tracing::{debug, info, instrument};

/// Status shown before the first game starts.
pub const WELCOME_MESSAGE: &str = "Enter names and press Enter to start!";

/// Status shown when the board fills up without a line.
pub const TIE_MESSAGE: &str = "It's a tie!";

/// Status naming whose turn it is.
pub fn turn_message(player: &Player) -> String {
    format!("Current player: {} ({})", player.name(), player.marker())
}

/// Status announcing the winner.
pub fn win_message(player: &Player) -> String {
    format!("🎉 {} wins!", player.name())
}

/// Visible game state plus the engine behind it.
#[derive(Debug, Clone)]
pub struct DisplayController {
    game: Game,
    status: String,
    restart_visible: bool,
    started: bool,
    default_x_name: String,
    default_o_name: String,
}

impl DisplayController {
    /// Creates a controller whose blank names become `default_x_name` and `default_o_name`.
    #[instrument(skip_all)]
    pub fn new(default_x_name: impl Into<String>, default_o_name: impl Into<String>) -> Self {
        Self {
            game: Game::new(),
            status: WELCOME_MESSAGE.to_string(),
            restart_visible: false,
            started: false,
            default_x_name: default_x_name.into(),
            default_o_name: default_o_name.into(),
        }
    }

    /// Starts a fresh game with the given names.
    ///
    /// Names are trimmed; blank ones are replaced by the defaults.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name_x: &str, name_o: &str) {
        let name_x = non_blank(name_x, &self.default_x_name);
        let name_o = non_blank(name_o, &self.default_o_name);
        self.game.configure_players(name_x, name_o);
        info!(name_x, name_o, "Game started");
        self.game.reset();
        self.started = true;
        self.restart_visible = false;
        self.show_turn();
    }

    /// Clears the board for another game with the same players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.reset();
        self.restart_visible = false;
        self.show_turn();
        info!("Game restarted");
    }

    /// Handles a selection of cell `index` (0-8).
    ///
    /// Invalid selections, and any selection before a game was started,
    /// leave everything visible as it was.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> RoundOutcome {
        if !self.started {
            debug!("Ignoring selection before the game started");
            return RoundOutcome::Invalid;
        }

        let outcome = self.game.play_round(index);
        match outcome {
            RoundOutcome::Invalid => {}
            RoundOutcome::Win => {
                self.status = win_message(self.game.get_current_player());
                self.restart_visible = true;
            }
            RoundOutcome::Tie => {
                self.status = TIE_MESSAGE.to_string();
                self.restart_visible = true;
            }
            RoundOutcome::Continue => self.show_turn(),
        }
        debug!(%outcome, status = %self.status, "Round handled");
        outcome
    }

    fn show_turn(&mut self) {
        self.status = turn_message(self.game.get_current_player());
    }

    /// Cells to render.
    pub fn board(&self) -> [Cell; CELL_COUNT] {
        self.game.get_board()
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the restart action is offered.
    pub fn restart_visible(&self) -> bool {
        self.restart_visible
    }

    /// Whether a game has been started.
    pub fn started(&self) -> bool {
        self.started
    }

    /// The engine behind the view.
    pub fn game(&self) -> &Game {
        &self.game
    }
}

fn non_blank<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    match name.trim() {
        "" => fallback,
        trimmed => trimmed,
    }
}
