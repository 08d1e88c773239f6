//! Turn order and round evaluation for tic-tac-toe.

use super::board::{Board, CELL_COUNT};
use super::rules;
use super::types::{Cell, GameStatus, Player, RoundOutcome, Seat};
use tracing::{debug, info, instrument};

/// Name of the first player until names are configured.
pub const DEFAULT_FIRST_NAME: &str = "Player 1";

/// Name of the second player until names are configured.
pub const DEFAULT_SECOND_NAME: &str = "Player 2";

/// Tic-tac-toe rule engine.
///
/// Owns the board, both players and whose turn it is. One instance per
/// game session; [`Game::reset`] starts the next game with the same
/// players.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: Seat,
    status: GameStatus,
}

impl Game {
    /// Creates a game with the default players, first player to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME)
    }

    /// Creates a game with the given player names.
    #[instrument(skip_all, fields(first = %first.as_ref(), second = %second.as_ref()))]
    pub fn with_players(first: impl AsRef<str>, second: impl AsRef<str>) -> Self {
        Self {
            board: Board::new(),
            players: Self::seat_players(first.as_ref(), second.as_ref()),
            current: Seat::First,
            status: GameStatus::InProgress,
        }
    }

    fn seat_players(first: &str, second: &str) -> [Player; 2] {
        [
            Player::new(first.to_string(), Seat::First.marker()),
            Player::new(second.to_string(), Seat::Second.marker()),
        ]
    }

    /// Replaces both players; the first plays X, the second O.
    ///
    /// The turn goes back to the first player immediately. The board and
    /// the status are left as they are: a finished game stays finished
    /// until [`Game::reset`], and [`Game::winner`] keeps naming whoever
    /// now holds the winning marker.
    #[instrument(skip_all, fields(first = %first.as_ref(), second = %second.as_ref()))]
    pub fn configure_players(&mut self, first: impl AsRef<str>, second: impl AsRef<str>) {
        self.players = Self::seat_players(first.as_ref(), second.as_ref());
        self.current = Seat::First;
        info!("Players configured");
    }

    /// Attempts to place the current player's marker at `index`.
    ///
    /// - [`RoundOutcome::Invalid`]: index out of range, cell occupied, or
    ///   the game already ended. Nothing changes.
    /// - [`RoundOutcome::Win`]: the move completed a line. The turn is
    ///   **not** passed on, so [`Game::get_current_player`] returns the
    ///   winner until the next reset.
    /// - [`RoundOutcome::Tie`]: the board is full with no line. The turn is
    ///   not passed on either.
    /// - [`RoundOutcome::Continue`]: the turn passed to the other player.
    ///
    /// Once a game is won or tied, every further move is `Invalid` until
    /// [`Game::reset`]. The browser version kept accepting marks after a
    /// win; this engine does not.
    #[instrument(skip(self), fields(player = %self.current_player_name(), status = ?self.status))]
    pub fn play_round(&mut self, index: usize) -> RoundOutcome {
        if self.is_over() {
            debug!("Move rejected: game is over");
            return RoundOutcome::Invalid;
        }

        let marker = *self.get_current_player().marker();
        if let Err(e) = self.board.try_mark(index, marker) {
            debug!(error = %e, "Move rejected");
            return RoundOutcome::Invalid;
        }

        let cells = self.board.get_board();
        if let Some(winner) = rules::check_winner(&cells) {
            info!(%winner, "Game won");
            self.status = GameStatus::Won(winner);
            return RoundOutcome::Win;
        }

        if rules::is_full(&cells) {
            info!("Game tied");
            self.status = GameStatus::Tied;
            return RoundOutcome::Tie;
        }

        self.current = self.current.other();
        debug!(next = %self.current_player_name(), "Turn passed");
        RoundOutcome::Continue
    }

    /// Clears the board and gives the first move back to the first player.
    ///
    /// Player names are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Seat::First;
        self.status = GameStatus::InProgress;
        debug!("Game reset");
    }

    /// The player whose turn it is, or the winner right after a win.
    pub fn get_current_player(&self) -> &Player {
        &self.players[self.current.slot()]
    }

    fn current_player_name(&self) -> &str {
        self.get_current_player().name()
    }

    /// Seat of the current player.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Copy of the nine cells.
    pub fn get_board(&self) -> [Cell; CELL_COUNT] {
        self.board.get_board()
    }

    /// The board itself.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, first (X) then second (O).
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player in the given seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.slot()]
    }

    /// Status after the last accepted move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks whether the game ended in a win or tie.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The player holding the winning marker, once there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(marker) => self.players.iter().find(|p| *p.marker() == marker),
            _ => None,
        }
    }

    /// Indices of the completed line, first in scan order.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        rules::winning_line(&self.board.get_board())
    }

    /// Number of markers on the board.
    pub fn moves_played(&self) -> usize {
        CELL_COUNT - self.board.empty_indices().len()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
