//! In-memory game record

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history, starting from the empty board
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game at the starting position
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once an outcome has been recorded, and
    /// propagates [`Board::apply`] errors for illegal actions.
    ///
    /// [`Error::GameOver`]: crate::Error::GameOver
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let player = current.to_move();
        let next = current.apply(action)?;

        self.moves.push(Move { action, player });

        if next.is_terminal() {
            self.outcome = Some(match next.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// Returns the board state after applying moves[0..end_index].
    /// If end_index >= moves.len(), all moves are applied.
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board
    /// it applies to. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut state = Board::new();
        for m in self.moves.iter().take(end_index) {
            state = state.apply(m.action)?;
        }
        Ok(state)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board
    /// it applies to. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, from the empty board to the
    /// current position
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board
    /// it applies to. This indicates corrupted game data.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(Board::new());

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }
}
