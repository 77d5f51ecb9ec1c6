//! Winning line analysis

use std::collections::HashSet;

use crate::board::{Action, Board, Cell, Player};

/// Winning line indices on the 3x3 board, row-major
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

impl Board {
    /// Check if a player has won by having three in a row
    pub fn has_won(&self, player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| self.cells[idx] == target))
    }

    /// All actions that would immediately win for the player, in
    /// row-major order
    pub fn winning_actions(&self, player: Player) -> Vec<Action> {
        let mut positions: Vec<usize> = self.winning_positions(player).into_iter().collect();
        positions.sort_unstable();
        positions.into_iter().map(Action::from_index).collect()
    }

    /// Check if a player has an immediate winning move available
    /// (two in a line with the third cell empty)
    pub fn has_immediate_win(&self, player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| self.winning_position_in_line(player, line).is_some())
    }

    /// Positions completing a line for the player. A set: one empty cell
    /// can complete more than one line.
    fn winning_positions(&self, player: Player) -> HashSet<usize> {
        let mut positions = HashSet::new();
        for line in &WINNING_LINES {
            if let Some(pos) = self.winning_position_in_line(player, line) {
                positions.insert(pos);
            }
        }
        positions
    }

    /// Find the winning position in a specific line, if one exists
    fn winning_position_in_line(&self, player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match self.cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
