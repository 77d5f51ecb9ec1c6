//! Tic-tac-toe game-state engine with exhaustive adversarial search
//!
//! This crate provides:
//! - Complete board-state model: turn derivation, legal action
//!   enumeration, move application, win and draw detection
//! - Full-depth minimax search with alpha-beta pruning for
//!   game-theoretically optimal play
//! - An in-memory game record for driving complete games
//!
//! Boards are immutable `Copy` values; every move produces a new board,
//! so callers can share and backtrack freely. The search always runs to
//! completion (the tree is at most 9 plies), returning exact values.

pub mod board;
pub mod error;
pub mod game;
pub mod lines;
pub mod search;

pub use board::{Action, Board, Cell, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use lines::WINNING_LINES;
pub use search::{max_value, min_value, optimal_action};
