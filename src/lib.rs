//! Tight-Fit Packing Enumerator
//!
//! Exhaustively enumerates every way to pack the seven tetromino pieces
//! into a 4x7 board, one of each piece, allowing rotations and mirror
//! images. Each piece's distinct orientations are precomputed as bitmasks;
//! a bounded-depth backtracking search then tries every piece, orientation
//! and anchor at each level and reports every complete tiling it reaches.

pub mod board;
pub mod orientation;
pub mod pieces;
pub mod solver;

pub use board::{format_orientation, format_solution, OverlapError};
pub use orientation::Orientation;
pub use pieces::{PieceDef, Placement, Puzzle, TIGHT_FIT};
pub use solver::Solution;
