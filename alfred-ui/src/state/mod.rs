//! State Management
//!
//! Board state shared by the root view and its components.

pub mod board;

pub use board::{provide_board_state, BoardState, Knowledge};
