//! Built-in demo board.
//!
//! `demo_board()` returns the three-column board used when no seed file is
//! supplied. The seed is embedded YAML so it stays readable and editable.

use crate::types::Board;

const DEMO_BOARD_YAML: &str = include_str!("../builtin/demo-board.yaml");

/// The built-in demo board: `column-1` (task-1..3), `column-2` (task-4..5),
/// `column-3` (task-6).
pub fn demo_board() -> Board {
    Board::from_yaml(DEMO_BOARD_YAML).expect("built-in demo board must be valid")
}
