//! Result of applying a reorder command to a board

use crate::types::{Board, CardId, ColumnId};
use serde::Serialize;
use thiserror::Error;

/// What a reorder command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The command produced a new arrangement
    Moved(Board),
    /// The board is left exactly as it was
    Unchanged(Rejection),
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Moved(_) => None,
            Self::Unchanged(rejection) => Some(rejection),
        }
    }

    /// The board after the command, falling back to `original` on rejection
    pub fn into_board(self, original: &Board) -> Board {
        match self {
            Self::Moved(board) => board,
            Self::Unchanged(_) => original.clone(),
        }
    }
}

/// Why a reorder command left the board unchanged.
///
/// Rejections are recoverable guards, not failures. Nothing here is ever
/// raised to the renderer; the board simply does not change.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// A referenced column is not on the board
    #[error("column not found: {id}")]
    UnknownColumn { id: ColumnId },

    /// The dragged card is not in its recorded source column
    #[error("card {id} not found in column {column}")]
    UnknownCard { id: CardId, column: ColumnId },

    /// The target column already holds a card with the dragged card's ID
    #[error("column {column} already holds card {card}")]
    DuplicateInTarget { card: CardId, column: ColumnId },

    /// A card was dropped onto itself
    #[error("card {card} dropped onto itself")]
    OntoItself { card: CardId },

    /// A column was dropped onto itself
    #[error("column {id} dropped onto itself")]
    SameColumn { id: ColumnId },
}
