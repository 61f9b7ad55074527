//! MoveColumn command

use crate::outcome::{MoveOutcome, Rejection};
use crate::store::Reorder;
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};

/// Move a column to the position currently held by another column.
///
/// This is a single-element list move, not a swap: the columns between the
/// two positions shift by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveColumn {
    /// The column being dragged
    pub column: ColumnId,
    /// The column it was dropped on
    pub target: ColumnId,
}

impl MoveColumn {
    pub fn new(column: impl Into<ColumnId>, target: impl Into<ColumnId>) -> Self {
        Self {
            column: column.into(),
            target: target.into(),
        }
    }
}

impl Reorder for MoveColumn {
    fn op(&self) -> &'static str {
        "move column"
    }

    fn apply(&self, board: &Board) -> MoveOutcome {
        if self.column == self.target {
            return MoveOutcome::Unchanged(Rejection::SameColumn {
                id: self.column.clone(),
            });
        }

        let Some(source_index) = board.column_index(&self.column) else {
            return MoveOutcome::Unchanged(Rejection::UnknownColumn {
                id: self.column.clone(),
            });
        };
        let Some(target_index) = board.column_index(&self.target) else {
            return MoveOutcome::Unchanged(Rejection::UnknownColumn {
                id: self.target.clone(),
            });
        };

        let mut next = board.columns().to_vec();
        let moved = next.remove(source_index);
        next.insert(target_index, moved);

        MoveOutcome::Moved(Board::from_shared(next))
    }
}
