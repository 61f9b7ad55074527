//! BoardStore - the single owner of the authoritative board
//!
//! Commands compute a new board from the current one; the store swaps it in.
//! Nothing else mutates columns or their items.

use crate::outcome::{MoveOutcome, Rejection};
use crate::types::Board;
use std::fmt::Debug;
use tracing::debug;

/// A pure board transformation
pub trait Reorder: Debug {
    /// Operation name for logs, e.g. "move card"
    fn op(&self) -> &'static str;

    /// Compute the next arrangement without touching `board`
    fn apply(&self, board: &Board) -> MoveOutcome;
}

/// Holds the current board and applies reorder commands atomically
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    board: Board,
    /// Bumped once per applied command
    revision: u64,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self { board, revision: 0 }
    }

    /// The current arrangement
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Apply a command. On success returns the new revision; on rejection the
    /// board is untouched.
    pub fn apply<R: Reorder>(&mut self, command: &R) -> Result<u64, Rejection> {
        match command.apply(&self.board) {
            MoveOutcome::Moved(board) => {
                self.board = board;
                self.revision += 1;
                debug!(op = command.op(), revision = self.revision, ?command, "committed");
                Ok(self.revision)
            }
            MoveOutcome::Unchanged(rejection) => {
                debug!(op = command.op(), %rejection, "rejected, board unchanged");
                Err(rejection)
            }
        }
    }

    pub fn move_card(&mut self, command: &crate::MoveCard) -> Result<u64, Rejection> {
        self.apply(command)
    }

    pub fn move_column(&mut self, command: &crate::MoveColumn) -> Result<u64, Rejection> {
        self.apply(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, Column};
    use crate::{MoveCard, MoveColumn};
    use tracing_test::traced_test;

    fn store() -> BoardStore {
        BoardStore::new(Board::new_unchecked([
            Column::new("c1", "One")
                .with_card(Card::new("a", "A"))
                .with_card(Card::new("b", "B")),
            Column::new("c2", "Two"),
        ]))
    }

    #[test]
    fn test_revision_bumps_on_commit() {
        let mut store = store();
        let revision = store
            .move_card(&MoveCard::new("a", "c1", "c2"))
            .unwrap();
        assert_eq!(revision, 1);
        assert_eq!(store.revision(), 1);
        assert_eq!(store.board().column(&"c2".into()).unwrap().len(), 1);
    }

    #[traced_test]
    #[test]
    fn test_rejection_keeps_board_and_revision() {
        let mut store = store();
        let before = store.board().clone();

        let err = store
            .move_column(&MoveColumn::new("c1", "c1"))
            .unwrap_err();

        assert_eq!(err, Rejection::SameColumn { id: "c1".into() });
        assert_eq!(store.revision(), 0);
        assert_eq!(store.board(), &before);
        assert!(logs_contain("rejected, board unchanged"));
    }
}
