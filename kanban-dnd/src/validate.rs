//! Board invariant checks

use crate::error::{DndError, Result};
use crate::types::Board;
use std::collections::HashSet;

impl Board {
    /// Check that column IDs are unique and that every card ID appears exactly
    /// once across the whole board.
    pub fn validate(&self) -> Result<()> {
        let mut columns = HashSet::new();
        let mut cards = HashSet::new();

        for column in self.columns() {
            if !columns.insert(&column.id) {
                return Err(DndError::duplicate_id("column", column.id.as_str()));
            }
            for card in &column.items {
                if !cards.insert(&card.id) {
                    return Err(DndError::duplicate_id("card", card.id.as_str()));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Board, Card, Column};
    use crate::DndError;

    #[test]
    fn test_valid_board() {
        let board = Board::try_new([
            Column::new("c1", "One").with_card(Card::new("a", "A")),
            Column::new("c2", "Two").with_card(Card::new("b", "B")),
        ]);
        assert!(board.is_ok());
    }

    #[test]
    fn test_duplicate_card_across_columns() {
        let err = Board::try_new([
            Column::new("c1", "One").with_card(Card::new("a", "A")),
            Column::new("c2", "Two").with_card(Card::new("a", "A again")),
        ])
        .unwrap_err();
        assert!(matches!(err, DndError::DuplicateId { ref item_type, .. } if item_type == "card"));
    }

    #[test]
    fn test_duplicate_column() {
        let err = Board::try_new([Column::new("c1", "One"), Column::new("c1", "Also one")])
            .unwrap_err();
        assert_eq!(err.to_string(), "duplicate column ID: c1");
    }
}
