//! Board-level types: Board, Column, Card

use super::ids::{CardId, ColumnId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An atomic unit of content. The engine relocates cards but never edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    /// Create a new card
    pub fn new(id: impl Into<CardId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// An ordered, titled collection of cards. Item order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Card>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append a card
    pub fn with_card(mut self, card: Card) -> Self {
        self.items.push(card);
        self
    }

    /// Replace the items
    pub fn with_items(mut self, items: impl IntoIterator<Item = Card>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Index of a card in this column
    pub fn position_of(&self, card: &CardId) -> Option<usize> {
        self.items.iter().position(|c| &c.id == card)
    }

    pub fn contains(&self, card: &CardId) -> bool {
        self.position_of(card).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.items.iter().map(|c| &c.id)
    }
}

/// The board: an ordered sequence of columns.
///
/// Columns sit behind `Arc` so a committed move can hand out a new board that
/// still shares every column it did not touch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    columns: Vec<Arc<Column>>,
}

impl Board {
    /// Build a board without checking invariants.
    ///
    /// Prefer [`Board::try_new`]; this exists for loading known-good data and
    /// for tests that need an inconsistent starting state.
    pub fn new_unchecked(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().map(Arc::new).collect(),
        }
    }

    /// Build a board and validate that column and card IDs are unique
    pub fn try_new(columns: impl IntoIterator<Item = Column>) -> crate::Result<Self> {
        let board = Self::new_unchecked(columns);
        board.validate()?;
        Ok(board)
    }

    pub(crate) fn from_shared(columns: Vec<Arc<Column>>) -> Self {
        Self { columns }
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    /// Find a column by ID
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id).map(Arc::as_ref)
    }

    /// Display index of a column
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// Find which column holds a card, and where
    pub fn locate_card(&self, card: &CardId) -> Option<(&ColumnId, usize)> {
        self.columns
            .iter()
            .find_map(|col| col.position_of(card).map(|index| (&col.id, index)))
    }

    /// Look up a card anywhere on the board
    pub fn card(&self, card: &CardId) -> Option<&Card> {
        self.columns
            .iter()
            .find_map(|col| col.items.iter().find(|c| &c.id == card))
    }

    pub fn column_ids(&self) -> Vec<&ColumnId> {
        self.columns.iter().map(|c| &c.id).collect()
    }

    /// Every card ID, column by column in display order
    pub fn card_ids(&self) -> Vec<&CardId> {
        self.columns.iter().flat_map(|c| c.card_ids()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::new_unchecked([
            Column::new("todo", "To Do")
                .with_card(Card::new("a", "A"))
                .with_card(Card::new("b", "B")),
            Column::new("done", "Done"),
        ])
    }

    #[test]
    fn test_locate_card() {
        let board = sample();
        let (column, index) = board.locate_card(&"b".into()).unwrap();
        assert_eq!(column, "todo");
        assert_eq!(index, 1);
        assert!(board.locate_card(&"zzz".into()).is_none());
    }

    #[test]
    fn test_column_queries() {
        let board = sample();
        assert_eq!(board.column_index(&"done".into()), Some(1));
        assert!(board.column(&"done".into()).unwrap().is_empty());
        assert_eq!(board.column_ids(), vec!["todo", "done"]);
        assert_eq!(board.card_ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_board_yaml_shape() {
        let yaml = r#"
columns:
  - id: todo
    title: To Do
    items:
      - { id: a, text: A }
  - id: done
    title: Done
"#;
        let board: Board = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.card(&"a".into()).unwrap().text, "A");
        assert!(board.column(&"done".into()).unwrap().items.is_empty());
    }
}
