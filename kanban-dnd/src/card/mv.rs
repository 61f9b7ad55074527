//! MoveCard command

use crate::outcome::{MoveOutcome, Rejection};
use crate::store::Reorder;
use crate::types::{Board, CardId, ColumnId, InsertionSide};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Move a card within its column or into another column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCard {
    /// The card being dragged
    pub card: CardId,
    /// Column the drag started in
    pub source: ColumnId,
    /// Column the card was dropped in
    pub target: ColumnId,
    /// Card the dragged card was dropped against; `None` appends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_item: Option<CardId>,
    /// Edge of `target_item` to insert against; `None` behaves as top
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<InsertionSide>,
}

impl MoveCard {
    /// Create a MoveCard command that appends to the end of the target column
    pub fn new(
        card: impl Into<CardId>,
        source: impl Into<ColumnId>,
        target: impl Into<ColumnId>,
    ) -> Self {
        Self {
            card: card.into(),
            source: source.into(),
            target: target.into(),
            target_item: None,
            side: None,
        }
    }

    /// Drop against a specific card, on the given edge
    pub fn onto(mut self, item: impl Into<CardId>, side: InsertionSide) -> Self {
        self.target_item = Some(item.into());
        self.side = Some(side);
        self
    }

    pub fn with_target_item(mut self, item: Option<CardId>) -> Self {
        self.target_item = item;
        self
    }

    pub fn with_side(mut self, side: Option<InsertionSide>) -> Self {
        self.side = side;
        self
    }
}

impl Reorder for MoveCard {
    fn op(&self) -> &'static str {
        "move card"
    }

    fn apply(&self, board: &Board) -> MoveOutcome {
        let Some(source_index) = board.column_index(&self.source) else {
            return MoveOutcome::Unchanged(Rejection::UnknownColumn {
                id: self.source.clone(),
            });
        };
        let Some(target_index) = board.column_index(&self.target) else {
            return MoveOutcome::Unchanged(Rejection::UnknownColumn {
                id: self.target.clone(),
            });
        };

        let columns = board.columns();
        let Some(card_index) = columns[source_index].position_of(&self.card) else {
            return MoveOutcome::Unchanged(Rejection::UnknownCard {
                id: self.card.clone(),
                column: self.source.clone(),
            });
        };

        if self.target_item.as_ref() == Some(&self.card) {
            return MoveOutcome::Unchanged(Rejection::OntoItself {
                card: self.card.clone(),
            });
        }

        // Duplicate guard: removing and re-inserting at the same index is the
        // identity, so the check can run before anything is touched.
        if source_index != target_index && columns[target_index].contains(&self.card) {
            return MoveOutcome::Unchanged(Rejection::DuplicateInTarget {
                card: self.card.clone(),
                column: self.target.clone(),
            });
        }

        // Cloning the Arcs is shallow; make_mut copies only the columns we edit.
        let mut next = columns.to_vec();
        let moved = Arc::make_mut(&mut next[source_index])
            .items
            .remove(card_index);

        let target = Arc::make_mut(&mut next[target_index]);
        let insert_at = self
            .target_item
            .as_ref()
            .and_then(|item| target.position_of(item))
            .map(|index| index + self.side.unwrap_or(InsertionSide::Top).offset())
            .unwrap_or(target.items.len());
        target.items.insert(insert_at, moved);

        MoveOutcome::Moved(Board::from_shared(next))
    }
}
