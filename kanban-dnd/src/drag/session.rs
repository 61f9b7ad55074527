//! Drag session state

use crate::types::{CardId, ColumnId, InsertionSide};
use serde::Serialize;

/// Where the dragged card would land if dropped now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hover {
    /// The card under the pointer
    pub card: CardId,
    pub side: InsertionSide,
}

/// The in-flight gesture, if any.
///
/// Owned by one [`DragController`](super::DragController) and only changed by
/// its event handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragSession {
    #[default]
    Idle,
    CardDragging {
        card: CardId,
        source_column: ColumnId,
        #[serde(skip_serializing_if = "Option::is_none")]
        hover: Option<Hover>,
    },
    ColumnDragging {
        column: ColumnId,
    },
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Current hover descriptor. Only a card drag has one.
    pub fn hover(&self) -> Option<&Hover> {
        match self {
            Self::CardDragging { hover, .. } => hover.as_ref(),
            _ => None,
        }
    }

    /// The card being dragged
    pub fn dragged_card(&self) -> Option<&CardId> {
        match self {
            Self::CardDragging { card, .. } => Some(card),
            _ => None,
        }
    }

    /// The column being dragged
    pub fn dragged_column(&self) -> Option<&ColumnId> {
        match self {
            Self::ColumnDragging { column } => Some(column),
            _ => None,
        }
    }
}
