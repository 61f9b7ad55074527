//! Hit targets reported by the renderer

use crate::types::{CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// The most specific element under the pointer when an event fired
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragTarget {
    /// A card
    Card { column: ColumnId, card: CardId },
    /// The always-visible drop zone after the last card of a column
    ListEnd { column: ColumnId },
    /// The placeholder shown in a column with no cards
    EmptyColumn { column: ColumnId },
    /// The card area of a column, outside any card or zone
    ColumnBody { column: ColumnId },
    /// The column's title bar and frame
    ColumnHeader { column: ColumnId },
    /// Anywhere that is not part of a column
    Outside,
}

impl DragTarget {
    pub fn card(column: impl Into<ColumnId>, card: impl Into<CardId>) -> Self {
        Self::Card {
            column: column.into(),
            card: card.into(),
        }
    }

    pub fn list_end(column: impl Into<ColumnId>) -> Self {
        Self::ListEnd {
            column: column.into(),
        }
    }

    pub fn empty_column(column: impl Into<ColumnId>) -> Self {
        Self::EmptyColumn {
            column: column.into(),
        }
    }

    pub fn column_body(column: impl Into<ColumnId>) -> Self {
        Self::ColumnBody {
            column: column.into(),
        }
    }

    pub fn column_header(column: impl Into<ColumnId>) -> Self {
        Self::ColumnHeader {
            column: column.into(),
        }
    }
}

impl std::fmt::Display for DragTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card { column, card } => write!(f, "card {card} in {column}"),
            Self::ListEnd { column } => write!(f, "end of {column}"),
            Self::EmptyColumn { column } => write!(f, "empty {column}"),
            Self::ColumnBody { column } => write!(f, "body of {column}"),
            Self::ColumnHeader { column } => write!(f, "header of {column}"),
            Self::Outside => f.write_str("outside"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        assert_eq!(DragTarget::card("c1", "a").to_string(), "card a in c1");
        assert_eq!(DragTarget::list_end("c2").to_string(), "end of c2");
    }

    #[test]
    fn test_target_yaml() {
        let target: DragTarget =
            serde_yaml_ng::from_str("{ kind: card, column: c1, card: a }").unwrap();
        assert_eq!(target, DragTarget::card("c1", "a"));

        let outside: DragTarget = serde_yaml_ng::from_str("kind: outside").unwrap();
        assert_eq!(outside, DragTarget::Outside);
    }
}
