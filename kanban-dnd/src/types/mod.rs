//! Core types for the drag-and-drop engine

mod board;
mod ids;
mod position;

// Re-export all types
pub use board::{Board, Card, Column};
pub use ids::{CardId, ColumnId};
pub use position::{InsertionSide, Point, Rect};
