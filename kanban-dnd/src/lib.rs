//! Drag-and-drop reordering engine for kanban boards
//!
//! This crate holds the state logic behind a kanban board whose cards and
//! columns are rearranged with pointer drag gestures. Rendering is someone
//! else's job: the engine consumes pointer events and exposes the current
//! arrangement plus a hover descriptor for the renderer to draw from.
//!
//! ## Overview
//!
//! - **Board State Store** - [`BoardStore`] owns the authoritative [`Board`] and
//!   applies [`MoveCard`] / [`MoveColumn`] commands atomically
//! - **Drag Interaction Controller** - [`DragController`] tracks the in-flight
//!   gesture as a tagged [`DragSession`] and commits it on drop
//! - **Copy-on-write** - a committed move rebuilds only the affected columns;
//!   every other column is shared with the previous board
//! - **No failures surfaced** - stale references, duplicates and self-drops
//!   leave the board unchanged and come back as a [`Rejection`]
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_dnd::{demo_board, DndEngine, DragEvent, DragTarget};
//!
//! let mut engine = DndEngine::new(demo_board());
//!
//! engine.dispatch(&DragEvent::DragStart {
//!     target: DragTarget::card("column-1", "task-1"),
//! });
//! engine.dispatch(&DragEvent::Drop {
//!     target: DragTarget::list_end("column-3"),
//! });
//!
//! let done = engine.board().column(&"column-3".into()).unwrap();
//! assert_eq!(done.items.last().unwrap().id.as_str(), "task-1");
//! assert!(engine.session().is_idle());
//! ```
//!
//! ## Seeds and gesture scripts
//!
//! Boards load from YAML or JSON seeds and pointer events replay from
//! gesture scripts:
//!
//! ```text
//! columns:
//!   - id: column-1
//!     title: To Do
//!     items:
//!       - { id: task-1, text: Task 1 }
//! ```

pub mod card;
pub mod column;
pub mod defaults;
pub mod drag;
mod engine;
mod error;
mod outcome;
pub mod parse;
mod store;
pub mod types;
mod validate;

pub use card::MoveCard;
pub use column::MoveColumn;
pub use defaults::demo_board;
pub use drag::{Dispatch, DragController, DragEvent, DragSession, DragTarget, Effect, Hover};
pub use engine::DndEngine;
pub use error::{DndError, Result};
pub use outcome::{MoveOutcome, Rejection};
pub use parse::{GestureScript, SeedFormat};
pub use store::{BoardStore, Reorder};

// Re-export commonly used types
pub use types::{Board, Card, CardId, Column, ColumnId, InsertionSide, Point, Rect};
