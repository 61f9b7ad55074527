//! DndEngine - one board store plus the controller that drives it

use crate::drag::{Dispatch, DragController, DragEvent, DragSession, Hover};
use crate::outcome::Rejection;
use crate::store::{BoardStore, Reorder};
use crate::types::{Board, CardId, InsertionSide};

/// The full engine a renderer talks to.
///
/// Pointer events go in through [`dispatch`](Self::dispatch); the renderer
/// reads back [`board`](Self::board) and [`hover`](Self::hover).
#[derive(Debug, Clone, Default)]
pub struct DndEngine {
    store: BoardStore,
    controller: DragController,
}

impl DndEngine {
    pub fn new(board: Board) -> Self {
        Self {
            store: BoardStore::new(board),
            controller: DragController::new(),
        }
    }

    /// Handle one pointer event
    pub fn dispatch(&mut self, event: &DragEvent) -> Dispatch {
        self.controller.dispatch(&mut self.store, event)
    }

    /// Apply a reorder command directly, outside any drag gesture
    pub fn apply<R: Reorder>(&mut self, command: &R) -> Result<u64, Rejection> {
        self.store.apply(command)
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn session(&self) -> &DragSession {
        self.controller.session()
    }

    pub fn hover(&self) -> Option<&Hover> {
        self.controller.hover()
    }

    pub fn indicator_for(&self, card: &CardId) -> Option<InsertionSide> {
        self.controller.indicator_for(card)
    }

    pub fn into_board(self) -> Board {
        self.store.into_board()
    }
}
