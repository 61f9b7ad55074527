//! DragController - turns pointer events into reorder commands

use super::event::DragEvent;
use super::session::{DragSession, Hover};
use super::target::DragTarget;
use crate::outcome::Rejection;
use crate::store::BoardStore;
use crate::types::{CardId, ColumnId, InsertionSide, Point, Rect};
use crate::{MoveCard, MoveColumn};
use serde::Serialize;
use tracing::{debug, trace};

/// What handling one event did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// No state changed
    Ignored,
    /// A card or column drag began
    Started,
    /// The hover descriptor changed
    HoverChanged,
    /// A move was applied to the board
    Committed { revision: u64 },
    /// A drop was attempted but the board was left unchanged
    Rejected { rejection: Rejection },
    /// The session was abandoned without a move
    Cancelled,
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignored => f.write_str("ignored"),
            Self::Started => f.write_str("started"),
            Self::HoverChanged => f.write_str("hover changed"),
            Self::Committed { revision } => write!(f, "committed (revision {revision})"),
            Self::Rejected { rejection } => write!(f, "rejected: {rejection}"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Result of [`DragController::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    /// Whether the renderer should allow a drop here (suppress the default
    /// "not allowed" handling)
    pub accepts_drop: bool,
    pub effect: Effect,
}

impl Dispatch {
    fn ignored() -> Self {
        Self {
            accepts_drop: false,
            effect: Effect::Ignored,
        }
    }

    fn ignored_with(effect: Effect) -> Self {
        Self {
            accepts_drop: false,
            effect,
        }
    }

    fn accepted(effect: Effect) -> Self {
        Self {
            accepts_drop: true,
            effect,
        }
    }

    fn commit(result: Result<u64, Rejection>) -> Self {
        Self::accepted(match result {
            Ok(revision) => Effect::Committed { revision },
            Err(rejection) => Effect::Rejected { rejection },
        })
    }
}

/// Tracks the in-flight drag gesture and commits it on drop
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: DragSession,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn hover(&self) -> Option<&Hover> {
        self.session.hover()
    }

    /// Edge indicator to draw on `card`, if it is the hovered card
    pub fn indicator_for(&self, card: &CardId) -> Option<InsertionSide> {
        self.hover()
            .filter(|hover| &hover.card == card)
            .map(|hover| hover.side)
    }

    /// Route one event to its handler.
    ///
    /// The handler is chosen from the session tag and the event's target; no
    /// event is ever handled twice at different nesting levels.
    pub fn dispatch(&mut self, store: &mut BoardStore, event: &DragEvent) -> Dispatch {
        match event {
            DragEvent::DragStart { target } => self.on_drag_start(target),
            DragEvent::DragOver {
                target,
                pointer,
                bounds,
            } => self.on_drag_over(target, *pointer, *bounds),
            DragEvent::DragLeave { target } => self.on_drag_leave(target),
            DragEvent::Drop { target } => self.on_drop(store, target),
            DragEvent::DragEnd => self.cancel(),
        }
    }

    fn on_drag_start(&mut self, target: &DragTarget) -> Dispatch {
        let next = match target {
            DragTarget::Card { column, card } => DragSession::CardDragging {
                card: card.clone(),
                source_column: column.clone(),
                hover: None,
            },
            DragTarget::ColumnHeader { column } | DragTarget::ColumnBody { column } => {
                DragSession::ColumnDragging {
                    column: column.clone(),
                }
            }
            DragTarget::ListEnd { .. } | DragTarget::EmptyColumn { .. } | DragTarget::Outside => {
                return Dispatch::ignored();
            }
        };

        if !self.session.is_idle() {
            debug!(previous = ?self.session, "drag start replaces unfinished session");
        }
        debug!(session = ?next, "drag started");
        self.session = next;
        Dispatch::accepted(Effect::Started)
    }

    fn on_drag_over(&mut self, target: &DragTarget, pointer: Point, bounds: Rect) -> Dispatch {
        if matches!(target, DragTarget::Outside) {
            return Dispatch::ignored();
        }

        match (&mut self.session, target) {
            (DragSession::Idle, _) => Dispatch::ignored(),
            (
                DragSession::CardDragging { card, hover, .. },
                DragTarget::Card { card: over, .. },
            ) => {
                if *over == *card {
                    return Dispatch::accepted(Effect::Ignored);
                }
                let next = Hover {
                    card: over.clone(),
                    side: InsertionSide::from_pointer(pointer, bounds),
                };
                if hover.as_ref() == Some(&next) {
                    return Dispatch::accepted(Effect::Ignored);
                }
                trace!(card = %next.card, side = %next.side, "hover");
                *hover = Some(next);
                Dispatch::accepted(Effect::HoverChanged)
            }
            // Drop zones and column drags only need the drop permitted
            (DragSession::CardDragging { .. }, _) | (DragSession::ColumnDragging { .. }, _) => {
                Dispatch::accepted(Effect::Ignored)
            }
        }
    }

    fn on_drag_leave(&mut self, target: &DragTarget) -> Dispatch {
        match (&mut self.session, target) {
            (DragSession::CardDragging { hover, .. }, DragTarget::Card { .. }) => {
                if hover.take().is_some() {
                    trace!("hover cleared");
                    Dispatch::accepted(Effect::HoverChanged)
                } else {
                    Dispatch::accepted(Effect::Ignored)
                }
            }
            _ => Dispatch::ignored(),
        }
    }

    fn on_drop(&mut self, store: &mut BoardStore, target: &DragTarget) -> Dispatch {
        // Every drop ends the session, whether or not the move is accepted.
        match std::mem::take(&mut self.session) {
            DragSession::Idle => Dispatch::ignored(),
            DragSession::CardDragging {
                card,
                source_column,
                hover,
            } => Self::drop_card(store, target, card, source_column, hover),
            DragSession::ColumnDragging { column } => Self::drop_column(store, target, column),
        }
    }

    fn drop_card(
        store: &mut BoardStore,
        target: &DragTarget,
        card: CardId,
        source: ColumnId,
        hover: Option<Hover>,
    ) -> Dispatch {
        let command = match target {
            DragTarget::Card {
                column,
                card: target_item,
            } => MoveCard::new(card, source, column)
                .with_target_item(Some(target_item.clone()))
                .with_side(hover.map(|h| h.side)),
            DragTarget::ListEnd { column }
            | DragTarget::EmptyColumn { column }
            | DragTarget::ColumnBody { column } => MoveCard::new(card, source, column),
            // Headers only take column drops
            DragTarget::ColumnHeader { column } => {
                debug!(%card, %column, "card dropped on column header, ignored");
                return Dispatch::ignored();
            }
            DragTarget::Outside => {
                debug!(%card, "card dropped outside the board");
                return Dispatch::ignored_with(Effect::Cancelled);
            }
        };

        Dispatch::commit(store.move_card(&command))
    }

    fn drop_column(store: &mut BoardStore, target: &DragTarget, column: ColumnId) -> Dispatch {
        match target {
            DragTarget::ColumnHeader {
                column: target_column,
            } => Dispatch::commit(store.move_column(&MoveColumn::new(column, target_column))),
            DragTarget::Outside => {
                debug!(%column, "column dropped outside the board");
                Dispatch::ignored_with(Effect::Cancelled)
            }
            // The card area belongs to the card track
            _ => {
                debug!(%column, %target, "column dropped on card area, ignored");
                Dispatch::ignored()
            }
        }
    }

    fn cancel(&mut self) -> Dispatch {
        if self.session.is_idle() {
            return Dispatch::ignored();
        }
        debug!(session = ?self.session, "drag cancelled");
        self.session = DragSession::Idle;
        Dispatch::ignored_with(Effect::Cancelled)
    }
}
