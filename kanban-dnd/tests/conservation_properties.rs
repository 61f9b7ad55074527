//! Property-based tests for board invariants
//!
//! Random sequences of moves, including ones with stale or bogus references,
//! must never lose, duplicate or invent a card or column.

use kanban_dnd::{
    Board, BoardStore, Card, Column, DndEngine, DragEvent, DragTarget, InsertionSide, MoveCard,
    MoveColumn, Point, Rect,
};
use proptest::prelude::*;

const COLUMNS: [&str; 4] = ["c0", "c1", "c2", "c3"];
const CARDS: [&str; 8] = ["k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7"];

fn seed() -> Board {
    Board::try_new([
        Column::new("c0", "Zero").with_items(CARDS[..3].iter().map(|id| Card::new(*id, *id))),
        Column::new("c1", "One").with_items(CARDS[3..5].iter().map(|id| Card::new(*id, *id))),
        Column::new("c2", "Two").with_items(CARDS[5..].iter().map(|id| Card::new(*id, *id))),
        Column::new("c3", "Three"),
    ])
    .unwrap()
}

fn sorted_card_ids(board: &Board) -> Vec<String> {
    let mut ids: Vec<String> = board.card_ids().iter().map(|id| id.to_string()).collect();
    ids.sort();
    ids
}

fn sorted_column_ids(board: &Board) -> Vec<String> {
    let mut ids: Vec<String> = board.column_ids().iter().map(|id| id.to_string()).collect();
    ids.sort();
    ids
}

#[derive(Debug, Clone)]
enum Op {
    Card {
        card: usize,
        source: usize,
        target: usize,
        item: Option<usize>,
        bottom: bool,
    },
    Column {
        column: usize,
        target: usize,
    },
}

/// Indices run one past the end so some references are always stale
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (
            0..=CARDS.len(),
            0..=COLUMNS.len(),
            0..=COLUMNS.len(),
            proptest::option::of(0..=CARDS.len()),
            any::<bool>()
        )
            .prop_map(|(card, source, target, item, bottom)| Op::Card {
                card,
                source,
                target,
                item,
                bottom,
            }),
        (0..=COLUMNS.len(), 0..=COLUMNS.len())
            .prop_map(|(column, target)| Op::Column { column, target }),
    ]
}

fn name(names: &[&str], index: usize) -> String {
    names
        .get(index)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("missing-{index}"))
}

fn apply(store: &mut BoardStore, op: &Op) {
    let _ = match op {
        Op::Card {
            card,
            source,
            target,
            item,
            bottom,
        } => {
            let side = if *bottom {
                InsertionSide::Bottom
            } else {
                InsertionSide::Top
            };
            let command = MoveCard::new(name(&CARDS, *card), name(&COLUMNS, *source), name(&COLUMNS, *target))
                .with_target_item(item.map(|i| name(&CARDS, i).into()))
                .with_side(Some(side));
            store.move_card(&command)
        }
        Op::Column { column, target } => store.move_column(&MoveColumn::new(
            name(&COLUMNS, *column),
            name(&COLUMNS, *target),
        )),
    };
}

proptest! {
    /// Property: any sequence of moves conserves the card and column sets.
    #[test]
    fn test_moves_conserve_cards_and_columns(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let initial = seed();
        let mut store = BoardStore::new(initial.clone());

        for op in &ops {
            apply(&mut store, op);
            prop_assert!(store.board().validate().is_ok(), "invariant broken after {:?}", op);
        }

        prop_assert_eq!(sorted_card_ids(store.board()), sorted_card_ids(&initial));
        prop_assert_eq!(sorted_column_ids(store.board()), sorted_column_ids(&initial));
    }

    /// Property: rejected moves return a board structurally equal to the input.
    #[test]
    fn test_rejections_change_nothing(ops in proptest::collection::vec(op_strategy(), 1..20)) {
        let mut store = BoardStore::new(seed());

        for op in &ops {
            let before = store.board().clone();
            let revision = store.revision();
            apply(&mut store, op);
            if store.revision() == revision {
                prop_assert_eq!(store.board(), &before);
            }
        }
    }

    /// Property: top/bottom drops land immediately before/after the target card.
    #[test]
    fn test_insertion_side_placement(card in 0..CARDS.len(), item in 0..CARDS.len(), bottom in any::<bool>()) {
        prop_assume!(card != item);
        let board = seed();
        let (source, _) = board.locate_card(&CARDS[card].into()).unwrap();
        let (target, _) = board.locate_card(&CARDS[item].into()).unwrap();
        let side = if bottom { InsertionSide::Bottom } else { InsertionSide::Top };

        let mut store = BoardStore::new(board.clone());
        store
            .move_card(&MoveCard::new(CARDS[card], source, target).onto(CARDS[item], side))
            .unwrap();

        let column = store.board().column(target).unwrap();
        let moved = column.position_of(&CARDS[card].into()).unwrap();
        let anchor = column.position_of(&CARDS[item].into()).unwrap();
        match side {
            InsertionSide::Top => prop_assert_eq!(moved + 1, anchor),
            InsertionSide::Bottom => prop_assert_eq!(anchor + 1, moved),
        }
    }

    /// Property: random pointer event streams always leave a valid board, and a
    /// drag end always returns the controller to idle.
    #[test]
    fn test_event_streams_keep_board_valid(
        events in proptest::collection::vec((0..6usize, 0..COLUMNS.len(), 0..CARDS.len(), 0.0..100.0f64), 0..60)
    ) {
        let mut engine = DndEngine::new(seed());

        for (kind, column, card, y) in events {
            let column = COLUMNS[column];
            let target = DragTarget::card(column, CARDS[card]);
            let event = match kind {
                0 => DragEvent::DragStart { target },
                1 => DragEvent::DragStart { target: DragTarget::column_header(column) },
                2 => DragEvent::DragOver { target, pointer: Point::new(0.0, y), bounds: Rect::new(0.0, 0.0, 10.0, 100.0) },
                3 => DragEvent::DragLeave { target },
                4 => DragEvent::Drop { target },
                _ => DragEvent::Drop { target: DragTarget::list_end(column) },
            };
            engine.dispatch(&event);
            prop_assert!(engine.board().validate().is_ok());
        }

        engine.dispatch(&DragEvent::DragEnd);
        prop_assert!(engine.session().is_idle());
        prop_assert_eq!(sorted_card_ids(engine.board()), sorted_card_ids(&seed()));
    }
}
