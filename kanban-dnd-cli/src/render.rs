//! Board and replay output.
//!
//! Table output uses comfy-table; JSON and YAML go through serde.

use crate::cli::OutputFormat;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use kanban_dnd::{Board, CardId, Dispatch, DndEngine, DragEvent, DragSession, InsertionSide};
use serde::Serialize;
use std::io::Write;

/// Create a table that wraps to the terminal width
pub fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Columns side by side, cards top to bottom.
///
/// `indicator` marks the hovered card with the edge a drop would land on.
pub fn board_table(board: &Board, indicator: impl Fn(&CardId) -> Option<InsertionSide>) -> Table {
    let mut table = new_table();
    table.set_header(
        board
            .columns()
            .iter()
            .map(|column| Cell::new(format!("{} [{}]", column.title, column.id))),
    );

    let depth = board.columns().iter().map(|c| c.len()).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(board.columns().iter().map(|column| {
            let text = column
                .items
                .get(row)
                .map(|card| match indicator(&card.id) {
                    Some(InsertionSide::Top) => format!("▲ {}: {}", card.id, card.text),
                    Some(InsertionSide::Bottom) => format!("▼ {}: {}", card.id, card.text),
                    None => format!("{}: {}", card.id, card.text),
                })
                .unwrap_or_default();
            Cell::new(text)
        }));
    }

    if board.columns().iter().any(|c| c.is_empty()) {
        table.add_row(board.columns().iter().map(|column| {
            Cell::new(if column.is_empty() { "(empty)" } else { "" })
        }));
    }

    table
}

/// Print a board in the requested format
pub fn board(out: &mut impl Write, board: &Board, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => writeln!(out, "{}", board_table(board, |_| None))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(board)?)?,
        OutputFormat::Yaml => write!(out, "{}", serde_yaml_ng::to_string(board)?)?,
    }
    Ok(())
}

#[derive(Serialize)]
struct TraceEntry<'a> {
    index: usize,
    event: &'a DragEvent,
    result: &'a Dispatch,
}

#[derive(Serialize)]
struct ReplayReport<'a> {
    revision: u64,
    session: &'a DragSession,
    board: &'a Board,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<TraceEntry<'a>>>,
}

/// Print the outcome of a replayed script
pub fn replay(
    out: &mut impl Write,
    engine: &DndEngine,
    events: &[DragEvent],
    dispatches: &[Dispatch],
    trace: bool,
    format: OutputFormat,
) -> Result<()> {
    let entries = trace.then(|| {
        events
            .iter()
            .zip(dispatches)
            .enumerate()
            .map(|(index, (event, result))| TraceEntry {
                index,
                event,
                result,
            })
            .collect::<Vec<_>>()
    });

    match format {
        OutputFormat::Table => {
            if let Some(entries) = &entries {
                let mut table = new_table();
                table.set_header(["#", "Event", "Target", "Effect"]);
                for entry in entries {
                    table.add_row([
                        entry.index.to_string(),
                        entry.event.name().to_string(),
                        entry
                            .event
                            .target()
                            .map(ToString::to_string)
                            .unwrap_or_default(),
                        entry.result.effect.to_string(),
                    ]);
                }
                writeln!(out, "{table}")?;
            }
            writeln!(out, "{}", board_table(engine.board(), |card| engine.indicator_for(card)))?;
            writeln!(out, "revision {}", engine.revision())?;
            if !engine.session().is_idle() {
                writeln!(out, "drag still in progress: {:?}", engine.session())?;
            }
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            let report = ReplayReport {
                revision: engine.revision(),
                session: engine.session(),
                board: engine.board(),
                trace: entries,
            };
            if format == OutputFormat::Json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                write!(out, "{}", serde_yaml_ng::to_string(&report)?)?;
            }
        }
    }
    Ok(())
}
