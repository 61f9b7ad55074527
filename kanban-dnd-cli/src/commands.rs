//! Subcommand handlers.

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::CliConfig;
use crate::render;
use anyhow::{anyhow, Context, Result};
use kanban_dnd::{
    demo_board, Board, CardId, ColumnId, DndEngine, GestureScript, MoveCard, MoveColumn,
    Rejection,
};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Run the parsed command, writing results to `out`
pub fn run(cli: &Cli, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let format = cli.format.unwrap_or(config.format);
    let board = load_board(cli.board.as_deref().or(config.board.as_deref()))?;

    match &cli.command {
        Commands::Show => render::board(out, &board, format),
        Commands::Validate => {
            writeln!(
                out,
                "ok: {} columns, {} cards",
                board.len(),
                board.card_ids().len()
            )?;
            Ok(())
        }
        Commands::Replay { script, trace } => replay(out, board, script, *trace, format),
        Commands::MoveCard {
            card,
            from,
            to,
            onto,
            side,
        } => {
            let card = CardId::from(card.as_str());
            let from = match from {
                Some(from) => ColumnId::from(from.as_str()),
                None => board
                    .locate_card(&card)
                    .map(|(column, _)| column.clone())
                    .ok_or_else(|| anyhow!("card not found: {card}"))?,
            };
            let command = MoveCard::new(card, from, to.as_str())
                .with_target_item(onto.as_deref().map(CardId::from))
                .with_side(side.map(Into::into));

            let mut engine = DndEngine::new(board);
            report(engine.apply(&command));
            render::board(out, engine.board(), format)
        }
        Commands::MoveColumn { column, onto } => {
            let mut engine = DndEngine::new(board);
            report(engine.apply(&MoveColumn::new(column.as_str(), onto.as_str())));
            render::board(out, engine.board(), format)
        }
    }
}

fn load_board(path: Option<&Path>) -> Result<Board> {
    match path {
        Some(path) => Board::from_path(path)
            .with_context(|| format!("failed to load board from {}", path.display())),
        None => Ok(demo_board()),
    }
}

fn replay(
    out: &mut impl Write,
    board: Board,
    script: &Path,
    trace: bool,
    format: OutputFormat,
) -> Result<()> {
    let script = GestureScript::from_path(script)
        .with_context(|| format!("failed to load gesture script from {}", script.display()))?;

    let mut engine = DndEngine::new(board);
    let dispatches = script.replay(&mut engine);
    info!(
        events = script.len(),
        revision = engine.revision(),
        "replay finished"
    );

    render::replay(out, &engine, script.events(), &dispatches, trace, format)
}

fn report(result: Result<u64, Rejection>) {
    match result {
        Ok(revision) => info!(revision, "board updated"),
        Err(rejection) => {
            warn!(%rejection, "board unchanged");
            eprintln!("Warning: board unchanged: {rejection}");
        }
    }
}
