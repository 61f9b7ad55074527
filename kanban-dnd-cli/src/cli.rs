use clap::{Parser, Subcommand, ValueEnum};
use kanban_dnd::InsertionSide;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

// The library's InsertionSide doesn't derive ValueEnum
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideArg {
    Top,
    Bottom,
}

impl From<SideArg> for InsertionSide {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Top => InsertionSide::Top,
            SideArg::Bottom => InsertionSide::Bottom,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kanban-dnd")]
#[command(version)]
#[command(about = "Replay drag-and-drop gestures against a kanban board")]
#[command(long_about = "
kanban-dnd loads a board seed (YAML or JSON), feeds pointer events through the
drag-and-drop engine and prints the resulting arrangement. Without --board the
built-in demo board is used.

Configuration is read from kanban-dnd.toml or kanban-dnd.yaml in the current
directory and from KANBAN_DND_* environment variables; flags take precedence.")]
pub struct Cli {
    /// Board seed file (.yaml, .yml or .json)
    #[arg(long, global = true, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Enable trace logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the board
    Show,
    /// Check the board seed for duplicate column or card IDs
    Validate,
    /// Replay a gesture script of pointer events
    Replay {
        /// Script file (.yaml, .yml or .json)
        script: PathBuf,
        /// Print what every event did
        #[arg(long)]
        trace: bool,
    },
    /// Move a card, as if dragged and dropped
    MoveCard {
        /// Card to move
        card: String,
        /// Column the card is in (looked up when omitted)
        #[arg(long)]
        from: Option<String>,
        /// Column to drop into
        #[arg(long)]
        to: String,
        /// Card to drop against; appends to the end when omitted
        #[arg(long)]
        onto: Option<String>,
        /// Edge of --onto to insert against
        #[arg(long, value_enum, requires = "onto")]
        side: Option<SideArg>,
    },
    /// Move a column to the position of another column
    MoveColumn {
        /// Column to move
        column: String,
        /// Column whose position it takes
        #[arg(long)]
        onto: String,
    },
}
