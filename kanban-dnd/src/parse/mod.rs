//! Loading board seeds and gesture scripts
//!
//! Both accept YAML or JSON. Files are told apart by extension.

use crate::drag::{Dispatch, DragEvent};
use crate::engine::DndEngine;
use crate::error::{DndError, Result};
use crate::types::Board;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Serialization format of a seed or script file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Yaml,
    Json,
}

impl SeedFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(DndError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn parse<T: for<'de> Deserialize<'de>>(self, input: &str) -> Result<T> {
        Ok(match self {
            Self::Yaml => serde_yaml_ng::from_str(input)?,
            Self::Json => serde_json::from_str(input)?,
        })
    }
}

impl Board {
    /// Parse and validate a YAML board seed
    pub fn from_yaml(input: &str) -> Result<Self> {
        Self::parse(SeedFormat::Yaml, input)
    }

    /// Parse and validate a JSON board seed
    pub fn from_json(input: &str) -> Result<Self> {
        Self::parse(SeedFormat::Json, input)
    }

    /// Read, parse and validate a board seed file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SeedFormat::from_path(path)?;
        let input = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), ?format, "loading board seed");
        Self::parse(format, &input)
    }

    fn parse(format: SeedFormat, input: &str) -> Result<Self> {
        let board: Board = format.parse(input)?;
        board.validate()?;
        Ok(board)
    }
}

/// An ordered list of pointer events to replay against an engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GestureScript {
    events: Vec<DragEvent>,
}

impl GestureScript {
    pub fn new(events: impl IntoIterator<Item = DragEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn from_yaml(input: &str) -> Result<Self> {
        SeedFormat::Yaml.parse(input)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        SeedFormat::Json.parse(input)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SeedFormat::from_path(path)?;
        let input = std::fs::read_to_string(path)?;
        format.parse(&input)
    }

    pub fn events(&self) -> &[DragEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Feed every event to `engine` in order, returning one dispatch per event
    pub fn replay(&self, engine: &mut DndEngine) -> Vec<Dispatch> {
        self.events
            .iter()
            .map(|event| engine.dispatch(event))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::{DragTarget, Effect};
    use crate::types::{Point, Rect};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCRIPT: &str = r#"
- event: drag_start
  target: { kind: card, column: column-1, card: task-1 }
- event: drag_over
  target: { kind: card, column: column-2, card: task-4 }
  pointer: { x: 10, y: 5 }
  bounds: { left: 0, top: 0, width: 100, height: 40 }
- event: drop
  target: { kind: card, column: column-2, card: task-4 }
"#;

    #[test]
    fn test_script_from_yaml() {
        let script = GestureScript::from_yaml(SCRIPT).unwrap();
        assert_eq!(script.len(), 3);
        assert_eq!(
            script.events()[1],
            DragEvent::DragOver {
                target: DragTarget::card("column-2", "task-4"),
                pointer: Point::new(10.0, 5.0),
                bounds: Rect::new(0.0, 0.0, 100.0, 40.0),
            }
        );
    }

    #[test]
    fn test_script_json_with_unit_event() {
        let script = GestureScript::from_json(
            r#"[{"event":"drag_start","target":{"kind":"column_header","column":"c1"}},{"event":"drag_end"}]"#,
        )
        .unwrap();
        assert_eq!(script.events()[1], DragEvent::DragEnd);
    }

    #[test]
    fn test_replay_against_demo_board() {
        let mut engine = DndEngine::new(crate::demo_board());
        let dispatches = GestureScript::from_yaml(SCRIPT).unwrap().replay(&mut engine);

        assert_eq!(dispatches[2].effect, Effect::Committed { revision: 1 });
        let ids: Vec<_> = engine
            .board()
            .column(&"column-2".into())
            .unwrap()
            .card_ids()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, ["task-1", "task-4", "task-5"]);
    }

    #[test]
    fn test_seed_rejects_duplicates() {
        let err = Board::from_json(
            r#"{"columns":[{"id":"a","title":"A","items":[{"id":"x","text":"X"}]},{"id":"b","title":"B","items":[{"id":"x","text":"X"}]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DndError::DuplicateId { .. }));
    }

    #[test]
    fn test_seed_from_path() {
        let mut file = NamedTempFile::with_suffix(".yml").unwrap();
        writeln!(file, "columns:\n  - {{ id: solo, title: Solo }}").unwrap();

        let board = Board::from_path(file.path()).unwrap();
        assert_eq!(board.column_ids(), vec!["solo"]);
    }

    #[test]
    fn test_unknown_extension() {
        let err = SeedFormat::from_path(Path::new("board.txt")).unwrap_err();
        assert!(matches!(err, DndError::UnknownFormat { .. }));
    }
}
