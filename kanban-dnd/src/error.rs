//! Error types for the drag-and-drop engine
//!
//! Only loading and validation fail. Reorder commands never return an error;
//! a move that cannot be applied leaves the board alone and reports a
//! [`Rejection`](crate::Rejection) instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, DndError>;

/// Errors that can occur while loading or validating boards and scripts
#[derive(Debug, Error)]
pub enum DndError {
    /// Duplicate ID on the board
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Parse error
    #[error("parse error: {message}")]
    Parse { message: String },

    /// File extension does not map to a known seed format
    #[error("unknown file format: {path}")]
    UnknownFormat { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl DndError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DndError::duplicate_id("card", "task-1");
        assert_eq!(err.to_string(), "duplicate card ID: task-1");
    }

    #[test]
    fn test_parse_error() {
        let err = DndError::parse("unexpected token");
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_unknown_format_names_path() {
        let err = DndError::UnknownFormat {
            path: PathBuf::from("board.txt"),
        };
        assert_eq!(err.to_string(), "unknown file format: board.txt");
    }
}
