//! Pointer events fed to the drag controller

use super::target::DragTarget;
use crate::types::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A pointer-gesture callback, already resolved to its most specific target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    /// A drag gesture began on `target`
    DragStart { target: DragTarget },
    /// The pointer moved over `target` during a drag
    DragOver {
        target: DragTarget,
        /// Pointer position
        #[serde(default)]
        pointer: Point,
        /// Bounding box of `target`
        #[serde(default)]
        bounds: Rect,
    },
    /// The pointer left `target`
    DragLeave { target: DragTarget },
    /// The dragged element was released over `target`
    Drop { target: DragTarget },
    /// The input system ended the gesture (after a drop, or on cancel)
    DragEnd,
}

impl DragEvent {
    /// Short event name, as used in gesture scripts
    pub fn name(&self) -> &'static str {
        match self {
            Self::DragStart { .. } => "drag_start",
            Self::DragOver { .. } => "drag_over",
            Self::DragLeave { .. } => "drag_leave",
            Self::Drop { .. } => "drop",
            Self::DragEnd => "drag_end",
        }
    }

    pub fn target(&self) -> Option<&DragTarget> {
        match self {
            Self::DragStart { target }
            | Self::DragOver { target, .. }
            | Self::DragLeave { target }
            | Self::Drop { target } => Some(target),
            Self::DragEnd => None,
        }
    }
}
