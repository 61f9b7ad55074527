//! Pointer geometry and insertion side for card drops.

use serde::{Deserialize, Serialize};

/// Which edge of a hovered card the dragged card lands against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionSide {
    /// Insert immediately before the hovered card
    Top,
    /// Insert immediately after the hovered card
    Bottom,
}

impl InsertionSide {
    /// Pick the side from the pointer's height within the hovered card.
    ///
    /// Strictly above the vertical midpoint is `Top`; the midpoint itself and
    /// anything below it is `Bottom`.
    pub fn from_pointer(pointer: Point, bounds: Rect) -> Self {
        if pointer.y < bounds.mid_y() {
            Self::Top
        } else {
            Self::Bottom
        }
    }

    /// Index offset relative to the hovered card's index
    pub fn offset(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for InsertionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InsertionSide {
    type Err = crate::DndError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(crate::DndError::parse(format!(
                "insertion side must be 'top' or 'bottom', got '{other}'"
            ))),
        }
    }
}

/// Pointer coordinates in the renderer's client space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the element under the pointer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Vertical midpoint
    pub fn mid_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}
