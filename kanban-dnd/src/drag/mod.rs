//! Drag Interaction Controller
//!
//! Pointer events from the renderer come in as [`DragEvent`]s naming the most
//! specific element under the pointer. The [`DragController`] picks the
//! handler from that target and its own [`DragSession`] tag, so a card gesture
//! can never be read as a column gesture and vice versa.

mod controller;
mod event;
mod session;
mod target;

pub use controller::{Dispatch, DragController, Effect};
pub use event::DragEvent;
pub use session::{DragSession, Hover};
pub use target::DragTarget;
