//! Column commands

mod mv;

pub use mv::MoveColumn;
