//! mazesolve-export: Pure image encoders (sans-IO).
//!
//! Converts rendered mazes into encoded byte streams. The caller owns
//! the byte sink. Currently supports PNG.

pub mod png;

pub use png::{ExportError, to_png};
