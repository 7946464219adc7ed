//! Configuration module for judgment data structures
//!
//! This module handles deserialization and validation of the display
//! configuration the engine judges against.

mod color;
mod display;
mod judgment;

pub use color::*;
pub use display::*;
pub use judgment::*;
