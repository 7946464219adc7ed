//! Score input module

mod input;

pub use input::*;
