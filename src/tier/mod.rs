//! Tier matching and color resolution
//!
//! Selects the judgment tier for a total score, resolves its (optionally
//! faded) color, and looks up sub-metric segment texts.

mod color;
mod selector;


pub use color::*;
pub use selector::*;
