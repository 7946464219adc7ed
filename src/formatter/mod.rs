//! Judgment orchestration and formatting strategies
//!
//! Ties tier selection, color resolution and template rendering together,
//! and exposes them behind the [`ScoreFormatter`] strategy.

mod judge;
pub mod provider;
mod strategy;


pub use judge::*;
pub use provider::*;
pub use strategy::*;
