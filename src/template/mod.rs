//! Judgment format string handling
//!
//! Judgment texts are small templates such as `"%BGreat%A%n%s"`. They are
//! scanned into tokens once and rendered against a score. Timing segment
//! texts use a restricted grammar that only knows `%t`.

mod ast;
pub mod cache;
pub mod number;
mod renderer;
pub mod scanner;


pub use ast::*;
pub use cache::*;
pub use number::*;
pub use renderer::*;
