//! Domain models for the labmatch system.

mod definition;
mod matching;

pub use definition::*;
pub use matching::*;
