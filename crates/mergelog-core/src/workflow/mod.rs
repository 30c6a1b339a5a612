//! File-level operations around the changelog pipeline

mod changelog;
mod input;

pub use changelog::*;
pub use input::*;
