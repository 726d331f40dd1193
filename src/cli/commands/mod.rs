//! Command implementations

mod plan;
mod prune;

pub use plan::plan;
pub use prune::{PruneArgs, prune};
