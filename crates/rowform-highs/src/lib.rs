//! HiGHS-backed engine for the rowform model adapter.

mod dump;
mod engine;
mod status;

pub use engine::{HighsEngine, highs_version};
