//! Engine-agnostic solve abstractions.
//!
//! This crate provides the protocol types sitting between the model
//! adapter (`rowform-core`) and a concrete solve engine (`rowform-highs`).
//!
//! # Overview
//!
//! - [`Engine`]: the narrow interface a solve engine implements
//! - [`EngineReport`]: raw solve outcome before decoding
//! - [`SolveStatus`]: classified status values across engines
//! - [`SolverConfig`]: adapter-level solve configuration
//! - [`Solution`]: decoded, caller-facing solve result

mod config;
mod engine;
mod error;
mod solution;
mod status;
mod types;

pub use config::SolverConfig;
pub use engine::{Engine, EngineReport};
pub use error::EngineError;
pub use solution::Solution;
pub use status::SolveStatus;
pub use types::{Direction, VarKind, VarSpec};
