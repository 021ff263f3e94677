//! Strew Engine
//!
//! The scheduling core: weighted commands, deterministic picking, the deferred
//! mutation context, and the run loop.
//!
//! Responsibilities:
//! - Validate and normalize loosely-typed command sets
//! - Pick commands by weight under one explicitly seeded generator
//! - Stage edits on the two-log context and commit them in two phases
//! - Propagate operation failures without rollback

mod command;
mod context;
mod error;
mod picker;
mod registry;
mod runner;

pub use command::{normalize, validate, validate_weights, CallArgs, Command, Op};
pub use context::Context;
pub use error::{CommandError, CommandResult, OpError, OpResult, RunError, RunResult};
pub use picker::{seed_from, WeightedPicker};
pub use registry::OpRegistry;
pub use runner::{run_in, Runner};
