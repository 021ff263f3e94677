//! Strew Workload
//!
//! Ready-made stress profiles and the reporting around them.
//!
//! Responsibilities:
//! - Preset command mixes for common stress shapes
//! - JSON mix-file loading through the engine's command-set validation
//! - Run summaries for the workload-runner binary

mod error;
mod mix;
mod report;

pub use error::MixError;
pub use mix::{default_mix, from_json, hierarchy_mix, preset, primitives_mix};
pub use report::RunReport;
