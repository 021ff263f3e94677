//! Run reports.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strew_engine::Context;
use strew_scene::MemoryScene;

/// Summary of one workload run.
///
/// Scene totals are read from the in-memory backend; they come out as zero
/// for a foreign backend the report cannot see into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Generator seed the run used.
    pub seed: u64,
    /// Number of command invocations asked for.
    pub iterations: usize,
    /// Wall-clock time of the run.
    pub elapsed_ms: u64,
    /// Nodes in the scene after commit.
    pub nodes: usize,
    /// Connections in the scene after commit.
    pub connections: usize,
    /// Groups registered on the context.
    pub groups: usize,
}

impl RunReport {
    /// Collect a report from a finished run.
    pub fn collect(context: &Context, seed: u64, iterations: usize, elapsed: Duration) -> Self {
        let scene = context.backend_as::<MemoryScene>();
        Self {
            seed,
            iterations,
            elapsed_ms: elapsed.as_millis() as u64,
            nodes: scene.map_or(0, MemoryScene::node_count),
            connections: scene.map_or(0, MemoryScene::connection_count),
            groups: context.groups().len(),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
