//! Operation registry.
//!
//! Runtime name-to-operation lookup. Raw command sets refer to operations by
//! name; the registry is the single source of truth for what those names
//! resolve to. Populated at setup time, read-only during a run.

use std::collections::HashMap;

use crate::command::Op;

/// Name → operation lookup table.
#[derive(Debug, Clone, Default)]
pub struct OpRegistry {
    ops: HashMap<String, Op>,
}

impl OpRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operation under its own name. A later registration with
    /// the same name replaces the earlier one.
    pub fn register(&mut self, op: Op) {
        self.ops.insert(op.name().to_string(), op);
    }

    /// Look up an operation by name.
    pub fn get(&self, name: &str) -> Option<&Op> {
        self.ops.get(name)
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ops.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
