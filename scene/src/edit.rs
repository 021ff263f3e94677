//! Pending edits.
//!
//! Edits are staged by command functions and applied in batch at commit time.
//! Structural edits change the hierarchy; data edits create standalone nodes,
//! wire connections, and assign names. Within one commit, every structural
//! edit takes effect before any data edit.

use strew_core::{NodeHandle, PortRef};

/// A pending topology edit.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuralEdit {
    /// Create a node in the hierarchy. `parent` may be [`NodeHandle::NONE`]
    /// for the scene root.
    CreateNode {
        node: NodeHandle,
        kind: String,
        parent: NodeHandle,
    },
    /// Move a hierarchy node under a new parent.
    Reparent {
        node: NodeHandle,
        parent: NodeHandle,
    },
}

/// A pending non-topology edit.
#[derive(Debug, Clone, PartialEq)]
pub enum DataEdit {
    /// Create a standalone node outside the hierarchy.
    CreateNode { node: NodeHandle, kind: String },
    /// Connect an output port to an input port.
    Connect { source: PortRef, dest: PortRef },
    /// Assign a name to a node.
    SetName { node: NodeHandle, name: String },
}
