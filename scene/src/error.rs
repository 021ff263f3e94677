//! Scene error types.

use strew_core::{NodeHandle, PortRef};
use thiserror::Error;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur while applying edits to a scene backend.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeHandle),

    #[error("Node already exists: {0}")]
    DuplicateNode(NodeHandle),

    #[error("Handle {0} is reserved")]
    ReservedHandle(NodeHandle),

    #[error("Cannot parent node {0} to itself")]
    SelfParent(NodeHandle),

    #[error("Reparenting {node} under {parent} would create a cycle")]
    WouldCycle {
        node: NodeHandle,
        parent: NodeHandle,
    },

    #[error("Node {0} is not part of the hierarchy")]
    NotInHierarchy(NodeHandle),

    #[error("Port {0} already has an incoming connection")]
    PortOccupied(PortRef),
}
