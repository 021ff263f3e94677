//! The scene backend contract.

use std::any::Any;

use strew_core::{NodeHandle, PortRef};

use crate::error::SceneResult;

/// What the engine requires from the system that really builds the scene.
///
/// Handles are allocated by the caller before any backend call is made, so
/// staged edits can reference nodes that do not exist yet; `create_node`
/// therefore receives the handle instead of returning one. Implementations
/// may themselves defer work; the engine only requires that calls take effect
/// in the order they are issued, with `commit_structural` flushed before any
/// data call of the same commit.
pub trait SceneBackend {
    /// Create a node. `parent` is `None` for a standalone node outside the
    /// hierarchy, `Some(NodeHandle::NONE)` for a child of the scene root.
    fn create_node(
        &mut self,
        node: NodeHandle,
        kind: &str,
        parent: Option<NodeHandle>,
    ) -> SceneResult<()>;

    /// Connect an output port to an input port.
    fn connect(&mut self, source: &PortRef, dest: &PortRef) -> SceneResult<()>;

    /// Move a hierarchy node under a new parent ([`NodeHandle::NONE`] for the
    /// scene root).
    fn reparent(&mut self, node: NodeHandle, parent: NodeHandle) -> SceneResult<()>;

    /// Assign a name to a node.
    fn set_name(&mut self, node: NodeHandle, name: &str) -> SceneResult<()>;

    /// Flush pending structural work.
    fn commit_structural(&mut self) -> SceneResult<()>;

    /// Flush pending data work.
    fn commit_data(&mut self) -> SceneResult<()>;

    /// Downcast support for inspecting a concrete backend.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
