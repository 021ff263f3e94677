//! In-memory reference backend.

use std::any::Any;
use std::collections::HashMap;

use strew_core::{NodeHandle, PortRef};

use crate::backend::SceneBackend;
use crate::error::{SceneError, SceneResult};

/// A node stored in the in-memory scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// The node handle.
    pub handle: NodeHandle,
    /// The node kind tag.
    pub kind: String,
    /// `None` for a standalone node, `Some(NodeHandle::NONE)` for a child of
    /// the scene root.
    pub parent: Option<NodeHandle>,
    /// Assigned name, if any.
    pub name: Option<String>,
}

/// In-memory scene backend.
///
/// Applies every call immediately and keeps enough bookkeeping for tests and
/// reports to inspect the result. The commit calls are counted no-ops since
/// there is nothing further to flush.
#[derive(Debug, Default)]
pub struct MemoryScene {
    nodes: HashMap<NodeHandle, SceneNode>,
    /// Creation order, for deterministic iteration.
    order: Vec<NodeHandle>,
    connections: Vec<(PortRef, PortRef)>,
    structural_commits: usize,
    data_commits: usize,
}

impl MemoryScene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a node by handle.
    pub fn node(&self, handle: NodeHandle) -> Option<&SceneNode> {
        self.nodes.get(&handle)
    }

    /// Check whether a node exists.
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(&handle)
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &SceneNode> + '_ {
        self.order.iter().filter_map(|h| self.nodes.get(h))
    }

    /// Children of a hierarchy node, in creation order. Pass
    /// [`NodeHandle::NONE`] for the scene root.
    pub fn children(&self, parent: NodeHandle) -> Vec<NodeHandle> {
        self.nodes()
            .filter(|n| n.parent == Some(parent))
            .map(|n| n.handle)
            .collect()
    }

    /// The parent of a node, if it is part of the hierarchy.
    pub fn parent(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.nodes.get(&handle).and_then(|n| n.parent)
    }

    /// The assigned name of a node, if any.
    pub fn name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(&handle).and_then(|n| n.name.as_deref())
    }

    /// All connections, in creation order.
    pub fn connections(&self) -> &[(PortRef, PortRef)] {
        &self.connections
    }

    /// Check whether two ports are connected.
    pub fn is_connected(&self, source: &PortRef, dest: &PortRef) -> bool {
        self.connections
            .iter()
            .any(|(s, d)| s == source && d == dest)
    }

    /// Total node count.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total connection count.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Count of nodes with the given kind tag.
    pub fn kind_count(&self, kind: &str) -> usize {
        self.nodes().filter(|n| n.kind == kind).count()
    }

    /// Number of `commit_structural` calls seen so far.
    pub fn structural_commits(&self) -> usize {
        self.structural_commits
    }

    /// Number of `commit_data` calls seen so far.
    pub fn data_commits(&self) -> usize {
        self.data_commits
    }

    fn require(&self, handle: NodeHandle) -> SceneResult<&SceneNode> {
        self.nodes
            .get(&handle)
            .ok_or(SceneError::UnknownNode(handle))
    }

    /// Walk the parent chain from `start` looking for `target`.
    fn is_ancestor(&self, target: NodeHandle, start: NodeHandle) -> bool {
        let mut current = start;
        while !current.is_none() {
            if current == target {
                return true;
            }
            current = match self.nodes.get(&current).and_then(|n| n.parent) {
                Some(parent) => parent,
                None => break,
            };
        }
        false
    }
}

impl SceneBackend for MemoryScene {
    fn create_node(
        &mut self,
        node: NodeHandle,
        kind: &str,
        parent: Option<NodeHandle>,
    ) -> SceneResult<()> {
        if node.is_none() {
            return Err(SceneError::ReservedHandle(node));
        }
        if self.nodes.contains_key(&node) {
            return Err(SceneError::DuplicateNode(node));
        }
        if let Some(parent) = parent {
            if !parent.is_none() {
                let record = self.require(parent)?;
                if record.parent.is_none() {
                    return Err(SceneError::NotInHierarchy(parent));
                }
            }
        }

        self.nodes.insert(
            node,
            SceneNode {
                handle: node,
                kind: kind.to_string(),
                parent,
                name: None,
            },
        );
        self.order.push(node);
        Ok(())
    }

    fn connect(&mut self, source: &PortRef, dest: &PortRef) -> SceneResult<()> {
        self.require(source.node)?;
        self.require(dest.node)?;
        if self.connections.iter().any(|(_, d)| d == dest) {
            return Err(SceneError::PortOccupied(dest.clone()));
        }

        self.connections.push((source.clone(), dest.clone()));
        Ok(())
    }

    fn reparent(&mut self, node: NodeHandle, parent: NodeHandle) -> SceneResult<()> {
        let record = self.require(node)?;
        if record.parent.is_none() {
            return Err(SceneError::NotInHierarchy(node));
        }
        if node == parent {
            return Err(SceneError::SelfParent(node));
        }
        if !parent.is_none() {
            let target = self.require(parent)?;
            if target.parent.is_none() {
                return Err(SceneError::NotInHierarchy(parent));
            }
            if self.is_ancestor(node, parent) {
                return Err(SceneError::WouldCycle { node, parent });
            }
        }

        if let Some(record) = self.nodes.get_mut(&node) {
            record.parent = Some(parent);
        }
        Ok(())
    }

    fn set_name(&mut self, node: NodeHandle, name: &str) -> SceneResult<()> {
        let record = self
            .nodes
            .get_mut(&node)
            .ok_or(SceneError::UnknownNode(node))?;
        record.name = Some(name.to_string());
        Ok(())
    }

    fn commit_structural(&mut self) -> SceneResult<()> {
        self.structural_commits += 1;
        Ok(())
    }

    fn commit_data(&mut self) -> SceneResult<()> {
        self.data_commits += 1;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
