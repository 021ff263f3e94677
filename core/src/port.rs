//! Port references.

use std::fmt;

use crate::NodeHandle;

/// One end of a connection: a named port on a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortRef {
    /// The node owning the port.
    pub node: NodeHandle,
    /// The port name.
    pub port: String,
}

impl PortRef {
    /// Create a port reference.
    pub fn new(node: NodeHandle, port: impl Into<String>) -> Self {
        Self {
            node,
            port: port.into(),
        }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.node, self.port)
    }
}
