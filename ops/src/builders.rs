//! Node-builder operations.
//!
//! The stock vocabulary of command functions. Each one is an ordinary client
//! of the mutation context: it stages edits and registers groups, and nothing
//! it does reaches the backend before the scheduler commits.

use strew_core::{NodeHandle, PortRef};
use strew_engine::Context;

use crate::primitive::{Primitive, PrimitiveKind};

/// Kind tag used for group nodes.
pub const GROUP_KIND: &str = "group";

/// Where a new node should be parented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parent {
    /// Create a fresh group at the scene root to hold the node.
    #[default]
    NewGroup,
    /// Attach under a randomly picked existing group.
    Existing,
    /// Attach under a specific node ([`NodeHandle::NONE`] for the root).
    Node(NodeHandle),
}

/// Options for [`create_group`].
#[derive(Debug, Clone, Default)]
pub struct GroupOptions {
    /// Name to assign at commit, if any.
    pub name: Option<String>,
    /// Parent under a randomly picked existing group instead of the root.
    pub attach: bool,
}

impl GroupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn attach(mut self, attach: bool) -> Self {
        self.attach = attach;
        self
    }
}

/// Options for [`create_primitive`].
#[derive(Debug, Clone)]
pub struct PrimitiveOptions {
    /// Primitive kind; `None` draws one uniformly.
    pub kind: Option<PrimitiveKind>,
    /// Name to assign to the group at commit, if any.
    pub name: Option<String>,
    /// Parent the group under a randomly picked existing group.
    pub attach: bool,
    /// Always create a fresh group for the shapes. When false and `attach`
    /// found a group, the shapes land in that group instead.
    pub fresh_group: bool,
}

impl Default for PrimitiveOptions {
    fn default() -> Self {
        Self {
            kind: None,
            name: None,
            attach: false,
            fresh_group: true,
        }
    }
}

impl PrimitiveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: PrimitiveKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn attach(mut self, attach: bool) -> Self {
        self.attach = attach;
        self
    }

    pub fn fresh_group(mut self, fresh: bool) -> Self {
        self.fresh_group = fresh;
        self
    }
}

/// Randomly pick a registered group.
///
/// Returns [`NodeHandle::NONE`] when nothing has been registered yet.
pub fn pick_group(context: &mut Context) -> NodeHandle {
    context.pick_group()
}

/// Create a node of `kind`.
///
/// With [`Parent::Existing`] the node goes under a randomly picked group; if
/// no group exists, nothing is staged and [`NodeHandle::NONE`] comes back.
/// With [`Parent::NewGroup`] a fresh group is created and registered first and
/// the node goes under it.
pub fn create_node(context: &mut Context, kind: &str, parent: Parent) -> NodeHandle {
    let parent = match parent {
        Parent::Existing => {
            let picked = context.pick_group();
            if picked.is_none() {
                return NodeHandle::NONE;
            }
            picked
        }
        Parent::NewGroup => {
            let group = context.create_child(GROUP_KIND, NodeHandle::NONE);
            context.register_group(group);
            group
        }
        Parent::Node(node) => node,
    };

    context.create_child(kind, parent)
}

/// Create one group node and register it.
pub fn create_group(context: &mut Context, options: GroupOptions) -> NodeHandle {
    let parent = if options.attach {
        context.pick_group()
    } else {
        NodeHandle::NONE
    };

    let group = context.create_child(GROUP_KIND, parent);
    if let Some(name) = options.name {
        context.set_name(group, name);
    }
    context.register_group(group);
    group
}

/// Create a standalone node outside the hierarchy.
pub fn create_source(context: &mut Context, kind: &str) -> NodeHandle {
    context.create_source(kind)
}

/// Create a primitive: one generator fanned out into one shape per output
/// port, all shapes under one group.
///
/// Draw order is fixed: the kind draw (when unset) happens before the group
/// pick. The picked group is reused for the shapes only when `attach` found
/// one and `fresh_group` is off; otherwise a fresh group is created under the
/// picked one (or the root) and registered.
pub fn create_primitive(context: &mut Context, options: PrimitiveOptions) -> Primitive {
    let kind = match options.kind {
        Some(kind) => kind,
        None => PrimitiveKind::sample(context.rng_mut()),
    };
    let traits = kind.traits();

    let picked = if options.attach {
        context.pick_group()
    } else {
        NodeHandle::NONE
    };
    let reuse = !picked.is_none() && !options.fresh_group;

    let generator = context.create_source(traits.generator);
    let group = if reuse {
        picked
    } else {
        context.create_child(GROUP_KIND, picked)
    };

    let mut shapes = Vec::with_capacity(traits.out_ports.len());
    for out_port in traits.out_ports {
        let shape = context.create_child(traits.shape, group);
        context.connect(
            PortRef::new(generator, *out_port),
            PortRef::new(shape, traits.in_port),
        );
        shapes.push(shape);
    }

    if let Some(name) = options.name {
        context.set_name(group, name);
    }
    if !reuse {
        context.register_group(group);
    }

    Primitive {
        generator,
        group,
        shapes,
    }
}

/// Stage a reparent-to-root for a randomly picked group.
///
/// No-op when nothing is registered. The group stays in the registry.
pub fn detach_random(context: &mut Context) {
    let node = context.pick_group();
    if node.is_none() {
        return;
    }

    context.reparent(node, NodeHandle::NONE);
}
