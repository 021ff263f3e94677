//! Strew Ops
//!
//! The stock node-builder vocabulary: typed builder functions, the primitive
//! trait table they wire from, and the named operation catalog that exposes
//! them to raw command sets.

mod builders;
mod catalog;
mod primitive;

pub use builders::{
    create_group, create_node, create_primitive, create_source, detach_random, pick_group,
    GroupOptions, Parent, PrimitiveOptions, GROUP_KIND,
};
pub use catalog::{
    builtins, create_group_op, create_node_op, create_primitive_op, create_source_op,
    detach_random_op, pick_group_op,
};
pub use primitive::{Primitive, PrimitiveKind, PrimitiveTraits};
