//! The builtin operation catalog.
//!
//! Wraps each builder in a named [`Op`] that unpacks call arguments, so raw
//! command sets can refer to the vocabulary by name. Arguments are read by
//! keyword first, positional slot second.

use strew_core::Value;
use strew_engine::{CallArgs, Op, OpError, OpRegistry, OpResult};

use crate::builders::{
    create_group, create_node, create_primitive, create_source, detach_random, pick_group,
    GroupOptions, Parent, PrimitiveOptions,
};
use crate::primitive::{Primitive, PrimitiveKind};

/// A registry holding every builtin operation.
pub fn builtins() -> OpRegistry {
    let mut registry = OpRegistry::new();
    registry.register(pick_group_op());
    registry.register(create_node_op());
    registry.register(create_group_op());
    registry.register(create_source_op());
    registry.register(create_primitive_op());
    registry.register(detach_random_op());
    registry
}

/// `pick_group`: no arguments, returns the picked handle.
pub fn pick_group_op() -> Op {
    Op::new("pick_group", |context, _call| {
        Ok(Value::Node(pick_group(context)))
    })
}

/// `create_node`: `kind` (required), `parent` (null, bool, or node).
pub fn create_node_op() -> Op {
    Op::new("create_node", |context, call| {
        let kind = require_str(call, 0, "kind")?;
        let parent = parent_arg(call, 1, "parent")?;
        Ok(Value::Node(create_node(context, &kind, parent)))
    })
}

/// `create_group`: `name` (optional), `attach` (optional bool).
pub fn create_group_op() -> Op {
    Op::new("create_group", |context, call| {
        let options = GroupOptions {
            name: opt_str(call, 0, "name")?,
            attach: opt_bool(call, 1, "attach")?.unwrap_or(false),
        };
        Ok(Value::Node(create_group(context, options)))
    })
}

/// `create_source`: `kind` (required).
pub fn create_source_op() -> Op {
    Op::new("create_source", |context, call| {
        let kind = require_str(call, 0, "kind")?;
        Ok(Value::Node(create_source(context, &kind)))
    })
}

/// `create_primitive`: `kind`, `name`, `attach`, `fresh_group` (all optional).
pub fn create_primitive_op() -> Op {
    Op::new("create_primitive", |context, call| {
        let defaults = PrimitiveOptions::default();
        let options = PrimitiveOptions {
            kind: kind_arg(call, 0, "kind")?,
            name: opt_str(call, 1, "name")?,
            attach: opt_bool(call, 2, "attach")?.unwrap_or(defaults.attach),
            fresh_group: opt_bool(call, 3, "fresh_group")?.unwrap_or(defaults.fresh_group),
        };
        Ok(primitive_value(create_primitive(context, options)))
    })
}

/// `detach_random`: no arguments.
pub fn detach_random_op() -> Op {
    Op::new("detach_random", |context, _call| {
        detach_random(context);
        Ok(Value::Null)
    })
}

fn primitive_value(primitive: Primitive) -> Value {
    let shapes = primitive.shapes.into_iter().map(Value::Node).collect();
    Value::Map(strew_core::kwargs! {
        "generator" => primitive.generator,
        "group" => primitive.group,
        "shapes" => Value::List(shapes),
    })
}

fn require_str(call: &CallArgs, index: usize, name: &'static str) -> OpResult<String> {
    match call.get(index, name) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(OpError::arg_type(name, "a string", other.type_name())),
        None => Err(OpError::missing_arg(name)),
    }
}

fn opt_str(call: &CallArgs, index: usize, name: &'static str) -> OpResult<Option<String>> {
    match call.get(index, name) {
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(OpError::arg_type(name, "a string or null", other.type_name())),
    }
}

fn opt_bool(call: &CallArgs, index: usize, name: &'static str) -> OpResult<Option<bool>> {
    match call.get(index, name) {
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(OpError::arg_type(name, "a bool or null", other.type_name())),
    }
}

fn parent_arg(call: &CallArgs, index: usize, name: &'static str) -> OpResult<Parent> {
    match call.get(index, name) {
        Some(Value::Bool(true)) => Ok(Parent::Existing),
        Some(Value::Bool(false)) | Some(Value::Null) | None => Ok(Parent::NewGroup),
        Some(Value::Node(handle)) => Ok(Parent::Node(*handle)),
        Some(other) => Err(OpError::arg_type(
            name,
            "a bool, a node, or null",
            other.type_name(),
        )),
    }
}

fn kind_arg(call: &CallArgs, index: usize, name: &'static str) -> OpResult<Option<PrimitiveKind>> {
    match call.get(index, name) {
        Some(Value::String(value)) => match PrimitiveKind::from_name(value) {
            Some(kind) => Ok(Some(kind)),
            None => Err(OpError::invalid_arg(
                name,
                format!("unknown primitive kind '{}'", value),
            )),
        },
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(OpError::arg_type(name, "a string or null", other.type_name())),
    }
}
