//! Command mixes.
//!
//! Preset mixes cover the common stress profiles; JSON mix files feed the
//! same loosely-typed command-set format the engine validates.

use strew_core::Value;
use strew_engine::{normalize, Command, OpRegistry};
use strew_ops::{
    create_group_op, create_node_op, create_primitive_op, create_source_op, detach_random_op,
};

use crate::error::MixError;

/// A balanced mix: primitives, groups, attachments, the odd detach.
pub fn default_mix() -> Vec<Command> {
    vec![
        Command::new(4.0, create_primitive_op()),
        Command::new(2.0, create_group_op()),
        Command::new(1.5, create_primitive_op()).kwarg("attach", true),
        Command::new(1.0, create_node_op())
            .kwarg("kind", "camera")
            .kwarg("parent", true),
        Command::new(1.0, create_source_op()).kwarg("kind", "noiseGen"),
        Command::new(0.5, detach_random_op()),
    ]
}

/// A primitive-heavy mix, weighted toward the wide fan-out kinds.
pub fn primitives_mix() -> Vec<Command> {
    vec![
        Command::new(3.0, create_primitive_op()).kwarg("kind", "meshCube"),
        Command::new(2.0, create_primitive_op()).kwarg("kind", "surfaceCube"),
        Command::new(1.0, create_primitive_op()).kwarg("kind", "curveSquare"),
        Command::new(1.0, create_primitive_op()),
    ]
}

/// A hierarchy-churn mix: deep grouping and reparenting, no geometry.
pub fn hierarchy_mix() -> Vec<Command> {
    vec![
        Command::new(3.0, create_group_op()),
        Command::new(2.0, create_group_op()).kwarg("attach", true),
        Command::new(1.0, create_node_op())
            .kwarg("kind", "locator")
            .kwarg("parent", true),
        Command::new(1.0, detach_random_op()),
    ]
}

/// Look up a preset mix by name.
pub fn preset(name: &str) -> Result<Vec<Command>, MixError> {
    match name {
        "default" => Ok(default_mix()),
        "primitives" => Ok(primitives_mix()),
        "hierarchy" => Ok(hierarchy_mix()),
        other => Err(MixError::UnknownPreset(other.to_string())),
    }
}

/// Load a mix from JSON text: a list of `[weight, op, args?, kwargs?]` lists.
pub fn from_json(text: &str, registry: &OpRegistry) -> Result<Vec<Command>, MixError> {
    let parsed: serde_json::Value = serde_json::from_str(text)?;
    let raw = convert(parsed);
    Ok(normalize(&raw, registry)?)
}

/// Map a JSON value onto the engine's dynamic value type.
fn convert(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Null
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::List(items.into_iter().map(convert).collect())
        }
        serde_json::Value::Object(map) => Value::Map(
            map.into_iter()
                .map(|(key, value)| (key, convert(value)))
                .collect(),
        ),
    }
}
