//! Weighted commands.
//!
//! The canonical command is a typed record: a weight, a named operation, and
//! its call arguments. Raw command sets may also arrive as loosely-typed
//! [`Value`] data, a list of `[weight, op-name, args?, kwargs?]` lists, and
//! are checked by [`validate`] and mapped to canonical commands by
//! [`normalize`]. That adapter stays at the boundary; the scheduler core only
//! ever sees canonical commands.

use std::fmt;
use std::sync::Arc;

use strew_core::{Kwargs, Value};

use crate::context::Context;
use crate::error::{CommandError, CommandResult, OpResult};
use crate::registry::OpRegistry;

/// Positional and keyword arguments for one command invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    /// Positional arguments.
    pub args: Vec<Value>,
    /// Keyword arguments.
    pub kwargs: Kwargs,
}

impl CallArgs {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an argument by keyword, falling back to its positional slot.
    pub fn get(&self, index: usize, name: &str) -> Option<&Value> {
        self.kwargs.get(name).or_else(|| self.args.get(index))
    }

    /// Check whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.kwargs.is_empty()
    }
}

type OpFunc = dyn Fn(&mut Context, &CallArgs) -> OpResult<Value>;

/// A named, invocable operation.
///
/// Operations take the mutation context as their first argument and may stage
/// edits on it, draw from its generator, and register nodes. Cloning an `Op`
/// is cheap; the function is shared.
#[derive(Clone)]
pub struct Op {
    name: Arc<str>,
    func: Arc<OpFunc>,
}

impl Op {
    /// Create a named operation from a function.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut Context, &CallArgs) -> OpResult<Value> + 'static,
    {
        Self {
            name: name.into().into(),
            func: Arc::new(func),
        }
    }

    /// The operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the operation against a context.
    pub fn invoke(&self, context: &mut Context, call: &CallArgs) -> OpResult<Value> {
        (self.func)(context, call)
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Op({})", self.name)
    }
}

/// A weighted command: the unit the scheduler picks and invokes.
#[derive(Debug, Clone)]
pub struct Command {
    /// Relative pick probability. Commands with non-positive weight are
    /// never picked; the weight must be a real (finite) number.
    pub weight: f64,
    /// The operation to invoke.
    pub op: Op,
    /// Arguments passed along with the context.
    pub call: CallArgs,
}

impl Command {
    /// Create a command with no extra arguments.
    pub fn new(weight: f64, op: Op) -> Self {
        Self {
            weight,
            op,
            call: CallArgs::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.call.args.push(value.into());
        self
    }

    /// Set a keyword argument.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.call.kwargs.insert(key.into(), value.into());
        self
    }
}

/// Number of required fields in a raw command entry.
const REQUIRED_FIELDS: usize = 2;
/// Maximum number of fields in a raw command entry.
const MAX_FIELDS: usize = 4;

/// Check a raw command set for well-formedness.
///
/// Mirrors the canonical two-pass order: first the overall shape of every
/// command, then each command's fields, reporting the first offense. This
/// never invokes an operation and never touches a context.
pub fn validate(raw: &Value, registry: &OpRegistry) -> CommandResult<()> {
    let entries = match raw.as_list() {
        Some(entries) => entries,
        None => return Err(CommandError::not_a_set(raw.type_name())),
    };

    // Overall shape of each command.
    for (index, entry) in entries.iter().enumerate() {
        let fields = match entry.as_list() {
            Some(fields) => fields,
            None => return Err(CommandError::bad_shape(index, entry.type_name())),
        };
        if fields.len() < REQUIRED_FIELDS || fields.len() > MAX_FIELDS {
            return Err(CommandError::bad_shape(
                index,
                format!("{} elements", fields.len()),
            ));
        }
    }

    // Each command field.
    for (index, entry) in entries.iter().enumerate() {
        let Some(fields) = entry.as_list() else {
            continue;
        };

        match &fields[0] {
            Value::Int(_) => {}
            Value::Float(weight) if weight.is_finite() => {}
            other => return Err(CommandError::bad_weight(index, other.to_string())),
        }

        match &fields[1] {
            Value::String(name) if registry.contains(name) => {}
            Value::String(name) => {
                return Err(CommandError::unknown_op(index, format!("'{}'", name)))
            }
            other => {
                return Err(CommandError::unknown_op(
                    index,
                    format!("<{}>", other.type_name()),
                ))
            }
        }

        if let Some(args) = fields.get(2) {
            if !args.is_list() && !args.is_null() {
                return Err(CommandError::bad_args(index, args.type_name()));
            }
        }

        if let Some(kwargs) = fields.get(3) {
            if !kwargs.is_map() && !kwargs.is_null() {
                return Err(CommandError::bad_kwargs(index, kwargs.type_name()));
            }
        }
    }

    Ok(())
}

/// Map a raw command set to canonical commands.
///
/// Absent or null args/kwargs become empty. Pure; order is preserved.
pub fn normalize(raw: &Value, registry: &OpRegistry) -> CommandResult<Vec<Command>> {
    validate(raw, registry)?;

    let Some(entries) = raw.as_list() else {
        return Ok(Vec::new());
    };

    let mut commands = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(fields) = entry.as_list() else {
            continue;
        };
        let (Some(weight), Some(name)) = (fields[0].as_number(), fields[1].as_str()) else {
            continue;
        };
        let Some(op) = registry.get(name) else {
            continue;
        };

        let args = match fields.get(2) {
            Some(Value::List(items)) => items.clone(),
            _ => Vec::new(),
        };
        let kwargs = match fields.get(3) {
            Some(Value::Map(map)) => map.clone(),
            _ => Kwargs::new(),
        };

        commands.push(Command {
            weight,
            op: op.clone(),
            call: CallArgs { args, kwargs },
        });
    }

    Ok(commands)
}

/// Check the weights of an already-typed command set.
///
/// The type system guarantees everything else about a [`Command`]; the one
/// thing it cannot rule out is a weight that is not a real number.
pub fn validate_weights(commands: &[Command]) -> CommandResult<()> {
    for (index, command) in commands.iter().enumerate() {
        if !command.weight.is_finite() {
            return Err(CommandError::bad_weight(index, command.weight.to_string()));
        }
    }
    Ok(())
}
