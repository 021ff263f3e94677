//! Engine error types.

use strew_scene::SceneError;
use thiserror::Error;

/// Result type for command-set validation and normalization.
pub type CommandResult<T> = Result<T, CommandError>;

/// Result type for command operations.
pub type OpResult<T> = Result<T, OpError>;

/// Result type for scheduler runs.
pub type RunResult<T> = Result<T, RunError>;

/// Errors raised while validating a command set.
///
/// All of these are pre-flight rejections: validation never invokes an
/// operation and never touches a context.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command set itself is not a list.
    #[error("Command set is expected to be a list, not {actual}")]
    NotASet { actual: &'static str },

    /// A command is not a list of 2 to 4 elements.
    #[error("Command #{index} is expected to be a list of 2 to 4 elements, got {detail}")]
    BadShape { index: usize, detail: String },

    /// A command's weight is not a real number.
    #[error("Command #{index}: weight is expected to be a real number, not {actual}")]
    BadWeight { index: usize, actual: String },

    /// A command's operation does not resolve to anything invocable.
    #[error("Command #{index}: operation {name} is not registered")]
    UnknownOp { index: usize, name: String },

    /// A command's positional arguments are neither a list nor null.
    #[error("Command #{index}: args are expected to be a list or null, not {actual}")]
    BadArgs { index: usize, actual: &'static str },

    /// A command's keyword arguments are neither a map nor null.
    #[error("Command #{index}: kwargs are expected to be a map or null, not {actual}")]
    BadKwargs { index: usize, actual: &'static str },
}

impl CommandError {
    pub fn not_a_set(actual: &'static str) -> Self {
        Self::NotASet { actual }
    }

    pub fn bad_shape(index: usize, detail: impl Into<String>) -> Self {
        Self::BadShape {
            index,
            detail: detail.into(),
        }
    }

    pub fn bad_weight(index: usize, actual: impl Into<String>) -> Self {
        Self::BadWeight {
            index,
            actual: actual.into(),
        }
    }

    pub fn unknown_op(index: usize, name: impl Into<String>) -> Self {
        Self::UnknownOp {
            index,
            name: name.into(),
        }
    }

    pub fn bad_args(index: usize, actual: &'static str) -> Self {
        Self::BadArgs { index, actual }
    }

    pub fn bad_kwargs(index: usize, actual: &'static str) -> Self {
        Self::BadKwargs { index, actual }
    }
}

/// Errors raised by command operations themselves.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("missing argument '{name}'")]
    MissingArg { name: &'static str },

    #[error("argument '{name}' expects {expected}, not {actual}")]
    ArgType {
        name: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("invalid argument '{name}': {message}")]
    InvalidArg {
        name: &'static str,
        message: String,
    },

    #[error("{0}")]
    Failed(String),
}

impl OpError {
    pub fn missing_arg(name: &'static str) -> Self {
        Self::MissingArg { name }
    }

    pub fn arg_type(name: &'static str, expected: &'static str, actual: impl Into<String>) -> Self {
        Self::ArgType {
            name,
            expected,
            actual: actual.into(),
        }
    }

    pub fn invalid_arg(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArg {
            name,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Errors surfaced by a scheduler run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The command set failed validation; nothing was invoked.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// An operation failed mid-run. Staged, uncommitted edits remain on the
    /// context; there is no automatic rollback.
    #[error("operation '{name}' failed: {source}")]
    Operation {
        name: String,
        #[source]
        source: OpError,
    },

    /// The backend rejected an edit during commit.
    #[error(transparent)]
    Scene(#[from] SceneError),
}
