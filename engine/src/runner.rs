//! The scheduler.
//!
//! Seeds the generator, validates the command set, then picks and invokes
//! weighted commands against one shared context, committing the staged edits
//! at the end of the loop.

use strew_core::Value;

use crate::command::{self, Command};
use crate::context::Context;
use crate::error::{RunError, RunResult};
use crate::picker::WeightedPicker;
use crate::registry::OpRegistry;

/// Run weighted commands against an existing context.
///
/// Steps: re-seed the context generator (`None` draws from OS entropy),
/// validate the weights, drop non-positive ones, then pick-and-invoke `count`
/// times and commit. When every command is dropped the loop is skipped
/// entirely; that is not an error, and the commit still runs.
///
/// An operation error propagates immediately. Whatever was staged before the
/// failure stays on `context`; there is no rollback, and the commit does not
/// run.
pub fn run_in(
    context: &mut Context,
    commands: &[Command],
    count: usize,
    seed: Option<u64>,
) -> RunResult<()> {
    context.reseed(seed);
    command::validate_weights(commands)?;

    let picker = WeightedPicker::new(commands.iter().map(|c| c.weight));
    if !picker.is_empty() {
        for _ in 0..count {
            let Some(index) = picker.pick(context.rng_mut()) else {
                break;
            };
            let command = &commands[index];
            command
                .op
                .invoke(context, &command.call)
                .map_err(|source| RunError::Operation {
                    name: command.op.name().to_string(),
                    source,
                })?;
        }
    }

    context.commit()?;
    Ok(())
}

/// Builder-style front end for [`run_in`].
///
/// ```no_run
/// # use strew_engine::{Command, Op, Runner};
/// # use strew_core::Value;
/// # let noop = Op::new("noop", |_ctx, _call| Ok(Value::Null));
/// let commands = vec![Command::new(1.0, noop)];
/// let context = Runner::new().seed(42).run(&commands, 1000)?;
/// # Ok::<(), strew_engine::RunError>(())
/// ```
#[derive(Debug, Default)]
pub struct Runner {
    seed: Option<u64>,
    context: Option<Context>,
}

impl Runner {
    /// Create a runner with no seed and a fresh default context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the generator seed for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Supply an existing context, chaining onto a previous run.
    pub fn context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Run a typed command set and hand the context back.
    pub fn run(self, commands: &[Command], count: usize) -> RunResult<Context> {
        let mut context = self.context.unwrap_or_default();
        run_in(&mut context, commands, count, self.seed)?;
        Ok(context)
    }

    /// Validate and normalize a raw command set, then run it.
    pub fn run_raw(
        self,
        raw: &Value,
        registry: &OpRegistry,
        count: usize,
    ) -> RunResult<Context> {
        let commands = command::normalize(raw, registry)?;
        self.run(&commands, count)
    }
}
