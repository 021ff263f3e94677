//! Shared fixtures for the strew integration tests.

use strew_core::Value;
use strew_engine::{Context, Op};

pub use recording::{BackendCall, RecordingBackend};

mod recording {
    use std::any::Any;

    use strew_core::{NodeHandle, PortRef};
    use strew_scene::{SceneBackend, SceneResult};

    /// One call received by [`RecordingBackend`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum BackendCall {
        CreateNode {
            node: NodeHandle,
            kind: String,
            parent: Option<NodeHandle>,
        },
        Connect {
            source: PortRef,
            dest: PortRef,
        },
        Reparent {
            node: NodeHandle,
            parent: NodeHandle,
        },
        SetName {
            node: NodeHandle,
            name: String,
        },
        CommitStructural,
        CommitData,
    }

    impl BackendCall {
        /// Whether this call belongs to the structural phase of a commit.
        pub fn is_structural(&self) -> bool {
            matches!(
                self,
                BackendCall::CreateNode {
                    parent: Some(_),
                    ..
                } | BackendCall::Reparent { .. }
                    | BackendCall::CommitStructural
            )
        }
    }

    /// A backend that only records what it is told, in order.
    #[derive(Debug, Default)]
    pub struct RecordingBackend {
        calls: Vec<BackendCall>,
    }

    impl RecordingBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> &[BackendCall] {
            &self.calls
        }
    }

    impl SceneBackend for RecordingBackend {
        fn create_node(
            &mut self,
            node: NodeHandle,
            kind: &str,
            parent: Option<NodeHandle>,
        ) -> SceneResult<()> {
            self.calls.push(BackendCall::CreateNode {
                node,
                kind: kind.to_string(),
                parent,
            });
            Ok(())
        }

        fn connect(&mut self, source: &PortRef, dest: &PortRef) -> SceneResult<()> {
            self.calls.push(BackendCall::Connect {
                source: source.clone(),
                dest: dest.clone(),
            });
            Ok(())
        }

        fn reparent(&mut self, node: NodeHandle, parent: NodeHandle) -> SceneResult<()> {
            self.calls.push(BackendCall::Reparent { node, parent });
            Ok(())
        }

        fn set_name(&mut self, node: NodeHandle, name: &str) -> SceneResult<()> {
            self.calls.push(BackendCall::SetName {
                node,
                name: name.to_string(),
            });
            Ok(())
        }

        fn commit_structural(&mut self) -> SceneResult<()> {
            self.calls.push(BackendCall::CommitStructural);
            Ok(())
        }

        fn commit_data(&mut self) -> SceneResult<()> {
            self.calls.push(BackendCall::CommitData);
            Ok(())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }
}

/// An op that counts its invocations in the context's extra fields.
pub fn counter_op(name: &'static str, key: &'static str) -> Op {
    Op::new(name, move |context: &mut Context, _call: &_| {
        let entry = context
            .extra_mut()
            .entry(key.to_string())
            .or_insert(Value::Int(0));
        if let Value::Int(count) = entry {
            *count += 1;
        }
        Ok(Value::Null)
    })
}

/// Read a counter written by [`counter_op`].
pub fn count_of(context: &Context, key: &str) -> i64 {
    context
        .extra()
        .get(key)
        .and_then(Value::as_int)
        .unwrap_or(0)
}
