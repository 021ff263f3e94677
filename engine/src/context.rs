//! Mutation context.
//!
//! The one shared object every command operates on. It holds the two pending
//! edit logs, the group registry, the seeded generator, and the backend the
//! logs are committed through. No edit reaches the backend before
//! [`Context::commit`] runs.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strew_core::{Kwargs, NodeHandle, PortRef, Value};
use strew_scene::{DataEdit, MemoryScene, SceneBackend, SceneResult, StructuralEdit};

/// Evaluation context for command operations.
pub struct Context {
    backend: Box<dyn SceneBackend>,
    structural: Vec<StructuralEdit>,
    data: Vec<DataEdit>,
    groups: Vec<NodeHandle>,
    extra: Kwargs,
    rng: StdRng,
    next_handle: u64,
}

impl Context {
    /// Create a context over a backend. The generator starts from OS entropy;
    /// use [`Context::with_seed`] or a seeded run for reproducibility.
    pub fn new(backend: Box<dyn SceneBackend>) -> Self {
        Self {
            backend,
            structural: Vec::new(),
            data: Vec::new(),
            groups: Vec::new(),
            extra: Kwargs::new(),
            rng: StdRng::from_entropy(),
            next_handle: 1,
        }
    }

    /// Seed the generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Attach a caller-defined named field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Re-seed the generator; `None` falls back to OS entropy.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
    }

    /// The shared generator. Command operations draw from this, never from a
    /// process-global source, so draws interleave deterministically with the
    /// scheduler's own picks.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Allocate a fresh node handle.
    pub fn alloc_handle(&mut self) -> NodeHandle {
        let handle = NodeHandle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    // ==================== Staging ====================

    /// Stage a structural edit.
    pub fn stage_structural(&mut self, edit: StructuralEdit) {
        self.structural.push(edit);
    }

    /// Stage a data edit.
    pub fn stage_data(&mut self, edit: DataEdit) {
        self.data.push(edit);
    }

    /// Allocate a handle and stage the creation of a hierarchy node under
    /// `parent` ([`NodeHandle::NONE`] for the scene root).
    pub fn create_child(&mut self, kind: impl Into<String>, parent: NodeHandle) -> NodeHandle {
        let node = self.alloc_handle();
        self.stage_structural(StructuralEdit::CreateNode {
            node,
            kind: kind.into(),
            parent,
        });
        node
    }

    /// Allocate a handle and stage the creation of a standalone node.
    pub fn create_source(&mut self, kind: impl Into<String>) -> NodeHandle {
        let node = self.alloc_handle();
        self.stage_data(DataEdit::CreateNode {
            node,
            kind: kind.into(),
        });
        node
    }

    /// Stage a connection between two ports.
    pub fn connect(&mut self, source: PortRef, dest: PortRef) {
        self.stage_data(DataEdit::Connect { source, dest });
    }

    /// Stage a name assignment.
    pub fn set_name(&mut self, node: NodeHandle, name: impl Into<String>) {
        self.stage_data(DataEdit::SetName {
            node,
            name: name.into(),
        });
    }

    /// Stage a reparent ([`NodeHandle::NONE`] for the scene root).
    pub fn reparent(&mut self, node: NodeHandle, parent: NodeHandle) {
        self.stage_structural(StructuralEdit::Reparent { node, parent });
    }

    // ==================== Registry ====================

    /// Register a group handle for random picking.
    pub fn register_group(&mut self, group: NodeHandle) {
        self.groups.push(group);
    }

    /// Pick a uniformly random registered group, or [`NodeHandle::NONE`] when
    /// none has been registered.
    pub fn pick_group(&mut self) -> NodeHandle {
        if self.groups.is_empty() {
            return NodeHandle::NONE;
        }
        self.groups[self.rng.gen_range(0..self.groups.len())]
    }

    /// Registered groups, in registration order.
    pub fn groups(&self) -> &[NodeHandle] {
        &self.groups
    }

    // ==================== Commit ====================

    /// Apply all staged edits to the backend: the structural log in order,
    /// then the data log in order, clearing each after its flush. Harmless
    /// when both logs are empty; the backend commit calls still run.
    pub fn commit(&mut self) -> SceneResult<()> {
        for edit in &self.structural {
            match edit {
                StructuralEdit::CreateNode { node, kind, parent } => {
                    self.backend.create_node(*node, kind, Some(*parent))?;
                }
                StructuralEdit::Reparent { node, parent } => {
                    self.backend.reparent(*node, *parent)?;
                }
            }
        }
        self.backend.commit_structural()?;
        self.structural.clear();

        for edit in &self.data {
            match edit {
                DataEdit::CreateNode { node, kind } => {
                    self.backend.create_node(*node, kind, None)?;
                }
                DataEdit::Connect { source, dest } => {
                    self.backend.connect(source, dest)?;
                }
                DataEdit::SetName { node, name } => {
                    self.backend.set_name(*node, name)?;
                }
            }
        }
        self.backend.commit_data()?;
        self.data.clear();

        Ok(())
    }

    // ==================== Inspection ====================

    /// The staged structural log.
    pub fn structural_log(&self) -> &[StructuralEdit] {
        &self.structural
    }

    /// The staged data log.
    pub fn data_log(&self) -> &[DataEdit] {
        &self.data
    }

    /// The backend.
    pub fn backend(&self) -> &dyn SceneBackend {
        &*self.backend
    }

    /// The backend, mutably.
    pub fn backend_mut(&mut self) -> &mut dyn SceneBackend {
        &mut *self.backend
    }

    /// Downcast the backend to a concrete type, e.g. to inspect a
    /// [`MemoryScene`] after a run.
    pub fn backend_as<B: SceneBackend + 'static>(&self) -> Option<&B> {
        self.backend.as_any().downcast_ref::<B>()
    }

    /// Caller-defined named fields.
    pub fn extra(&self) -> &Kwargs {
        &self.extra
    }

    /// Caller-defined named fields, mutably.
    pub fn extra_mut(&mut self) -> &mut Kwargs {
        &mut self.extra
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Box::new(MemoryScene::new()))
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("structural", &self.structural.len())
            .field("data", &self.data.len())
            .field("groups", &self.groups.len())
            .field("extra", &self.extra)
            .finish()
    }
}
