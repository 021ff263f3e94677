//! Strew Scene
//!
//! The boundary between the workload engine and whatever really builds the
//! scene graph.
//!
//! Responsibilities:
//! - Define the two pending-edit vocabularies (structural vs. data)
//! - Define the backend contract the engine commits through
//! - Provide the in-memory reference backend used by tests and reports

mod backend;
mod edit;
mod error;
mod memory;

pub use backend::SceneBackend;
pub use edit::{DataEdit, StructuralEdit};
pub use error::{SceneError, SceneResult};
pub use memory::{MemoryScene, SceneNode};
