//! Strew Core Types
//!
//! This crate provides the foundational types used throughout the strew
//! workload generator:
//! - Node handles and the "no node" sentinel (NodeHandle)
//! - Port references for connections (PortRef)
//! - Dynamic values crossing the command boundary (the Value enum)

mod id;
mod port;
mod value;

pub use id::*;
pub use port::*;
pub use value::*;
