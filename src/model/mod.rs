//! # Product Graph Model
//!
//! Clean DTOs shared by every layer: dataset parsing, the graph store, and
//! the substitute finder. This module is pure data — no I/O, no state.

pub mod node;
pub mod relation;

pub use node::{NodeId, NodeRecord};
pub use relation::Relation;
