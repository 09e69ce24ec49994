//! Structural type graph produced by binary type inference.
//!
//! The inference pass emits a table of type-forming nodes keyed by
//! [`NodeIndex`], plus a list of type variables ([`Tid`]) each pointing at the
//! node that represents its type. This crate is only the in-memory shape of
//! that output; decoding a particular wire format is left to the caller
//! (enable the `serde` feature to deserialize straight into these types).
//!
//! # Invariants
//!
//! - Node indices are unique within a [`CTypeMapping`].
//! - The graph may be cyclic: a node can reach itself through pointer,
//!   structure-field, or function-parameter edges.
//! - A [`CTypeMapping`] is immutable once built.

mod mapping;
mod node;

pub use mapping::{CTypeMapping, CTypeMappingBuilder, Tid, TidToNodeIndex};
pub use node::{Field, FunctionNode, NodeIndex, Parameter, StructureNode, TypeNode};
