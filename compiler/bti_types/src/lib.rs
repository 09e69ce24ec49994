//! Concrete types for materialized inference results.
//!
//! Two layers:
//!
//! - [`TypeHost`]: the allocator interface the materializer talks to. A
//!   decompiler embeds its own type system behind this trait.
//! - [`TypeArena`]: a reference host storing every type in one `Vec`,
//!   addressed by [`DataTypeId`]. Structures, functions and pointer shells
//!   are mutable in place after allocation, so a partially built type keeps
//!   its identity while its children are resolved.
//!
//! # Identity
//!
//! Two handles denote the same type object iff they are equal. The arena never
//! deduplicates structurally equal types: two structure nodes with identical
//! fields are two distinct structures.

mod arena;
mod data;
mod format;
mod host;
mod id;

pub use arena::TypeArena;
pub use data::{BuiltinKind, Component, DataType, FunctionDefinition, StructureType};
pub use host::{ParameterDefinition, TypeHost};
pub use id::DataTypeId;
