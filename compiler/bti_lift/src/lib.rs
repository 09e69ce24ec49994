//! Materialization of inferred structural type graphs.
//!
//! Binary type inference produces a graph of type-forming nodes (alias,
//! pointer, primitive, structure, function) plus a list of type variables,
//! each naming the node that represents its type. [`TypeLibrary`] walks that
//! graph and allocates concrete types in a [`TypeHost`], yielding a
//! [`Types`] mapping from type variable to concrete type.
//!
//! # Cycle handling
//!
//! Structures and functions are allocated empty and registered in the build
//! cache under their own node index *before* any child is resolved. A child
//! that refers back to its parent therefore receives the same, still
//! incomplete, object, which the parent keeps filling in afterwards.
//! Pointers use the same protocol through a pointer shell unless
//! [`LiftConfig::guard_pointer_cycles`] is off. Pure alias cycles have no
//! meaningful type and are reported as [`LiftError::AliasCycle`].
//!
//! # Usage
//!
//! ```text
//! let mut arena = TypeArena::new();
//! let primitives = PrimitiveTable::for_arena();
//! let lib = TypeLibrary::new(&mapping, primitives, DataTypeId::UNDEFINED, &mut arena);
//! let types = lib.build_mapping()?;
//! let ty = types.type_for_tid(&tid);
//! ```
//!
//! One `TypeLibrary` performs exactly one mapping pass and is not meant to be
//! shared between threads.

mod config;
mod error;
mod library;
mod primitive;
mod types;

use std::sync::Once;

pub use bti_ctypes::{CTypeMapping, NodeIndex, Tid, TypeNode};
pub use bti_types::{DataTypeId, TypeArena, TypeHost};
pub use config::{LiftConfig, WEAK_INTEGER};
pub use error::LiftError;
pub use library::{TypeLibrary, PARAMETER_COMMENT, STRUCTURE_FIELD_COMMENT};
pub use primitive::{PrimitiveResolver, PrimitiveTable};
pub use types::Types;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=bti_lift=trace`. With `BTI_LOG_TREE` also set, spans render as
/// an indented tree, which follows the recursive descent through the graph.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        if std::env::var("BTI_LOG_TREE").is_ok() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
