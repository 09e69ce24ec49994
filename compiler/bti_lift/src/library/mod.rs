//! The graph materializer.
//!
//! [`TypeLibrary`] owns the build cache and dispatches each node to its
//! builder. Builders for structures, functions and (guarded) pointers
//! allocate their object first, register it under their own node index, and
//! only then resolve children through
//! [`resolve_breaking_cycle`](TypeLibrary::resolve_breaking_cycle).

mod composite;
mod indirection;

use rustc_hash::FxHashMap;
use tracing::{debug, error, trace, warn};

use bti_ctypes::{CTypeMapping, NodeIndex, TypeNode};
use bti_stack::ensure_sufficient_stack;
use bti_types::TypeHost;

use crate::{LiftConfig, LiftError, PrimitiveResolver, PrimitiveTable, Types};

pub use composite::{PARAMETER_COMMENT, STRUCTURE_FIELD_COMMENT};

/// Materializes one [`CTypeMapping`] into a [`TypeHost`].
///
/// # Caching
///
/// Each node is built at most once; later references return the cached
/// handle, so resolving the same index twice yields the identical object.
/// A cache entry means "built or being built": structures, functions and
/// guarded pointers are cached before their children are resolved.
///
/// # Lifetime
///
/// One instance serves one mapping pass. [`build_mapping`](Self::build_mapping)
/// consumes it, and the cache is never shared with another pass.
pub struct TypeLibrary<'a, H: TypeHost> {
    mapping: &'a CTypeMapping,
    host: &'a mut H,
    primitives: PrimitiveResolver<H::Handle>,
    config: LiftConfig,
    cache: FxHashMap<NodeIndex, H::Handle>,
}

impl<'a, H: TypeHost> TypeLibrary<'a, H> {
    /// Create a library with the default [`LiftConfig`].
    ///
    /// `unknown` is the fallback for unset nodes, unmapped primitive names,
    /// structure padding and missing parameters.
    pub fn new(
        mapping: &'a CTypeMapping,
        primitives: PrimitiveTable<H::Handle>,
        unknown: H::Handle,
        host: &'a mut H,
    ) -> Self {
        Self::with_config(mapping, primitives, unknown, host, LiftConfig::default())
    }

    pub fn with_config(
        mapping: &'a CTypeMapping,
        primitives: PrimitiveTable<H::Handle>,
        unknown: H::Handle,
        host: &'a mut H,
        config: LiftConfig,
    ) -> Self {
        let primitives = PrimitiveResolver::new(
            primitives,
            config.weak_integer.clone(),
            host.default_integer(),
            unknown,
        );
        Self {
            mapping,
            host,
            primitives,
            config,
            cache: FxHashMap::default(),
        }
    }

    /// Number of nodes built (or being built) so far.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Materialize every type variable whose node exists.
    ///
    /// Variables pointing at a node index absent from the table are skipped.
    /// If a variable appears twice, the later entry wins.
    #[tracing::instrument(level = "debug", skip_all, fields(
        entries = self.mapping.type_variables().len(),
        nodes = self.mapping.node_count(),
    ))]
    pub fn build_mapping(mut self) -> Result<Types<H::Handle>, LiftError> {
        let mapping = self.mapping;
        let mut result = FxHashMap::default();
        let mut skipped = 0usize;

        for entry in mapping.type_variables() {
            if !mapping.contains_node(entry.node_index) {
                debug!(tid = %entry.tid, node = %entry.node_index, "type variable has no node");
                skipped += 1;
                continue;
            }

            let ty = self.resolve(entry.node_index)?;
            if result.insert(entry.tid.clone(), ty).is_some() {
                warn!(tid = %entry.tid, "duplicate type variable, keeping the later entry");
            }
        }

        debug!(
            mapped = result.len(),
            skipped,
            nodes_built = self.cache.len(),
            "type variable mapping complete"
        );
        Ok(Types::new(result))
    }

    /// Resolve a node, building it on first use.
    ///
    /// Returns the cached handle if the node was already built or is being
    /// built further up the current resolution chain.
    pub fn resolve(&mut self, node: NodeIndex) -> Result<H::Handle, LiftError> {
        if let Some(&cached) = self.cache.get(&node) {
            return Ok(cached);
        }

        let built = ensure_sufficient_stack(|| self.build_uncached(node))?;
        self.cache.insert(node, built);
        Ok(built)
    }

    /// Register `placeholder` as the type of `placeholder_node`, then resolve
    /// `node`.
    ///
    /// `placeholder_node` is the caller's own index, not `node`: any nested
    /// resolution that loops back to the caller sees the placeholder instead
    /// of starting a second build.
    fn resolve_breaking_cycle(
        &mut self,
        node: NodeIndex,
        placeholder_node: NodeIndex,
        placeholder: H::Handle,
    ) -> Result<H::Handle, LiftError> {
        self.cache.insert(placeholder_node, placeholder);
        self.resolve(node)
    }

    fn build_uncached(&mut self, node: NodeIndex) -> Result<H::Handle, LiftError> {
        let mapping = self.mapping;
        let Some(type_node) = mapping.node(node) else {
            error!(%node, "referenced node missing from node table");
            return Err(LiftError::MissingNode { node });
        };

        trace!(%node, kind = type_node.kind_name(), "building node");

        match type_node {
            TypeNode::Alias { target } => self.build_alias(node, *target),
            TypeNode::Pointer { pointee } => self.build_pointer(node, *pointee),
            TypeNode::Primitive { constant_name } => Ok(self.primitives.resolve(constant_name)),
            TypeNode::Structure(structure) => self.build_structure(node, structure),
            TypeNode::Function(function) => self.build_function(node, function),
            TypeNode::Unset => Ok(self.primitives.unknown()),
        }
    }
}
