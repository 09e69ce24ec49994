//! The inference result: node table plus type-variable entries.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{NodeIndex, TypeNode};

/// Opaque identifier of an inferred type variable.
///
/// Distinct from [`NodeIndex`]: several type variables may share one
/// representative node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tid {
    /// Symbolic name, e.g. `sub_401000` or `instr_401004_1`.
    pub name: String,
    /// Address the variable was inferred at, as rendered by the producer.
    pub address: String,
}

impl Tid {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for Tid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.address)
    }
}

/// A type variable and the node representing its type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TidToNodeIndex {
    pub tid: Tid,
    pub node_index: NodeIndex,
}

/// Node table and type-variable entries of one inference result.
///
/// Entries keep producer order. Node lookup is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CTypeMapping {
    node_types: FxHashMap<NodeIndex, TypeNode>,
    type_variable_repr_nodes: Vec<TidToNodeIndex>,
}

impl CTypeMapping {
    /// Assemble a mapping from an already-decoded node table and entry list.
    pub fn new(
        node_types: FxHashMap<NodeIndex, TypeNode>,
        type_variable_repr_nodes: Vec<TidToNodeIndex>,
    ) -> Self {
        Self {
            node_types,
            type_variable_repr_nodes,
        }
    }

    /// Start building a mapping node by node.
    pub fn builder() -> CTypeMappingBuilder {
        CTypeMappingBuilder::default()
    }

    /// Look up a node.
    #[inline]
    pub fn node(&self, idx: NodeIndex) -> Option<&TypeNode> {
        self.node_types.get(&idx)
    }

    /// Whether the node table has an entry for `idx`.
    #[inline]
    pub fn contains_node(&self, idx: NodeIndex) -> bool {
        self.node_types.contains_key(&idx)
    }

    /// Number of nodes in the table.
    pub fn node_count(&self) -> usize {
        self.node_types.len()
    }

    /// Type-variable entries, in producer order.
    pub fn type_variables(&self) -> &[TidToNodeIndex] {
        &self.type_variable_repr_nodes
    }
}

/// Incremental constructor for [`CTypeMapping`].
#[derive(Debug, Default)]
pub struct CTypeMappingBuilder {
    node_types: FxHashMap<NodeIndex, TypeNode>,
    type_variable_repr_nodes: Vec<TidToNodeIndex>,
}

impl CTypeMappingBuilder {
    /// Add or replace the node at `idx`.
    #[must_use]
    pub fn node(mut self, idx: u32, node: TypeNode) -> Self {
        self.node_types.insert(NodeIndex::from_raw(idx), node);
        self
    }

    /// Append a type-variable entry.
    #[must_use]
    pub fn type_variable(mut self, tid: Tid, node_index: u32) -> Self {
        self.type_variable_repr_nodes.push(TidToNodeIndex {
            tid,
            node_index: NodeIndex::from_raw(node_index),
        });
        self
    }

    pub fn build(self) -> CTypeMapping {
        CTypeMapping::new(self.node_types, self.type_variable_repr_nodes)
    }
}

#[cfg(test)]
mod tests;
