//! Fatal materialization errors.
//!
//! Every variant aborts the current mapping pass. Conditions that merely
//! degrade a type (unset nodes, unknown primitive names, type variables
//! without a node) are not errors.

use bti_ctypes::NodeIndex;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LiftError {
    /// A node was referenced but the node table has no entry for it.
    #[error("node {node} is referenced but missing from the node table")]
    MissingNode { node: NodeIndex },

    /// After sorting by offset, a field starts inside the previous field.
    #[error(
        "structure node {structure}: field at byte {byte_offset} overlaps the \
         previous field, which ends at byte {min_unoccupied}"
    )]
    FieldOverlap {
        structure: NodeIndex,
        byte_offset: u32,
        min_unoccupied: u64,
    },

    /// A field ends past the largest structure size a host can represent.
    #[error(
        "structure node {structure}: field at byte {byte_offset} ends at byte \
         {byte_past_end}, beyond the largest representable structure size"
    )]
    FieldOutOfRange {
        structure: NodeIndex,
        byte_offset: u32,
        byte_past_end: u64,
    },

    /// A function declares a parameter whose dense ordinal range does not fit
    /// in a `u32` arity.
    #[error("function node {function}: parameter index {index} is out of range")]
    ParameterOutOfRange { function: NodeIndex, index: u32 },

    /// A chain of aliases leads back to one of its own nodes.
    #[error("alias node {node} is part of an alias cycle")]
    AliasCycle { node: NodeIndex },
}
