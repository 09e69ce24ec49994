//! Type-forming nodes of the inferred graph.

use std::fmt;

/// Index of a node in the inferred type graph.
///
/// Dense and non-negative; two indices are the same node iff they are equal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Create an index from its raw value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of the structural type graph.
///
/// The variant set is closed; consumers match exhaustively.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeNode {
    /// Transparent alias of another node.
    Alias { target: NodeIndex },

    /// Pointer to another node.
    Pointer { pointee: NodeIndex },

    /// Primitive named by a symbolic constant (`"int"`, `"weak_integer"`, ...).
    Primitive { constant_name: String },

    /// Record with fields at byte offsets.
    Structure(StructureNode),

    /// Function signature.
    Function(FunctionNode),

    /// No type information was inferred.
    #[default]
    Unset,
}

impl TypeNode {
    /// Shorthand for an alias node.
    pub fn alias(target: NodeIndex) -> Self {
        Self::Alias { target }
    }

    /// Shorthand for a pointer node.
    pub fn pointer(pointee: NodeIndex) -> Self {
        Self::Pointer { pointee }
    }

    /// Shorthand for a primitive node.
    pub fn primitive(constant_name: impl Into<String>) -> Self {
        Self::Primitive {
            constant_name: constant_name.into(),
        }
    }

    /// Shorthand for a structure node.
    pub fn structure(fields: Vec<Field>) -> Self {
        Self::Structure(StructureNode { fields })
    }

    /// Short variant name, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Alias { .. } => "alias",
            Self::Pointer { .. } => "pointer",
            Self::Primitive { .. } => "primitive",
            Self::Structure(_) => "structure",
            Self::Function(_) => "function",
            Self::Unset => "unset",
        }
    }
}

/// Fields of a structure node, in no particular order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructureNode {
    pub fields: Vec<Field>,
}

/// A structure field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Offset from the start of the structure, in bytes.
    pub byte_offset: u32,
    /// Width of the field, in bits.
    pub bit_size: u32,
    /// Node giving the field's type.
    pub ty: NodeIndex,
}

impl Field {
    pub fn new(byte_offset: u32, bit_size: u32, ty: NodeIndex) -> Self {
        Self {
            byte_offset,
            bit_size,
            ty,
        }
    }

    /// Width of the field in whole bytes.
    #[inline]
    pub fn byte_size(&self) -> u32 {
        self.bit_size / 8
    }

    /// First byte offset past the end of this field.
    ///
    /// Widened to `u64`: a field near the top of the offset range can end
    /// beyond `u32::MAX`.
    #[inline]
    pub fn byte_past_end(&self) -> u64 {
        u64::from(self.byte_offset) + u64::from(self.byte_size())
    }
}

/// A function node: optional return type plus a sparse parameter list.
///
/// `return_type: None` is the "no return" case (void-equivalent).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionNode {
    pub return_type: Option<NodeIndex>,
    pub parameters: Vec<Parameter>,
}

impl FunctionNode {
    /// Whether the node declares a return type.
    #[inline]
    pub fn has_return(&self) -> bool {
        self.return_type.is_some()
    }

    /// Number of parameters in the dense signature: highest declared index + 1.
    ///
    /// A parameter declared at `u32::MAX` yields `u32::MAX + 1`, so the
    /// result is a `u64`.
    pub fn dense_arity(&self) -> u64 {
        self.parameters
            .iter()
            .map(|p| u64::from(p.index) + 1)
            .max()
            .unwrap_or(0)
    }
}

/// A declared parameter. Indices may be sparse and unordered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub index: u32,
    pub ty: NodeIndex,
}

impl Parameter {
    pub fn new(index: u32, ty: NodeIndex) -> Self {
        Self { index, ty }
    }
}
