//! Concrete type objects stored in the arena.

use crate::{DataTypeId, ParameterDefinition};

/// Pre-allocated builtin types.
///
/// Discriminants equal the builtin's [`DataTypeId`] index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BuiltinKind {
    Undefined,
    Void,
    Bool,
    Char,
    Short,
    Int,
    UInt,
    Long,
    LongLong,
    Float,
    Double,
    Undefined1,
    Undefined2,
    Undefined4,
    Undefined8,
}

impl BuiltinKind {
    /// Every builtin, in [`DataTypeId`] order.
    pub const ALL: [Self; DataTypeId::BUILTIN_COUNT as usize] = [
        Self::Undefined,
        Self::Void,
        Self::Bool,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::UInt,
        Self::Long,
        Self::LongLong,
        Self::Float,
        Self::Double,
        Self::Undefined1,
        Self::Undefined2,
        Self::Undefined4,
        Self::Undefined8,
    ];

    /// C-style spelling, also the primitive constant name inference emits.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::LongLong => "longlong",
            Self::Float => "float",
            Self::Double => "double",
            Self::Undefined1 => "undefined1",
            Self::Undefined2 => "undefined2",
            Self::Undefined4 => "undefined4",
            Self::Undefined8 => "undefined8",
        }
    }

    /// Storage size in bytes (LP64).
    pub const fn length(self) -> u32 {
        match self {
            Self::Void => 0,
            Self::Undefined | Self::Bool | Self::Char | Self::Undefined1 => 1,
            Self::Short | Self::Undefined2 => 2,
            Self::Int | Self::UInt | Self::Float | Self::Undefined4 => 4,
            Self::Long | Self::LongLong | Self::Double | Self::Undefined8 => 8,
        }
    }

    /// Arena handle of this builtin.
    pub const fn id(self) -> DataTypeId {
        DataTypeId::from_raw(self as u32)
    }
}

/// A concrete type object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataType {
    Builtin(BuiltinKind),

    /// Pointer. `pointee` is `None` only for a shell whose target has not been
    /// patched in yet.
    Pointer { pointee: Option<DataTypeId> },

    Structure(StructureType),

    Function(FunctionDefinition),
}

/// A structure, grown one component at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureType {
    pub name: String,
    /// Components in offset order; each starts where the previous one ends.
    pub components: Vec<Component>,
    /// Total size in bytes.
    pub length: u32,
}

impl StructureType {
    /// An empty, zero-size structure.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
            length: 0,
        }
    }

    /// Append a component at the current end of the structure.
    ///
    /// Returns the component's offset, or `None` without touching the
    /// structure if the total length would overflow `u32`.
    #[must_use]
    pub fn append(
        &mut self,
        ty: DataTypeId,
        length: u32,
        name: String,
        comment: String,
    ) -> Option<u32> {
        let offset = self.length;
        self.length = offset.checked_add(length)?;
        self.components.push(Component {
            offset,
            length,
            ty,
            name,
            comment,
        });
        Some(offset)
    }

    /// Component starting at `offset`, if any.
    pub fn component_at(&self, offset: u32) -> Option<&Component> {
        self.components.iter().find(|c| c.offset == offset)
    }
}

/// One member of a [`StructureType`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    pub offset: u32,
    pub length: u32,
    pub ty: DataTypeId,
    pub name: String,
    pub comment: String,
}

/// A function signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub name: String,
    /// `None` means no return value (void).
    pub return_type: Option<DataTypeId>,
    pub parameters: Vec<ParameterDefinition<DataTypeId>>,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            parameters: Vec::new(),
        }
    }
}
