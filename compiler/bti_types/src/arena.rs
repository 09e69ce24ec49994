//! Reference [`TypeHost`]: every type object in one vector.

use tracing::trace;

use crate::{
    BuiltinKind, DataType, DataTypeId, FunctionDefinition, ParameterDefinition, StructureType,
    TypeHost,
};

/// Default pointer width in bytes.
const DEFAULT_POINTER_SIZE: u32 = 8;

/// Arena of concrete types addressed by [`DataTypeId`].
///
/// Builtins are allocated up front at their fixed ids. Allocation only ever
/// appends, so a handle stays valid for the arena's lifetime.
#[derive(Clone, Debug)]
pub struct TypeArena {
    types: Vec<DataType>,
    pointer_size: u32,
}

impl TypeArena {
    /// Create an arena holding only the builtins, with 8-byte pointers.
    pub fn new() -> Self {
        Self::with_pointer_size(DEFAULT_POINTER_SIZE)
    }

    /// Create an arena for a target with `pointer_size`-byte pointers.
    pub fn with_pointer_size(pointer_size: u32) -> Self {
        let mut types = Vec::with_capacity(64);
        types.extend(BuiltinKind::ALL.into_iter().map(DataType::Builtin));
        Self {
            types,
            pointer_size,
        }
    }

    /// Builtin primitive names paired with their ids.
    ///
    /// Convenient seed for a name-to-primitive table.
    pub fn builtin_names() -> impl Iterator<Item = (&'static str, DataTypeId)> {
        BuiltinKind::ALL.into_iter().map(|kind| (kind.name(), kind.id()))
    }

    /// The type object behind `id`.
    ///
    /// # Panics
    /// If `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: DataTypeId) -> &DataType {
        &self.types[id.raw() as usize]
    }

    /// Total number of type objects, builtins included.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn pointer_size(&self) -> u32 {
        self.pointer_size
    }

    pub fn structure(&self, id: DataTypeId) -> Option<&StructureType> {
        match self.get(id) {
            DataType::Structure(st) => Some(st),
            _ => None,
        }
    }

    pub fn function(&self, id: DataTypeId) -> Option<&FunctionDefinition> {
        match self.get(id) {
            DataType::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Target of a pointer; `None` for non-pointers and unpatched shells.
    pub fn pointee(&self, id: DataTypeId) -> Option<DataTypeId> {
        match self.get(id) {
            DataType::Pointer { pointee } => *pointee,
            _ => None,
        }
    }

    /// Storage size in bytes. Function definitions occupy no storage.
    pub fn length(&self, id: DataTypeId) -> u32 {
        match self.get(id) {
            DataType::Builtin(kind) => kind.length(),
            DataType::Pointer { .. } => self.pointer_size,
            DataType::Structure(st) => st.length,
            DataType::Function(_) => 0,
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "arena never holds more than u32::MAX types"
    )]
    fn alloc(&mut self, data: DataType) -> DataTypeId {
        let id = DataTypeId::from_raw(self.types.len() as u32);
        self.types.push(data);
        id
    }

    fn structure_mut(&mut self, id: DataTypeId) -> &mut StructureType {
        match &mut self.types[id.raw() as usize] {
            DataType::Structure(st) => st,
            other => panic!("{id:?} is not a structure: {other:?}"),
        }
    }

    fn function_mut(&mut self, id: DataTypeId) -> &mut FunctionDefinition {
        match &mut self.types[id.raw() as usize] {
            DataType::Function(func) => func,
            other => panic!("{id:?} is not a function definition: {other:?}"),
        }
    }
}

impl Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeHost for TypeArena {
    type Handle = DataTypeId;

    fn default_integer(&self) -> DataTypeId {
        DataTypeId::INT
    }

    fn pointer(&mut self, pointee: DataTypeId) -> DataTypeId {
        let id = self.alloc(DataType::Pointer {
            pointee: Some(pointee),
        });
        trace!(?id, ?pointee, "allocated pointer");
        id
    }

    fn pointer_shell(&mut self) -> DataTypeId {
        let id = self.alloc(DataType::Pointer { pointee: None });
        trace!(?id, "allocated pointer shell");
        id
    }

    fn set_pointee(&mut self, pointer: DataTypeId, pointee: DataTypeId) {
        match &mut self.types[pointer.raw() as usize] {
            DataType::Pointer { pointee: slot } => *slot = Some(pointee),
            other => panic!("{pointer:?} is not a pointer: {other:?}"),
        }
    }

    fn new_structure(&mut self, name: &str) -> DataTypeId {
        let id = self.alloc(DataType::Structure(StructureType::new(name)));
        trace!(?id, name, "allocated structure");
        id
    }

    fn add_component(
        &mut self,
        structure: DataTypeId,
        ty: DataTypeId,
        length: u32,
        name: &str,
        comment: &str,
    ) {
        let appended = self
            .structure_mut(structure)
            .append(ty, length, name.to_owned(), comment.to_owned());
        match appended {
            Some(offset) => trace!(?structure, ?ty, offset, length, name, "appended component"),
            None => panic!("{structure:?}: a {length}-byte component overflows the structure size"),
        }
    }

    fn new_function(&mut self, name: &str) -> DataTypeId {
        let id = self.alloc(DataType::Function(FunctionDefinition::new(name)));
        trace!(?id, name, "allocated function definition");
        id
    }

    fn set_return_type(&mut self, function: DataTypeId, ty: DataTypeId) {
        self.function_mut(function).return_type = Some(ty);
    }

    fn set_parameters(
        &mut self,
        function: DataTypeId,
        parameters: Vec<ParameterDefinition<DataTypeId>>,
    ) {
        self.function_mut(function).parameters = parameters;
    }
}
