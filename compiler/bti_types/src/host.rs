//! Interface between the materializer and the type system that owns the
//! concrete type objects.

use std::fmt;
use std::hash::Hash;

/// A parameter of a function definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDefinition<H> {
    /// Position in the signature, starting at 0.
    pub ordinal: u32,
    pub name: String,
    pub ty: H,
    pub comment: String,
}

/// Allocator for concrete type objects.
///
/// Handles are identities: allocating twice yields two distinct handles, and
/// the mutating methods change the object behind a handle in place. That is
/// what lets a structure or function be registered before its children are
/// resolved and completed afterwards.
///
/// Calling a structure method on a non-structure handle (or a function
/// method on a non-function handle) is a caller bug; implementations may
/// panic.
pub trait TypeHost {
    /// Identity of one type object.
    type Handle: Copy + Eq + Hash + fmt::Debug;

    /// Fixed integer type used for under-constrained integer results.
    fn default_integer(&self) -> Self::Handle;

    /// Allocate a pointer to an already-built type.
    fn pointer(&mut self, pointee: Self::Handle) -> Self::Handle;

    /// Allocate a pointer whose target is filled in later by
    /// [`set_pointee`](Self::set_pointee).
    fn pointer_shell(&mut self) -> Self::Handle;

    /// Patch the target of a pointer shell.
    fn set_pointee(&mut self, pointer: Self::Handle, pointee: Self::Handle);

    /// Allocate an empty, zero-size structure.
    fn new_structure(&mut self, name: &str) -> Self::Handle;

    /// Append a component of `length` bytes at the end of `structure`.
    ///
    /// The caller keeps the structure's total length within `u32`.
    fn add_component(
        &mut self,
        structure: Self::Handle,
        ty: Self::Handle,
        length: u32,
        name: &str,
        comment: &str,
    );

    /// Allocate a function definition with no return type and no parameters.
    fn new_function(&mut self, name: &str) -> Self::Handle;

    fn set_return_type(&mut self, function: Self::Handle, ty: Self::Handle);

    /// Replace the parameter list of `function`.
    fn set_parameters(
        &mut self,
        function: Self::Handle,
        parameters: Vec<ParameterDefinition<Self::Handle>>,
    );
}
