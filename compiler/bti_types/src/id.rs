//! Handle into a [`TypeArena`](crate::TypeArena).

use std::fmt;

use crate::BuiltinKind;

/// A 32-bit index into the type arena.
///
/// Builtins occupy fixed indices so they can be named without an arena.
/// Everything from [`FIRST_DYNAMIC`](Self::FIRST_DYNAMIC) on is allocated by
/// materialization.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DataTypeId(u32);

impl DataTypeId {
    // === Builtins (indices 0-14) ===

    /// Unknown type; the fallback for anything inference could not pin down.
    pub const UNDEFINED: Self = Self(0);
    pub const VOID: Self = Self(1);
    pub const BOOL: Self = Self(2);
    pub const CHAR: Self = Self(3);
    pub const SHORT: Self = Self(4);
    /// Default integer; also the target of weak-integer primitives.
    pub const INT: Self = Self(5);
    pub const UINT: Self = Self(6);
    pub const LONG: Self = Self(7);
    pub const LONGLONG: Self = Self(8);
    pub const FLOAT: Self = Self(9);
    pub const DOUBLE: Self = Self(10);
    pub const UNDEFINED1: Self = Self(11);
    pub const UNDEFINED2: Self = Self(12);
    pub const UNDEFINED4: Self = Self(13);
    pub const UNDEFINED8: Self = Self(14);

    /// Number of pre-allocated builtins.
    pub const BUILTIN_COUNT: u32 = 15;

    /// First index handed out for allocated types.
    pub const FIRST_DYNAMIC: u32 = Self::BUILTIN_COUNT;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this handle names a pre-allocated builtin.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::BUILTIN_COUNT
    }

    /// The builtin kind at this index, if any.
    pub const fn builtin(self) -> Option<BuiltinKind> {
        if self.is_builtin() {
            Some(BuiltinKind::ALL[self.0 as usize])
        } else {
            None
        }
    }
}

impl fmt::Debug for DataTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin() {
            Some(kind) => write!(f, "DataTypeId::{}", kind.name()),
            None => write!(f, "DataTypeId({})", self.0),
        }
    }
}

// DataTypeId must stay 4 bytes: materialized mappings hold one per type variable.
const _: () = assert!(std::mem::size_of::<DataTypeId>() == 4);

#[cfg(test)]
mod tests;
