//! Primitive constant name to concrete type.

use rustc_hash::FxHashMap;
use tracing::trace;

use bti_types::{DataTypeId, TypeArena};

/// Caller-supplied table from primitive constant name to host type.
#[derive(Clone, Debug)]
pub struct PrimitiveTable<H> {
    by_name: FxHashMap<String, H>,
}

impl<H: Copy> PrimitiveTable<H> {
    pub fn new() -> Self {
        Self {
            by_name: FxHashMap::default(),
        }
    }

    /// Map `name` to `ty`, replacing any previous mapping.
    pub fn insert(&mut self, name: impl Into<String>, ty: H) {
        self.by_name.insert(name.into(), ty);
    }

    pub fn get(&self, name: &str) -> Option<H> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl PrimitiveTable<DataTypeId> {
    /// Every [`TypeArena`] builtin under its C spelling.
    pub fn for_arena() -> Self {
        TypeArena::builtin_names().collect()
    }
}

impl<H: Copy> Default for PrimitiveTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy, S: Into<String>> FromIterator<(S, H)> for PrimitiveTable<H> {
    fn from_iter<I: IntoIterator<Item = (S, H)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<H: Copy, S: Into<String>> Extend<(S, H)> for PrimitiveTable<H> {
    fn extend<I: IntoIterator<Item = (S, H)>>(&mut self, iter: I) {
        for (name, ty) in iter {
            self.insert(name, ty);
        }
    }
}

/// Resolves primitive nodes. Never fails: unknown names degrade to the
/// unknown type.
#[derive(Clone, Debug)]
pub struct PrimitiveResolver<H> {
    table: PrimitiveTable<H>,
    weak_integer: String,
    default_integer: H,
    unknown: H,
}

impl<H: Copy> PrimitiveResolver<H> {
    pub fn new(
        table: PrimitiveTable<H>,
        weak_integer: impl Into<String>,
        default_integer: H,
        unknown: H,
    ) -> Self {
        Self {
            table,
            weak_integer: weak_integer.into(),
            default_integer,
            unknown,
        }
    }

    /// The designated fallback type.
    #[inline]
    pub fn unknown(&self) -> H {
        self.unknown
    }

    /// Concrete type for a primitive constant name.
    ///
    /// The weak-integer sentinel always yields the default integer, even when
    /// the table maps that name to something else.
    pub fn resolve(&self, constant_name: &str) -> H {
        if constant_name == self.weak_integer {
            return self.default_integer;
        }

        if let Some(ty) = self.table.get(constant_name) {
            ty
        } else {
            trace!(constant_name, "no primitive mapping, using unknown type");
            self.unknown
        }
    }
}
