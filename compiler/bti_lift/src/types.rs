//! Result of a mapping pass: type variable to concrete type.

use rustc_hash::FxHashMap;

use bti_ctypes::Tid;

/// Concrete types for the type variables that had a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Types<H> {
    mapping: FxHashMap<Tid, H>,
}

impl<H: Copy> Types<H> {
    pub fn new(mapping: FxHashMap<Tid, H>) -> Self {
        Self { mapping }
    }

    /// Type of `tid`, or `None` if the variable was absent or had no node.
    pub fn type_for_tid(&self, tid: &Tid) -> Option<H> {
        self.mapping.get(tid).copied()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// All mapped variables, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tid, H)> + '_ {
        self.mapping.iter().map(|(tid, ty)| (tid, *ty))
    }
}

impl<H: Copy> FromIterator<(Tid, H)> for Types<H> {
    fn from_iter<I: IntoIterator<Item = (Tid, H)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
