//! Materializer configuration.

/// Primitive constant name inference emits for an integer whose width and
/// signedness it could not pin down.
pub const WEAK_INTEGER: &str = "weak_integer";

/// Knobs for one [`TypeLibrary`](crate::TypeLibrary) pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiftConfig {
    /// Primitive name that always maps to the host's default integer,
    /// regardless of the primitive table.
    pub weak_integer: String,

    /// Register a pointer shell before resolving the pointee, so pointer
    /// cycles terminate.
    ///
    /// With this off, a pointer resolves its pointee first and only then is
    /// allocated; a cycle that returns to the pointer before that point never
    /// terminates. Callers turning it off must guarantee their graphs have no
    /// such cycle.
    pub guard_pointer_cycles: bool,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            weak_integer: WEAK_INTEGER.to_owned(),
            guard_pointer_cycles: true,
        }
    }
}

impl LiftConfig {
    /// Use `name` as the weak-integer sentinel.
    #[must_use]
    pub fn with_weak_integer(mut self, name: impl Into<String>) -> Self {
        self.weak_integer = name.into();
        self
    }

    /// Enable or disable the pointer-shell protocol.
    #[must_use]
    pub fn with_pointer_cycle_guard(mut self, enabled: bool) -> Self {
        self.guard_pointer_cycles = enabled;
        self
    }
}
