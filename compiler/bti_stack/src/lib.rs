//! Stack safety for deep type-graph recursion.
//!
//! Materializing an inferred type graph is a depth-first walk: a pointer
//! resolves its pointee, a structure resolves each field, and so on. A long
//! acyclic chain (a linked list of pointer-to-struct-to-pointer nodes, say)
//! turns directly into call depth. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] grows the stack on demand instead of
//! overflowing it.
//!
//! - **Native targets**: backed by `stacker::maybe_grow`.
//! - **WASM targets**: plain call; the runtime manages its own stack.

/// Remaining stack below which we allocate a new segment (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn resolve(&mut self, node: NodeIndex) -> Result<Handle, LiftError> {
///     ensure_sufficient_stack(|| self.resolve_uncached(node))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
