//! Pointer and alias builders.

use tracing::error;

use bti_ctypes::{NodeIndex, TypeNode};
use bti_types::TypeHost;

use super::TypeLibrary;
use crate::LiftError;

impl<H: TypeHost> TypeLibrary<'_, H> {
    /// Build a pointer to `pointee`.
    ///
    /// Guarded (the default): allocate a shell, register it under `node`,
    /// resolve the pointee, then patch the shell. A pointee that refers back
    /// to `node` receives the shell itself.
    ///
    /// Unguarded: resolve the pointee first and allocate the pointer last. A
    /// cycle back to `node` does not terminate.
    pub(super) fn build_pointer(
        &mut self,
        node: NodeIndex,
        pointee: NodeIndex,
    ) -> Result<H::Handle, LiftError> {
        if !self.config.guard_pointer_cycles {
            let target = self.resolve(pointee)?;
            return Ok(self.host.pointer(target));
        }

        let shell = self.host.pointer_shell();
        let target = self.resolve_breaking_cycle(pointee, node, shell)?;
        self.host.set_pointee(shell, target);
        Ok(shell)
    }

    /// Resolve an alias to the type of whatever it ultimately names.
    ///
    /// No alias object is produced. Consecutive aliases are followed
    /// iteratively and every alias on the chain is cached with the final
    /// type. A chain that revisits one of its own aliases is an error.
    pub(super) fn build_alias(
        &mut self,
        node: NodeIndex,
        target: NodeIndex,
    ) -> Result<H::Handle, LiftError> {
        let mapping = self.mapping;
        let mut chain = vec![node];
        let mut current = target;

        while let Some(TypeNode::Alias { target: next }) = mapping.node(current) {
            if self.cache.contains_key(&current) {
                break;
            }
            if chain.contains(&current) {
                error!(%node, %current, "alias cycle");
                return Err(LiftError::AliasCycle { node: current });
            }
            chain.push(current);
            current = *next;
        }

        let ty = self.resolve(current)?;
        // `node` itself is cached by `resolve` once we return.
        for alias in chain.into_iter().skip(1) {
            self.cache.insert(alias, ty);
        }
        Ok(ty)
    }
}
