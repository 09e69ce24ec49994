//! Structure layout and function signature builders.
//!
//! Both allocate their target first and register it under their own node
//! index before touching any child, then complete it in place.

use rustc_hash::FxHashMap;
use tracing::error;

use bti_ctypes::{Field, FunctionNode, NodeIndex, StructureNode};
use bti_types::{ParameterDefinition, TypeHost};

use super::TypeLibrary;
use crate::LiftError;

/// Comment attached to every structure component.
pub const STRUCTURE_FIELD_COMMENT: &str = "autogen";

/// Comment attached to every function parameter.
pub const PARAMETER_COMMENT: &str = "autogenerated";

/// A component about to be appended: a declared field or synthesized padding.
struct InsertedField<T> {
    byte_offset: u32,
    byte_size: u32,
    ty: T,
}

impl<T> InsertedField<T> {
    fn byte_past_end(&self) -> u64 {
        u64::from(self.byte_offset) + u64::from(self.byte_size)
    }
}

impl<H: TypeHost> TypeLibrary<'_, H> {
    /// Build a structure whose components reproduce the declared offsets.
    ///
    /// Fields are sorted by offset (stable, so equal offsets keep their
    /// declared order). Every gap becomes an explicit unknown-typed padding
    /// component, so the result is dense from byte 0 to the end of the last
    /// field.
    pub(super) fn build_structure(
        &mut self,
        node: NodeIndex,
        structure: &StructureNode,
    ) -> Result<H::Handle, LiftError> {
        let mut fields: Vec<Field> = structure.fields.clone();
        fields.sort_by_key(|field| field.byte_offset);

        let st = self.host.new_structure(&format!("struct_for_node_{node}"));
        self.cache.insert(node, st);

        let mut layout: Vec<InsertedField<H::Handle>> = Vec::with_capacity(fields.len());
        for field in &fields {
            let min_unoccupied = layout.last().map_or(0, InsertedField::byte_past_end);
            let start = u64::from(field.byte_offset);

            if start < min_unoccupied {
                error!(
                    structure = %node,
                    byte_offset = field.byte_offset,
                    min_unoccupied,
                    "overlapping structure fields"
                );
                return Err(LiftError::FieldOverlap {
                    structure: node,
                    byte_offset: field.byte_offset,
                    min_unoccupied,
                });
            }

            if start > min_unoccupied {
                // min_unoccupied < byte_offset, so it fits in u32.
                let pad_offset = u32::try_from(min_unoccupied).unwrap_or(field.byte_offset);
                layout.push(InsertedField {
                    byte_offset: pad_offset,
                    byte_size: field.byte_offset - pad_offset,
                    ty: self.primitives.unknown(),
                });
            }

            let ty = self.resolve_breaking_cycle(field.ty, node, st)?;
            layout.push(InsertedField {
                byte_offset: field.byte_offset,
                byte_size: field.byte_size(),
                ty,
            });
        }

        // Entries are sorted and disjoint: only the last can end past u32::MAX.
        if let Some(last) = layout.last() {
            let byte_past_end = last.byte_past_end();
            if byte_past_end > u64::from(u32::MAX) {
                error!(
                    structure = %node,
                    byte_offset = last.byte_offset,
                    byte_past_end,
                    "structure field out of range"
                );
                return Err(LiftError::FieldOutOfRange {
                    structure: node,
                    byte_offset: last.byte_offset,
                    byte_past_end,
                });
            }
        }

        for inserted in &layout {
            self.host.add_component(
                st,
                inserted.ty,
                inserted.byte_size,
                &format!("field_at_{}", inserted.byte_offset),
                STRUCTURE_FIELD_COMMENT,
            );
        }

        Ok(st)
    }

    /// Build a function definition with a dense `0..=max_index` parameter list.
    ///
    /// Undeclared indices get an unknown-typed parameter. If an index is
    /// declared twice, the later declaration wins.
    pub(super) fn build_function(
        &mut self,
        node: NodeIndex,
        function: &FunctionNode,
    ) -> Result<H::Handle, LiftError> {
        let def = self.host.new_function(&format!("func_type_for_{node}"));
        self.cache.insert(node, def);

        if let Some(ret) = function.return_type {
            let ret_ty = self.resolve_breaking_cycle(ret, node, def)?;
            self.host.set_return_type(def, ret_ty);
        }

        let Ok(arity) = u32::try_from(function.dense_arity()) else {
            error!(function = %node, index = u32::MAX, "parameter index out of range");
            return Err(LiftError::ParameterOutOfRange {
                function: node,
                index: u32::MAX,
            });
        };
        if arity == 0 {
            return Ok(def);
        }

        let declared: FxHashMap<u32, NodeIndex> = function
            .parameters
            .iter()
            .map(|param| (param.index, param.ty))
            .collect();

        let mut params = Vec::with_capacity(arity as usize);
        for ordinal in 0..arity {
            let ty = match declared.get(&ordinal) {
                Some(&param_node) => self.resolve_breaking_cycle(param_node, node, def)?,
                None => self.primitives.unknown(),
            };
            params.push(ParameterDefinition {
                ordinal,
                name: format!("func_{node}param_{ordinal}"),
                ty,
                comment: PARAMETER_COMMENT.to_owned(),
            });
        }

        self.host.set_parameters(def, params);
        Ok(def)
    }
}
