//! Human-readable rendering of arena types, for logs and test assertions.

#![allow(clippy::format_push_string)] // Debug formatting prioritizes clarity over allocation

use crate::{DataType, DataTypeId, TypeArena};

impl TypeArena {
    /// Render a type reference in C style: `int`, `struct_for_node_3 *`.
    ///
    /// Structures and functions render as their names, so self-referential
    /// types print finitely. A pointer cycle prints `...` where it closes.
    pub fn format_type(&self, id: DataTypeId) -> String {
        let mut buf = String::new();
        self.format_type_into(id, &mut buf, &mut Vec::new());
        buf
    }

    /// Render the full definition of a structure or function.
    ///
    /// ```text
    /// struct struct_for_node_1 { int field_at_0; undefined field_at_4; }
    /// int func_type_for_2(char * func_2param_0, undefined func_2param_1)
    /// ```
    ///
    /// Other types render as in [`format_type`](Self::format_type).
    pub fn format_definition(&self, id: DataTypeId) -> String {
        match self.get(id) {
            DataType::Structure(st) => {
                let mut buf = format!("struct {} {{", st.name);
                for component in &st.components {
                    buf.push(' ');
                    buf.push_str(&self.format_type(component.ty));
                    buf.push(' ');
                    buf.push_str(&component.name);
                    buf.push(';');
                }
                buf.push_str(" }");
                buf
            }
            DataType::Function(func) => {
                let mut buf = match func.return_type {
                    Some(ret) => self.format_type(ret),
                    None => "void".to_owned(),
                };
                buf.push(' ');
                buf.push_str(&func.name);
                buf.push('(');
                for (i, param) in func.parameters.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    buf.push_str(&self.format_type(param.ty));
                    buf.push(' ');
                    buf.push_str(&param.name);
                }
                buf.push(')');
                buf
            }
            DataType::Builtin(_) | DataType::Pointer { .. } => self.format_type(id),
        }
    }

    /// `trail` holds the pointers on the current chain; a chain only ever
    /// passes through pointers, so it is linear.
    fn format_type_into(&self, id: DataTypeId, buf: &mut String, trail: &mut Vec<DataTypeId>) {
        match self.get(id) {
            DataType::Builtin(kind) => buf.push_str(kind.name()),
            DataType::Structure(st) => buf.push_str(&st.name),
            DataType::Function(func) => buf.push_str(&func.name),
            DataType::Pointer { pointee } => {
                if trail.contains(&id) {
                    buf.push_str("...");
                    return;
                }
                trail.push(id);
                match pointee {
                    Some(target) => self.format_type_into(*target, buf, trail),
                    None => buf.push_str("<unresolved>"),
                }
                buf.push_str(" *");
            }
        }
    }
}
