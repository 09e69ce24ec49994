use pretty_assertions::assert_eq;

use super::*;
use crate::{Field, StructureNode};

#[test]
fn builder_collects_nodes_and_entries() {
    let mapping = CTypeMapping::builder()
        .node(0, TypeNode::primitive("int"))
        .node(1, TypeNode::pointer(NodeIndex::from_raw(0)))
        .type_variable(Tid::new("sub_401000", "00401000"), 1)
        .type_variable(Tid::new("sub_402000", "00402000"), 7)
        .build();

    assert_eq!(mapping.node_count(), 2);
    assert!(mapping.contains_node(NodeIndex::from_raw(1)));
    assert!(!mapping.contains_node(NodeIndex::from_raw(7)));
    assert_eq!(
        mapping.node(NodeIndex::from_raw(1)),
        Some(&TypeNode::Pointer {
            pointee: NodeIndex::from_raw(0)
        })
    );

    let entries: Vec<_> = mapping
        .type_variables()
        .iter()
        .map(|e| (e.tid.name.as_str(), e.node_index.raw()))
        .collect();
    assert_eq!(entries, vec![("sub_401000", 1), ("sub_402000", 7)]);
}

#[test]
fn later_node_replaces_earlier_one() {
    let mapping = CTypeMapping::builder()
        .node(3, TypeNode::Unset)
        .node(
            3,
            TypeNode::Structure(StructureNode {
                fields: vec![Field::new(0, 32, NodeIndex::from_raw(0))],
            }),
        )
        .build();

    assert_eq!(mapping.node_count(), 1);
    assert_eq!(
        mapping.node(NodeIndex::from_raw(3)).map(TypeNode::kind_name),
        Some("structure")
    );
}

#[test]
fn tid_display_includes_address() {
    let tid = Tid::new("instr_401004_1", "00401004");
    assert_eq!(tid.to_string(), "instr_401004_1@00401004");
}
