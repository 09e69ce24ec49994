use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builtin_indices_match_kinds() {
    for (raw, kind) in BuiltinKind::ALL.iter().enumerate() {
        let raw = u32::try_from(raw).unwrap_or(u32::MAX);
        assert_eq!(DataTypeId::from_raw(raw).builtin(), Some(*kind));
    }
    assert_eq!(DataTypeId::INT.builtin(), Some(BuiltinKind::Int));
    assert_eq!(DataTypeId::UNDEFINED.builtin(), Some(BuiltinKind::Undefined));
}

#[test]
fn dynamic_ids_are_not_builtin() {
    let id = DataTypeId::from_raw(DataTypeId::FIRST_DYNAMIC);

    assert!(!id.is_builtin());
    assert_eq!(id.builtin(), None);
    assert_eq!(format!("{id:?}"), "DataTypeId(15)");
}

#[test]
fn builtin_debug_uses_name() {
    assert_eq!(format!("{:?}", DataTypeId::UINT), "DataTypeId::uint");
}
