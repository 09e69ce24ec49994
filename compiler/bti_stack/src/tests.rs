use super::*;

#[test]
fn shallow_chain_resolves() {
    fn chain_len(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { chain_len(n - 1) + 1 })
    }

    assert_eq!(chain_len(16), 16);
}

#[test]
fn deep_pointer_chain_does_not_overflow() {
    // Each level owns a small frame-local buffer, like a builder collecting fields.
    fn walk(depth: u64) -> u64 {
        ensure_sufficient_stack(|| {
            let fields = [depth; 8];
            if depth == 0 {
                0
            } else {
                walk(depth - 1) + fields[7] - depth + 1
            }
        })
    }

    assert_eq!(walk(100_000), 100_000);
}

#[test]
fn propagates_errors_unchanged() {
    let result: Result<u32, &str> = ensure_sufficient_stack(|| Err("missing node"));
    assert_eq!(result, Err("missing node"));
}
