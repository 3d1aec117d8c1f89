use super::*;

#[test]
fn returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 7 * 6), 42);
}

#[test]
fn passes_results_through() {
    let result: Result<&str, String> = ensure_sufficient_stack(|| Ok("rendered"));
    assert_eq!(result, Ok("rendered"));
}

#[test]
fn deep_recursion_does_not_overflow() {
    fn nesting(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { nesting(n - 1) + 1 })
    }

    // Far deeper than a default 2MB test thread stack allows.
    assert_eq!(nesting(200_000), 200_000);
}
