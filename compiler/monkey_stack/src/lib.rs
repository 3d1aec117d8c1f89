//! Stack growth for recursive walks over syntax trees.
//!
//! Rendering, visiting and evaluating a Monkey tree all recurse once per
//! nesting level. A parser happily builds `-(-(-(... x)))` thousands of
//! levels deep, so those walks route each level through
//! [`ensure_sufficient_stack`], which grows the stack on demand. Code that
//! recurses without it (derived `Clone` or `PartialEq` on a tree) is bounded
//! by the thread's stack.
//!
//! On `wasm32` the helper is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn depth(expr: &Expression) -> usize {
///     ensure_sufficient_stack(|| match expr {
///         Expression::Prefix(prefix) => 1 + depth(&prefix.right),
///         _ => 1,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
