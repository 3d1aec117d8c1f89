//! Monkey Object - runtime values and the state an evaluator threads through.
//!
//! - `Value` / `ValueType`: the closed set of runtime values, including the
//!   two sentinels (`ReturnValue`, `Error`) that carry control flow
//! - `FunctionValue`: a closure over a function literal and the environment
//!   it was defined in
//! - `Environment`: shared, mutable lexical scopes
//! - `errors`: structured runtime errors and the factories that turn them
//!   into `Value::Error`
//! - `control`: sentinel propagation through statement sequences and calls
//!
//! # Threading
//!
//! Values and environments are single-threaded (`Rc`/`RefCell`). Syntax
//! trees from `monkey_ir` are `Send + Sync`; the runtime built on them is not.

pub mod control;
mod environment;
pub mod errors;
mod value;

use std::sync::Once;

pub use environment::{Environment, LocalScope};
pub use errors::{
    division_by_zero, identifier_not_found, not_a_function, type_mismatch,
    unknown_infix_operator, unknown_prefix_operator, wrong_argument_count, EvalErrorKind,
};
pub use value::{FunctionValue, Heap, Value, ValueType};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for runtime debugging.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=monkey_object=debug` or `RUST_LOG=monkey_object=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // An embedding binary may already own the global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
mod tests;
