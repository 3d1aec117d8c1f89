//! Sentinel propagation.
//!
//! These helpers own the control-flow half of evaluation: walking statement
//! sequences, stopping at `return` and errors, and unwrapping returns at
//! function and program boundaries. The caller supplies the evaluation of
//! individual nodes as a closure, so this module never inspects the syntax
//! beyond statement lists and function bodies.

use monkey_ir::{BlockStatement, Statement};

use crate::environment::Environment;
use crate::errors::not_a_function;
use crate::value::Value;

/// Evaluate a block's statements in order.
///
/// Stops at the first sentinel and returns it unchanged, so a `return`
/// inside a nested block still reaches the enclosing function. An empty
/// block is `null`; otherwise the result is the last statement's value.
pub fn eval_block_statements<'a, F>(statements: &'a [Statement], mut eval: F) -> Value
where
    F: FnMut(&'a Statement) -> Value,
{
    let mut result = Value::NULL;
    for (index, statement) in statements.iter().enumerate() {
        result = eval(statement);
        if result.is_sentinel() {
            tracing::trace!(
                sentinel = %result.value_type(),
                skipped = statements.len() - index - 1,
                "short-circuit"
            );
            return result;
        }
    }
    result
}

/// Evaluate a program's top-level statements.
///
/// Like [`eval_block_statements`], but a `ReturnValue` is unwrapped: the
/// program's result is the returned value itself. Errors are returned as-is.
pub fn eval_program_statements<'a, F>(statements: &'a [Statement], eval: F) -> Value
where
    F: FnMut(&'a Statement) -> Value,
{
    eval_block_statements(statements, eval).unwrap_return_value()
}

/// Call `callee` with `arguments`.
///
/// The body runs in a fresh scope enclosed by the function's captured
/// environment. A `ReturnValue` produced by the body stops at this boundary;
/// an error keeps propagating. Calling a non-function or passing the wrong
/// number of arguments yields an error value.
pub fn apply_function<F>(callee: &Value, arguments: Vec<Value>, eval_body: F) -> Value
where
    F: FnOnce(&BlockStatement, &Environment) -> Value,
{
    let Value::Function(function) = callee else {
        return not_a_function(callee.value_type());
    };
    match function.enclosed_environment(arguments) {
        Ok(env) => eval_body(&function.body, &env).unwrap_return_value(),
        Err(kind) => kind.into(),
    }
}
