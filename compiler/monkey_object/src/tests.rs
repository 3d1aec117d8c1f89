use super::*;
use crate::test_helpers::{expr_stmt, int, return_stmt, TreeWalker};
use monkey_ir::Program;

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();

    // Events fire through whatever subscriber is installed.
    let program = Program::new(vec![
        return_stmt(Some(int(1))),
        expr_stmt(int(2)),
    ]);
    let value = TreeWalker::new().eval_program(&program, &Environment::new());
    assert_eq!(value, Value::Integer(1));
}
