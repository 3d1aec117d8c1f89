//! Iterative teardown.
//!
//! Compiler-generated drop glue recurses once per nesting level, so a tree
//! that renders fine could still overflow the stack when freed. These impls
//! detach each node's children onto a heap worklist first; a node is then
//! dropped with only leaves left in it.

use std::mem;
use std::sync::Arc;

use super::{BlockStatement, BooleanLiteral, Expression, Statement};
use crate::{Token, TokenKind};

enum Detached {
    Expression(Expression),
    Statement(Statement),
}

/// Allocation-free stand-in left behind in a detached `Box` slot.
fn placeholder() -> Expression {
    Expression::Boolean(BooleanLiteral::new(
        Token::new(TokenKind::Illegal, String::new()),
        false,
    ))
}

fn is_leaf(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::Identifier(_) | Expression::Integer(_) | Expression::Boolean(_)
    )
}

fn push_expression(pending: &mut Vec<Detached>, expression: Expression) {
    if !is_leaf(&expression) {
        pending.push(Detached::Expression(expression));
    }
}

fn push_block(pending: &mut Vec<Detached>, block: &mut BlockStatement) {
    pending.extend(
        mem::take(&mut block.statements)
            .into_iter()
            .map(Detached::Statement),
    );
}

fn detach_expression(expression: &mut Expression, pending: &mut Vec<Detached>) {
    match expression {
        Expression::Identifier(_) | Expression::Integer(_) | Expression::Boolean(_) => {}
        Expression::Prefix(expr) => {
            push_expression(pending, mem::replace(&mut *expr.right, placeholder()));
        }
        Expression::Infix(expr) => {
            push_expression(pending, mem::replace(&mut *expr.left, placeholder()));
            push_expression(pending, mem::replace(&mut *expr.right, placeholder()));
        }
        Expression::If(expr) => {
            push_expression(pending, mem::replace(&mut *expr.condition, placeholder()));
            push_block(pending, &mut expr.consequence);
            if let Some(alternative) = &mut expr.alternative {
                push_block(pending, alternative);
            }
        }
        Expression::Function(expr) => {
            // A body still shared with a function value is freed by its last owner.
            if let Some(body) = Arc::get_mut(&mut expr.body) {
                push_block(pending, body);
            }
        }
    }
}

fn detach_statement(statement: &mut Statement, pending: &mut Vec<Detached>) {
    match statement {
        Statement::Let(stmt) => {
            if let Some(value) = stmt.value.take() {
                push_expression(pending, value);
            }
        }
        Statement::Return(stmt) => {
            if let Some(value) = stmt.return_value.take() {
                push_expression(pending, value);
            }
        }
        Statement::Block(block) => push_block(pending, block),
        Statement::Expression(stmt) => {
            if let Some(expression) = stmt.expression.take() {
                push_expression(pending, expression);
            }
        }
    }
}

fn drain(mut pending: Vec<Detached>) {
    while let Some(node) = pending.pop() {
        match node {
            Detached::Expression(mut expression) => {
                detach_expression(&mut expression, &mut pending);
            }
            Detached::Statement(mut statement) => {
                detach_statement(&mut statement, &mut pending);
            }
        }
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        if is_leaf(self) {
            return;
        }
        let mut pending = Vec::new();
        detach_expression(self, &mut pending);
        drain(pending);
    }
}

impl Drop for Statement {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_statement(self, &mut pending);
        drain(pending);
    }
}
