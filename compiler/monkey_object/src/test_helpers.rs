//! Test helpers for runtime unit testing.
//!
//! Re-exports the `monkey_ir` tree builders (there is no parser in this
//! workspace) and provides `TreeWalker`, a minimal evaluator that drives the
//! `control` helpers the way a real evaluator would. It counts evaluated statements so tests can check that
//! sentinels skip the rest of a sequence.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use monkey_ir::{BlockStatement, Expression, InfixOperator, PrefixOperator, Program, Statement};

use crate::control::{eval_block_statements, eval_program_statements};
use crate::{
    division_by_zero, identifier_not_found, type_mismatch, unknown_infix_operator,
    unknown_prefix_operator, Environment, Value,
};

pub use monkey_ir::build::{
    boolean, expr_stmt, function, if_else, infix, int, let_stmt, name, prefix, return_stmt,
};

// -- Evaluation Harness --

/// Tree-walking evaluator for the node kinds in `monkey_ir`.
#[derive(Default)]
pub struct TreeWalker {
    /// Statements evaluated so far.
    pub evaluated: usize,
}

impl TreeWalker {
    pub fn new() -> Self {
        TreeWalker::default()
    }

    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Value {
        eval_program_statements(&program.statements, |statement| {
            self.eval_statement(statement, env)
        })
    }

    pub fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> Value {
        eval_block_statements(&block.statements, |statement| {
            self.eval_statement(statement, env)
        })
    }

    pub fn eval_statement(&mut self, statement: &Statement, env: &Environment) -> Value {
        self.evaluated += 1;
        match statement {
            Statement::Let(stmt) => {
                let value = self.eval_optional(stmt.value.as_ref(), env);
                if value.is_sentinel() {
                    return value;
                }
                env.set(stmt.name.name(), value);
                Value::NULL
            }
            Statement::Return(stmt) => {
                Value::return_value(self.eval_optional(stmt.return_value.as_ref(), env))
            }
            Statement::Block(block) => self.eval_block(block, env),
            Statement::Expression(stmt) => self.eval_optional(stmt.expression.as_ref(), env),
        }
    }

    fn eval_optional(&mut self, expression: Option<&Expression>, env: &Environment) -> Value {
        match expression {
            Some(expression) => self.eval_expression(expression, env),
            None => Value::NULL,
        }
    }

    pub fn eval_expression(&mut self, expression: &Expression, env: &Environment) -> Value {
        match expression {
            Expression::Identifier(identifier) => env
                .get(identifier.name())
                .unwrap_or_else(|| identifier_not_found(identifier.name())),
            Expression::Integer(literal) => Value::Integer(literal.value),
            Expression::Boolean(literal) => Value::from_bool(literal.value),
            Expression::Prefix(expr) => {
                let right = self.eval_expression(&expr.right, env);
                if right.is_error() {
                    return right;
                }
                match (expr.operator, right) {
                    (PrefixOperator::Bang, right) => Value::from_bool(!right.is_truthy()),
                    (PrefixOperator::Minus, Value::Integer(value)) => Value::Integer(-value),
                    (operator, right) => unknown_prefix_operator(operator, right.value_type()),
                }
            }
            Expression::Infix(expr) => {
                let left = self.eval_expression(&expr.left, env);
                if left.is_error() {
                    return left;
                }
                let right = self.eval_expression(&expr.right, env);
                if right.is_error() {
                    return right;
                }
                eval_infix(expr.operator, &left, &right)
            }
            Expression::If(expr) => {
                let condition = self.eval_expression(&expr.condition, env);
                if condition.is_error() {
                    return condition;
                }
                if condition.is_truthy() {
                    self.eval_block(&expr.consequence, env)
                } else if let Some(alternative) = &expr.alternative {
                    self.eval_block(alternative, env)
                } else {
                    Value::NULL
                }
            }
            Expression::Function(literal) => Value::function(literal, env),
        }
    }
}

fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => match operator {
            InfixOperator::Plus => Value::Integer(l + r),
            InfixOperator::Minus => Value::Integer(l - r),
            InfixOperator::Asterisk => Value::Integer(l * r),
            InfixOperator::Slash if *r == 0 => division_by_zero(),
            InfixOperator::Slash => Value::Integer(l / r),
            InfixOperator::Lt => Value::from_bool(l < r),
            InfixOperator::Gt => Value::from_bool(l > r),
            InfixOperator::Eq => Value::from_bool(l == r),
            InfixOperator::NotEq => Value::from_bool(l != r),
        },
        _ if left.value_type() != right.value_type() => {
            type_mismatch(left.value_type(), operator, right.value_type())
        }
        (Value::Boolean(l), Value::Boolean(r)) if operator == InfixOperator::Eq => {
            Value::from_bool(l == r)
        }
        (Value::Boolean(l), Value::Boolean(r)) if operator == InfixOperator::NotEq => {
            Value::from_bool(l != r)
        }
        _ => unknown_infix_operator(left.value_type(), operator, right.value_type()),
    }
}
