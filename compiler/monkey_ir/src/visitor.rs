//! AST Visitor Pattern
//!
//! Read-only traversal over a syntax tree.
//!
//! # Design
//!
//! Default `visit_*` methods call the matching `walk_*` function, which
//! visits children in source order. Override a `visit_*` method to act on
//! a node, and call the `walk_*` function from it to keep descending.
//!
//! Dispatch is an exhaustive `match` over the node enums, so adding a
//! variant fails to compile here until the traversal handles it.
//!
//! # Example
//!
//! ```text
//! struct CountIdentifiers {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountIdentifiers {
//!     fn visit_identifier(&mut self, _identifier: &'ast Identifier) {
//!         self.count += 1;
//!     }
//! }
//! ```

use monkey_stack::ensure_sufficient_stack;

use crate::ast::{BlockStatement, Expression, Identifier, Program, Statement};

/// AST Visitor trait.
pub trait Visitor<'ast> {
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }

    fn visit_statement(&mut self, statement: &'ast Statement) {
        walk_statement(self, statement);
    }

    /// Visit a block body (if branches, function bodies, nested blocks).
    fn visit_block(&mut self, block: &'ast BlockStatement) {
        walk_block(self, block);
    }

    fn visit_expression(&mut self, expression: &'ast Expression) {
        walk_expression(self, expression);
    }

    /// Visit an identifier, whether it is a use, a `let` name or a parameter.
    fn visit_identifier(&mut self, identifier: &'ast Identifier) {
        let _ = identifier;
    }
}

pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, program: &'ast Program) {
    for statement in &program.statements {
        visitor.visit_statement(statement);
    }
}

pub fn walk_statement<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    statement: &'ast Statement,
) {
    ensure_sufficient_stack(|| match statement {
        Statement::Let(stmt) => {
            visitor.visit_identifier(&stmt.name);
            if let Some(value) = &stmt.value {
                visitor.visit_expression(value);
            }
        }
        Statement::Return(stmt) => {
            if let Some(value) = &stmt.return_value {
                visitor.visit_expression(value);
            }
        }
        Statement::Block(block) => visitor.visit_block(block),
        Statement::Expression(stmt) => {
            if let Some(expression) = &stmt.expression {
                visitor.visit_expression(expression);
            }
        }
    });
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast BlockStatement) {
    ensure_sufficient_stack(|| {
        for statement in &block.statements {
            visitor.visit_statement(statement);
        }
    });
}

pub fn walk_expression<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expression: &'ast Expression,
) {
    ensure_sufficient_stack(|| match expression {
        Expression::Identifier(identifier) => visitor.visit_identifier(identifier),
        Expression::Integer(_) | Expression::Boolean(_) => {}
        Expression::Prefix(prefix) => visitor.visit_expression(&prefix.right),
        Expression::Infix(infix) => {
            visitor.visit_expression(&infix.left);
            visitor.visit_expression(&infix.right);
        }
        Expression::If(if_expr) => {
            visitor.visit_expression(&if_expr.condition);
            visitor.visit_block(&if_expr.consequence);
            if let Some(alternative) = &if_expr.alternative {
                visitor.visit_block(alternative);
            }
        }
        Expression::Function(function) => {
            for parameter in function.parameters.iter() {
                visitor.visit_identifier(parameter);
            }
            visitor.visit_block(&function.body);
        }
    });
}
