//! Syntax-tree node taxonomy.
//!
//! # Module Structure
//!
//! - `stmt`: statement nodes and the `Statement` enum
//! - `expr`: expression nodes and the `Expression` enum
//! - `operators`: prefix and infix operators
//! - `teardown`: non-recursive `Drop` for the node enums
//!
//! A node kind is either a statement or an expression, never both: the
//! split is the two enums. `Program` is the root and is neither.

mod expr;
mod operators;
mod stmt;
mod teardown;

use std::fmt;

pub use expr::{
    BooleanLiteral, Expression, FunctionLiteral, Identifier, IfExpression, InfixExpression,
    IntegerLiteral, PrefixExpression, write_parameters,
};
pub use operators::{InfixOperator, PrefixOperator};
pub use stmt::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement};

/// Capability shared by every syntax-tree node.
///
/// `Display` is the canonical rendering; [`Node::string`] is a shorthand
/// for it.
pub trait Node: fmt::Display {
    /// Literal text of the token this node was built from.
    fn token_literal(&self) -> &str;

    /// Canonical, fully parenthesized rendering of this subtree.
    fn string(&self) -> String {
        self.to_string()
    }
}

/// Root of a parsed program.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    /// The first statement's literal, or empty for an empty program.
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", Statement::token_literal)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
