//! Statement Types
//!
//! Statement nodes and the `Statement` enum dispatching over them.

use std::fmt;

use monkey_stack::ensure_sufficient_stack;

use super::{Expression, Identifier, Node};
use crate::Token;

/// `let <name> = <value>;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LetStatement {
    /// The `let` keyword.
    pub token: Token,
    pub name: Identifier,
    /// Absent when the parser recovered from a malformed initializer.
    pub value: Option<Expression>,
}

impl LetStatement {
    pub fn new(token: Token, name: Identifier, value: Option<Expression>) -> Self {
        LetStatement { token, name, value }
    }
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        f.write_str(";")
    }
}

/// `return [<value>];`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReturnStatement {
    /// The `return` keyword.
    pub token: Token,
    pub return_value: Option<Expression>,
}

impl ReturnStatement {
    pub fn new(token: Token, return_value: Option<Expression>) -> Self {
        ReturnStatement {
            token,
            return_value,
        }
    }
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token_literal())?;
        if let Some(value) = &self.return_value {
            write!(f, " {value}")?;
        }
        f.write_str(";")
    }
}

/// A braced sequence of statements.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BlockStatement {
    /// The opening `{`.
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(token: Token, statements: Vec<Statement>) -> Self {
        BlockStatement { token, statements }
    }
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// An expression used in statement position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExpressionStatement {
    /// First token of the expression.
    pub token: Token,
    pub expression: Option<Expression>,
}

impl ExpressionStatement {
    pub fn new(token: Token, expression: Option<Expression>) -> Self {
        ExpressionStatement { token, expression }
    }
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{expression}"),
            None => Ok(()),
        }
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Block(BlockStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Block(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Statement::Let(stmt) => fmt::Display::fmt(stmt, f),
            Statement::Return(stmt) => fmt::Display::fmt(stmt, f),
            Statement::Block(stmt) => fmt::Display::fmt(stmt, f),
            Statement::Expression(stmt) => fmt::Display::fmt(stmt, f),
        })
    }
}

impl From<LetStatement> for Statement {
    fn from(stmt: LetStatement) -> Self {
        Statement::Let(stmt)
    }
}

impl From<ReturnStatement> for Statement {
    fn from(stmt: ReturnStatement) -> Self {
        Statement::Return(stmt)
    }
}

impl From<BlockStatement> for Statement {
    fn from(stmt: BlockStatement) -> Self {
        Statement::Block(stmt)
    }
}

impl From<ExpressionStatement> for Statement {
    fn from(stmt: ExpressionStatement) -> Self {
        Statement::Expression(stmt)
    }
}
