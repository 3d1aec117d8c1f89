//! Tree builders.
//!
//! Shorthand constructors that pair each node with the token a parser would
//! have given it. There is no parser in this workspace, so unit tests,
//! property tests and downstream crates' tests build trees with these.
//!
//! This module is not gated on `#[cfg(test)]` so tests in other crates can
//! use it.

use crate::ast::{
    BlockStatement, BooleanLiteral, Expression, ExpressionStatement, FunctionLiteral, Identifier,
    IfExpression, InfixExpression, InfixOperator, IntegerLiteral, LetStatement, Node,
    PrefixExpression, PrefixOperator, ReturnStatement, Statement,
};
use crate::{Token, TokenKind};

pub fn ident(name: &str) -> Identifier {
    Identifier::new(Token::new(TokenKind::Ident, name), name)
}

/// Identifier in expression position.
pub fn name(name: &str) -> Expression {
    Expression::Identifier(ident(name))
}

pub fn int(value: i64) -> Expression {
    IntegerLiteral::new(Token::new(TokenKind::Int, value.to_string()), value).into()
}

pub fn boolean(value: bool) -> Expression {
    let kind = if value { TokenKind::True } else { TokenKind::False };
    BooleanLiteral::new(Token::new(kind, value.to_string()), value).into()
}

pub fn prefix(operator: PrefixOperator, right: Expression) -> Expression {
    let token = Token::new(operator.token_kind(), operator.as_symbol());
    PrefixExpression::new(token, operator, right).into()
}

pub fn infix(left: Expression, operator: InfixOperator, right: Expression) -> Expression {
    let token = Token::new(operator.token_kind(), operator.as_symbol());
    InfixExpression::new(token, left, operator, right).into()
}

pub fn if_else(
    condition: Expression,
    consequence: Vec<Statement>,
    alternative: Option<Vec<Statement>>,
) -> Expression {
    IfExpression::new(
        Token::new(TokenKind::If, "if"),
        condition,
        block(consequence),
        alternative.map(block),
    )
    .into()
}

pub fn function(parameters: &[&str], body: Vec<Statement>) -> FunctionLiteral {
    FunctionLiteral::new(
        Token::new(TokenKind::Function, "fn"),
        parameters.iter().map(|parameter| ident(parameter)).collect(),
        block(body),
    )
}

pub fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement::new(Token::new(TokenKind::LBrace, "{"), statements)
}

/// Expression statement whose token is the expression's own first token.
pub fn expr_stmt(expression: Expression) -> Statement {
    let token = Token::new(TokenKind::Ident, expression.token_literal());
    ExpressionStatement::new(token, Some(expression)).into()
}

pub fn let_stmt(bound: &str, value: Option<Expression>) -> Statement {
    LetStatement::new(Token::new(TokenKind::Let, "let"), ident(bound), value).into()
}

pub fn return_stmt(value: Option<Expression>) -> Statement {
    ReturnStatement::new(Token::new(TokenKind::Return, "return"), value).into()
}
