//! Expression Types
//!
//! Expression nodes and the `Expression` enum dispatching over them.
//!
//! Recursive children are boxed and owned by their parent. A function
//! literal's parameters and body sit behind `Arc` so runtime function values
//! can share them with the tree.

use std::fmt;
use std::sync::Arc;

use monkey_stack::ensure_sufficient_stack;

use super::{BlockStatement, InfixOperator, Node, PrefixOperator};
use crate::Token;

/// A name reference or binding.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token, value: impl Into<String>) -> Self {
        Identifier {
            token,
            value: value.into(),
        }
    }

    /// The identifier's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.value
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A 64-bit signed integer literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    pub fn new(token: Token, value: i64) -> Self {
        IntegerLiteral { token, value }
    }
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token.literal())
    }
}

/// `true` or `false`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl BooleanLiteral {
    pub fn new(token: Token, value: bool) -> Self {
        BooleanLiteral { token, value }
    }
}

impl Node for BooleanLiteral {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token.literal())
    }
}

/// `<operator><right>`, rendered `(<operator><right>)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PrefixExpression {
    /// The operator token.
    pub token: Token,
    pub operator: PrefixOperator,
    pub right: Box<Expression>,
}

impl PrefixExpression {
    pub fn new(token: Token, operator: PrefixOperator, right: Expression) -> Self {
        PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }
    }
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// `<left> <operator> <right>`, rendered `(<left> <operator> <right>)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InfixExpression {
    /// The operator token.
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: InfixOperator,
    pub right: Box<Expression>,
}

impl InfixExpression {
    pub fn new(
        token: Token,
        left: Expression,
        operator: InfixOperator,
        right: Expression,
    ) -> Self {
        InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// `if (<condition>) { ... } [else { ... }]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfExpression {
    /// The `if` keyword.
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl IfExpression {
    pub fn new(
        token: Token,
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }
    }
}

impl Node for IfExpression {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {alternative}")?;
        }
        Ok(())
    }
}

/// `fn(<parameters>) { <body> }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionLiteral {
    /// The `fn` keyword.
    pub token: Token,
    pub parameters: Arc<[Identifier]>,
    pub body: Arc<BlockStatement>,
}

impl FunctionLiteral {
    pub fn new(token: Token, parameters: Vec<Identifier>, body: BlockStatement) -> Self {
        FunctionLiteral {
            token,
            parameters: parameters.into(),
            body: Arc::new(body),
        }
    }
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.token_literal())?;
        write_parameters(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

/// Write parameter names separated by `", "`.
///
/// Shared with runtime function values so both render parameter lists
/// identically.
pub fn write_parameters(f: &mut fmt::Formatter<'_>, parameters: &[Identifier]) -> fmt::Result {
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{parameter}")?;
    }
    Ok(())
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => expr.token_literal(),
            Expression::Integer(expr) => expr.token_literal(),
            Expression::Boolean(expr) => expr.token_literal(),
            Expression::Prefix(expr) => expr.token_literal(),
            Expression::Infix(expr) => expr.token_literal(),
            Expression::If(expr) => expr.token_literal(),
            Expression::Function(expr) => expr.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expression::Identifier(expr) => fmt::Display::fmt(expr, f),
            Expression::Integer(expr) => fmt::Display::fmt(expr, f),
            Expression::Boolean(expr) => fmt::Display::fmt(expr, f),
            Expression::Prefix(expr) => fmt::Display::fmt(expr, f),
            Expression::Infix(expr) => fmt::Display::fmt(expr, f),
            Expression::If(expr) => fmt::Display::fmt(expr, f),
            Expression::Function(expr) => fmt::Display::fmt(expr, f),
        })
    }
}

impl From<Identifier> for Expression {
    fn from(expr: Identifier) -> Self {
        Expression::Identifier(expr)
    }
}

impl From<IntegerLiteral> for Expression {
    fn from(expr: IntegerLiteral) -> Self {
        Expression::Integer(expr)
    }
}

impl From<BooleanLiteral> for Expression {
    fn from(expr: BooleanLiteral) -> Self {
        Expression::Boolean(expr)
    }
}

impl From<PrefixExpression> for Expression {
    fn from(expr: PrefixExpression) -> Self {
        Expression::Prefix(expr)
    }
}

impl From<InfixExpression> for Expression {
    fn from(expr: InfixExpression) -> Self {
        Expression::Infix(expr)
    }
}

impl From<IfExpression> for Expression {
    fn from(expr: IfExpression) -> Self {
        Expression::If(expr)
    }
}

impl From<FunctionLiteral> for Expression {
    fn from(expr: FunctionLiteral) -> Self {
        Expression::Function(expr)
    }
}
