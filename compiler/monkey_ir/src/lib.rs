//! Monkey IR - tokens and syntax-tree nodes.
//!
//! This crate contains the data the parser produces and the evaluator
//! consumes:
//! - `Token` / `TokenKind`: a lexical class plus the literal text it matched
//! - `ast`: the closed node taxonomy (`Program`, `Statement`, `Expression`)
//!   and the `Node` trait every node implements
//! - `visitor`: read-only traversal over a tree
//! - `build`: shorthand tree constructors for tests
//!
//! # Canonical Rendering
//!
//! Every node implements `Display`. The output is not the original source:
//! prefix and infix expressions always parenthesize themselves, so the
//! rendered text spells out the tree's shape. `-a * b` renders as
//! `((-a) * b)`, which is how parser precedence gets checked in tests.
//!
//! # Ownership
//!
//! Nodes own their children. The only shared parts are a function literal's
//! parameter list and body (`Arc`), which runtime function values keep alive
//! after the tree that defined them is gone. Trees are immutable and
//! `Send + Sync`.
//!
//! # Depth
//!
//! Rendering, visiting and dropping handle arbitrarily deep trees: the first
//! two grow the stack on demand and drop is iterative. The derived `Clone`,
//! `PartialEq`, `Hash` and `Debug` impls still recurse once per level on the
//! ordinary thread stack.

pub mod ast;
pub mod build;
mod token;
pub mod visitor;

pub use ast::{
    BlockStatement, BooleanLiteral, Expression, ExpressionStatement, FunctionLiteral,
    Identifier, IfExpression, InfixExpression, InfixOperator, IntegerLiteral, LetStatement, Node,
    PrefixExpression, PrefixOperator, Program, ReturnStatement, Statement,
};
pub use token::{Token, TokenKind};
