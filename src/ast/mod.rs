//! Abstract Syntax Tree for the Declan language
//!
//! One compilation unit holds at most one declaration. Nodes own their
//! children exclusively (`Box`), so destroying the root destroys the whole
//! tree exactly once.

use serde::{Deserialize, Serialize};

use crate::types::Type;
use crate::value::Value;

/// Top-level AST for one compilation unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ast {
    pub decl: Option<Node>,
}

/// AST node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Node {
    VarDecl(VarDecl),
    Literal(Literal),
}

impl Node {
    pub fn line(&self) -> u32 {
        match self {
            Node::VarDecl(decl) => decl.line,
            Node::Literal(literal) => literal.line,
        }
    }

    pub fn column(&self) -> u32 {
        match self {
            Node::VarDecl(decl) => decl.column,
            Node::Literal(literal) => literal.column,
        }
    }
}

/// Variable declaration: `let name: type = literal;`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: String,
    pub declared_type: Type,
    pub initializer: Box<Node>,
    /// Position of the declared name
    pub line: u32,
    pub column: u32,
}

/// Literal initializer with its evaluated value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Literal {
    pub value: Value,
    pub line: u32,
    pub column: u32,
}
