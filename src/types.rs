//! Type tags for declarations and runtime values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five types a declaration or value can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Null,
    Int,
    Float,
    Bool,
    String,
}

impl Type {
    /// Canonical lowercase name, as written in source and in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Null => "null",
            Type::Int => "int",
            Type::Float => "float",
            Type::Bool => "bool",
            Type::String => "string",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
