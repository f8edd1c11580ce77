//! Semantic analysis for Declan
//!
//! A single pass over the AST with a pass-local symbol table. The pass
//! succeeds only if no diagnostic was raised during the visit.

use indexmap::IndexMap;

use crate::ast::{Ast, Node, VarDecl};
use crate::diagnostics::Diagnostic;
use crate::types::Type;

/// Run one semantic pass over a compilation unit
pub fn check(ast: &Ast) -> Result<(), Diagnostic> {
    let mut checker = Checker::new();
    checker.check_unit(ast)
}

/// Analyzer state. The symbol table lives for one pass and is discarded
/// with the checker; no two entries may share a name within a pass.
pub struct Checker {
    symbols: IndexMap<String, Type>,
}

impl Checker {
    pub fn new() -> Self {
        Self {
            symbols: IndexMap::new(),
        }
    }

    pub fn check_unit(&mut self, ast: &Ast) -> Result<(), Diagnostic> {
        tracing::debug!("starting semantic analysis");
        match &ast.decl {
            Some(node) => self.check_node(node),
            None => Ok(()),
        }
    }

    fn check_node(&mut self, node: &Node) -> Result<(), Diagnostic> {
        match node {
            Node::VarDecl(decl) => self.check_var_decl(decl),
            // Literals are always valid on their own
            Node::Literal(_) => Ok(()),
        }
    }

    fn check_var_decl(&mut self, decl: &VarDecl) -> Result<(), Diagnostic> {
        tracing::debug!(name = %decl.name, "analyzing variable declaration");

        // Unreachable while the grammar admits one declaration per pass;
        // kept as the hook for a multi-statement extension.
        if self.symbols.contains_key(&decl.name) {
            return Err(Diagnostic::AlreadyDeclared {
                name: decl.name.clone(),
                line: decl.line,
                column: decl.column,
            });
        }
        self.symbols.insert(decl.name.clone(), decl.declared_type);

        let initializer = &decl.initializer;
        let init_type = node_type(initializer);
        if !compatible(decl.declared_type, init_type) {
            return Err(Diagnostic::TypeMismatch {
                expected: decl.declared_type,
                found: init_type,
                line: initializer.line(),
                column: initializer.column(),
            });
        }

        Ok(())
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

/// The type a node evaluates to
fn node_type(node: &Node) -> Type {
    match node {
        Node::Literal(literal) => literal.value.type_of(),
        Node::VarDecl(decl) => decl.declared_type,
    }
}

/// Assignment compatibility: identical types always; a null literal with
/// every declared type; an int literal with a float-declared variable
/// (widening). All other cross-type pairs are incompatible.
fn compatible(declared: Type, init: Type) -> bool {
    declared == init || init == Type::Null || (declared == Type::Float && init == Type::Int)
}
