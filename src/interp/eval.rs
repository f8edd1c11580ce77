//! Tree-walking evaluator

use crate::ast::{Ast, Literal, Node, VarDecl};
use crate::common::RunConfig;
use crate::diagnostics::Diagnostic;
use crate::value::Value;

use super::env::Environment;

/// Tree-walking interpreter. The environment lives exactly as long as the
/// interpreter instance; the driver creates one per compilation unit.
pub struct Interpreter {
    env: Environment,
    /// Echo each bound variable to the primary output (interactive mode)
    echo: bool,
    /// Rendered echo lines, kept for testing
    output: Vec<String>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_config(&RunConfig::default())
    }

    pub fn with_config(config: &RunConfig) -> Self {
        Interpreter {
            env: Environment::new(),
            echo: config.echo,
            output: Vec::new(),
        }
    }

    /// The environment owned by this interpreter.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Get captured echo output (for testing)
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Clear the echo output buffer
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Execute one compilation unit. An absent declaration yields Null
    /// without touching the environment.
    pub fn interpret(&mut self, ast: &Ast) -> Result<Value, Diagnostic> {
        tracing::debug!("starting interpretation");
        match &ast.decl {
            Some(node) => self.eval_node(node),
            None => Ok(Value::Null),
        }
    }

    fn eval_node(&mut self, node: &Node) -> Result<Value, Diagnostic> {
        match node {
            Node::VarDecl(decl) => self.eval_var_decl(decl),
            Node::Literal(literal) => Ok(Self::eval_literal(literal)),
        }
    }

    fn eval_var_decl(&mut self, decl: &VarDecl) -> Result<Value, Diagnostic> {
        tracing::debug!(name = %decl.name, "evaluating variable declaration");

        let value = self.eval_node(&decl.initializer)?;

        // The value keeps the tag it evaluated to; a null initializer of a
        // non-null declared type stays Null, it is not coerced.
        self.env.define(decl.name.clone(), value.clone());

        if self.echo {
            let rendered = format!("{}: {} = {}", decl.name, decl.declared_type, value);
            println!("{rendered}");
            self.output.push(rendered);
        }

        Ok(value)
    }

    fn eval_literal(literal: &Literal) -> Value {
        literal.value.clone()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
