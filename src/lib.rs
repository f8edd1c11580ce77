//! Declan — a minimal statically-typed declaration language
//!
//! A compilation unit is a single statement of the form
//! `let <name> : <type> = <literal> ;`, executed by a four-stage pipeline:
//!
//! ```text
//! Source → Lexer → Parser → AST → Semantic Check → Interpreter
//! ```
//!
//! Tokens are pulled by the parser on demand, each stage returns
//! `Result<_, Diagnostic>`, and the first error aborts the unit.
//!
//! # Example
//!
//! ```
//! let value = declan::interpret("let x: int = 42;").unwrap();
//! assert_eq!(value, declan::Value::Int(42));
//! ```

pub mod ast;
pub mod check;
pub mod common;
pub mod diagnostics;
pub mod embed;
pub mod interp;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod types;
pub mod value;

// Re-exports for convenience
pub use common::{LogLevel, RunConfig, Span};
pub use diagnostics::{Diagnostic, ErrorKind, SourceFile};
pub use types::Type;
pub use value::Value;

/// Interpreter version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse source code to an AST
pub fn parse(source: &str) -> Result<ast::Ast, Diagnostic> {
    let file = SourceFile::new("<input>", source);
    parser::parse(&file)
}

/// Parse and semantically check source code, returning the validated AST
pub fn analyze(source: &str) -> Result<ast::Ast, Diagnostic> {
    let ast = parse(source)?;
    check::check(&ast)?;
    Ok(ast)
}

/// Execute source code end-to-end with default configuration (echo off)
pub fn interpret(source: &str) -> Result<Value, Diagnostic> {
    let file = SourceFile::new("<input>", source);
    run(&file, &RunConfig::default())
}

/// Pipeline entry point with explicit run configuration. Stages run in
/// order and the unit stops at the first diagnostic; the interpreter and
/// its environment live for this call only.
pub fn run(source: &SourceFile, config: &RunConfig) -> Result<Value, Diagnostic> {
    let ast = parser::parse(source)?;
    check::check(&ast)?;
    tracing::debug!(ast = ?ast, "checked unit");
    let mut interpreter = interp::Interpreter::with_config(config);
    interpreter.interpret(&ast)
}
