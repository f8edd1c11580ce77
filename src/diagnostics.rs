//! Diagnostic reporting with source locations
//!
//! Every pipeline stage returns `Result<_, Diagnostic>`; the first error
//! aborts the compilation unit, so exactly one diagnostic is ever produced
//! per unit. Rendering uses miette, which draws the source line and a caret
//! underline for diagnostics that carry a source attachment.

use crate::common::Span;
use crate::types::Type;
use miette::{NamedSource, SourceSpan};
use std::fmt;
use std::sync::Arc;

/// Source file for error reporting
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: Arc<str>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Arc::from(content.into()),
        }
    }

    pub fn to_named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name.clone(), self.content.to_string())
    }
}

/// Convert our Span to miette's SourceSpan
impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Diagnostic category, mirrored by the embedding API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Type,
    Name,
    Runtime,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Syntax => "Syntax Error",
            ErrorKind::Type => "Type Error",
            ErrorKind::Name => "Name Error",
            ErrorKind::Runtime => "Runtime Error",
            ErrorKind::Internal => "Internal Error",
        };
        write!(f, "{}", name)
    }
}

/// The single diagnostic of a compilation unit
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone)]
pub enum Diagnostic {
    // === Lexical errors ===
    #[error("Unterminated string.")]
    #[diagnostic(code(lex::unterminated_string))]
    UnterminatedString {
        #[label("string opened here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected character: '{ch}'")]
    #[diagnostic(code(lex::unexpected_character))]
    UnexpectedCharacter {
        ch: char,
        #[label("not part of the language")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    // === Parse errors ===
    #[error("{message}")]
    #[diagnostic(code(parse::unexpected_token))]
    UnexpectedToken {
        message: String,
        #[label("unexpected token here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Expected end of file.")]
    #[diagnostic(
        code(parse::expected_eof),
        help("a compilation unit holds exactly one declaration")
    )]
    ExpectedEof {
        #[label("trailing input here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    // === Semantic errors ===
    // No source attachment: the analyzer reports line/column only, so no
    // caret block is rendered for these.
    #[error("Type mismatch: cannot assign {found} to variable of type {expected}")]
    #[diagnostic(code(check::type_mismatch))]
    TypeMismatch {
        expected: Type,
        found: Type,
        line: u32,
        column: u32,
    },

    #[error("Variable already declared")]
    #[diagnostic(code(check::duplicate_declaration))]
    AlreadyDeclared {
        name: String,
        line: u32,
        column: u32,
    },

    // === Runtime errors (reserved; the current grammar cannot raise one) ===
    #[error("Runtime error: {message}")]
    #[diagnostic(code(runtime::error))]
    Runtime {
        message: String,
        line: u32,
        column: u32,
    },

    // === Internal errors ===
    #[error("internal error: {message}")]
    #[diagnostic(code(internal::defect))]
    Internal { message: String },
}

impl Diagnostic {
    /// The taxonomy category of this diagnostic.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Diagnostic::UnterminatedString { .. }
            | Diagnostic::UnexpectedCharacter { .. }
            | Diagnostic::UnexpectedToken { .. }
            | Diagnostic::ExpectedEof { .. } => ErrorKind::Syntax,
            Diagnostic::TypeMismatch { .. } => ErrorKind::Type,
            Diagnostic::AlreadyDeclared { .. } => ErrorKind::Name,
            Diagnostic::Runtime { .. } => ErrorKind::Runtime,
            Diagnostic::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Line/column for diagnostics that carry an explicit location.
    /// Source-attached diagnostics resolve their position through the span
    /// when rendered, so they return `None` here.
    pub fn location(&self) -> Option<(u32, u32)> {
        match self {
            Diagnostic::TypeMismatch { line, column, .. }
            | Diagnostic::AlreadyDeclared { line, column, .. }
            | Diagnostic::Runtime { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }

    /// Render this diagnostic to the diagnostic output stream. Idempotent:
    /// emitting the same diagnostic twice produces identical output.
    pub fn emit(&self) {
        eprintln!("{:?}", miette::Report::new(self.clone()));
    }
}
