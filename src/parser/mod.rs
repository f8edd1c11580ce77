//! Parser for the Declan language
//!
//! A recursive descent parser that pulls tokens from the lexer on demand,
//! with one token of lookahead (`current`) and one of trailing context
//! (`previous`). Parsing is strictly sequential and non-recovering: the
//! first failure aborts the whole parse.
//!
//! Grammar:
//! ```text
//! program     := declaration EOF
//! declaration := varDecl
//! varDecl     := 'let' IDENT ':' type '=' literal ';'
//! type        := 'int' | 'float' | 'bool' | 'string' | 'null'
//! literal     := INT | FLOAT | STRING | 'true' | 'false' | 'null'
//! ```

use crate::ast::{Ast, Literal, Node, VarDecl};
use crate::diagnostics::{Diagnostic, SourceFile};
use crate::lexer::{Lexer, Token, TokenKind, TokenValue};
use crate::types::Type;
use crate::value::Value;

/// Parse one compilation unit into an AST
pub fn parse(source: &SourceFile) -> Result<Ast, Diagnostic> {
    let mut parser = Parser::new(source)?;
    parser.parse_program()
}

/// Parser state
struct Parser<'src> {
    lexer: Lexer<'src>,
    source: &'src SourceFile,
    current: Token,
    previous: Token,
}

const TYPE_TOKENS: [TokenKind; 5] = [
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Bool,
    TokenKind::String,
    TokenKind::Null,
];

impl<'src> Parser<'src> {
    fn new(source: &'src SourceFile) -> Result<Self, Diagnostic> {
        let mut lexer = Lexer::new(source);
        // Prime the parser with the first token
        let current = lexer.scan_token()?;
        Ok(Self {
            lexer,
            source,
            current,
            previous: Token::eof(0, 1, 1),
        })
    }

    fn advance(&mut self) -> Result<(), Diagnostic> {
        let next = self.lexer.scan_token()?;
        self.previous = std::mem::replace(&mut self.current, next);
        tracing::debug!(token = %self.current.kind, "advanced");
        Ok(())
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consume the current token if it matches the expected kind
    fn matches(&mut self, kind: TokenKind) -> Result<bool, Diagnostic> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Expect the current token to be of the given kind. On mismatch the
    /// diagnostic covers the current token's lexeme and nothing is consumed.
    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<(), Diagnostic> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(message))
        }
    }

    fn unexpected(&self, message: &str) -> Diagnostic {
        Diagnostic::UnexpectedToken {
            message: message.to_owned(),
            span: self.current.span.into(),
            src: self.source.to_named_source(),
        }
    }

    // ==================== PROGRAM ====================

    fn parse_program(&mut self) -> Result<Ast, Diagnostic> {
        tracing::debug!("starting parse");

        let decl = self.parse_declaration()?;

        // Exactly one declaration per compilation unit by construction
        if !self.check(TokenKind::Eof) {
            return Err(Diagnostic::ExpectedEof {
                span: self.current.span.into(),
                src: self.source.to_named_source(),
            });
        }

        Ok(Ast { decl: Some(decl) })
    }

    // ==================== DECLARATIONS ====================

    fn parse_declaration(&mut self) -> Result<Node, Diagnostic> {
        // Only variable declarations exist in the grammar
        self.parse_var_decl()
    }

    fn parse_var_decl(&mut self) -> Result<Node, Diagnostic> {
        self.consume(TokenKind::Let, "Expected 'let' keyword.")?;

        self.consume(TokenKind::Ident, "Expected variable name.")?;
        let name_token = self.previous.clone();

        self.consume(TokenKind::Colon, "Expected ':' after variable name.")?;

        let declared_type = self.parse_type()?;

        self.consume(TokenKind::Eq, "Expected '=' after type.")?;

        let initializer = self.parse_literal()?;

        self.consume(TokenKind::Semi, "Expected ';' after variable declaration.")?;

        Ok(Node::VarDecl(VarDecl {
            name: name_token.text,
            declared_type,
            initializer: Box::new(initializer),
            line: name_token.line,
            column: name_token.column,
        }))
    }

    // ==================== TYPES ====================

    fn parse_type(&mut self) -> Result<Type, Diagnostic> {
        for kind in TYPE_TOKENS {
            if self.matches(kind)? {
                return type_of_token(self.previous.kind);
            }
        }
        Err(self.unexpected("Expected type (int, float, bool, string, or null)."))
    }

    // ==================== LITERALS ====================

    fn parse_literal(&mut self) -> Result<Node, Diagnostic> {
        let token = self.current.clone();

        let value = match (token.kind, &token.value) {
            (TokenKind::IntLit, TokenValue::Int(n)) => Value::Int(*n),
            (TokenKind::FloatLit, TokenValue::Float(x)) => Value::Float(*x),
            (TokenKind::StringLit, TokenValue::Str(s)) => Value::String(s.clone()),
            (TokenKind::True, _) => Value::Bool(true),
            (TokenKind::False, _) => Value::Bool(false),
            (TokenKind::Null, _) => Value::Null,
            (TokenKind::IntLit | TokenKind::FloatLit | TokenKind::StringLit, _) => {
                return Err(Diagnostic::Internal {
                    message: format!("literal token {:?} carries no payload", token.kind),
                });
            }
            _ => return Err(self.unexpected("Expected literal value.")),
        };

        self.advance()?;

        Ok(Node::Literal(Literal {
            value,
            line: token.line,
            column: token.column,
        }))
    }
}

/// Map a type-keyword token to its type tag. The non-type arm is a
/// programming defect, not a user error: callers only pass type keywords.
fn type_of_token(kind: TokenKind) -> Result<Type, Diagnostic> {
    match kind {
        TokenKind::Int => Ok(Type::Int),
        TokenKind::Float => Ok(Type::Float),
        TokenKind::Bool => Ok(Type::Bool),
        TokenKind::String => Ok(Type::String),
        TokenKind::Null => Ok(Type::Null),
        other => Err(Diagnostic::Internal {
            message: format!("token {:?} does not name a type", other),
        }),
    }
}
