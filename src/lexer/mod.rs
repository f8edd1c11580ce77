//! Pull-based lexer for the Declan language
//!
//! `Lexer::scan_token` yields one token per call; the parser consumes the
//! stream on demand and no token array is materialized on the pipeline
//! path. Character classification is the logos-generated DFA, built at
//! compile time. The lexer tracks line/column across skipped trivia and
//! multi-line string literals.

mod tokens;

pub use tokens::{Token, TokenKind, TokenValue};

use logos::Logos;

use crate::common::Span;
use crate::diagnostics::{Diagnostic, SourceFile};

/// Lexer state over one source file
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src SourceFile,
    /// Byte offset the line/column counters have advanced to
    offset: usize,
    line: u32,
    column: u32,
    reached_eof: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src SourceFile) -> Self {
        Self {
            inner: TokenKind::lexer(&source.content),
            source,
            offset: 0,
            line: 1,
            column: 1,
            reached_eof: false,
        }
    }

    /// Scan the next token. End of input yields the distinguished EOF token,
    /// returned again on every subsequent call.
    pub fn scan_token(&mut self) -> Result<Token, Diagnostic> {
        if self.reached_eof {
            return Ok(self.eof_token());
        }

        match self.inner.next() {
            None => {
                let end = self.source.content.len();
                self.advance_to(end);
                self.reached_eof = true;
                Ok(self.eof_token())
            }
            Some(Ok(kind)) => {
                let range = self.inner.span();
                self.advance_to(range.start);
                let line = self.line;
                let column = self.column;
                let text = self.inner.slice().to_owned();
                let value = literal_value(kind, &text);
                self.advance_to(range.end);
                Ok(Token {
                    kind,
                    span: Span::new(range.start, range.end),
                    line,
                    column,
                    text,
                    value,
                })
            }
            Some(Err(())) => {
                let at = self.inner.span().start;
                self.advance_to(at);
                Err(self.classify_error(at))
            }
        }
    }

    fn eof_token(&self) -> Token {
        Token::eof(self.source.content.len(), self.line, self.column)
    }

    /// Advance the line/column counters over the source up to `upto`.
    /// Newlines reset column to 1 and increment line; this also covers
    /// newlines inside string literals.
    fn advance_to(&mut self, upto: usize) {
        let text: &str = &self.source.content[self.offset..upto];
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = upto;
    }

    /// Decide what a failed match at `at` means. A quote with no closing
    /// partner before end of input is an unterminated string whose span runs
    /// from the opening quote to the point of failure; anything else is a
    /// stray character.
    fn classify_error(&self, at: usize) -> Diagnostic {
        let content: &str = &self.source.content;
        let rest = &content[at..];
        if rest.starts_with('"') {
            Diagnostic::UnterminatedString {
                span: Span::new(at, content.len()).into(),
                src: self.source.to_named_source(),
            }
        } else {
            let ch = rest.chars().next().unwrap_or('\0');
            Diagnostic::UnexpectedCharacter {
                ch,
                span: Span::new(at, at + ch.len_utf8()).into(),
                src: self.source.to_named_source(),
            }
        }
    }
}

/// Parse the literal payload out of the lexeme it was scanned from.
fn literal_value(kind: TokenKind, text: &str) -> TokenValue {
    match kind {
        // overflow saturates; the grammar has no signs, so only the upper
        // bound is reachable
        TokenKind::IntLit => TokenValue::Int(text.parse().unwrap_or(i64::MAX)),
        TokenKind::FloatLit => TokenValue::Float(text.parse().unwrap_or(f64::INFINITY)),
        TokenKind::StringLit => TokenValue::Str(text[1..text.len() - 1].to_owned()),
        _ => TokenValue::None,
    }
}

/// Scan a whole source into a token vector, ending with EOF. Debugging and
/// test convenience only; the parser pulls tokens one at a time.
pub fn lex(source: &SourceFile) -> Result<Vec<Token>, Diagnostic> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.scan_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
