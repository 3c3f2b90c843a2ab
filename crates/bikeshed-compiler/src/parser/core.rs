//! Parser state and low-level token operations.

use bikeshed_core::Span;

use super::lexer::{Token, TokenKind, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Marker returned once a diagnostic has been reported.
///
/// Parsing of the current fragment stops at the first error; there is no
/// recovery, so `Halt` simply unwinds through `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Halt;

pub(crate) type PResult<T> = std::result::Result<T, Halt>;

pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) base: u32,
    tokens: Vec<Token>,
    pos: usize,
    /// End of the most recently consumed token, used to close spans.
    last_end: u32,
    pub(super) diagnostics: Diagnostics,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, base: u32, tokens: Vec<Token>) -> Self {
        Self {
            source,
            base,
            tokens: tokens.into_iter().filter(|t| !t.kind.is_trivia()).collect(),
            pos: 0,
            last_end: base,
            diagnostics: Diagnostics::new(),
        }
    }

    pub(super) fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn eof_span(&self) -> Span {
        let end = self.base + self.source.len() as u32;
        Span::new(end, end)
    }

    /// Kind of the current token, `None` at end of input.
    pub(super) fn current(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    pub(super) fn nth(&self, lookahead: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + lookahead).map(|t| t.kind)
    }

    pub(super) fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or_else(|| self.eof_span(), |t| t.span)
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, self.base, t))
    }

    /// Start of the current token, for spans opened before consuming it.
    pub(super) fn start(&self) -> u32 {
        self.current_span().start
    }

    /// Span from `start` to the end of the last consumed token.
    pub(super) fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.last_end.max(start))
    }

    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    /// Identifier whose text is exactly `word`. Escaped identifiers never match.
    pub(super) fn at_word(&self, word: &str) -> bool {
        self.at(TokenKind::Identifier) && self.current_text() == word
    }

    pub(super) fn nth_is_word(&self, lookahead: usize, word: &str) -> bool {
        self.tokens.get(self.pos + lookahead).is_some_and(|t| {
            t.kind == TokenKind::Identifier && token_text(self.source, self.base, t) == word
        })
    }

    pub(super) fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        self.last_end = token.span.end;
        token
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_word(&mut self, word: &str) -> bool {
        if self.at_word(word) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: TokenKind, what: &str) -> PResult<Token> {
        if self.at(kind) {
            return Ok(self.bump());
        }
        Err(self.unexpected(what))
    }

    pub(super) fn expect_word(&mut self, word: &str) -> PResult<()> {
        if self.eat_word(word) {
            return Ok(());
        }
        Err(self.unexpected(&format!("`{word}`")))
    }

    /// Identifier value: the token text without its escaping `_`.
    pub(super) fn identifier(&mut self) -> PResult<String> {
        if !self.at(TokenKind::Identifier) {
            return Err(self.error(DiagnosticKind::ExpectedIdentifier));
        }
        let text = self.current_text();
        self.bump();
        Ok(unescape(text).to_string())
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) -> Halt {
        let span = self.current_span();
        let found = self.found();
        self.diagnostics.report(kind, span).message(found).emit();
        Halt
    }

    pub(super) fn error_at(&mut self, kind: DiagnosticKind, span: Span, detail: &str) -> Halt {
        self.diagnostics.report(kind, span).message(detail).emit();
        Halt
    }

    pub(super) fn unexpected(&mut self, what: &str) -> Halt {
        let span = self.current_span();
        let detail = format!("{what}, {}", self.found());
        self.error_at(DiagnosticKind::UnexpectedToken, span, &detail)
    }

    fn found(&self) -> String {
        if self.eof() {
            "found end of block".to_string()
        } else {
            format!("found `{}`", self.current_text())
        }
    }
}

fn unescape(text: &str) -> &str {
    text.strip_prefix('_').unwrap_or(text)
}
