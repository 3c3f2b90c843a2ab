//! Lexer for WebIDL fragments.
//!
//! Keywords are not separate token kinds: WebIDL lets most of them appear as
//! member and argument names, so the grammar matches identifier text instead.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters are coalesced into one `Garbage` token.

use bikeshed_core::Span;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("<")]
    AngleOpen,

    #[token(">")]
    AngleClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("?")]
    Question,

    #[token("*")]
    Star,

    #[token("...")]
    Ellipsis,

    #[token("-")]
    Minus,

    #[regex(r"-?(?:[1-9][0-9]*|0[Xx][0-9A-Fa-f]+|0[0-7]*)")]
    Integer,

    #[regex(r"-?(?:(?:[0-9]+\.[0-9]*|[0-9]*\.[0-9]+)(?:[Ee][+-]?[0-9]+)?|[0-9]+[Ee][+-]?[0-9]+)")]
    Decimal,

    /// Identifier, including contextual keywords. A leading `_` escapes a keyword.
    #[regex(r"[_-]?[A-Za-z][0-9A-Z_a-z-]*")]
    Identifier,

    #[regex(r#""[^"]*""#)]
    String,

    #[regex(r"[\t\n\r ]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Document coordinates (already shifted by the fragment offset).
    pub span: Span,
}

/// Tokenizes a fragment into span-based tokens, trivia included.
///
/// `base` is the fragment's byte offset in the document.
pub fn lex(source: &str, base: u32) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;
    let span = |start: usize, end: usize| Span::new(start as u32, end as u32).shifted(base);

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token {
                        kind: TokenKind::Garbage,
                        span: span(start, lexer.span().start),
                    });
                }
                let range = lexer.span();
                tokens.push(Token {
                    kind,
                    span: span(range.start, range.end),
                });
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token {
                        kind: TokenKind::Garbage,
                        span: span(start, source.len()),
                    });
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'s>(source: &'s str, base: u32, token: &Token) -> &'s str {
    let start = (token.span.start - base) as usize;
    let end = (token.span.end - base) as usize;
    &source[start..end]
}
