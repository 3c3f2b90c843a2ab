//! Fragment extraction from Bikeshed source documents.
//!
//! The document is scanned with a small markup lexer that only knows about
//! the handful of constructs that can hide or carry IDL: comments and the
//! `<pre>`, `<xmp>` and `<script>` elements. Everything else is prose.

use bikeshed_core::Span;
use logos::{Lexer, Logos};

use crate::diagnostics::{DiagnosticKind, Diagnostics};


/// Element that delimits a raw block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockElement {
    Pre,
    Xmp,
    Script,
}

impl BlockElement {
    fn from_tag(tag: &str) -> Option<Self> {
        let name = tag
            .trim_start_matches("</")
            .trim_start_matches('<')
            .split(|c: char| c.is_ascii_whitespace() || c == '>')
            .next()?;
        match name.to_ascii_lowercase().as_str() {
            "pre" => Some(Self::Pre),
            "xmp" => Some(Self::Xmp),
            "script" => Some(Self::Script),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Xmp => "xmp",
            Self::Script => "script",
        }
    }
}

/// A raw IDL block, borrowed from the document byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'d> {
    pub element: BlockElement,
    /// Byte offset of `text` in the document.
    pub offset: u32,
    /// Span of the opening tag.
    pub tag: Span,
    pub text: &'d str,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum DocToken {
    #[token("<!--")]
    CommentOpen,

    #[regex(r"<(?:[pP][rR][eE]|[xX][mM][pP]|[sS][cC][rR][iI][pP][tT])(?:[ \t\r\n][^>]*)?>")]
    BlockOpen,

    #[regex(r"</(?:[pP][rR][eE]|[xX][mM][pP]|[sS][cC][rR][iI][pP][tT])[ \t\r\n]*>")]
    BlockClose,

    #[token("<")]
    Lt,

    #[regex(r"[^<]+")]
    Text,
}

/// Attribute-level tokens inside an opening tag.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum TagToken {
    #[token("=")]
    Equals,

    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    Quoted,

    #[regex(r#"[^ \t\r\n="'<>/]+"#)]
    Word,

    #[token("/")]
    #[token("<")]
    #[token(">")]
    Punct,
}

/// Attribute `(name, value)` pairs of an opening tag, in source order.
/// Attributes without a value get an empty string.
fn tag_attributes(tag: &str) -> Vec<(&str, &str)> {
    let inner = tag.trim_start_matches('<').trim_end_matches('>');
    let mut lexer = TagToken::lexer(inner);
    let mut attrs = Vec::new();
    let mut pending: Option<&str> = None;
    let mut awaiting_value = false;
    // The element name is the first word.
    let mut seen_element = false;

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            continue;
        };
        let text = lexer.slice();
        match token {
            TagToken::Word if !seen_element => seen_element = true,
            TagToken::Word | TagToken::Quoted if awaiting_value => {
                if let Some(name) = pending.take() {
                    attrs.push((name, unquote(text)));
                }
                awaiting_value = false;
            }
            TagToken::Word => {
                if let Some(name) = pending.replace(text) {
                    attrs.push((name, ""));
                }
            }
            TagToken::Equals => awaiting_value = pending.is_some(),
            TagToken::Quoted | TagToken::Punct => {}
        }
    }
    if let Some(name) = pending {
        attrs.push((name, ""));
    }
    attrs
}

fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && (bytes[0] == b'"' || bytes[0] == b'\'') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Whether an opening tag marks its block as IDL.
fn carries_idl(element: BlockElement, tag: &str) -> bool {
    let attrs = tag_attributes(tag);
    let lookup = |wanted: &str| {
        attrs
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(_, value)| *value)
    };
    match element {
        BlockElement::Pre | BlockElement::Xmp => lookup("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == "idl")),
        BlockElement::Script => lookup("type").is_some_and(|ty| ty.eq_ignore_ascii_case("idl")),
    }
}

/// Extract every IDL block of `doc`, in document order.
///
/// Fails on the first unterminated block or comment, and on an IDL block
/// opening inside an unclosed `<pre>`; the remaining document cannot be
/// scanned reliably past that point.
#[tracing::instrument(level = "debug", skip_all)]
pub fn extract(doc: &str) -> Result<Vec<Fragment<'_>>, Diagnostics> {
    let mut lexer = DocToken::lexer(doc);
    let mut fragments = Vec::new();
    let mut diagnostics = Diagnostics::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(DocToken::CommentOpen) => {
                if !skip_comment(&mut lexer) {
                    let span = Span::from(lexer.span());
                    diagnostics
                        .report(DiagnosticKind::UnterminatedComment, span)
                        .emit();
                    return Err(diagnostics);
                }
            }
            Ok(DocToken::BlockOpen) => {
                let tag = lexer.slice();
                let tag_span = Span::from(lexer.span());
                let Some(element) = BlockElement::from_tag(tag) else {
                    continue;
                };
                let is_idl = carries_idl(element, tag);
                let content_start = lexer.span().end;

                match find_close(&mut lexer, element) {
                    Close::At(content_end) => {
                        if is_idl {
                            tracing::trace!(offset = content_start, "idl block");
                            fragments.push(Fragment {
                                element,
                                offset: content_start as u32,
                                tag: tag_span,
                                text: &doc[content_start..content_end],
                            });
                        }
                    }
                    Close::Interrupted(inner) => {
                        diagnostics
                            .report(DiagnosticKind::InterruptedBlock, tag_span)
                            .message(element.name())
                            .related_to("IDL block opens here", inner)
                            .emit();
                        return Err(diagnostics);
                    }
                    Close::Missing => {
                        diagnostics
                            .report(DiagnosticKind::UnterminatedBlock, tag_span)
                            .message(element.name())
                            .emit();
                        return Err(diagnostics);
                    }
                }
            }
            Ok(DocToken::BlockClose | DocToken::Lt | DocToken::Text) | Err(()) => {}
        }
    }

    tracing::debug!(fragments = fragments.len(), "extracted");
    Ok(fragments)
}

/// Advance past the `-->` ending a comment. Returns `false` if there is none.
fn skip_comment(lexer: &mut Lexer<'_, DocToken>) -> bool {
    match lexer.remainder().find("-->") {
        Some(pos) => {
            lexer.bump(pos + "-->".len());
            true
        }
        None => false,
    }
}

/// Outcome of scanning for the end of a block.
enum Close {
    /// Content ends at this byte offset.
    At(usize),
    /// An IDL block opened before the `<pre>` was closed.
    Interrupted(Span),
    Missing,
}

/// Advance past the closing tag of `element`.
///
/// `<pre>` content is markup, so an IDL block opening inside it means the
/// `<pre>` was never closed where the author thought. `<xmp>` and `<script>`
/// hold raw text and only end at their own closing tag.
fn find_close(lexer: &mut Lexer<'_, DocToken>, element: BlockElement) -> Close {
    while let Some(token) = lexer.next() {
        let tag = lexer.slice();
        match token {
            Ok(DocToken::BlockClose) if BlockElement::from_tag(tag) == Some(element) => {
                return Close::At(lexer.span().start);
            }
            Ok(DocToken::BlockOpen)
                if element == BlockElement::Pre
                    && BlockElement::from_tag(tag).is_some_and(|inner| carries_idl(inner, tag)) =>
            {
                return Close::Interrupted(Span::from(lexer.span()));
            }
            _ => {}
        }
    }
    Close::Missing
}
