use bikeshed_core::Span;

/// Diagnostic kinds ordered by pipeline stage, then priority.
///
/// The stage a kind belongs to decides which `Error` variant carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Extraction: the document itself is malformed around an IDL block
    UnterminatedBlock,
    UnterminatedComment,
    InterruptedBlock,

    // Parsing: fragment text is not valid WebIDL
    UnclosedBrace,
    ExpectedIdentifier,
    ExpectedType,
    ExpectedValue,
    UnknownDefinition,
    InvalidRecordKey,
    UnexpectedToken,

    // Linking: valid syntax, inconsistent model
    UnresolvedName,
    DuplicateDefinition,
    KindConflict,
    DuplicateMember,
}

/// Pipeline stage that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Extract,
    Parse,
    Link,
}

impl DiagnosticKind {
    pub fn stage(&self) -> Stage {
        match self {
            Self::UnterminatedBlock | Self::UnterminatedComment | Self::InterruptedBlock => {
                Stage::Extract
            }
            Self::UnclosedBrace
            | Self::ExpectedIdentifier
            | Self::ExpectedType
            | Self::ExpectedValue
            | Self::UnknownDefinition
            | Self::InvalidRecordKey
            | Self::UnexpectedToken => Stage::Parse,
            Self::UnresolvedName
            | Self::DuplicateDefinition
            | Self::KindConflict
            | Self::DuplicateMember => Stage::Link,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnterminatedBlock => Some("every block must be closed by a matching end tag"),
            Self::InterruptedBlock => Some("close the earlier block or escape its markup"),
            Self::InvalidRecordKey => {
                Some("record keys must be DOMString, USVString or ByteString")
            }
            Self::UnresolvedName => {
                Some("declare it somewhere in the document or register it as an external name")
            }
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnterminatedBlock => "unterminated IDL block",
            Self::UnterminatedComment => "unterminated HTML comment",
            Self::InterruptedBlock => "IDL block inside an unclosed block",

            Self::UnclosedBrace => "missing closing `}`",
            Self::ExpectedIdentifier => "expected an identifier",
            Self::ExpectedType => "expected a type",
            Self::ExpectedValue => "expected a constant value",
            Self::UnknownDefinition => "expected a definition",
            Self::InvalidRecordKey => "invalid record key type",
            Self::UnexpectedToken => "unexpected token",

            Self::UnresolvedName => "unresolved name",
            Self::DuplicateDefinition => "duplicate definition",
            Self::KindConflict => "name used with conflicting kinds",
            Self::DuplicateMember => "duplicate member",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnterminatedBlock => "`{}` block is never closed".to_string(),
            Self::InterruptedBlock => "IDL block opens inside an unclosed `{}` block".to_string(),
            Self::UnresolvedName => "`{}` is not defined".to_string(),
            Self::DuplicateDefinition => "`{}` is already defined".to_string(),
            Self::DuplicateMember => "member `{}` is already declared".to_string(),
            Self::KindConflict => "{}".to_string(),
            Self::InvalidRecordKey => "`{}` cannot be a record key".to_string(),
            Self::UnexpectedToken => "expected {}".to_string(),
            Self::UnclosedBrace => "missing closing `}` for {}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) span: Span,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Byte range in the document, underlined in rendered output.
    pub(crate) span: Span,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, span: Span) -> Self {
        Self::new(kind, span, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            self.span.start,
            self.span.end,
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message, related.span.start, related.span.end
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
