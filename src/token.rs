use serde::Serialize;

/// Source location: byte range plus the line and column of its start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column.
    pub column: usize,
}

impl Span {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Move the span by `bytes` and `lines`; columns are line-relative
    /// and stay put.
    #[must_use]
    pub const fn shifted(self, bytes: isize, lines: isize) -> Self {
        Self {
            start: self.start.wrapping_add_signed(bytes),
            end: self.end.wrapping_add_signed(bytes),
            line: self.line.wrapping_add_signed(lines),
            column: self.column,
        }
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Statement keyword (`bind`, `set`, ...).
    Keyword,
    /// Flag literal (`-s`, `-u`, `--mode=`).
    Flag,
    /// `"` opening a comment line.
    QuoteMark,
    /// Mode name immediately after `--mode=`.
    BindMode,
    /// `autocmd` event name.
    Event,
    /// `<C-j>` style key.
    CompoundKey,
    /// `[A-Za-z0-9]+\.\S+`
    Domain,
    /// `(https?|ftp)://...`
    Url,
    /// `[0-9]+`
    Number,
    /// `[A-Za-z_-]+`, or a canonical command name in command position.
    Identifier,
    /// One letter.
    SingleKey,
    /// Catch-all text up to the end of the line.
    RawRemainder,
}

impl TokenKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Flag => "flag",
            Self::QuoteMark => "quote_mark",
            Self::BindMode => "bind_mode",
            Self::Event => "event",
            Self::CompoundKey => "compound_key",
            Self::Domain => "domain",
            Self::Url => "url",
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::SingleKey => "single_key",
            Self::RawRemainder => "raw_remainder",
        }
    }
}

/// A single token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
