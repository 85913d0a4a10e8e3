//! Position-aware tokenizer for rc script lines.
//!
//! The grammar decides which token classes are legal at each position
//! and asks the [`Lexer`] for exactly those. Within a request, reserved
//! literals are tried first, then the structural [`Pattern`]s: the
//! longest match wins and ties go to the earlier entry of [`PRIORITY`].
//! When nothing matches, the caller can always fall back to
//! [`Lexer::remainder`], so lexing never fails.

use tracing::trace;

use crate::tables::{COMMANDS, EVENTS, MODES};
use crate::token::{Span, Token, TokenKind};

const BOM: char = '\u{FEFF}';

/// Structural token shapes, matched by their fixed regular forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `<[AaCcMm]-[A-Za-z]>` with no internal whitespace.
    CompoundKey,
    /// `[A-Za-z0-9]+\.\S+`
    Domain,
    /// `(https?|ftp)://[^\s/$.?#].[^\s]*`
    Url,
    /// `[0-9]+`
    Number,
    /// `[A-Za-z_-]+`
    Identifier,
    /// `[A-Za-z]`
    SingleKey,
}

/// Tie-break order for structural patterns of equal match length.
pub const PRIORITY: [Pattern; 6] = [
    Pattern::CompoundKey,
    Pattern::Domain,
    Pattern::Url,
    Pattern::Number,
    Pattern::Identifier,
    Pattern::SingleKey,
];

impl Pattern {
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::CompoundKey => TokenKind::CompoundKey,
            Self::Domain => TokenKind::Domain,
            Self::Url => TokenKind::Url,
            Self::Number => TokenKind::Number,
            Self::Identifier => TokenKind::Identifier,
            Self::SingleKey => TokenKind::SingleKey,
        }
    }

    /// Rank in [`PRIORITY`]; lower wins ties.
    #[must_use]
    pub fn rank(self) -> usize {
        PRIORITY
            .iter()
            .position(|p| *p == self)
            .unwrap_or(PRIORITY.len())
    }

    /// Length in bytes of the match anchored at the start of `text`.
    #[must_use]
    pub fn match_len(self, text: &str) -> Option<usize> {
        match self {
            Self::CompoundKey => match_compound_key(text),
            Self::Domain => match_domain(text),
            Self::Url => match_url(text),
            Self::Number => nonzero(count_while(text, |c| c.is_ascii_digit())),
            Self::Identifier => nonzero(count_while(text, is_identifier_char)),
            Self::SingleKey => text
                .chars()
                .next()
                .filter(char::is_ascii_alphabetic)
                .map(|_| 1),
        }
    }
}

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-'
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

const fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

const fn nonzero(n: usize) -> Option<usize> {
    if n == 0 { None } else { Some(n) }
}

fn count_while(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(i, _)| i)
}

fn match_compound_key(text: &str) -> Option<usize> {
    let b = text.as_bytes();
    let well_formed = b.len() >= 5
        && b[0] == b'<'
        && matches!(b[1], b'A' | b'a' | b'C' | b'c' | b'M' | b'm')
        && b[2] == b'-'
        && b[3].is_ascii_alphabetic()
        && b[4] == b'>';
    well_formed.then_some(5)
}

fn match_domain(text: &str) -> Option<usize> {
    let label = nonzero(count_while(text, |c| c.is_ascii_alphanumeric()))?;
    let rest = text[label..].strip_prefix('.')?;
    let tail = nonzero(count_while(rest, |c| !c.is_whitespace()))?;
    Some(label + 1 + tail)
}

fn match_url(text: &str) -> Option<usize> {
    let scheme = ["https://", "http://", "ftp://"]
        .into_iter()
        .find(|scheme| text.starts_with(scheme))?;
    let mut chars = text[scheme.len()..].char_indices();
    let (_, host) = chars.next()?;
    if host.is_whitespace() || matches!(host, '/' | '$' | '.' | '?' | '#') {
        return None;
    }
    // `.` takes any one character, whitespace included.
    let (i, any) = chars.next()?;
    let after = scheme.len() + i + any.len_utf8();
    Some(after + count_while(&text[after..], |c| !c.is_whitespace()))
}

/// Tokenize a whole rc script.
///
/// Runs the statement parser and returns the tokens each statement
/// consumed, in source order. Never fails: malformed lines contribute
/// whatever tokens were lexed before the error.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let (program, _) = crate::parser::parse(input);
    program
        .statements
        .into_iter()
        .flat_map(|statement| statement.tokens)
        .collect()
}

/// Cursor over the content of one line (terminator excluded).
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    end: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Lexer<'a> {
    /// Lex `src[start..end]`, which must be one line's content starting at
    /// a line boundary, reported as line number `line`.
    #[must_use]
    pub const fn new(src: &'a str, start: usize, end: usize, line: usize) -> Self {
        Self {
            src,
            pos: start,
            end,
            line,
            line_start: start,
        }
    }

    /// Current byte offset into the buffer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Byte offset of the end of the line content.
    #[must_use]
    pub const fn line_end(&self) -> usize {
        self.end
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..self.end]
    }

    /// Skip spaces, tabs, and a byte-order mark at the start of the buffer.
    pub fn skip_blanks(&mut self) {
        if self.pos == 0 && self.rest().starts_with(BOM) {
            self.pos += BOM.len_utf8();
        }
        self.pos += count_while(self.rest(), is_blank);
    }

    /// Whether only blanks remain on the line.
    pub fn at_end(&mut self) -> bool {
        self.skip_blanks();
        self.pos >= self.end
    }

    /// Whether the cursor sits on a blank or the end of the line.
    #[must_use]
    pub fn at_boundary(&self) -> bool {
        self.rest().chars().next().is_none_or(is_blank)
    }

    /// Whether the first `len` bytes are followed by a blank or the line end.
    fn ends_at_blank(&self, len: usize) -> bool {
        self.rest()[len..].chars().next().is_none_or(is_blank)
    }

    fn make_token(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        self.pos += len;
        Token {
            kind,
            text: self.src[start..self.pos].to_string(),
            span: Span {
                start,
                end: self.pos,
                line: self.line,
                column: start - self.line_start + 1,
            },
        }
    }

    /// `"` as the first non-blank character of the line.
    pub fn quote_mark(&mut self) -> Option<Token> {
        self.skip_blanks();
        let leading = &self.src[self.line_start..self.pos];
        let first_on_line = leading.trim_start_matches(BOM).chars().all(is_blank);
        (first_on_line && self.rest().starts_with('"'))
            .then(|| self.make_token(TokenKind::QuoteMark, 1))
    }

    /// A statement keyword, followed by a blank or the line end.
    pub fn keyword(&mut self, keyword: &str) -> Option<Token> {
        self.skip_blanks();
        if self.rest().starts_with(keyword) && self.ends_at_blank(keyword.len()) {
            return Some(self.make_token(TokenKind::Keyword, keyword.len()));
        }
        None
    }

    /// A flag literal. Flags ending in `=` take an immediately adjacent
    /// value and need no boundary; others must end at a blank.
    pub fn flag(&mut self, flag: &str) -> Option<Token> {
        self.skip_blanks();
        let rest = self.rest();
        if !rest.starts_with(flag) {
            return None;
        }
        let bounded = flag.ends_with('=') || self.ends_at_blank(flag.len());
        bounded.then(|| self.make_token(TokenKind::Flag, flag.len()))
    }

    /// A bind mode name directly adjacent to the cursor (no blank skip),
    /// followed by a blank or the line end.
    pub fn immediate_mode(&mut self) -> Option<Token> {
        let len = count_while(self.rest(), is_word_char);
        let word = &self.rest()[..len];
        (MODES.contains(&word) && self.ends_at_blank(len))
            .then(|| self.make_token(TokenKind::BindMode, len))
    }

    /// An `autocmd` event name, followed by a blank or the line end.
    pub fn event(&mut self) -> Option<Token> {
        self.skip_blanks();
        let len = count_while(self.rest(), is_word_char);
        let word = &self.rest()[..len];
        (EVENTS.contains(&word) && self.ends_at_blank(len))
            .then(|| self.make_token(TokenKind::Event, len))
    }

    /// An ex-command name: the longest of the canonical command literals
    /// and the identifier pattern, literals winning ties. The name must be
    /// followed by a blank or the line end.
    pub fn command_name(&mut self) -> Option<Token> {
        self.skip_blanks();
        let rest = self.rest();
        let literal = COMMANDS
            .iter()
            .filter(|name| rest.starts_with(**name))
            .map(|name| name.len())
            .max()
            .unwrap_or(0);
        let identifier = Pattern::Identifier.match_len(rest).unwrap_or(0);
        let len = literal.max(identifier);
        (len > 0 && self.ends_at_blank(len))
            .then(|| self.make_token(TokenKind::Identifier, len))
    }

    /// The longest structural match among `allowed`, ties broken by
    /// [`PRIORITY`].
    pub fn structural(&mut self, allowed: &[Pattern]) -> Option<Token> {
        self.skip_blanks();
        let rest = self.rest();
        let (pattern, len) = PRIORITY
            .iter()
            .filter(|p| allowed.contains(p))
            .filter_map(|p| p.match_len(rest).map(|len| (*p, len)))
            .fold(None, |best: Option<(Pattern, usize)>, (p, len)| match best {
                Some((_, best_len)) if best_len >= len => best,
                _ => Some((p, len)),
            })?;
        Some(self.make_token(pattern.token_kind(), len))
    }

    /// Catch-all token spanning to the end of the line.
    pub fn remainder(&mut self) -> Option<Token> {
        self.skip_blanks();
        if self.pos >= self.end {
            return None;
        }
        trace!(line = self.line, offset = self.pos, "raw remainder");
        Some(self.make_token(TokenKind::RawRemainder, self.end - self.pos))
    }

    /// A structural token if one matches, otherwise the catch-all.
    /// `None` only at the end of the line.
    pub fn next_token(&mut self, allowed: &[Pattern]) -> Option<Token> {
        self.structural(allowed).or_else(|| self.remainder())
    }
}
