use std::fmt;

use serde::Serialize;

use crate::parser::ParseError;
use crate::tables::{AutocmdEvent, BindMode};
use crate::token::{Span, Token};

/// Complete rc script: one statement per source line, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// One source line with the tokens the parser consumed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    /// The whole line, terminator included.
    pub span: Span,
    pub tokens: Vec<Token>,
    pub node: Node,
}

/// Statement variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Alias(Alias),
    Autocmd(Autocmd),
    Autocontain(Autocontain),
    Binding(Binding),
    Unbinding(Unbinding),
    CommandDef(CommandDef),
    ExCommand(ExCommand),
    Quickmark(Quickmark),
    Setting(Setting),
    Comment(Comment),
    /// Empty or whitespace-only line.
    Blank,
    Error(Malformed),
}

/// Discriminant of [`Node`], for kind-based queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Alias,
    Autocmd,
    Autocontain,
    Binding,
    Unbinding,
    CommandDef,
    ExCommand,
    Quickmark,
    Setting,
    Comment,
    Blank,
    Error,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Alias => "alias",
            Self::Autocmd => "autocmd",
            Self::Autocontain => "autocontain",
            Self::Binding => "bind",
            Self::Unbinding => "unbind",
            Self::CommandDef => "command",
            Self::ExCommand => "ex-command",
            Self::Quickmark => "quickmark",
            Self::Setting => "set",
            Self::Comment => "comment",
            Self::Blank => "blank line",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// `alias name expansion...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alias {
    pub name: String,
    pub expansion: Vec<String>,
}

/// `autocmd Event pattern action`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Autocmd {
    pub event: AutocmdEvent,
    pub pattern: String,
    pub action: AutocmdAction,
}

/// What an autocmd runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AutocmdAction {
    ExCommand(ExCommand),
    /// Bare name not in the command table.
    Alias(String),
}

/// `autocontain -s domain container` or `autocontain -u url container`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Autocontain {
    pub flag: ContainFlag,
    pub pattern: String,
    pub container: String,
}

/// Pattern mode of an `autocontain` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainFlag {
    /// `-s`: domain pattern.
    Sane,
    /// `-u`: URL pattern.
    Url,
}

impl ContainFlag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sane => "-s",
            Self::Url => "-u",
        }
    }
}

/// `bind [--mode=m] key excmd`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub mode: Option<BindMode>,
    pub key: Key,
    pub excmd: ExCommand,
}

/// `unbind [--mode=m] key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unbinding {
    pub mode: Option<BindMode>,
    pub key: Key,
}

/// `command name excmd`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDef {
    pub name: String,
    pub excmd: ExCommand,
}

/// Ex-command invocation: a name plus opaque argument text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExCommand {
    pub name: String,
    pub args: Option<String>,
}

/// `quickmark k url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quickmark {
    pub key: char,
    pub url: String,
}

/// `set name values...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub name: String,
    pub values: Vec<SettingValue>,
}

/// A `set` value token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingValue {
    Word(String),
    /// Digits, kept as written.
    Number(String),
}

impl SettingValue {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Word(s) | Self::Number(s) => s,
        }
    }
}

/// `" text`: everything after the quote mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub text: String,
}

/// A line that failed to parse, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Malformed {
    pub error: ParseError,
    /// Line content without its terminator.
    pub text: String,
}

/// A bound key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// One letter, e.g. `j`.
    Single(char),
    /// `<M-k>` notation. `modifier` is one of `AaCcMm`.
    Compound { modifier: char, key: char },
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(c) => write!(f, "{c}"),
            Self::Compound { modifier, key } => write!(f, "<{modifier}-{key}>"),
        }
    }
}

/// Parse key notation as the lexer produces it (`j` or `<C-j>`).
#[must_use]
pub fn parse_key(text: &str) -> Option<Key> {
    let b = text.as_bytes();
    match b {
        [c] if c.is_ascii_alphabetic() => Some(Key::Single(char::from(*c))),
        [b'<', m @ (b'A' | b'a' | b'C' | b'c' | b'M' | b'm'), b'-', k, b'>']
            if k.is_ascii_alphabetic() =>
        {
            Some(Key::Compound {
                modifier: char::from(*m),
                key: char::from(*k),
            })
        }
        _ => None,
    }
}

impl fmt::Display for ExCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(args) = &self.args {
            write!(f, " {args}")?;
        }
        Ok(())
    }
}

impl Node {
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::Alias(_) => StatementKind::Alias,
            Self::Autocmd(_) => StatementKind::Autocmd,
            Self::Autocontain(_) => StatementKind::Autocontain,
            Self::Binding(_) => StatementKind::Binding,
            Self::Unbinding(_) => StatementKind::Unbinding,
            Self::CommandDef(_) => StatementKind::CommandDef,
            Self::ExCommand(_) => StatementKind::ExCommand,
            Self::Quickmark(_) => StatementKind::Quickmark,
            Self::Setting(_) => StatementKind::Setting,
            Self::Comment(_) => StatementKind::Comment,
            Self::Blank => StatementKind::Blank,
            Self::Error(_) => StatementKind::Error,
        }
    }
}

impl Statement {
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        self.node.kind()
    }

    /// Parse error for this line, if it failed.
    #[must_use]
    pub const fn error(&self) -> Option<&ParseError> {
        match &self.node {
            Node::Error(malformed) => Some(&malformed.error),
            _ => None,
        }
    }

    /// Token covering `offset`, if any.
    #[must_use]
    pub fn token_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.iter().find(|t| t.span.contains(offset))
    }
}

impl Program {
    /// Statement whose span covers byte `offset`.
    #[must_use]
    pub fn statement_at(&self, offset: usize) -> Option<&Statement> {
        let idx = self
            .statements
            .partition_point(|s| s.span.end <= offset);
        self.statements
            .get(idx)
            .filter(|s| s.span.contains(offset))
    }

    /// All statements of one kind, in source order.
    pub fn statements_of_kind(
        &self,
        kind: StatementKind,
    ) -> impl Iterator<Item = &Statement> + Clone {
        self.statements.iter().filter(move |s| s.kind() == kind)
    }

    /// Errors of every malformed line, in source order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &ParseError> + Clone {
        self.statements.iter().filter_map(Statement::error)
    }

    /// Byte range covered by the program.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        let first = self.statements.first()?;
        let last = self.statements.last()?;
        Some(Span {
            end: last.span.end,
            ..first.span
        })
    }
}
