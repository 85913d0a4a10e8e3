use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::ast::{
    self, Alias, Autocmd, AutocmdAction, Autocontain, Binding, CommandDef, Comment, ContainFlag,
    ExCommand, Key, Malformed, Node, Program, Quickmark, Setting, SettingValue, Statement,
    StatementKind, Unbinding,
};
use crate::lexer::{Lexer, PRIORITY, Pattern};
use crate::tables::{self, AutocmdEvent, BindMode};
use crate::token::{Span, Token, TokenKind};

/// Token class a grammar position was waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    Identifier,
    Number,
    Event,
    Domain,
    Url,
    Key,
    SingleKey,
    Mode,
    ContainFlag,
    ExCommand,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Self::Identifier => "a name",
            Self::Number => "a number",
            Self::Event => "an autocmd event",
            Self::Domain => "a domain pattern",
            Self::Url => "a URL",
            Self::Key => "a key",
            Self::SingleKey => "a single-letter key",
            Self::Mode => "a mode name directly after '--mode='",
            Self::ContainFlag => "'-s' or '-u'",
            Self::ExCommand => "an ex-command",
        };
        f.write_str(what)
    }
}

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// The line's first token starts no statement and is not a command name.
    UnrecognizedLeadingToken { found: String },
    /// A required token of the matched grammar is missing.
    StatementIncomplete {
        statement: StatementKind,
        expected: Expected,
        found: Option<String>,
    },
    /// The grammar was satisfied but text remains on the line.
    TrailingInput {
        statement: StatementKind,
        found: String,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedLeadingToken { found } => {
                write!(f, "unrecognized statement starting with '{found}'")
            }
            Self::StatementIncomplete {
                statement,
                expected,
                found: None,
            } => {
                write!(f, "incomplete {statement} statement: expected {expected}")
            }
            Self::StatementIncomplete {
                statement,
                expected,
                found: Some(t),
            } => {
                write!(
                    f,
                    "incomplete {statement} statement: expected {expected}, got '{t}'"
                )
            }
            Self::TrailingInput { statement, found } => {
                write!(f, "unexpected '{found}' after {statement} statement")
            }
        }
    }
}

/// Error recorded for a malformed line.
///
/// `span` runs from the statement's first token to the end of the line
/// content. `fallback` is the catch-all token the lexer would have
/// produced where a specific token class was expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub fallback: Option<Token>,
}

impl ParseError {
    /// Shift every location in the error.
    #[must_use]
    pub fn shifted(self, bytes: isize, lines: isize) -> Self {
        Self {
            kind: self.kind,
            span: self.span.shifted(bytes, lines),
            fallback: self.fallback.map(|token| Token {
                span: token.span.shifted(bytes, lines),
                ..token
            }),
        }
    }
}

/// Parse an rc script.
///
/// Never fails: a malformed line becomes a [`Node::Error`] statement and
/// its error is also returned in the diagnostics list.
#[must_use]
pub fn parse(input: &str) -> (Program, Vec<ParseError>) {
    let program = Program {
        statements: parse_lines(input, 0, input.len(), 1),
    };
    let diagnostics: Vec<ParseError> = program.diagnostics().cloned().collect();
    debug!(
        statements = program.statements.len(),
        errors = diagnostics.len(),
        "parsed rc script"
    );
    (program, diagnostics)
}

/// Parse the lines of `input[start..end]`. Both ends must sit on line
/// boundaries; the first line is numbered `first_line`.
pub(crate) fn parse_lines(
    input: &str,
    start: usize,
    end: usize,
    first_line: usize,
) -> Vec<Statement> {
    let bytes = input.as_bytes();
    let mut statements = Vec::new();
    let mut pos = start;
    let mut line = first_line;

    while pos < end {
        let (content_end, next) = match input[pos..end].find('\n') {
            Some(i) => (pos + i, pos + i + 1),
            None => (end, end),
        };
        let content_end = if content_end > pos && bytes[content_end - 1] == b'\r' {
            content_end - 1
        } else {
            content_end
        };

        let (tokens, node) = LineParser::new(input, pos, content_end, line).parse();
        trace!(line, kind = %node.kind(), "statement");
        statements.push(Statement {
            span: Span {
                start: pos,
                end: next,
                line,
                column: 1,
            },
            tokens,
            node,
        });

        pos = next;
        line += 1;
    }

    statements
}

/// Statement keywords. `ALL` is the classifier dispatch order; first
/// match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Alias,
    Autocmd,
    Autocontain,
    Bind,
    Unbind,
    Command,
    Quickmark,
    Set,
}

impl Keyword {
    const ALL: [Self; 8] = [
        Self::Alias,
        Self::Autocmd,
        Self::Autocontain,
        Self::Bind,
        Self::Unbind,
        Self::Command,
        Self::Quickmark,
        Self::Set,
    ];

    const fn literal(self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::Autocmd => "autocmd",
            Self::Autocontain => "autocontain",
            Self::Bind => "bind",
            Self::Unbind => "unbind",
            Self::Command => "command",
            Self::Quickmark => "quickmark",
            Self::Set => "set",
        }
    }

    const fn statement_kind(self) -> StatementKind {
        match self {
            Self::Alias => StatementKind::Alias,
            Self::Autocmd => StatementKind::Autocmd,
            Self::Autocontain => StatementKind::Autocontain,
            Self::Bind => StatementKind::Binding,
            Self::Unbind => StatementKind::Unbinding,
            Self::Command => StatementKind::CommandDef,
            Self::Quickmark => StatementKind::Quickmark,
            Self::Set => StatementKind::Setting,
        }
    }
}

struct LineParser<'a> {
    src: &'a str,
    lexer: Lexer<'a>,
    line_start: usize,
    content_end: usize,
    line: usize,
    statement: StatementKind,
    tokens: Vec<Token>,
}

impl<'a> LineParser<'a> {
    const fn new(src: &'a str, start: usize, content_end: usize, line: usize) -> Self {
        Self {
            src,
            lexer: Lexer::new(src, start, content_end, line),
            line_start: start,
            content_end,
            line,
            statement: StatementKind::ExCommand,
            tokens: Vec::new(),
        }
    }

    fn parse(mut self) -> (Vec<Token>, Node) {
        if self.lexer.at_end() {
            return (self.tokens, Node::Blank);
        }

        let node = match self.statement() {
            Ok(node) => node,
            Err(error) => Node::Error(Malformed {
                error,
                text: self.src[self.line_start..self.content_end].to_string(),
            }),
        };
        (self.tokens, node)
    }

    fn statement(&mut self) -> Result<Node, ParseError> {
        if let Some(quote) = self.lexer.quote_mark() {
            let text = self.src[quote.span.end..self.content_end].to_string();
            self.tokens.push(quote);
            if let Some(body) = self.lexer.remainder() {
                self.tokens.push(body);
            }
            self.statement = StatementKind::Comment;
            return Ok(Node::Comment(Comment { text }));
        }

        for keyword in Keyword::ALL {
            if let Some(token) = self.lexer.keyword(keyword.literal()) {
                self.tokens.push(token);
                self.statement = keyword.statement_kind();
                let node = match keyword {
                    Keyword::Alias => self.alias(),
                    Keyword::Autocmd => self.autocmd(),
                    Keyword::Autocontain => self.autocontain(),
                    Keyword::Bind => self.binding(),
                    Keyword::Unbind => self.unbinding(),
                    Keyword::Command => self.command_def(),
                    Keyword::Quickmark => self.quickmark(),
                    Keyword::Set => self.setting(),
                }?;
                self.finish()?;
                return Ok(node);
            }
        }

        self.statement = StatementKind::ExCommand;
        if !self.starts_with_command_name() {
            return Err(self.error(ParseErrorKind::UnrecognizedLeadingToken {
                found: self.word_at_cursor().unwrap_or_default(),
            }));
        }
        let excmd = self.excmd()?;
        Ok(Node::ExCommand(excmd))
    }

    /// The first token, lexed over the full priority table, is name-shaped.
    fn starts_with_command_name(&self) -> bool {
        let structural = self
            .lexer
            .clone()
            .structural(&PRIORITY)
            .map_or(0, |t| t.span.len());
        self.lexer
            .clone()
            .command_name()
            .is_some_and(|t| t.span.len() >= structural)
    }

    fn alias(&mut self) -> Result<Node, ParseError> {
        let name = self.expect(Pattern::Identifier, Expected::Identifier)?;
        let mut expansion = vec![self.expect(Pattern::Identifier, Expected::Identifier)?];
        while let Some(word) = self.whole_word(&[Pattern::Identifier]) {
            expansion.push(self.take(word));
        }
        Ok(Node::Alias(Alias { name, expansion }))
    }

    fn autocmd(&mut self) -> Result<Node, ParseError> {
        let event = match self.lexer.event() {
            Some(token) => self.take(token),
            None => return Err(self.incomplete(Expected::Event)),
        };
        let event =
            AutocmdEvent::from_name(&event).ok_or_else(|| self.incomplete(Expected::Event))?;
        let pattern = self.expect(Pattern::Domain, Expected::Domain)?;

        let excmd = self.excmd()?;
        let action = if excmd.args.is_none() && !tables::is_known_command(&excmd.name) {
            AutocmdAction::Alias(excmd.name)
        } else {
            AutocmdAction::ExCommand(excmd)
        };
        Ok(Node::Autocmd(Autocmd {
            event,
            pattern,
            action,
        }))
    }

    fn autocontain(&mut self) -> Result<Node, ParseError> {
        let (flag, pattern) = if let Some(token) = self.lexer.flag("-s") {
            self.tokens.push(token);
            (ContainFlag::Sane, self.expect(Pattern::Domain, Expected::Domain)?)
        } else if let Some(token) = self.lexer.flag("-u") {
            self.tokens.push(token);
            (ContainFlag::Url, self.expect(Pattern::Url, Expected::Url)?)
        } else {
            return Err(self.incomplete(Expected::ContainFlag));
        };
        let container = self.expect(Pattern::Identifier, Expected::Identifier)?;
        Ok(Node::Autocontain(Autocontain {
            flag,
            pattern,
            container,
        }))
    }

    fn binding(&mut self) -> Result<Node, ParseError> {
        let mode = self.mode()?;
        let key = self.key()?;
        let excmd = self.excmd()?;
        Ok(Node::Binding(Binding { mode, key, excmd }))
    }

    fn unbinding(&mut self) -> Result<Node, ParseError> {
        let mode = self.mode()?;
        let key = self.key()?;
        Ok(Node::Unbinding(Unbinding { mode, key }))
    }

    fn command_def(&mut self) -> Result<Node, ParseError> {
        let name = self.expect(Pattern::Identifier, Expected::Identifier)?;
        let excmd = self.excmd()?;
        Ok(Node::CommandDef(CommandDef { name, excmd }))
    }

    fn quickmark(&mut self) -> Result<Node, ParseError> {
        let key = match self.whole_word(&[Pattern::SingleKey]) {
            Some(token) => self.take(token),
            None => return Err(self.incomplete(Expected::SingleKey)),
        };
        let key = key
            .chars()
            .next()
            .ok_or_else(|| self.incomplete(Expected::SingleKey))?;
        let url = self.expect(Pattern::Url, Expected::Url)?;
        Ok(Node::Quickmark(Quickmark { key, url }))
    }

    fn setting(&mut self) -> Result<Node, ParseError> {
        let name = self.expect(Pattern::Identifier, Expected::Identifier)?;
        let mut values = Vec::new();
        while let Some(token) = self.whole_word(&[Pattern::Identifier, Pattern::Number]) {
            let number = token.kind == TokenKind::Number;
            let text = self.take(token);
            values.push(if number {
                SettingValue::Number(text)
            } else {
                SettingValue::Word(text)
            });
        }
        Ok(Node::Setting(Setting { name, values }))
    }

    /// Optional `--mode=<name>`; the name must be directly adjacent.
    fn mode(&mut self) -> Result<Option<BindMode>, ParseError> {
        let Some(flag) = self.lexer.flag("--mode=") else {
            return Ok(None);
        };
        self.tokens.push(flag);
        let name = match self.lexer.immediate_mode() {
            Some(token) => self.take(token),
            None => return Err(self.incomplete(Expected::Mode)),
        };
        BindMode::from_name(&name)
            .map(Some)
            .ok_or_else(|| self.incomplete(Expected::Mode))
    }

    fn key(&mut self) -> Result<Key, ParseError> {
        let token = self
            .whole_word(&[Pattern::CompoundKey, Pattern::SingleKey])
            .ok_or_else(|| self.incomplete(Expected::Key))?;
        let key = ast::parse_key(&token.text).ok_or_else(|| self.incomplete(Expected::Key))?;
        self.tokens.push(token);
        Ok(key)
    }

    /// Command name plus the rest of the line as opaque arguments.
    fn excmd(&mut self) -> Result<ExCommand, ParseError> {
        let name = match self.lexer.command_name() {
            Some(token) => self.take(token),
            None => return Err(self.incomplete(Expected::ExCommand)),
        };
        let args = self.lexer.remainder().map(|token| {
            let args = token.text.trim_end().to_string();
            self.tokens.push(token);
            args
        });
        Ok(ExCommand { name, args })
    }

    /// A structural token that also ends at a blank or the line end.
    fn whole_word(&mut self, allowed: &[Pattern]) -> Option<Token> {
        let saved = self.lexer.clone();
        match self.lexer.structural(allowed) {
            Some(token) if self.lexer.at_boundary() => Some(token),
            _ => {
                self.lexer = saved;
                None
            }
        }
    }

    fn expect(&mut self, pattern: Pattern, expected: Expected) -> Result<String, ParseError> {
        match self.whole_word(&[pattern]) {
            Some(token) => Ok(self.take(token)),
            None => Err(self.incomplete(expected)),
        }
    }

    fn take(&mut self, token: Token) -> String {
        let text = token.text.clone();
        self.tokens.push(token);
        text
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        if self.lexer.at_end() {
            return Ok(());
        }
        let found = self.src[self.lexer.position()..self.content_end]
            .trim_end()
            .to_string();
        Err(self.error(ParseErrorKind::TrailingInput {
            statement: self.statement,
            found,
        }))
    }

    fn word_at_cursor(&self) -> Option<String> {
        let mut lookahead = self.lexer.clone();
        lookahead.remainder().and_then(|token| {
            token
                .text
                .split([' ', '\t'])
                .next()
                .map(str::to_string)
        })
    }

    fn incomplete(&self, expected: Expected) -> ParseError {
        let mut error = self.error(ParseErrorKind::StatementIncomplete {
            statement: self.statement,
            expected,
            found: self.word_at_cursor(),
        });
        error.fallback = self.lexer.clone().remainder();
        error
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        let text = &self.src[self.line_start..self.content_end];
        let body = if self.line_start == 0 {
            text.trim_start_matches('\u{FEFF}')
        } else {
            text
        };
        let leading = text.len() - body.trim_start_matches([' ', '\t']).len();
        let start = self.line_start + leading;
        ParseError {
            kind,
            span: Span {
                start,
                end: self.content_end,
                line: self.line,
                column: leading + 1,
            },
            fallback: None,
        }
    }
}
