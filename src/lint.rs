//! Advisory checks against the static name tables.
//!
//! These never affect parsing. Names introduced earlier in the script
//! by `alias` or `command` count as known.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::ast::{AutocmdAction, ExCommand, Node, Program, Statement};
use crate::tables;
use crate::token::{Span, TokenKind};

/// What an advisory is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// Ex-command name that is neither canonical nor user-defined.
    UnknownCommand { name: String },
    /// `set` target missing from the settings table.
    UnknownSetting { name: String },
}

impl fmt::Display for AdvisoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { name } => write!(f, "unknown ex-command '{name}'"),
            Self::UnknownSetting { name } => write!(f, "unknown setting '{name}'"),
        }
    }
}

/// A non-fatal note about a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub span: Span,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind, self.span.line, self.span.column
        )
    }
}

/// Check every statement of `program` against the name tables.
#[must_use]
pub fn lint(program: &Program) -> Vec<Advisory> {
    let mut linter = Linter::default();
    for statement in &program.statements {
        linter.statement(statement);
    }
    linter.advisories
}

#[derive(Default)]
struct Linter<'a> {
    defined: HashSet<&'a str>,
    advisories: Vec<Advisory>,
}

impl<'a> Linter<'a> {
    fn statement(&mut self, statement: &'a Statement) {
        match &statement.node {
            Node::Alias(alias) => {
                if let Some(first) = alias.expansion.first() {
                    self.command_name(statement, first);
                }
                self.defined.insert(&alias.name);
            }
            Node::Autocmd(autocmd) => match &autocmd.action {
                AutocmdAction::ExCommand(excmd) => self.excmd(statement, excmd),
                AutocmdAction::Alias(name) => self.command_name(statement, name),
            },
            Node::Binding(binding) => self.excmd(statement, &binding.excmd),
            Node::CommandDef(def) => {
                self.excmd(statement, &def.excmd);
                self.defined.insert(&def.name);
            }
            Node::ExCommand(excmd) => self.excmd(statement, excmd),
            Node::Setting(setting) => {
                if !tables::is_known_setting(&setting.name) {
                    self.advisories.push(Advisory {
                        kind: AdvisoryKind::UnknownSetting {
                            name: setting.name.clone(),
                        },
                        span: name_span(statement, &setting.name),
                    });
                }
            }
            Node::Autocontain(_)
            | Node::Unbinding(_)
            | Node::Quickmark(_)
            | Node::Comment(_)
            | Node::Blank
            | Node::Error(_) => {}
        }
    }

    fn excmd(&mut self, statement: &Statement, excmd: &ExCommand) {
        self.command_name(statement, &excmd.name);
    }

    fn command_name(&mut self, statement: &Statement, name: &str) {
        if tables::is_known_command(name) || self.defined.contains(name) {
            return;
        }
        self.advisories.push(Advisory {
            kind: AdvisoryKind::UnknownCommand {
                name: name.to_string(),
            },
            span: name_span(statement, name),
        });
    }
}

/// Span of the last identifier token spelled `name`, else the line.
fn name_span(statement: &Statement, name: &str) -> Span {
    statement
        .tokens
        .iter()
        .rev()
        .find(|t| t.kind == TokenKind::Identifier && t.text == name)
        .map_or(statement.span, |t| t.span)
}
