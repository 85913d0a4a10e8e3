//! Incremental reparsing after a text edit.
//!
//! Statements are whole lines, so reuse is line-granular: statements
//! that end before the edit are kept as they are, statements that start
//! after it are kept with their locations shifted, and only the lines
//! touched by the edit are parsed again. The result is identical to a
//! full [`parse`](crate::parse) of the new text.

use tracing::debug;

use crate::ast::{Node, Program, Statement};
use crate::parser::{ParseError, parse_lines};
use crate::token::Token;

/// A single replacement applied to the old text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChange {
    /// Start byte offset in old text.
    pub start: usize,
    /// End byte offset in old text (exclusive).
    pub old_end: usize,
    /// Length of replacement text in bytes.
    pub new_len: usize,
}

impl TextChange {
    #[must_use]
    pub const fn new(start: usize, old_end: usize, new_len: usize) -> Self {
        Self {
            start,
            old_end,
            new_len,
        }
    }

    /// End of the replacement in the new text.
    #[must_use]
    pub const fn new_end(&self) -> usize {
        self.start + self.new_len
    }

    /// Byte shift applied to everything after the change.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn delta(&self) -> isize {
        self.new_len as isize - (self.old_end - self.start) as isize
    }
}

/// Statistics for one incremental reparse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncrementalStats {
    /// Statements carried over from the old program.
    pub reused_count: usize,
    /// Statements produced by parsing again.
    pub reparsed_count: usize,
}

/// Result of [`reparse`].
#[derive(Debug, Clone)]
pub struct Reparse {
    pub program: Program,
    pub diagnostics: Vec<ParseError>,
    pub stats: IncrementalStats,
}

/// Reparse `new_text`, produced by applying `change` to the text `old`
/// was parsed from.
#[must_use]
pub fn reparse(old: &Program, change: &TextChange, new_text: &str) -> Reparse {
    let bytes = new_text.as_bytes();
    let statements = &old.statements;

    // Keep statements that end, newline included, at or before the edit.
    let prefix = statements.partition_point(|s| s.span.end <= change.start);
    let prefix = if prefix > 0 && !ends_with_newline(&statements[prefix - 1], bytes) {
        prefix - 1
    } else {
        prefix
    };

    // Keep statements that start after the edit and still open a line.
    // The first line never moves as-is: a byte-order mark is only
    // skipped at offset 0.
    let delta = change.delta();
    let new_end = change.new_end();
    let suffix = statements[prefix..]
        .iter()
        .position(|s| {
            let start = s.span.start.wrapping_add_signed(delta);
            s.span.start >= change.old_end
                && s.span.start > 0
                && start >= new_end
                && start > 0
                && bytes.get(start - 1) == Some(&b'\n')
        })
        .map_or(statements.len(), |i| prefix + i);

    let reparse_start = statements[..prefix].last().map_or(0, |s| s.span.end);
    let reparse_end = statements
        .get(suffix)
        .map_or(new_text.len(), |s| s.span.start.wrapping_add_signed(delta));
    let first_line = statements[..prefix].last().map_or(1, |s| s.span.line + 1);

    let middle = parse_lines(new_text, reparse_start, reparse_end, first_line);
    let next_line = first_line + middle.len();

    let mut program = Program {
        statements: Vec::with_capacity(prefix + middle.len() + statements.len() - suffix),
    };
    program.statements.extend_from_slice(&statements[..prefix]);
    let reparsed_count = middle.len();
    program.statements.extend(middle);
    if let Some(first_kept) = statements.get(suffix) {
        #[allow(clippy::cast_possible_wrap)]
        let lines = next_line as isize - first_kept.span.line as isize;
        program.statements.extend(
            statements[suffix..]
                .iter()
                .cloned()
                .map(|s| shift_statement(s, delta, lines)),
        );
    }

    let stats = IncrementalStats {
        reused_count: prefix + (statements.len() - suffix),
        reparsed_count,
    };
    debug!(
        reused = stats.reused_count,
        reparsed = stats.reparsed_count,
        "incremental reparse"
    );

    let diagnostics = program.diagnostics().cloned().collect();
    Reparse {
        program,
        diagnostics,
        stats,
    }
}

/// Whether the statement's line terminator is present, so text inserted
/// right after it starts a new line instead of extending this one.
fn ends_with_newline(statement: &Statement, new_bytes: &[u8]) -> bool {
    statement.span.end > statement.span.start
        && new_bytes.get(statement.span.end - 1) == Some(&b'\n')
}

fn shift_statement(statement: Statement, bytes: isize, lines: isize) -> Statement {
    let shift_token = |token: Token| Token {
        span: token.span.shifted(bytes, lines),
        ..token
    };
    let node = match statement.node {
        Node::Error(mut malformed) => {
            malformed.error = malformed.error.shifted(bytes, lines);
            Node::Error(malformed)
        }
        node => node,
    };
    Statement {
        span: statement.span.shifted(bytes, lines),
        tokens: statement.tokens.into_iter().map(shift_token).collect(),
        node,
    }
}
