//! Tridactyl rc script lexer, parser, and formatter.
//!
//! Turns the line-oriented rc language (bindings, aliases, autocmds,
//! container rules, quickmarks, settings, and free-form ex-commands)
//! into a typed parse tree whose statements cover every byte of the
//! input, and formats trees back into canonical text.
//!
//! # Quick start
//!
//! ## Parse and re-format an rc script
//!
//! ```
//! use tridactylrc_rs::{format, parse};
//!
//! let input = "\" keys\nbind  j   scrollline 5\n";
//! let (program, diagnostics) = parse(input);
//! assert!(diagnostics.is_empty());
//! assert_eq!(format(&program), "\" keys\nbind j scrollline 5\n");
//! ```
//!
//! ## Build an rc script programmatically
//!
//! ```
//! use tridactylrc_rs::{BindMode, ExCommand, Key, Program, format};
//!
//! let program = Program::new()
//!     .alias("qa", &["qall"])
//!     .bind_in(BindMode::Ex, Key::ctrl('j'), ExCommand::new("urlparent"))
//!     .set("smoothscroll", &["true"]);
//!
//! let output = format(&program);
//! assert!(output.contains("bind --mode=ex <C-j> urlparent"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod formatter;
pub mod incremental;
pub mod lexer;
pub mod lint;
pub mod parser;
pub mod tables;
pub mod token;

pub use ast::{
    Alias, Autocmd, AutocmdAction, Autocontain, Binding, CommandDef, Comment, ContainFlag,
    ExCommand, Key, Malformed, Node, Program, Quickmark, Setting, SettingValue, Statement,
    StatementKind, Unbinding,
};
pub use formatter::format;
pub use incremental::{IncrementalStats, Reparse, TextChange, reparse};
pub use lexer::{Lexer, PRIORITY, Pattern, tokenize};
pub use lint::{Advisory, AdvisoryKind, lint};
pub use parser::{Expected, ParseError, ParseErrorKind, parse};
pub use tables::{
    AutocmdEvent, BindMode, is_known_command, is_known_event, is_known_mode, is_known_setting,
};
pub use token::{Span, Token, TokenKind};

/// Unified error type for callers that want a `Result`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// First malformed line of a script.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// A script file could not be read.
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a script, rejecting it at its first malformed line.
pub fn parse_strict(input: &str) -> Result<Program, Error> {
    let (program, diagnostics) = parse(input);
    match diagnostics.into_iter().next() {
        None => Ok(program),
        Some(first) => Err(first.into()),
    }
}

/// Read and parse a script file.
///
/// Malformed lines are not an error here; they come back as
/// diagnostics alongside the program.
pub fn parse_file(path: impl AsRef<std::path::Path>) -> Result<(Program, Vec<ParseError>), Error> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse(&input))
}
