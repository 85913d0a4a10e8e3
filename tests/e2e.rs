//! End-to-end tests over realistic rc scripts.

mod common;

use common::{assert_covers, assert_idempotent, parse_clean};
use tridactylrc_rs::{StatementKind, TokenKind, format, lint, parse};

const RC: &str = "\
\" General settings
set smoothscroll true
set modeindicator false
set hintnames short

\" Aliases and user commands
alias qa qall
alias hello echo hi
command work tabopen -c work

\" Bindings
bind j scrollline 5
bind k scrollline -5
bind --mode=ex <C-j> tabnext
bind --mode=insert <C-e> editor
unbind <C-f>

\" Sites
autocmd DocStart mail.google.com mode ignore
autocmd TabEnter github.com hello
autocontain -s github.com dev
autocontain -u https://www.example.com/ work
quickmark g https://github.com
quickmark r https://reddit.com
";

fn roundtrip(input: &str) {
    let program = parse_clean(input);
    let output = format(&program);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

#[test]
fn canonical_rc_roundtrips() {
    roundtrip(RC);
}

#[test]
fn canonical_rc_covers_every_byte() {
    let (program, _) = parse(RC);
    assert_covers(RC, &program);
    let span = program.span().expect("non-empty");
    assert_eq!(span.start, 0);
    assert_eq!(span.end, RC.len());
}

#[test]
fn canonical_rc_is_lint_clean() {
    let (program, _) = parse(RC);
    assert!(lint(&program).is_empty(), "{:?}", lint(&program));
}

#[test]
fn statements_of_kind_is_restartable() {
    let (program, _) = parse(RC);
    let bindings = program.statements_of_kind(StatementKind::Binding);
    assert_eq!(bindings.clone().count(), 4);
    let lines: Vec<usize> = bindings.map(|s| s.span.line).collect();
    assert_eq!(lines, vec![12, 13, 14, 15]);
    assert_eq!(program.statements_of_kind(StatementKind::Quickmark).count(), 2);
}

#[test]
fn statement_at_offset() {
    let (program, _) = parse(RC);
    let offset = RC.find("unbind").expect("unbind line");
    let statement = program.statement_at(offset).expect("statement");
    assert_eq!(statement.kind(), StatementKind::Unbinding);

    let token = statement.token_at(offset + 8).expect("key token");
    assert_eq!(token.kind, TokenKind::CompoundKey);
    assert_eq!(token.text, "<C-f>");

    // The newline belongs to the line it terminates.
    let newline = offset + "unbind <C-f>".len();
    assert_eq!(
        program.statement_at(newline).map(|s| s.span.line),
        Some(statement.span.line)
    );
    assert!(program.statement_at(RC.len()).is_none());
}

#[test]
fn messy_rc_with_errors() {
    let input = "\
set smoothscroll true
bind
   \" indented comment
autocontain -x github.com dev
quickmark g https://github.com
";
    let (program, diagnostics) = parse(input);
    assert_covers(input, &program);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(program.diagnostics().count(), 2);
    assert_eq!(program.statements[2].kind(), StatementKind::Comment);
    assert_eq!(program.statements[4].kind(), StatementKind::Quickmark);
    assert_idempotent(input);
}

#[test]
fn program_serializes_to_json() {
    let (program, _) = parse("bind --mode=ex <C-j> urlparent\n");
    let json = serde_json::to_value(&program).expect("serialize");
    let node = &json["statements"][0]["node"];
    assert_eq!(node["kind"], "binding");
    assert_eq!(node["mode"], "ex");
    assert_eq!(node["excmd"]["name"], "urlparent");
}
