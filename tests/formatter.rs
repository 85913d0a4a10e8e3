//! Formatter-specific tests.

mod common;

use common::assert_idempotent;
use tridactylrc_rs::{BindMode, ExCommand, Key, Program, format, parse};

#[test]
fn format_trailing_newline() {
    let (program, _) = parse("set smoothscroll true");
    assert_eq!(format(&program), "set smoothscroll true\n");
}

#[test]
fn format_empty_program() {
    assert_eq!(format(&Program::new()), "");
}

#[test]
fn format_keeps_blank_lines() {
    let (program, _) = parse("alias qa qall\n\n\nbind j scrollline 5\n");
    assert_eq!(
        format(&program),
        "alias qa qall\n\n\nbind j scrollline 5\n"
    );
}

#[test]
fn format_drops_comment_indentation() {
    let (program, _) = parse("    \" indented note\n");
    assert_eq!(format(&program), "\" indented note\n");
}

#[test]
fn format_mode_flag_adjacent() {
    let program = Program::new().bind_in(
        BindMode::Visual,
        Key::single('y'),
        ExCommand::new("clipboard").arg("yank"),
    );
    assert_eq!(format(&program), "bind --mode=visual y clipboard yank\n");
}

#[test]
fn format_autocmd_alias_action() {
    let (program, _) = parse("autocmd   TriStart  example.org   mysetup\n");
    assert_eq!(format(&program), "autocmd TriStart example.org mysetup\n");
}

#[test]
fn format_setting_values() {
    let (program, _) = parse("set   hintnames   short  5\n");
    assert_eq!(format(&program), "set hintnames short 5\n");
}

#[test]
fn format_is_idempotent_on_messy_input() {
    assert_idempotent(
        "\u{FEFF}  alias   qa  qall\r\n\
         \" comment with   spacing\r\n\
         bind  <C-j>   tabnext\n\
         \t unbind --mode=ex   j \n\
         broken <line\n\
         set smoothscroll\ttrue\r",
    );
}

#[test]
fn format_never_splits_adjacent_text() {
    for line in [
        "set x a1",
        "set hintdelay 100px",
        "tabopenx2",
        "echo\"hi\"",
        "bind<C-j> scrollpage",
        "bind j echo\"hi\"",
        "alias qa qall2",
    ] {
        let (program, diagnostics) = parse(line);
        assert_eq!(diagnostics.len(), 1, "{line:?}");
        assert_eq!(format(&program), format!("{line}\n"));
    }
}

#[test]
fn format_only_collapses_blanks() {
    let input = "set   hintnames\tshort  5\nbind  j   scrollline 5\n";
    let (program, _) = parse(input);
    let output = format(&program);
    assert_eq!(
        output.split_whitespace().collect::<Vec<_>>(),
        input.split_whitespace().collect::<Vec<_>>()
    );
}
