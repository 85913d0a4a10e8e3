//! Pretty-printer that serializes a `Program` back into canonical rc text.
//!
//! One statement per line, single spaces between tokens. Comments and
//! malformed lines are written back verbatim.

use std::fmt::Write as _;

use crate::ast::{
    Alias, Autocmd, AutocmdAction, Autocontain, Binding, CommandDef, Key, Node, Program,
    Quickmark, Setting, Unbinding,
};
use crate::tables::BindMode;

/// Format a `Program` into rc script text.
///
/// Every statement ends with a newline, including the last.
#[must_use]
pub fn format(program: &Program) -> String {
    let mut out = String::new();
    for statement in &program.statements {
        format_node(&mut out, &statement.node);
        out.push('\n');
    }
    out
}

fn format_node(out: &mut String, node: &Node) {
    match node {
        Node::Alias(alias) => format_alias(out, alias),
        Node::Autocmd(autocmd) => format_autocmd(out, autocmd),
        Node::Autocontain(rule) => format_autocontain(out, rule),
        Node::Binding(binding) => format_binding(out, binding),
        Node::Unbinding(unbinding) => format_unbinding(out, unbinding),
        Node::CommandDef(def) => format_command_def(out, def),
        Node::ExCommand(excmd) => {
            let _ = write!(out, "{excmd}");
        }
        Node::Quickmark(mark) => format_quickmark(out, mark),
        Node::Setting(setting) => format_setting(out, setting),
        // A stray `\r` would merge into the terminator on reparse.
        Node::Comment(comment) => {
            out.push('"');
            out.push_str(comment.text.trim_end_matches('\r'));
        }
        Node::Blank => {}
        Node::Error(malformed) => out.push_str(malformed.text.trim_end_matches('\r')),
    }
}

fn format_alias(out: &mut String, alias: &Alias) {
    out.push_str("alias ");
    out.push_str(&alias.name);
    for word in &alias.expansion {
        out.push(' ');
        out.push_str(word);
    }
}

fn format_autocmd(out: &mut String, autocmd: &Autocmd) {
    let _ = write!(out, "autocmd {} {} ", autocmd.event, autocmd.pattern);
    match &autocmd.action {
        AutocmdAction::ExCommand(excmd) => {
            let _ = write!(out, "{excmd}");
        }
        AutocmdAction::Alias(name) => out.push_str(name),
    }
}

fn format_autocontain(out: &mut String, rule: &Autocontain) {
    let _ = write!(
        out,
        "autocontain {} {} {}",
        rule.flag.as_str(),
        rule.pattern,
        rule.container
    );
}

fn format_mode_and_key(out: &mut String, mode: Option<BindMode>, key: Key) {
    if let Some(mode) = mode {
        let _ = write!(out, " --mode={mode}");
    }
    let _ = write!(out, " {key}");
}

fn format_binding(out: &mut String, binding: &Binding) {
    out.push_str("bind");
    format_mode_and_key(out, binding.mode, binding.key);
    let _ = write!(out, " {}", binding.excmd);
}

fn format_unbinding(out: &mut String, unbinding: &Unbinding) {
    out.push_str("unbind");
    format_mode_and_key(out, unbinding.mode, unbinding.key);
}

fn format_command_def(out: &mut String, def: &CommandDef) {
    let _ = write!(out, "command {} {}", def.name, def.excmd);
}

fn format_quickmark(out: &mut String, mark: &Quickmark) {
    let _ = write!(out, "quickmark {} {}", mark.key, mark.url);
}

fn format_setting(out: &mut String, setting: &Setting) {
    out.push_str("set ");
    out.push_str(&setting.name);
    for value in &setting.values {
        out.push(' ');
        out.push_str(value.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn reformat(input: &str) -> String {
        let (program, _) = parse(input);
        format(&program)
    }

    #[test]
    fn normalizes_spacing() {
        assert_eq!(
            reformat("  bind   --mode=ex\t<C-j>   urlparent  \n"),
            "bind --mode=ex <C-j> urlparent\n"
        );
        assert_eq!(reformat("set  smoothscroll   true"), "set smoothscroll true\n");
    }

    #[test]
    fn keeps_argument_text() {
        assert_eq!(
            reformat("bind j   js alert( 'x  y' )  \n"),
            "bind j js alert( 'x  y' )\n"
        );
    }

    #[test]
    fn comments_and_errors_verbatim() {
        let input = "\"  spaced   comment\n   42 nonsense  \n\n";
        assert_eq!(reformat(input), "\"  spaced   comment\n   42 nonsense  \n\n");
    }

    #[test]
    fn autocontain_and_quickmark() {
        assert_eq!(
            reformat("autocontain   -u https://example.com/   work\nquickmark  g  https://github.com\n"),
            "autocontain -u https://example.com/ work\nquickmark g https://github.com\n"
        );
    }

    #[test]
    fn glued_tokens_stay_verbatim() {
        assert_eq!(reformat("set x a1\n"), "set x a1\n");
        assert_eq!(reformat("echo\"hi\"\n"), "echo\"hi\"\n");
    }

    #[test]
    fn crlf_becomes_lf() {
        assert_eq!(reformat("alias qa qall\r\n"), "alias qa qall\n");
    }
}
