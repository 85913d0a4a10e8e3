//! Parser behaviour, recovery, and error tests.

mod common;

use common::{assert_covers, kinds, parse_clean, single};
use tridactylrc_rs::{
    Alias, AutocmdAction, AutocmdEvent, Autocontain, BindMode, Binding, ContainFlag, Error,
    ExCommand, Expected, Key, Node, ParseErrorKind, StatementKind, TokenKind, Unbinding, parse,
    parse_strict,
};

fn excmd(name: &str, args: Option<&str>) -> ExCommand {
    ExCommand {
        name: name.to_string(),
        args: args.map(str::to_string),
    }
}

fn error_kind(input: &str) -> ParseErrorKind {
    let (_, diagnostics) = parse(input);
    assert_eq!(diagnostics.len(), 1, "{input:?}");
    diagnostics[0].kind.clone()
}

// -----------------------------------------------------------
// Whole scripts.
// -----------------------------------------------------------

#[test]
fn end_to_end_example() {
    let input = "\" a leading comment
alias qa qall
bind j scrollpage
bind --mode=ex <C-j> urlparent
autocontain -u https://example.com/ work
";
    let program = parse_clean(input);
    assert_eq!(
        kinds(&program),
        vec![
            StatementKind::Comment,
            StatementKind::Alias,
            StatementKind::Binding,
            StatementKind::Binding,
            StatementKind::Autocontain,
        ]
    );
    assert_eq!(
        program.statements[1].node,
        Node::Alias(Alias {
            name: "qa".to_string(),
            expansion: vec!["qall".to_string()],
        })
    );
    assert_eq!(
        program.statements[2].node,
        Node::Binding(Binding {
            mode: None,
            key: Key::Single('j'),
            excmd: excmd("scrollpage", None),
        })
    );
    assert_eq!(
        program.statements[3].node,
        Node::Binding(Binding {
            mode: Some(BindMode::Ex),
            key: Key::Compound {
                modifier: 'C',
                key: 'j'
            },
            excmd: excmd("urlparent", None),
        })
    );
    assert_eq!(
        program.statements[4].node,
        Node::Autocontain(Autocontain {
            flag: ContainFlag::Url,
            pattern: "https://example.com/".to_string(),
            container: "work".to_string(),
        })
    );
    assert_covers(input, &program);
}

#[test]
fn malformed_lines_do_not_stop_the_parse() {
    let input = "bind\n42 nope\nset smoothscroll true\nunbind --mode=nosuch j\n";
    let (program, diagnostics) = parse(input);
    assert_eq!(
        kinds(&program),
        vec![
            StatementKind::Error,
            StatementKind::Error,
            StatementKind::Setting,
            StatementKind::Error,
        ]
    );
    assert_eq!(diagnostics.len(), 3);
    let lines: Vec<usize> = diagnostics.iter().map(|d| d.span.line).collect();
    assert_eq!(lines, vec![1, 2, 4]);
    assert_covers(input, &program);
}

#[test]
fn every_line_malformed() {
    let input = "%\n!!\n";
    let (program, diagnostics) = parse(input);
    assert_eq!(program.statements.len(), 2);
    assert_eq!(diagnostics.len(), 2);
    assert_covers(input, &program);
}

#[test]
fn parse_is_deterministic() {
    let input = "alias qa qall\nbind < C-j> x\n\" note\n";
    assert_eq!(parse(input), parse(input));
}

// -----------------------------------------------------------
// Individual statements.
// -----------------------------------------------------------

#[test]
fn unknown_command_name_is_still_an_excmd() {
    assert_eq!(
        single("myalias foo bar"),
        Node::ExCommand(excmd("myalias", Some("foo bar")))
    );
}

#[test]
fn catch_all_args_after_binding() {
    assert_eq!(
        single("bind j scrollpage --limit=5"),
        Node::Binding(Binding {
            mode: None,
            key: Key::Single('j'),
            excmd: excmd("scrollpage", Some("--limit=5")),
        })
    );
}

#[test]
fn unbind_with_mode() {
    assert_eq!(
        single("unbind --mode=insert <C-a>"),
        Node::Unbinding(Unbinding {
            mode: Some(BindMode::Insert),
            key: Key::Compound {
                modifier: 'C',
                key: 'a'
            },
        })
    );
}

#[test]
fn autocmd_excmd_and_alias_actions() {
    let Node::Autocmd(autocmd) = single("autocmd DocStart mail.google.com mode ignore") else {
        panic!("expected autocmd");
    };
    assert_eq!(autocmd.event, AutocmdEvent::DocStart);
    assert_eq!(autocmd.pattern, "mail.google.com");
    assert_eq!(
        autocmd.action,
        AutocmdAction::ExCommand(excmd("mode", Some("ignore")))
    );

    let Node::Autocmd(autocmd) = single("autocmd TabEnter example.org mysetup") else {
        panic!("expected autocmd");
    };
    assert_eq!(autocmd.action, AutocmdAction::Alias("mysetup".to_string()));
}

#[test]
fn autocontain_domain_form() {
    assert_eq!(
        single("autocontain -s github.com dev"),
        Node::Autocontain(Autocontain {
            flag: ContainFlag::Sane,
            pattern: "github.com".to_string(),
            container: "dev".to_string(),
        })
    );
}

#[test]
fn quickmark_and_command_def() {
    let Node::Quickmark(mark) = single("quickmark g https://github.com") else {
        panic!("expected quickmark");
    };
    assert_eq!(mark.key, 'g');
    assert_eq!(mark.url, "https://github.com");

    let Node::CommandDef(def) = single("command work tabopen -c work") else {
        panic!("expected command definition");
    };
    assert_eq!(def.name, "work");
    assert_eq!(def.excmd, excmd("tabopen", Some("-c work")));
}

#[test]
fn comment_text_is_opaque() {
    let Node::Comment(comment) = single("\"bind j scrollline 5") else {
        panic!("expected comment");
    };
    assert_eq!(comment.text, "bind j scrollline 5");
}

#[test]
fn crlf_line_endings() {
    let input = "set smoothscroll true\r\nbind j scrollline 5\r\n";
    let program = parse_clean(input);
    let Node::Binding(binding) = &program.statements[1].node else {
        panic!("expected binding");
    };
    assert_eq!(binding.excmd.args.as_deref(), Some("5"));
    assert_covers(input, &program);
}

// -----------------------------------------------------------
// Errors.
// -----------------------------------------------------------

#[test]
fn spaced_mode_flag_is_incomplete() {
    assert!(matches!(
        error_kind("bind --mode= ex j urlparent"),
        ParseErrorKind::StatementIncomplete {
            statement: StatementKind::Binding,
            expected: Expected::Mode,
            ..
        }
    ));
}

#[test]
fn spaced_compound_key_falls_back() {
    let (_, diagnostics) = parse("bind < C-j> x");
    assert!(matches!(
        diagnostics[0].kind,
        ParseErrorKind::StatementIncomplete {
            expected: Expected::Key,
            ..
        }
    ));
    let fallback = diagnostics[0].fallback.as_ref().expect("fallback token");
    assert_eq!(fallback.kind, TokenKind::RawRemainder);
    assert_eq!(fallback.text, "< C-j> x");
}

#[test]
fn quote_after_key_is_not_a_comment() {
    let (program, _) = parse("bind j \"not a comment");
    assert_ne!(program.statements[0].kind(), StatementKind::Comment);
}

#[test]
fn unrecognized_leading_token() {
    assert_eq!(
        error_kind("  42 things"),
        ParseErrorKind::UnrecognizedLeadingToken {
            found: "42".to_string()
        }
    );
    let (_, diagnostics) = parse("  42 things");
    assert_eq!(diagnostics[0].span.column, 3);
}

#[test]
fn trailing_input_after_unbind() {
    assert_eq!(
        error_kind("unbind j extra"),
        ParseErrorKind::TrailingInput {
            statement: StatementKind::Unbinding,
            found: "extra".to_string()
        }
    );
}

#[test]
fn unknown_event_is_incomplete() {
    assert!(matches!(
        error_kind("autocmd PageLoad example.com mode ignore"),
        ParseErrorKind::StatementIncomplete {
            statement: StatementKind::Autocmd,
            expected: Expected::Event,
            ..
        }
    ));
}

#[test]
fn error_display_has_location() {
    let (_, diagnostics) = parse("set smoothscroll true\nbind\n");
    assert_eq!(
        diagnostics[0].to_string(),
        "incomplete bind statement: expected a key at line 2, column 1"
    );
}

#[test]
fn error_node_keeps_line_text() {
    let (program, _) = parse("quickmark gg https://x.org\r\n");
    let Node::Error(malformed) = &program.statements[0].node else {
        panic!("expected error node");
    };
    assert_eq!(malformed.text, "quickmark gg https://x.org");
}

// -----------------------------------------------------------
// Strict and file entry points.
// -----------------------------------------------------------

#[test]
fn parse_strict_accepts_clean_input() {
    let program = parse_strict("alias qa qall\n").expect("clean");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn parse_strict_reports_first_error() {
    let err = parse_strict("bind\nunbind\n").unwrap_err();
    let Error::Parse(e) = err else {
        panic!("expected parse error");
    };
    assert_eq!(e.span.line, 1);
}

#[test]
fn parse_file_missing_path() {
    let err = tridactylrc_rs::parse_file("/nonexistent/tridactylrc").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().starts_with("/nonexistent/tridactylrc: "));
}
