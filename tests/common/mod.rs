#![allow(dead_code)]

use tridactylrc_rs::{Node, Program, StatementKind, format, parse};

/// Parse input that must be free of diagnostics.
pub fn parse_clean(input: &str) -> Program {
    let (program, diagnostics) = parse(input);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics for {input:?}: {diagnostics:?}"
    );
    program
}

/// Parse a single statement line and return its node.
pub fn single(input: &str) -> Node {
    let (program, _) = parse(input);
    assert_eq!(
        program.statements.len(),
        1,
        "expected one statement for {input:?}"
    );
    program.statements[0].node.clone()
}

/// Kinds of every statement, in order.
pub fn kinds(program: &Program) -> Vec<StatementKind> {
    program.statements.iter().map(|s| s.kind()).collect()
}

/// Formatting is a fixed point after one pass.
pub fn assert_idempotent(input: &str) {
    let (program, _) = parse(input);
    let once = format(&program);
    let (reparsed, _) = parse(&once);
    let twice = format(&reparsed);
    assert_eq!(
        once, twice,
        "format not idempotent:\n--- input ---\n{input}\n--- once ---\n{once}\n--- twice ---\n{twice}"
    );
}

/// Statement spans tile the whole input with no gaps or overlaps.
pub fn assert_covers(input: &str, program: &Program) {
    let mut pos = 0;
    for statement in &program.statements {
        assert_eq!(
            statement.span.start, pos,
            "gap or overlap before {statement:?} in {input:?}"
        );
        assert!(statement.span.end > statement.span.start);
        pos = statement.span.end;
    }
    assert_eq!(pos, input.len(), "span coverage short of input {input:?}");
}
