//! Parse an rc script and re-format it.

use tridactylrc_rs::{Node, StatementKind};

fn main() {
    let input = "\
\" Example rc
alias   qa qall
bind <C-f>   tabopen  -c work
autocmd DocStart   mail.google.com   mode ignore
set modeindicator true
";

    let (program, diagnostics) = tridactylrc_rs::parse(input);
    assert!(diagnostics.is_empty(), "unexpected diagnostics");

    println!("Statements: {}", program.statements.len());
    for statement in &program.statements {
        println!(
            "  line {}: {}",
            statement.span.line,
            statement.kind()
        );
    }

    for statement in program.statements_of_kind(StatementKind::Binding) {
        if let Node::Binding(binding) = &statement.node {
            println!("Binding: {} -> {}", binding.key, binding.excmd);
        }
    }

    let output = tridactylrc_rs::format(&program);
    println!("\nFormatted output:\n{output}");
}
