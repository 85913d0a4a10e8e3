//! Demonstrate diagnostics for malformed rc input.

fn main() {
    // Keyword without its arguments
    match tridactylrc_rs::parse_strict("set smoothscroll true\nbind\n") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(tridactylrc_rs::Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
            if let Some(token) = &e.fallback {
                println!("  Lexical fallback: {:?}", token.text);
            }
        }
        Err(e) => println!("Error: {e}"),
    }

    println!();

    // Malformed lines are kept; later lines still parse
    let (program, diagnostics) =
        tridactylrc_rs::parse("42 not a command\nbind j scrollline 5\nunbind\n");
    println!(
        "{} statement(s), {} diagnostic(s)",
        program.statements.len(),
        diagnostics.len()
    );
    for diagnostic in &diagnostics {
        println!("  {diagnostic}");
    }
}
