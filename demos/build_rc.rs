//! Build an rc script programmatically using the builder API.

use tridactylrc_rs::{AutocmdEvent, BindMode, ExCommand, Key, Program};

fn main() {
    let program = Program::new()
        .comment("Generated rc")
        .alias("qa", &["qall"])
        .command("work", ExCommand::new("tabopen").arg("-c").arg("work"))
        .blank()
        .bind(Key::single('j'), ExCommand::new("scrollline").arg("5"))
        .bind_in(BindMode::Insert, Key::ctrl('e'), ExCommand::new("editor"))
        .unbind(None, Key::ctrl('f'))
        .blank()
        .autocmd(
            AutocmdEvent::DocStart,
            "mail.google.com",
            ExCommand::new("mode").arg("ignore"),
        )
        .autocontain_domain("github.com", "dev")
        .quickmark('g', "https://github.com")
        .set("smoothscroll", &["true"]);

    let output = tridactylrc_rs::format(&program);
    println!("{output}");
}
