//! CLI tool to validate and format Tridactyl rc scripts.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tridactylrc_rs::{Program, StatementKind, format, lint, parse};

#[derive(Parser)]
#[command(name = "tridactylrc")]
#[command(about = "Validate and format Tridactyl rc scripts")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check if rc script(s) parse cleanly
    Validate {
        /// Also report command and setting names missing from the tables
        #[arg(long)]
        lint: bool,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Format rc script(s) and print to stdout
    Fmt {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Check if rc script(s) are formatted
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the token stream of rc script(s)
    Tokens {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the parse tree of rc script(s) as JSON
    Dump {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

impl Command {
    fn files(&self) -> &[PathBuf] {
        match self {
            Self::Validate { files, .. }
            | Self::Fmt { files }
            | Self::Check { files }
            | Self::Tokens { files }
            | Self::Dump { files } => files,
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut had_error = false;

    for path in args.command.files() {
        let display = path.display();
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{display}: {e}");
                had_error = true;
                continue;
            }
        };
        let (program, diagnostics) = parse(&content);

        match &args.command {
            Command::Validate { lint: with_lint, .. } => {
                for diagnostic in &diagnostics {
                    eprintln!("{display}: {diagnostic}");
                }
                if *with_lint {
                    for advisory in lint(&program) {
                        eprintln!("{display}: warning: {advisory}");
                    }
                }
                if diagnostics.is_empty() {
                    eprintln!("{display}: valid ({})", summary(&program));
                } else {
                    had_error = true;
                }
            }
            Command::Fmt { .. } => {
                print!("{}", format(&program));
            }
            Command::Check { .. } => {
                if format(&program) == content {
                    eprintln!("{display}: formatted");
                } else {
                    eprintln!("{display}: not formatted");
                    had_error = true;
                }
            }
            Command::Tokens { .. } => {
                for statement in &program.statements {
                    for token in &statement.tokens {
                        println!(
                            "{}:{}\t{}\t{:?}",
                            token.span.line,
                            token.span.column,
                            token.kind.name(),
                            token.text
                        );
                    }
                }
            }
            Command::Dump { .. } => match serde_json::to_string_pretty(&program) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("{display}: {e}");
                    had_error = true;
                }
            },
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn summary(program: &Program) -> String {
    let count = |kind| program.statements_of_kind(kind).count();
    format!(
        "{} binding(s), {} alias(es), {} autocmd(s), {} setting(s), {} other command(s)",
        count(StatementKind::Binding) + count(StatementKind::Unbinding),
        count(StatementKind::Alias) + count(StatementKind::CommandDef),
        count(StatementKind::Autocmd) + count(StatementKind::Autocontain),
        count(StatementKind::Setting),
        count(StatementKind::ExCommand) + count(StatementKind::Quickmark),
    )
}
