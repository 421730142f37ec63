use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use raft::{
    error::{Error, StderrReporter},
    interpreter::evaluator::core::Context,
    parse_source,
};
use tracing_subscriber::EnvFilter;

/// Exit status for programs that fail to scan or parse.
const EXIT_SYNTAX: u8 = 65;
/// Exit status for programs that stop on a runtime error.
const EXIT_RUNTIME: u8 = 70;

/// raft is a small, dynamically typed scripting language.
///
/// Without a script, raft starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells raft to treat the argument as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed program instead of running it.
    #[arg(short, long)]
    ast: bool,

    /// Logs scanner, parser and evaluator activity to standard error.
    #[arg(short, long)]
    verbose: bool,

    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "raft=debug" } else { "raft=warn" };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                  EnvFilter::new(filter)
                                              }))
                             .with_writer(io::stderr)
                             .init();

    let Some(contents) = args.contents else {
        return run_prompt(args.ast);
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    if args.ast {
        return print_ast(&script);
    }

    match raft::get_result(&script, Box::new(io::stdout())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Syntax(diagnostics)) => {
            eprintln!("{diagnostics}");
            ExitCode::from(EXIT_SYNTAX)
        },
        Err(Error::Runtime(e)) => {
            tracing::debug!(line = e.line(), "runtime error");
            eprintln!("{e}");
            ExitCode::from(EXIT_RUNTIME)
        },
    }
}

/// Parses `script` and prints one statement per line.
fn print_ast(script: &str) -> ExitCode {
    let mut reporter = StderrReporter::default();
    let statements = parse_source(script, &mut reporter);

    for statement in &statements {
        println!("{statement}");
    }

    if reporter.had_error() { ExitCode::from(EXIT_SYNTAX) } else { ExitCode::SUCCESS }
}

/// Reads and runs one line at a time until end of input.
///
/// Variables persist between lines. Errors are printed and the prompt keeps
/// going.
fn run_prompt(ast: bool) -> ExitCode {
    let mut context = Context::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let Some(Ok(line)) = lines.next() else {
            println!();
            return ExitCode::SUCCESS;
        };

        let mut reporter = StderrReporter::default();
        let statements = parse_source(&line, &mut reporter);
        if reporter.had_error() {
            continue;
        }

        if ast {
            for statement in &statements {
                println!("{statement}");
            }
            continue;
        }

        if let Err(e) = context.execute(&statements) {
            eprintln!("{e}");
        }
    }
}
