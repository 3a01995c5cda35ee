use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use stargust::{
    Evaluator, Value,
    error::ParseError,
    init_tracing,
    interpreter::{
        output::stdout_sink,
        session::{Outcome, Session},
    },
};

const PROMPT: &str = ">> ";

/// StarGust is a small scripting language with closures, arrays and maps.
///
/// Without a script, an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run instead of starting the interactive prompt.
    script: Option<PathBuf>,

    /// Print the value of the script's last statement once it finishes.
    #[arg(short, long)]
    print_result: bool,

    /// Fail calls nested deeper than this instead of exhausting the stack.
    #[arg(long, value_name = "N")]
    max_call_depth: Option<usize>,

    /// Log filter directive, e.g. `stargust=debug`. Defaults to `RUST_LOG`.
    #[arg(long, value_name = "DIRECTIVE")]
    log: Option<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let mut evaluator = Evaluator::new(stdout_sink());
    if let Some(limit) = args.max_call_depth {
        evaluator = evaluator.with_max_call_depth(limit);
    }
    let mut session = Session::with_evaluator(evaluator);

    match &args.script {
        Some(path) => run_script(&mut session, path, args.print_result),
        None => {
            repl(&mut session)?;
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Runs a whole file once.
fn run_script(session: &mut Session, path: &Path, print_result: bool) -> Result<ExitCode> {
    let source = fs::read_to_string(path).with_context(|| {
                                             format!("failed to read script '{}'",
                                                     path.display())
                                         })?;

    match session.run(&source) {
        Outcome::Diagnostics(errors) => {
            let mut stderr = io::stderr().lock();
            write_diagnostics(&mut stderr, &errors)?;
            Ok(ExitCode::FAILURE)
        },
        Outcome::Completed(Some(Value::Error(error))) => {
            eprintln!("ERROR: {error} (line {})", error.line());
            Ok(ExitCode::FAILURE)
        },
        Outcome::Completed(value) => {
            if print_result && let Some(value) = value {
                println!("{value}");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Reads one line at a time and evaluates it in the same session until end
/// of input.
fn repl(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        match session.run(&line) {
            Outcome::Diagnostics(errors) => write_diagnostics(&mut stdout, &errors)?,
            Outcome::Completed(Some(value)) => writeln!(stdout, "{value}")?,
            Outcome::Completed(None) => {},
        }
    }
}

fn write_diagnostics(out: &mut impl Write, errors: &[ParseError]) -> io::Result<()> {
    writeln!(out, "parser errors:")?;
    for error in errors {
        writeln!(out, "\t{error}")?;
    }
    Ok(())
}
