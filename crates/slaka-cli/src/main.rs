//! `slaka` command-line runner
//!
//! Usage: `slaka [OPTIONS] [FILE]`
//!
//! - `slaka prog.slaka` runs a file, `slaka` or `slaka -` runs stdin
//! - `slaka -e CODE` runs code given on the command line
//! - `slaka -i` starts a REPL that keeps its slots between lines
//! - more than one `FILE` prints usage and exits

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

use slaka_core::source::Source;
use slaka_core::{Interpreter, VariableStore};

const PROMPT: &str = ">>> ";

#[derive(Parser, Debug)]
#[command(name = "slaka")]
#[command(about = "Run programs written in slaka, the phonetic programming language")]
#[command(version)]
struct Args {
    /// Program file to run; `-` or nothing reads the program from stdin
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Execute CODE given as an argument
    #[arg(short = 'e', long = "exec", value_name = "CODE", conflicts_with_all = ["files", "interactive"])]
    exec: Option<String>,

    /// Start a REPL environment
    #[arg(short = 'i', long = "interactive", conflicts_with = "files")]
    interactive: bool,

    /// After running, write the nine slot values to stderr as JSON
    #[arg(long)]
    dump_state: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.interactive {
        return run_repl();
    }

    let source = match (args.exec, args.files.as_slice()) {
        (Some(code), _) => Source::Literal(code),
        (None, []) => Source::Stdin,
        (None, [file]) => Source::from_path_arg(Some(file.as_path())),
        (None, _) => {
            // more than one program file
            Args::command().print_help()?;
            return Ok(());
        }
    };
    run_source(&source, args.dump_state)
}

fn run_source(source: &Source, dump_state: bool) -> Result<()> {
    let code = source.load()?;
    debug!(bytes = code.len(), "loaded program");

    let mut interp = Interpreter::stdio();
    interp.run(&code).context("failed to write program output")?;

    if dump_state {
        dump(interp.store())?;
    }
    Ok(())
}

fn dump(store: &VariableStore) -> Result<()> {
    let json = serde_json::to_string(store.as_slice()).context("failed to encode slots")?;
    eprintln!("{}", json);
    Ok(())
}

fn run_repl() -> Result<()> {
    let mut rl = DefaultEditor::new().context("could not initialize line editor")?;
    let mut interp = Interpreter::stdio();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                interp.run(&line).context("failed to write program output")?;

                let mut stdout = io::stdout();
                writeln!(stdout)?;
                stdout.flush()?;
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => return Err(err).context("failed to read line"),
        }
    }

    Ok(())
}
