//! Command-line front end for the message runner.
//!
//! Usage: `enigma <config-file> [input-file] [--verbose]`
//!
//! Reads a machine description from `config-file`, a script from
//! `input-file` (or stdin when omitted), and writes the converted
//! output to stdout. With `--verbose`, one trace line per converted
//! character goes to stderr.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use enigma_config::descriptor::MachineDescription;
use enigma_engine::trace::{NullTrace, TraceRecord, TraceSink};
use enigma_harness::runner::Runner;

/// Parsed command line.
struct Args {
    config: PathBuf,
    input: Option<PathBuf>,
    verbose: bool,
}

/// Trace sink that prints each record to stderr.
struct StderrTrace;

impl TraceSink for StderrTrace {
    fn record(&mut self, record: &TraceRecord) {
        eprintln!("{record}");
    }
}

fn parse_args(argv: &[String]) -> Result<Args, String> {
    let mut positional: Vec<&String> = Vec::new();
    let mut verbose = false;
    for arg in argv {
        match arg.as_str() {
            "--verbose" => verbose = true,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown flag {flag:?}"));
            }
            _ => positional.push(arg),
        }
    }
    match positional.as_slice() {
        [config] => Ok(Args {
            config: PathBuf::from(config),
            input: None,
            verbose,
        }),
        [config, input] => Ok(Args {
            config: PathBuf::from(config),
            input: Some(PathBuf::from(input)),
            verbose,
        }),
        _ => Err("usage: enigma <config-file> [input-file] [--verbose]".to_string()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("reading {}: {err}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| format!("reading stdin: {err}"))?;
            Ok(text)
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let description =
        MachineDescription::parse_file(&args.config).map_err(|err| err.to_string())?;
    let machine = description.build().map_err(|err| err.to_string())?;
    let script = read_input(args.input.as_deref())?;

    let mut runner = Runner::new(machine);
    let output = if args.verbose {
        runner.process_traced(&script, &mut StderrTrace)
    } else {
        runner.process_traced(&script, &mut NullTrace)
    }
    .map_err(|err| err.to_string())?;

    print!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("enigma: {message}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(message) = run(&args) {
        eprintln!("enigma: {message}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
