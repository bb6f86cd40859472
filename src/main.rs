use std::error::Error as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use dpll_trace::sat::{
    clause_lines, parse_formula, ClauseList, ParseError, SatResult, Solution, Solver,
};

const ERROR_EXIT: u8 = 2;

/// Solve CNF clauses with DPLL and print every decision taken.
#[derive(Parser, Debug)]
#[command(name = "dpll_trace", version)]
struct Cli {
    /// Clauses such as "(A ∨ ¬B)" or "(A | !B)". The demo clauses are used when none are given.
    clauses: Vec<String>,

    /// Read further clauses from a file, one per line. Blank lines and lines starting with '#' are skipped.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Only print the result.
    #[arg(long, default_value_t = false)]
    no_trace: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The error followed by everything that caused it, on one line.
fn describe(err: &CliError) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    // io errors are already part of the message
    if matches!(err, CliError::Io(..)) {
        cause = None;
    }
    while let Some(inner) = cause {
        message.push_str(&format!(": {inner}"));
        cause = inner.source();
    }
    message
}

/// Positional clauses first, then the clause lines of `file`. Falls back to
/// the demo clauses when both are empty.
fn collect_clauses(clauses: &[String], file: Option<&Path>) -> Result<ClauseList, CliError> {
    let mut list = ClauseList::new();
    list.extend(clauses);
    if let Some(path) = file {
        let text = std::fs::read_to_string(path)
            .map_err(|err| CliError::Io(path.to_path_buf(), err))?;
        list.extend(clause_lines(&text));
    }
    if list.is_empty() {
        log::info!("No clauses given, solving the demo clauses");
        list = ClauseList::default();
    }
    Ok(list)
}

fn solve_cli(cli: &Cli) -> Result<(Solver, Solution), CliError> {
    let list = collect_clauses(&cli.clauses, cli.file.as_deref())?;
    let solver = Solver::new(parse_formula(list.clauses())?);
    let solution = solver.run();
    Ok((solver, solution))
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let (solver, solution) = solve_cli(cli)?;
    println!("Formula: {}", solver.formula());
    println!("Variables: {}", solver.variables().len());

    println!("{}", solution.result);
    if let SatResult::Satisfiable(assignments) = &solution.result {
        println!("{assignments}");
    }
    if !cli.no_trace {
        println!("\nTrace:");
        print!("{}", solution.trace);
    }
    Ok(())
}

fn exit_status(result: Result<(), CliError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", describe(&err));
            ERROR_EXIT
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    ExitCode::from(exit_status(run(&cli)))
}
