#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, Command};
use pdptw_cli::extensions::check::{check_text_solution, format_outcome};
use pdptw_cli::scientific::instance::PdptwProblem;
use std::io::BufReader;
use std::path::Path;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const SOLUTION_ARG_NAME: &str = "SOLUTION";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Checks feasibility and cost of a solution in text format")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets a file which contains a problem definition").required(true).index(1))
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets a solution file or a solution itself, e.g. \"1 1 0 2 2 0 3 3\"")
                .required(true)
                .index(2),
        )
}

pub fn run_check(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("missing problem argument")?;
    let solution_arg = matches.get_one::<String>(SOLUTION_ARG_NAME).ok_or("missing solution argument")?;

    let problem = BufReader::new(open_file(problem_path, "problem")?)
        .read_pdptw()
        .map_err(|err| format!("cannot read problem from '{problem_path}': '{err}'"))?;

    let solution = if Path::new(solution_arg).is_file() {
        std::fs::read_to_string(solution_arg)
            .map_err(|err| format!("cannot read solution file '{solution_arg}': '{err}'"))?
    } else {
        solution_arg.clone()
    };

    let outcome = check_text_solution(&problem, solution.as_str()).map_err(|err| format!("cannot check solution: '{err}'"))?;

    let mut out_buffer = out_writer_func(None);
    writeln!(out_buffer, "{}", format_outcome(&outcome)).map_err(|err| err.to_string())?;
    out_buffer.flush().map_err(|err| err.to_string())
}
