#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use pdptw_cli::core::solver::{Algorithm, SearchConfig};
use pdptw_cli::core::utils::{get_cpus, Environment, InfoLogger};
use pdptw_cli::extensions::solve::config::read_search_config;
use pdptw_cli::extensions::solve::report::{write_csv_reports, InstanceReport};
use pdptw_cli::extensions::solve::schedule::split_total_time;
use pdptw_cli::extensions::solve::{solve_instance, SolveOptions};
use pdptw_cli::scientific::common::write_text_solution;
use pdptw_cli::scientific::instance::PdptwProblem;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const ALGORITHM_ARG_NAME: &str = "algorithm";
const WORKERS_ARG_NAME: &str = "workers";
const ITERATIONS_ARG_NAME: &str = "iterations";
const TIME_ARG_NAME: &str = "max-time";
const TOTAL_TIME_ARG_NAME: &str = "total-time";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const CONFIG_ARG_NAME: &str = "config";
const ESCAPE_AFTER_ARG_NAME: &str = "escape-after";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const CSV_ARG_NAME: &str = "csv";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves pickup and delivery problem instances")
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets files which contain problem definitions")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies search algorithm")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .required(false)
                .default_value("adaptive")
                .value_parser(["random", "local", "annealing", "adaptive"]),
        )
        .arg(
            Arg::new(WORKERS_ARG_NAME)
                .help("Specifies amount of parallel workers, default is amount of CPUs")
                .short('w')
                .long(WORKERS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies max iterations of every worker")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of every worker in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false)
                .conflicts_with(TOTAL_TIME_ARG_NAME),
        )
        .arg(
            Arg::new(TOTAL_TIME_ARG_NAME)
                .help("Specifies time in seconds shared by all instances, larger shares go to later instances")
                .long(TOTAL_TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies base seed of workers' random streams")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to search config in json format")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ESCAPE_AFTER_ARG_NAME)
                .help("Specifies amount of iterations without improvement which triggers escape")
                .long(ESCAPE_AFTER_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether search progress should be logged")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for solutions, one line per instance")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CSV_ARG_NAME)
                .help("Specifies path to file for per instance summary in csv format")
                .long(CSV_ARG_NAME)
                .required(false),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let problem_paths =
        matches.get_many::<String>(PROBLEM_ARG_NAME).map(|paths| paths.cloned().collect::<Vec<_>>()).unwrap_or_default();

    let algorithm = matches
        .get_one::<String>(ALGORITHM_ARG_NAME)
        .map(|value| value.parse::<Algorithm>())
        .transpose()
        .map_err(|err| err.to_string())?
        .unwrap_or_default();
    let workers = parse_int_value::<usize>(matches, WORKERS_ARG_NAME, "workers")?;
    let iterations = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "max iterations")?;
    let max_time = parse_float_value::<f64>(matches, TIME_ARG_NAME, "max time")?;
    let total_time = parse_float_value::<f64>(matches, TOTAL_TIME_ARG_NAME, "total time")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?;
    let escape_after = parse_int_value::<usize>(matches, ESCAPE_AFTER_ARG_NAME, "escape after")?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);

    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_search_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string())?,
        None => SearchConfig::default(),
    };

    if let Some(iterations) = iterations {
        config.iterations = iterations;
    }
    if max_time.is_some() {
        config.max_time = max_time;
    }
    if escape_after.is_some() {
        config.escape_after = escape_after;
    }

    let time_limits = total_time.map(|total_time| split_total_time(total_time, problem_paths.len()));

    let logger: InfoLogger =
        if is_logging { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) };
    let options = SolveOptions { algorithm, config, workers, seed, environment: Environment::new(logger, get_cpus()) };

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut out_buffer = out_writer_func(out_result);

    let reports = problem_paths
        .iter()
        .enumerate()
        .map(|(idx, path)| -> Result<InstanceReport, String> {
            let problem = BufReader::new(open_file(path, "problem")?)
                .read_pdptw()
                .map_err(|err| format!("cannot read problem from '{path}': '{err}'"))?;

            let mut options = options.clone();
            if let Some(time_limits) = time_limits.as_ref() {
                options.config.max_time = Some(time_limits[idx]);
            }

            let result = solve_instance(get_instance_name(path), Arc::new(problem), &options)
                .map_err(|err| format!("cannot solve problem from '{path}': '{err}'"))?;

            write_text_solution(&mut out_buffer, &result.solution).map_err(|err| err.to_string())?;

            Ok(result.report)
        })
        .collect::<Result<Vec<_>, String>>()?;

    out_buffer.flush().map_err(|err| err.to_string())?;

    if let Some(path) = matches.get_one::<String>(CSV_ARG_NAME) {
        write_csv_reports(create_file(path, "csv")?, &reports).map_err(|err| err.to_string())?;
    }

    Ok(())
}

fn get_instance_name(path: &str) -> &str {
    Path::new(path).file_stem().and_then(|stem| stem.to_str()).unwrap_or(path)
}
