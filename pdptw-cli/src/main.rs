//! A command line interface to *Pickup and Delivery Problem with Time Windows* solver.
//!

mod commands;

use clap::Command;
use commands::check::{get_check_app, run_check};
use commands::create_write_buffer;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = Command::new("Pickup and Delivery Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("A command line interface to Pickup and Delivery Problem with Time Windows solver")
        .subcommand(get_solve_app())
        .subcommand(get_check_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("check", check_matches)) => run_check(check_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
