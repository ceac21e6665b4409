#[cfg(test)]
#[path = "../../tests/unit/common/text_writer_test.rs"]
mod text_writer_test;

use pdptw_core::models::Solution;
use pdptw_core::utils::GenericResult;
use std::io::{BufWriter, Write};

/// Formats the solution as 1-based call ids separated by spaces: `0` closes every vehicle route
/// and outsourced calls come last.
pub fn format_text_solution(solution: &Solution) -> String {
    let last = solution.sink_index();

    solution
        .routes()
        .iter()
        .enumerate()
        .flat_map(|(idx, route)| route.calls().iter().map(|call| call + 1).chain((idx != last).then_some(0)))
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the solution in text format as a single line.
pub fn write_text_solution<W: Write>(writer: &mut BufWriter<W>, solution: &Solution) -> GenericResult<()> {
    writeln!(writer, "{}", format_text_solution(solution))?;

    Ok(())
}
