#[cfg(test)]
#[path = "../../tests/unit/common/solution_reader_test.rs"]
mod solution_reader_test;

use pdptw_core::models::{CallId, Problem, Solution};
use pdptw_core::utils::{GenericError, GenericResult};
use std::io::{BufReader, Read};

/// Reads a solution in text format from a buffer.
/// NOTE: Solution feasibility is not checked.
pub fn read_text_solution<R: Read>(mut reader: BufReader<R>, problem: &Problem) -> GenericResult<Solution> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    parse_text_solution(content.as_str(), problem)
}

/// Parses a solution in text format. Ids can be separated by whitespaces or commas. The amount
/// of routes has to match the problem and every call has to be present exactly twice.
/// NOTE: Solution feasibility is not checked.
pub fn parse_text_solution(text: &str, problem: &Problem) -> GenericResult<Solution> {
    let call_count = problem.calls().len();

    let ids = text
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<usize>().map_err(|_| format!("cannot parse call id: '{token}'")))
        .collect::<Result<Vec<_>, _>>()?;

    let routes = ids
        .split(|&id| id == 0)
        .map(|route| {
            route
                .iter()
                .map(|&id| {
                    if id > call_count {
                        Err(GenericError::from(format!("call id {id} is out of range 1..={call_count}")))
                    } else {
                        Ok(id - 1)
                    }
                })
                .collect::<GenericResult<Vec<CallId>>>()
        })
        .collect::<GenericResult<Vec<_>>>()?;

    if routes.len() != problem.route_count() {
        return Err(format!("solution has {} routes, expected {}", routes.len(), problem.route_count()).into());
    }

    let solution = Solution::from_nested(routes);
    solution.check_occurrences()?;

    if solution.call_count() != call_count {
        return Err(format!("solution contains {} calls, expected {call_count}", solution.call_count()).into());
    }

    Ok(solution)
}
