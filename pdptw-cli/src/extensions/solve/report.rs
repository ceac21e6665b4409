//! Contains per instance reports and their csv export.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/report_test.rs"]
mod report_test;

use pdptw_core::models::Cost;
use pdptw_core::utils::GenericResult;
use serde::Serialize;
use std::io::Write;

/// Summarizes solving of a single instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InstanceReport {
    /// Instance name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Best cost averaged over workers.
    #[serde(rename = "Average objective")]
    pub average_cost: f64,
    /// The best cost.
    #[serde(rename = "Best objective")]
    pub best_cost: Cost,
    /// Improvement of the best cost over the initial one in percent.
    #[serde(rename = "Improvement (%)")]
    pub improvement: f64,
    /// Running time averaged over workers in milliseconds.
    #[serde(rename = "Running time")]
    pub running_time: f64,
}

/// Returns improvement of the best cost over the initial one in percent.
pub fn get_improvement(initial_cost: Cost, best_cost: Cost) -> f64 {
    if initial_cost == 0 { 0. } else { 100. * (initial_cost - best_cost) as f64 / initial_cost as f64 }
}

/// Writes reports as csv with a header line.
pub fn write_csv_reports<W: Write>(writer: W, reports: &[InstanceReport]) -> GenericResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    reports
        .iter()
        .try_for_each(|report| writer.serialize(report))
        .map_err(|err| format!("cannot write csv report: '{err}'"))?;

    writer.flush()?;

    Ok(())
}
