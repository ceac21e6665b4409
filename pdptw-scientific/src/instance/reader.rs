#[cfg(test)]
#[path = "../../tests/unit/instance/reader_test.rs"]
mod reader_test;

use crate::common::{read_sections, TextSection};
use pdptw_core::models::*;
use pdptw_core::utils::{GenericError, GenericResult};
use std::io::{BufReader, Read};

/// A trait to read a problem in the sectioned text format.
pub trait PdptwProblem {
    /// Reads the problem.
    fn read_pdptw(self) -> GenericResult<Problem>;
}

impl<R: Read> PdptwProblem for BufReader<R> {
    fn read_pdptw(self) -> GenericResult<Problem> {
        read_pdptw_format(self)
    }
}

impl PdptwProblem for String {
    fn read_pdptw(self) -> GenericResult<Problem> {
        read_pdptw_format(BufReader::new(self.as_bytes()))
    }
}

const SECTION_NAMES: [&str; 8] =
    ["node count", "vehicle count", "vehicles", "call count", "permitted calls", "calls", "trips", "handlings"];

/// A parsed record which keeps its origin for error messages.
struct Record<'a> {
    section: &'static str,
    line: usize,
    text: &'a str,
    values: Vec<i64>,
}

impl Record<'_> {
    fn error(&self, message: &str) -> GenericError {
        format!("{message} in {} section at line {}: '{}'", self.section, self.line, self.text).into()
    }

    fn value(&self, field: usize) -> i64 {
        self.values[field]
    }

    /// Converts a 1-based index to 0-based checking the range.
    fn index(&self, field: usize, count: usize, what: &str) -> GenericResult<usize> {
        let value = self.value(field);

        if value >= 1 && value as usize <= count {
            Ok(value as usize - 1)
        } else {
            Err(self.error(format!("{what} index {value} is out of range 1..={count}").as_str()))
        }
    }

    fn non_negative(&self, field: usize, what: &str) -> GenericResult<i64> {
        let value = self.value(field);

        if value >= 0 { Ok(value) } else { Err(self.error(format!("{what} cannot be negative").as_str())) }
    }
}

fn read_pdptw_format<R: Read>(reader: BufReader<R>) -> GenericResult<Problem> {
    let sections = read_sections(reader)?;

    if let Some(extra) = sections.iter().skip(SECTION_NAMES.len()).find(|section| !section.records.is_empty()) {
        return Err(format!("unexpected data after {} section at line {}", SECTION_NAMES[7], extra.line).into());
    }

    let get_section = |idx: usize| {
        sections.get(idx).ok_or_else(|| GenericError::from(format!("missing {} section", SECTION_NAMES[idx])))
    };

    let node_count = read_count(get_section(0)?, SECTION_NAMES[0])?;
    let vehicle_count = read_count(get_section(1)?, SECTION_NAMES[1])?;
    let mut vehicles = read_vehicles(get_section(2)?, vehicle_count, node_count)?;
    let call_count = read_count(get_section(3)?, SECTION_NAMES[3])?;
    read_permitted_calls(get_section(4)?, &mut vehicles, call_count)?;
    let calls = read_calls(get_section(5)?, call_count, node_count)?;
    let trips = read_trips(get_section(6)?, vehicle_count, node_count)?;
    let handlings = read_handlings(get_section(7)?, vehicle_count, call_count)?;

    Ok(Problem::new(node_count, vehicles, calls, trips, handlings))
}

fn parse_records<'a>(section: &'a TextSection, name: &'static str) -> GenericResult<Vec<Record<'a>>> {
    section
        .records
        .iter()
        .map(|(line, text)| {
            text.split(',')
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(|field| field.parse::<i64>())
                .collect::<Result<Vec<_>, _>>()
                .map(|values| Record { section: name, line: *line, text: text.as_str(), values })
                .map_err(|_| GenericError::from(format!("cannot parse {name} section at line {line}: '{text}'")))
        })
        .collect()
}

fn parse_fixed_records<'a>(
    section: &'a TextSection,
    name: &'static str,
    fields: usize,
    count: Option<usize>,
) -> GenericResult<Vec<Record<'a>>> {
    let records = parse_records(section, name)?;

    if let Some(record) = records.iter().find(|record| record.values.len() != fields) {
        return Err(record.error(format!("expected {fields} fields, got {}", record.values.len()).as_str()));
    }

    match count {
        Some(count) if count != records.len() => {
            Err(format!("expected {count} records in {name} section at line {}, got {}", section.line, records.len()).into())
        }
        _ => Ok(records),
    }
}

fn read_count(section: &TextSection, name: &'static str) -> GenericResult<usize> {
    let records = parse_fixed_records(section, name, 1, Some(1))?;

    records[0].non_negative(0, "count").map(|count| count as usize)
}

fn read_vehicles(section: &TextSection, vehicle_count: usize, node_count: usize) -> GenericResult<Vec<Vehicle>> {
    parse_fixed_records(section, SECTION_NAMES[2], 4, Some(vehicle_count))?
        .iter()
        .enumerate()
        .map(|(position, record)| {
            check_position(record, position, vehicle_count, "vehicle")?;

            Ok(Vehicle {
                home: record.index(1, node_count, "node")?,
                start_time: record.non_negative(2, "starting time")?,
                capacity: record.non_negative(3, "capacity")?,
                calls: Default::default(),
            })
        })
        .collect()
}

fn read_permitted_calls(section: &TextSection, vehicles: &mut [Vehicle], call_count: usize) -> GenericResult<()> {
    let records = parse_records(section, SECTION_NAMES[4])?;
    if records.len() != vehicles.len() {
        return Err(format!(
            "expected {} records in {} section at line {}, got {}",
            vehicles.len(),
            SECTION_NAMES[4],
            section.line,
            records.len()
        )
        .into());
    }

    records.iter().try_for_each(|record| {
        if record.values.is_empty() {
            return Err(record.error("missing vehicle index"));
        }

        let vehicle = record.index(0, vehicles.len(), "vehicle")?;
        (1..record.values.len()).try_for_each(|field| -> GenericResult<()> {
            vehicles[vehicle].calls.insert(record.index(field, call_count, "call")?);
            Ok(())
        })
    })
}

fn read_calls(section: &TextSection, call_count: usize, node_count: usize) -> GenericResult<Vec<Call>> {
    parse_fixed_records(section, SECTION_NAMES[5], 9, Some(call_count))?
        .iter()
        .enumerate()
        .map(|(position, record)| {
            check_position(record, position, call_count, "call")?;

            let pickup = (record.value(5), record.value(6));
            let delivery = (record.value(7), record.value(8));
            if pickup.0 > pickup.1 || delivery.0 > delivery.1 {
                return Err(record.error("time window start is after its end"));
            }

            Ok(Call {
                origin: record.index(1, node_count, "node")?,
                destination: record.index(2, node_count, "node")?,
                size: record.non_negative(3, "size")?,
                penalty: record.non_negative(4, "penalty")?,
                pickup: TimeWindow::new(pickup.0, pickup.1),
                delivery: TimeWindow::new(delivery.0, delivery.1),
            })
        })
        .collect()
}

fn read_trips(section: &TextSection, vehicle_count: usize, node_count: usize) -> GenericResult<Vec<Trip>> {
    parse_fixed_records(section, SECTION_NAMES[6], 5, None)?
        .iter()
        .map(|record| {
            Ok(Trip {
                vehicle: record.index(0, vehicle_count, "vehicle")?,
                origin: record.index(1, node_count, "node")?,
                destination: record.index(2, node_count, "node")?,
                time: record.non_negative(3, "time")?,
                cost: record.value(4),
            })
        })
        .collect()
}

fn read_handlings(
    section: &TextSection,
    vehicle_count: usize,
    call_count: usize,
) -> GenericResult<Vec<VehicleCallHandling>> {
    parse_fixed_records(section, SECTION_NAMES[7], 6, None)?
        .iter()
        .map(|record| {
            Ok(VehicleCallHandling {
                vehicle: record.index(0, vehicle_count, "vehicle")?,
                call: record.index(1, call_count, "call")?,
                pickup_time: record.non_negative(2, "time")?,
                pickup_cost: record.value(3),
                delivery_time: record.non_negative(4, "time")?,
                delivery_cost: record.value(5),
            })
        })
        .collect()
}

/// Records of vehicles and calls have to be listed in the order of their indices.
fn check_position(record: &Record<'_>, position: usize, count: usize, what: &str) -> GenericResult<()> {
    let index = record.index(0, count, what)?;

    if index == position {
        Ok(())
    } else {
        Err(record.error(format!("expected {what} index {}, got {}", position + 1, index + 1).as_str()))
    }
}
