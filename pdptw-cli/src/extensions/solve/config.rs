//! Reads search configuration from json.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use pdptw_core::solver::SearchConfig;
use pdptw_core::utils::GenericResult;
use std::io::{BufReader, Read};

/// Reads and validates search config. Omitted fields take default values.
pub fn read_search_config<R: Read>(reader: BufReader<R>) -> GenericResult<SearchConfig> {
    let config: SearchConfig =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))?;

    config.validate()?;

    Ok(config)
}
