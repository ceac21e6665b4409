#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use pdptw_core::utils::GenericError;
use std::io::prelude::*;
use std::io::{BufReader, Read};

/// Non empty lines of a section opened by a `%` comment line.
pub(crate) struct TextSection {
    /// Number of the comment line, starting from one.
    pub line: usize,
    /// Trimmed records with their line numbers.
    pub records: Vec<(usize, String)>,
}

pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

/// Splits the input into sections. Blank lines are skipped, data before the first comment line
/// is an error.
pub(crate) fn read_sections<R: Read>(mut reader: BufReader<R>) -> Result<Vec<TextSection>, GenericError> {
    let mut buffer = String::new();
    let mut sections: Vec<TextSection> = vec![];
    let mut line = 0;

    while read_line(&mut reader, &mut buffer)? > 0 {
        line += 1;
        let text = buffer.trim();

        if text.starts_with('%') {
            sections.push(TextSection { line, records: vec![] });
        } else if !text.is_empty() {
            match sections.last_mut() {
                Some(section) => section.records.push((line, text.to_string())),
                None => return Err(format!("unexpected data before the first section at line {line}").into()),
            }
        }
    }

    Ok(sections)
}
