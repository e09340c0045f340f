//! Readers for the CLI's input files.
//!
//! Filenames come one per line, in the same order the model produced its
//! predictions. Prediction files hold one row per line with two numeric
//! fields separated by a comma and/or whitespace; `#` starts a comment line.

use crate::core::PredictionTable;
use crate::errors::{Result, SubmissionError};
use std::fs;
use std::path::Path;

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| SubmissionError::io_with_path("Failed to read input file", path, e))
}

/// Read an ordered filename list, skipping blank lines.
pub fn read_filenames(path: &Path) -> Result<Vec<String>> {
    let contents = read_input(path)?;
    let filenames = parse_filenames(&contents);
    log::debug!("Read {} filenames from {}", filenames.len(), path.display());
    Ok(filenames)
}

/// Parse filenames from text, one per line. Surrounding whitespace is trimmed.
pub fn parse_filenames(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a two-column prediction table.
pub fn read_predictions(path: &Path) -> Result<PredictionTable> {
    let contents = read_input(path)?;
    let table = parse_predictions(&contents, path)?;
    log::debug!("Read {} prediction rows from {}", table.len(), path.display());
    Ok(table)
}

/// Parse a prediction table; `origin` only labels errors.
pub fn parse_predictions(contents: &str, origin: &Path) -> Result<PredictionTable> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| is_data_line(line))
        .map(|(index, line)| parse_prediction_row(line, origin, index + 1))
        .collect::<Result<Vec<_>>>()
        .map(PredictionTable::from_rows)
}

fn is_data_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

fn parse_prediction_row(line: &str, origin: &Path, line_number: usize) -> Result<[f64; 2]> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect();

    let [first, second] = fields.as_slice() else {
        return Err(SubmissionError::input(
            origin,
            line_number,
            format!("expected 2 columns, found {}", fields.len()),
        ));
    };

    Ok([
        parse_field(first, origin, line_number)?,
        parse_field(second, origin, line_number)?,
    ])
}

fn parse_field(field: &str, origin: &Path, line_number: usize) -> Result<f64> {
    field.parse::<f64>().map_err(|_| {
        SubmissionError::input(origin, line_number, format!("'{}' is not a number", field))
    })
}
