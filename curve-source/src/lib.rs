#![warn(clippy::all, rust_2018_idioms)]

//! Reader for two-column coordinate files (`.roc`, `.pr`).
//!
//! One point per line, `x<TAB>y`. Reading stops at the first blank line or at
//! the end of the file; everything after a blank line is ignored.

mod source;

use std::{io::BufRead, path::PathBuf};

use thiserror::Error;

pub use source::{canonical_path, DataSource};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(pt: Point) -> Self {
        [pt.x, pt.y]
    }
}

/// Everything that can go wrong while reading a coordinate file.
///
/// I/O failures are reported through the same type as format errors, the
/// caller only has to know that the file could not be turned into points.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unable to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected 2 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: '{field}' is not a number")]
    Number { line: usize, field: String },
}

/// Parse points from `reader` until the first blank line or EOF.
///
/// Empty fields are skipped when splitting, so `"0.1\t\t0.2"` is a valid line
/// and a line made of tabs only counts as blank.
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point>, ParseError> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| ParseError::Read {
            line: line_no,
            source,
        })?;
        let fields: Vec<&str> = line.split('\t').filter(|f| !f.is_empty()).collect();
        match fields.as_slice() {
            [] => {
                log::debug!("blank line {line_no}, stop reading");
                break;
            }
            [x, y] => points.push(Point::new(
                parse_field(x, line_no)?,
                parse_field(y, line_no)?,
            )),
            _ => {
                return Err(ParseError::FieldCount {
                    line: line_no,
                    found: fields.len(),
                })
            }
        }
    }
    Ok(points)
}

fn parse_field(field: &str, line: usize) -> Result<f64, ParseError> {
    field.trim().parse::<f64>().map_err(|_| ParseError::Number {
        line,
        field: field.to_owned(),
    })
}
