//! CSV loader: one series per numeric column, zero-allocation float parsing.

use std::io::{self, BufRead, BufReader, Read};

use thiserror::Error;

/// Columns read from a CSV source.
#[derive(Debug, Default, PartialEq)]
pub struct SeriesTable {
    /// Category labels, filled only when the first column holds labels.
    pub labels: Vec<String>,
    pub series: Vec<Vec<f64>>,
}

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("expected {expected} columns, got {got}")]
    BadColumnCount { expected: usize, got: usize },
    #[error("invalid value '{text}' in column {column}")]
    BadFloat { column: usize, text: String },
    #[error("no data rows")]
    Empty,
}

// --- Helpers ---
#[inline]
fn trim(b: &[u8]) -> &[u8] {
    b.trim_ascii()
}

/// Replace U+2212 MINUS SIGN with an ASCII hyphen in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, column: usize) -> Result<f64, ParseCsvError> {
    let bad = || ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            column,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read every row of `src` into per-column series.
///
/// * Blank lines and lines starting with `#` are skipped.
/// * A first row whose first numeric field does not parse is a header.
/// * With `label_column` the first field of each row becomes a category
///   label and the remaining fields are series.
pub fn read_csv<R: Read>(src: R, label_column: bool) -> Result<SeriesTable, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut table = SeriesTable::default();
    let mut saw_first = false;
    let mut line_no = 0usize;
    let first_value = usize::from(label_column);

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }

        let fields: Vec<&[u8]> = buf.split(|&b| b == b',').map(trim).collect();

        // simple header detection (non-numeric first value field)
        if !saw_first {
            saw_first = true;
            let first = fields.get(first_value).copied().unwrap_or_default();
            if lexical_core::parse::<f64>(first).is_err() {
                continue;
            }
        }

        let columns = fields.len().saturating_sub(first_value);
        if table.series.is_empty() {
            if columns == 0 {
                return Err(ParseCsvError {
                    line: line_no,
                    kind: ParseErrorKind::BadColumnCount {
                        expected: first_value + 1,
                        got: fields.len(),
                    },
                });
            }
            table.series = vec![Vec::new(); columns];
        } else if columns != table.series.len() {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount {
                    expected: table.series.len() + first_value,
                    got: fields.len(),
                },
            });
        }

        if label_column {
            table
                .labels
                .push(String::from_utf8_lossy(fields[0]).into_owned());
        }
        for (column, (field, series)) in fields[first_value..]
            .iter()
            .zip(table.series.iter_mut())
            .enumerate()
        {
            series.push(parse_f64(field, line_no, column + first_value)?);
        }
    }
    if table.series.is_empty() {
        return Err(ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Empty,
        });
    }
    Ok(table)
}

pub fn read_csv_from_path(path: &str, label_column: bool) -> Result<SeriesTable, ParseCsvError> {
    if path == "-" {
        read_csv(io::stdin(), label_column)
    } else {
        use std::fs::File;
        read_csv(
            File::open(path).map_err(|e| ParseCsvError {
                line: 0,
                kind: ParseErrorKind::Io(e),
            })?,
            label_column,
        )
    }
}
