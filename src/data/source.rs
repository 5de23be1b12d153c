//! Dataset sources: where the raw table comes from.
//!
//! A [`DatasetSource`] yields a [`Frame`], a header plus string records. Typed
//! interpretation (dates, numbers, required columns) happens in
//! [`Dataset::from_frame`](crate::data::dataset::Dataset::from_frame).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// A raw table: column names and string cells, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Frame {
    /// Index of the column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Look up a column index or fail with [`Error::MissingColumn`].
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }
}

/// Anything that can produce the dataset table once at startup.
pub trait DatasetSource {
    /// Human-readable origin, used in log messages.
    fn describe(&self) -> String;
    fn load(&self) -> Result<Frame>;
}

enum CsvInput {
    Path(PathBuf),
    Text(String),
}

/// OWID-style comma separated file with a header row.
pub struct CsvSource {
    input: CsvInput,
}

impl CsvSource {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            input: CsvInput::Path(path.as_ref().to_path_buf()),
        }
    }

    /// In-memory CSV; handy for fixtures.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            input: CsvInput::Text(text.into()),
        }
    }
}

impl DatasetSource for CsvSource {
    fn describe(&self) -> String {
        match &self.input {
            CsvInput::Path(p) => p.display().to_string(),
            CsvInput::Text(_) => "<in-memory csv>".to_string(),
        }
    }

    fn load(&self) -> Result<Frame> {
        match &self.input {
            CsvInput::Path(p) => {
                let text = std::fs::read_to_string(p).map_err(|e| Error::Io(p.clone(), e))?;
                parse_csv(&text)
            }
            CsvInput::Text(t) => parse_csv(t),
        }
    }
}

/// Parse CSV text into a [`Frame`].
///
/// Handles double-quoted fields (with embedded commas, newlines and `""`
/// escapes) and CRLF line endings. Blank lines are skipped. Every record must
/// have as many fields as the header.
pub fn parse_csv(text: &str) -> Result<Frame> {
    let mut records = split_records(text)?;
    if records.is_empty() {
        return Err(Error::Csv {
            line: 1,
            message: "missing header row".to_string(),
        });
    }
    let (_, header) = records.remove(0);
    let width = header.len();
    let mut out = Vec::with_capacity(records.len());
    for (line, fields) in records {
        if fields.len() != width {
            return Err(Error::Csv {
                line,
                message: format!("expected {} fields, found {}", width, fields.len()),
            });
        }
        out.push(fields);
    }
    debug!(columns = width, records = out.len(), "parsed csv");
    Ok(Frame {
        header: header.into_iter().map(|h| h.trim().to_string()).collect(),
        records: out,
    })
}

// Returns each non-blank record with the 1-based line it starts on.
fn split_records(text: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut record_line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                push_record(&mut records, std::mem::take(&mut fields), record_line);
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err(Error::Csv {
            line: record_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_record(&mut records, fields, record_line);
    }
    Ok(records)
}

fn push_record(records: &mut Vec<(usize, Vec<String>)>, fields: Vec<String>, line: usize) {
    let blank = fields.len() == 1 && fields[0].trim().is_empty();
    if !blank {
        records.push((line, fields));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_fields_and_crlf() {
        let frame = parse_csv("a,b,c\r\n1,\"x, y\",\"say \"\"hi\"\"\"\r\n\r\n2,,z\r\n").unwrap();
        assert_eq!(frame.header, vec!["a", "b", "c"]);
        assert_eq!(frame.records.len(), 2);
        assert_eq!(frame.records[0], vec!["1", "x, y", "say \"hi\""]);
        assert_eq!(frame.records[1], vec!["2", "", "z"]);
    }

    #[test]
    fn last_record_without_newline_is_kept() {
        let frame = parse_csv("a,b\n1,2").unwrap();
        assert_eq!(frame.records, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn ragged_record_reports_line() {
        let err = parse_csv("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, Error::Csv { line: 3, .. }), "{err}");
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(parse_csv("a\n\"open\n").is_err());
    }

    #[test]
    fn empty_text_has_no_header() {
        assert!(matches!(parse_csv(""), Err(Error::Csv { line: 1, .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let src = CsvSource::from_path("/definitely/not/here.csv");
        let err = src.load().unwrap_err();
        assert!(matches!(err, Error::Io(..)));
        assert!(err.is_load_error());
    }
}
