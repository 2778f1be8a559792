//! CSV parsing into typed tables
//!
//! Reads a CSV document (first record = column headers, standard quoting)
//! and builds a [`Table`]. Column types are inferred once here: a column
//! whose non-missing fields all parse as numbers is tagged numeric,
//! everything else stays text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::core::table::{Column, ColumnKind, Table, Value};
use crate::utils::error::{ConversionResult, ConversionWarning};

/// A parsed table plus any non-fatal warnings raised while reading it
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub table: Table,
    pub warnings: Vec<ConversionWarning>,
}

/// Parse CSV from any reader
///
/// Ragged records (rows whose field count differs from the header) are a
/// parse error; the `csv` crate reports them with a line position.
pub fn parse_csv<R: Read>(input: R) -> ConversionResult<ParsedTable> {
    let mut reader = csv::Reader::from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records: Vec<StringRecord> = Vec::new();
    for result in reader.records() {
        records.push(result?);
    }

    let mut columns = Vec::with_capacity(headers.len());
    let mut warnings = Vec::new();

    for (idx, name) in headers.iter().enumerate() {
        let fields: Vec<&str> = records.iter().map(|r| r.get(idx).unwrap_or("")).collect();
        let (column, mixed) = build_column(name, &fields);
        if mixed {
            warnings.push(ConversionWarning::with_suggestion(
                format!("column '{}' mixes numeric and text values", name),
                "treated as text, not rounded",
            ));
        }
        columns.push(column);
    }

    Ok(ParsedTable {
        table: Table::new(columns),
        warnings,
    })
}

/// Parse CSV from an in-memory string
pub fn parse_csv_str(input: &str) -> ConversionResult<ParsedTable> {
    parse_csv(input.as_bytes())
}

/// Parse CSV from a file on disk
pub fn parse_csv_file(path: &Path) -> ConversionResult<ParsedTable> {
    let file = File::open(path)?;
    parse_csv(file)
}

/// Build one typed column from its raw fields
///
/// Returns the column and whether it mixed numeric and text fields.
fn build_column(name: &str, fields: &[&str]) -> (Column, bool) {
    let mut numeric_seen = false;
    let mut text_seen = false;

    for field in fields {
        if field.is_empty() {
            continue;
        }
        if parse_number(field).is_some() {
            numeric_seen = true;
        } else {
            text_seen = true;
        }
    }

    // A column with no non-missing fields counts as numeric; every cell
    // renders empty either way.
    let kind = if text_seen {
        ColumnKind::Text
    } else {
        ColumnKind::Numeric
    };

    let values = fields
        .iter()
        .map(|field| {
            if field.is_empty() {
                Value::Missing
            } else if kind == ColumnKind::Numeric {
                parse_number(field).unwrap_or_else(|| Value::Text(field.to_string()))
            } else {
                Value::Text(field.to_string())
            }
        })
        .collect();

    (Column::new(name, kind, values), numeric_seen && text_seen)
}

/// Try a field as an integer, then as a float; surrounding whitespace is
/// tolerated
fn parse_number(field: &str) -> Option<Value> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Value::Int(n));
    }
    if let Ok(x) = trimmed.parse::<f64>() {
        return Some(Value::Float(x));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_basic() {
        let parsed = parse_csv_str("name,score\nA&B,95.5\nC_D,3\n").unwrap();
        let table = &parsed.table;

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.columns[0].name, "name");
        assert_eq!(table.columns[0].kind, ColumnKind::Text);
        assert_eq!(table.columns[1].kind, ColumnKind::Numeric);
        assert_eq!(table.columns[1].values[0], Value::Float(95.5));
        assert_eq!(table.columns[1].values[1], Value::Int(3));
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_parse_missing_cells() {
        let parsed = parse_csv_str("a,b\n1,\n,x\n").unwrap();
        let table = &parsed.table;

        assert_eq!(table.columns[0].kind, ColumnKind::Numeric);
        assert_eq!(table.columns[0].values[1], Value::Missing);
        assert_eq!(table.columns[1].kind, ColumnKind::Text);
        assert_eq!(table.columns[1].values[0], Value::Missing);
    }

    #[test]
    fn test_parse_mixed_column_warns() {
        let parsed = parse_csv_str("v\n1\ntwo\n").unwrap();

        assert_eq!(parsed.table.columns[0].kind, ColumnKind::Text);
        assert_eq!(parsed.table.columns[0].values[0], Value::Text("1".into()));
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].message.contains("'v'"));
    }

    #[test]
    fn test_parse_all_missing_column_is_numeric() {
        let parsed = parse_csv_str("a,b\n1,\n2,\n").unwrap();
        assert_eq!(parsed.table.columns[1].kind, ColumnKind::Numeric);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let parsed = parse_csv_str("name,note\nx,\"a, b\"\n").unwrap();
        assert_eq!(
            parsed.table.columns[1].values[0],
            Value::Text("a, b".into())
        );
    }

    #[test]
    fn test_parse_whitespace_number() {
        let parsed = parse_csv_str("n\n 3\n").unwrap();
        assert_eq!(parsed.table.columns[0].kind, ColumnKind::Numeric);
        assert_eq!(parsed.table.columns[0].values[0], Value::Int(3));
    }

    #[test]
    fn test_parse_ragged_row_is_error() {
        let err = parse_csv_str("a,b\n1,2\n3\n").unwrap_err();
        assert!(err.to_string().contains("Parse error"));
    }

    #[test]
    fn test_parse_header_only() {
        let parsed = parse_csv_str("a,b\n").unwrap();
        assert_eq!(parsed.table.column_count(), 2);
        assert_eq!(parsed.table.row_count(), 0);
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = parse_csv_str("").unwrap();
        assert!(parsed.table.is_empty());
    }
}
