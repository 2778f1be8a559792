//! Typed tabular data model
//!
//! A [`Table`] is an ordered sequence of named columns over typed cell
//! values. Each column is tagged once at parse time as text or numeric, so
//! rounding dispatches on the tag instead of re-inspecting cells.

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text
    Text(String),
    /// Integer number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Missing value (empty CSV field)
    Missing,
}

impl Value {
    /// Render the value as plain (unescaped) text
    ///
    /// Missing values render as the empty string. Floats use Rust's
    /// shortest round-trip formatting, which strips trailing zeros
    /// (`3.0` prints as `3`).
    pub fn format(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Int(n) => n.to_string(),
            Value::Float(x) => x.to_string(),
            Value::Missing => String::new(),
        }
    }

    /// Whether this value counts toward a numeric column
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_) | Value::Missing)
    }
}

/// Column type tag, fixed at parse time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Numeric,
}

/// A named column of cell values
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind, values: Vec<Value>) -> Self {
        Column {
            name: name.into(),
            kind,
            values,
        }
    }
}

/// An ordered collection of columns with uniform row count
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Table { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Return a copy of the table with numeric columns rounded
    ///
    /// Float cells in numeric columns are rounded to `precision` decimal
    /// digits with round-half-to-even; integer cells, missing cells and
    /// text columns are unchanged. The receiver is not mutated.
    pub fn round_numeric(&self, precision: u32) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|col| {
                if col.kind != ColumnKind::Numeric {
                    return col.clone();
                }
                let values = col
                    .values
                    .iter()
                    .map(|v| match v {
                        Value::Float(x) => Value::Float(round_to(*x, precision)),
                        other => other.clone(),
                    })
                    .collect();
                Column::new(col.name.clone(), col.kind, values)
            })
            .collect();
        Table { columns }
    }
}

/// Round to `precision` decimal digits, ties to even
pub fn round_to(x: f64, precision: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let factor = 10f64.powi(precision as i32);
    (x * factor).round_ties_even() / factor
}
