//! LaTeX table rendering
//!
//! Turns a [`Table`] into booktabs-style LaTeX: a `tabular` body with
//! top/mid/bottom rules, optionally wrapped in a `table` float carrying a
//! caption and label.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::table::{Table, Value};
use crate::data::escapes::escape_latex;
use crate::utils::error::{ConversionError, ConversionResult};

lazy_static! {
    /// Characters that do not belong in a generated label slug
    static ref NON_SLUG: Regex = Regex::new(r"[^A-Za-z0-9_-]+").unwrap();
}

/// Rendering options
///
/// `caption` and `label` override the defaults derived from the source
/// file name; `precision` feeds numeric rounding; `bare` emits the tabular
/// without the surrounding float environment.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub caption: Option<String>,
    pub label: Option<String>,
    pub precision: u32,
    pub bare: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            caption: None,
            label: None,
            precision: 4,
            bare: false,
        }
    }
}

/// Render a cell value as escaped LaTeX text
///
/// Numbers pass through unescaped: after rounding their decimal form
/// cannot contain a LaTeX special character.
pub fn escape_value(value: &Value) -> String {
    match value {
        Value::Text(s) => escape_latex(s),
        other => other.format(),
    }
}

/// Render the tabular body for a table
///
/// Column alignment is fixed policy: first column left, the rest right.
/// Emits open-tabular, top rule, escaped header row, middle rule, one line
/// per data row in input order, bottom rule, close-tabular.
///
/// A table with zero columns is rejected; a table with zero data rows
/// renders the header block alone.
pub fn render_tabular(table: &Table) -> ConversionResult<String> {
    use std::fmt::Write;

    if table.is_empty() {
        return Err(ConversionError::invalid("table has no columns"));
    }

    let mut output = String::new();

    let _ = writeln!(output, "\\begin{{tabular}}{{{}}}", column_spec(table));
    let _ = writeln!(output, "\\toprule");

    let header: Vec<String> = table
        .columns
        .iter()
        .map(|c| escape_latex(&c.name))
        .collect();
    let _ = writeln!(output, "{} \\\\", header.join(" & "));
    let _ = writeln!(output, "\\midrule");

    for row in 0..table.row_count() {
        let cells: Vec<String> = table
            .columns
            .iter()
            .map(|c| escape_value(&c.values[row]))
            .collect();
        let _ = writeln!(output, "{} \\\\", cells.join(" & "));
    }

    let _ = writeln!(output, "\\bottomrule");
    let _ = write!(output, "\\end{{tabular}}");

    Ok(output)
}

/// Column specification: `l` for the first column, `r` for the rest
pub fn column_spec(table: &Table) -> String {
    let mut spec = String::with_capacity(table.column_count());
    for (idx, _) in table.columns.iter().enumerate() {
        spec.push(if idx == 0 { 'l' } else { 'r' });
    }
    spec
}

/// Wrap a tabular body in a `table` float with caption and label
pub fn wrap_as_float(tabular: &str, caption: &str, label: &str) -> String {
    format!(
        "\\begin{{table}}[t]\n\\centering\n{}\n\\caption{{{}}}\n\\label{{{}}}\n\\end{{table}}\n",
        tabular, caption, label
    )
}

/// Default caption for a source file, with the file name escaped
pub fn default_caption(source_name: &str) -> String {
    format!("Auto-generated table from {}", escape_latex(source_name))
}

/// Default label for a source base name: `tab:<slug>`
///
/// Runs of characters outside `[A-Za-z0-9_-]` collapse to `-` so the
/// label stays unambiguous in cross-references.
pub fn default_label(stem: &str) -> String {
    let slug = NON_SLUG.replace_all(stem, "-");
    format!("tab:{}", slug.trim_matches('-'))
}

/// Full render pipeline for one table
///
/// Rounds numeric columns, renders the tabular and wraps it in a float
/// unless `options.bare` is set. `source_name` is the input file name used
/// to derive the default caption and label.
pub fn render_document(
    table: &Table,
    source_name: &str,
    options: &RenderOptions,
) -> ConversionResult<String> {
    let rounded = table.round_numeric(options.precision);
    let tabular = render_tabular(&rounded)?;

    if options.bare {
        return Ok(format!("{}\n", tabular));
    }

    let stem = source_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(source_name);

    let caption = options
        .caption
        .clone()
        .unwrap_or_else(|| default_caption(source_name));
    let label = options
        .label
        .clone()
        .unwrap_or_else(|| default_label(stem));

    Ok(wrap_as_float(&tabular, &caption, &label))
}
