//! # tabtex
//!
//! Batch CSV → LaTeX booktabs table converter written in Rust.
//!
//! ## Features
//!
//! - **Typed Columns**: each column is tagged text or numeric once at parse time
//! - **Booktabs Output**: top/mid/bottom rules instead of grid lines
//! - **Complete Escaping**: all LaTeX special characters escaped in a single pass
//! - **Numeric Rounding**: floats rounded to a configurable precision, ties to even
//! - **Float Wrapping**: `table` environment with derived caption and label
//! - **Batch CLI**: converts a whole directory of CSV files in one run
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### One-shot conversion
//!
//! ```rust
//! use tabtex::csv_to_latex_table;
//!
//! let tex = csv_to_latex_table("name,score\nA&B,95.5\n").unwrap();
//! assert!(tex.contains("\\begin{tabular}{lr}"));
//! assert!(tex.contains("A\\&B & 95.5 \\\\"));
//! ```
//!
//! ### With options
//!
//! ```rust
//! use tabtex::{csv_to_latex_table_with_options, RenderOptions};
//!
//! let options = RenderOptions {
//!     caption: Some("Results".to_string()),
//!     label: Some("tab:res".to_string()),
//!     ..Default::default()
//! };
//! let tex = csv_to_latex_table_with_options("x\n1.23456\n", &options).unwrap();
//! assert!(tex.contains("\\caption{Results}"));
//! assert!(tex.contains("1.2346"));
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static mappings
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions and types
pub use core::reader::{parse_csv, parse_csv_file, parse_csv_str, ParsedTable};
pub use core::render::{
    default_caption, default_label, render_document, render_tabular, wrap_as_float, RenderOptions,
};
pub use core::table::{round_to, Column, ColumnKind, Table, Value};

// Re-export data modules
pub use data::escapes::{escape_latex, is_latex_special};

// Re-export utilities
pub use utils::error::{ConversionError, ConversionResult, ConversionWarning};
pub use utils::files::{discover_inputs, output_path};

/// Convert CSV text to a complete LaTeX table float with default options
///
/// # Arguments
/// * `input` - CSV text, first record taken as column headers
///
/// # Returns
/// LaTeX source for a `table` float containing the tabular
pub fn csv_to_latex_table(input: &str) -> ConversionResult<String> {
    csv_to_latex_table_with_options(input, &RenderOptions::default())
}

/// Convert CSV text to LaTeX with custom options
///
/// The default caption and label are derived from the placeholder source
/// name `table.csv`; callers converting real files should go through
/// [`render_document`] with the actual file name.
pub fn csv_to_latex_table_with_options(
    input: &str,
    options: &RenderOptions,
) -> ConversionResult<String> {
    let parsed = parse_csv_str(input)?;
    render_document(&parsed.table, "table.csv", options)
}
