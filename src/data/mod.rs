//! Data layer - Static mappings
//!
//! This module contains the static data used for CSV → LaTeX conversion:
//! - LaTeX special-character escape mappings

pub mod escapes;

// Re-export commonly used items
pub use escapes::{escape_latex, is_latex_special, LATEX_ESCAPES};
