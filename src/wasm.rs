//! WASM bindings for tabtex
//!
//! This module provides JavaScript-accessible functions for CSV → LaTeX
//! table conversion.

use wasm_bindgen::prelude::*;

use serde::{Deserialize, Serialize};

use crate::core::render::{render_document, RenderOptions};
use crate::core::reader::parse_csv_str;

/// Conversion options (exposed to WASM)
#[derive(Serialize, Deserialize, Default)]
pub struct ConvertOptions {
    /// Caption override; default derives from the source name
    #[serde(default)]
    pub caption: Option<String>,
    /// Label override; default derives from the source name
    #[serde(default)]
    pub label: Option<String>,
    /// Decimal digits kept when rounding numeric columns
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Emit the bare tabular without the table float environment
    #[serde(default)]
    pub bare: bool,
}

fn default_precision() -> u32 {
    4
}

/// Conversion result with additional metadata
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The generated LaTeX
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert CSV text to a LaTeX table
///
/// `options` is a plain JS object matching [`ConvertOptions`]; pass
/// `undefined` for defaults. Returns a [`ConvertResult`] object.
#[wasm_bindgen]
pub fn csv_to_table(input: &str, options: JsValue) -> JsValue {
    let options: ConvertOptions = if options.is_undefined() || options.is_null() {
        ConvertOptions::default()
    } else {
        match serde_wasm_bindgen::from_value(options) {
            Ok(opts) => opts,
            Err(e) => {
                return result_to_js(ConvertResult {
                    output: String::new(),
                    success: false,
                    error: Some(format!("bad options: {}", e)),
                    warnings: Vec::new(),
                })
            }
        }
    };

    let render_options = RenderOptions {
        caption: options.caption,
        label: options.label,
        precision: options.precision,
        bare: options.bare,
    };

    let result = match parse_csv_str(input) {
        Ok(parsed) => {
            let warnings = parsed.warnings.iter().map(|w| w.to_string()).collect();
            match render_document(&parsed.table, "table.csv", &render_options) {
                Ok(output) => ConvertResult {
                    output,
                    success: true,
                    error: None,
                    warnings,
                },
                Err(e) => ConvertResult {
                    output: String::new(),
                    success: false,
                    error: Some(e.to_string()),
                    warnings,
                },
            }
        }
        Err(e) => ConvertResult {
            output: String::new(),
            success: false,
            error: Some(e.to_string()),
            warnings: Vec::new(),
        },
    };

    result_to_js(result)
}

fn result_to_js(result: ConvertResult) -> JsValue {
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}
