//! LaTeX special-character escape mappings
//!
//! Text cells may contain any of the ten LaTeX special characters; this
//! module holds the replacement table and the single-pass escape routine
//! built on it.

use phf::phf_map;

/// LaTeX special character to escape sequence mapping
///
/// `^` and `~` take an empty group so they render as literal characters
/// instead of accent commands.
pub static LATEX_ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '&' => "\\&",
    '%' => "\\%",
    '_' => "\\_",
    '#' => "\\#",
    '$' => "\\$",
    '{' => "\\{",
    '}' => "\\}",
    '^' => "\\^{}",
    '~' => "\\~{}",
};

/// Check whether a character needs escaping in LaTeX text
pub fn is_latex_special(c: char) -> bool {
    LATEX_ESCAPES.contains_key(&c)
}

/// Escape special LaTeX characters in text
///
/// A single left-to-right pass over the input, so an emitted escape
/// sequence is never itself re-escaped.
pub fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for ch in text.chars() {
        match LATEX_ESCAPES.get(&ch) {
            Some(escaped) => result.push_str(escaped),
            None => result.push(ch),
        }
    }

    result
}
