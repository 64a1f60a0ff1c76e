//! Superscript, subscript and chemical-formula conversion
//!
//! When a string cannot be written entirely with Unicode modifier or
//! inferior characters, the whole string falls back to caret/underscore
//! notation so that mixed output such as `ˣ^Σ` never appears.

use crate::data::scripts::{SUBSCRIPTS, SUPERSCRIPTS};

/// Convert text to superscript: `"123"` → `"¹²³"`, `"Σ"` → `"^Σ"`,
/// `"ΣΣ"` → `"^(ΣΣ)"`
pub fn to_superscript(text: &str) -> String {
    convert(text, &SUPERSCRIPTS, '^')
}

/// Convert text to subscript: `"12"` → `"₁₂"`, `"ab"` → `"_(ab)"`
pub fn to_subscript(text: &str) -> String {
    convert(text, &SUBSCRIPTS, '_')
}

/// Convert a chemical formula by subscripting each decimal digit:
/// `"H2O"` → `"H₂O"`. Other numeric characters such as `½` pass through.
pub fn to_chem(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_digit() {
            let mut buf = [0u8; 4];
            out.push_str(&to_subscript(c.encode_utf8(&mut buf)));
        } else {
            out.push(c);
        }
    }
    out
}

fn convert(text: &str, table: &phf::Map<char, &'static str>, marker: char) -> String {
    if text.is_empty() {
        return String::new();
    }

    if text.chars().all(|c| table.contains_key(&c)) {
        return text.chars().filter_map(|c| table.get(&c).copied()).collect();
    }

    let mut out = String::with_capacity(text.len() + 3);
    out.push(marker);
    if text.chars().count() == 1 {
        out.push_str(text);
    } else {
        out.push('(');
        out.push_str(text);
        out.push(')');
    }
    out
}
