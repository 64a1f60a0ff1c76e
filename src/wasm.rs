//! WASM bindings for wikiclean
//!
//! This module provides JavaScript-accessible functions for cleaning wiki
//! markup and rendering formulas.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Cleaning options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct CleanValueOptions {
    /// Keep leading and trailing whitespace
    #[serde(default)]
    pub no_strip: bool,
    /// Keep residual HTML tags
    #[serde(default)]
    pub no_html_strip: bool,
}

#[cfg(feature = "wasm")]
impl From<CleanValueOptions> for crate::CleanOptions {
    fn from(opts: CleanValueOptions) -> Self {
        crate::CleanOptions {
            no_strip: opts.no_strip,
            no_html_strip: opts.no_html_strip,
        }
    }
}

/// Result with the diagnostics produced along the way
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct CleanResultJs {
    /// The cleaned output
    pub output: String,
    /// Warnings during cleaning
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Clean wiki markup to plain text
///
/// # Arguments
/// * `input` - Wiki markup
/// * `options` - `{ no_strip, no_html_strip }`, both optional
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "cleanValue")]
pub fn clean_value_wasm(input: &str, options: JsValue) -> String {
    let opts: CleanValueOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    crate::clean_value_with_options(input, opts.into())
}

/// Render a LaTeX formula as Unicode text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderMath")]
pub fn render_math_wasm(input: &str) -> String {
    crate::render_math_with_sink(input, &crate::diagnostics::NoopSink)
}

/// Render a LaTeX formula, returning `{ output, warnings }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderMathWithWarnings")]
pub fn render_math_with_warnings_wasm(input: &str) -> Result<JsValue, JsValue> {
    let sink = crate::diagnostics::CollectingSink::new();
    let output = crate::render_math_with_sink(input, &sink);
    let result = CleanResultJs {
        output,
        warnings: sink.take().iter().map(|d| d.to_string()).collect(),
    };
    serde_wasm_bindgen::to_value(&result).map_err(JsValue::from)
}

/// Remove bold/italic markers only
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "stripEmphasis")]
pub fn strip_emphasis_wasm(input: &str) -> String {
    crate::strip_emphasis(input)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
