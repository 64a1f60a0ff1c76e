//! # wikiclean
//!
//! Wiki markup to plain text, with LaTeX formulas rendered as Unicode.
//!
//! ## Features
//!
//! - **Markup stripping**: tables, references, HTML remnants, wiki and
//!   external links are removed or reduced to their visible text
//! - **Emphasis**: bold/italic apostrophe runs resolved the way the wiki
//!   renderer does, including the ambiguous three-apostrophe cases
//! - **Math**: `<math>` content rendered with 750+ symbol mappings,
//!   super/subscripts, fractions, roots and math alphabets
//! - **Localized namespaces**: category and file links recognized under
//!   any wiki's namespace names
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Cleaning a field
//!
//! ```rust
//! use wikiclean::clean_value;
//!
//! let text = clean_value("'''[[water]]''' (H<sub>2</sub>O)<ref>source</ref>");
//! assert_eq!(text, "water (H₂O)");
//! ```
//!
//! ### Rendering a formula
//!
//! ```rust
//! use wikiclean::render_math;
//!
//! assert_eq!(render_math(r"\sqrt{x^2 + 1}"), "√(x²+1)");
//! ```

/// Core cleaning modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Feature modules built on the core cleaner
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core functions
pub use core::clean::{clean_value, clean_value_with_options, CleanOptions, Cleaner};
pub use core::emphasis::strip_emphasis;
pub use core::math::{render_math, render_math_with_sink};
pub use core::scripts::{to_chem, to_subscript, to_superscript};

// Re-export data modules
pub use data::namespaces::{NamespaceConfig, NamespaceEntry};
pub use data::symbols;

// Re-export feature modules
pub use features::template_args::clean_template_args;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{CleanError, CleanResult};

/// Clean each line of `text` separately and join the results with newlines.
/// Lines that clean to nothing are dropped.
pub fn clean_lines(
    cleaner: &Cleaner,
    text: &str,
    options: CleanOptions,
    sink: &dyn diagnostics::DiagnosticSink,
) -> String {
    text.lines()
        .map(|line| cleaner.clean_with_sink(line, options, sink))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_value_basic() {
        assert_eq!(clean_value("''[[cat|Cats]]'' purr"), "Cats purr");
    }

    #[test]
    fn test_render_math_basic() {
        assert_eq!(render_math(r"\alpha + \beta"), "α+β");
    }

    #[test]
    fn test_math_inside_markup() {
        assert_eq!(clean_value(r"area <math>\pi r^2</math>"), "area πr²");
    }

    #[test]
    fn test_clean_lines_drops_empty_lines() {
        let cleaner = Cleaner::default();
        let text = "# ''one''\n[[Category:X]]\n# [[two]]";
        assert_eq!(
            clean_lines(&cleaner, text, CleanOptions::default(), &diagnostics::NoopSink),
            "# one\n# two"
        );
    }

    #[test]
    fn test_clean_options_presets() {
        let opts = CleanOptions::raw_html();
        assert!(opts.no_html_strip);
        assert!(!opts.no_strip);

        let opts = CleanOptions::no_strip();
        assert!(opts.no_strip);
        assert!(!opts.no_html_strip);

        assert_eq!(CleanOptions::default(), CleanOptions {
            no_strip: false,
            no_html_strip: false,
        });
    }

    #[test]
    fn test_script_helpers_exported() {
        assert_eq!(to_superscript("2"), "²");
        assert_eq!(to_subscript("2"), "₂");
        assert_eq!(to_chem("CO2"), "CO₂");
    }
}
