//! Data layer - Static mappings and constants
//!
//! This module contains all static data used by the cleaner:
//! - Superscript and subscript character maps
//! - Math alphabets (calligraphic, fraktur, double-struck)
//! - LaTeX command to Unicode symbol mappings
//! - Namespace names and URL schemes

pub mod alphabets;
pub mod constants;
pub mod namespaces;
pub mod scripts;
pub mod symbols;

// Re-export commonly used items
pub use alphabets::MathAlphabet;
pub use namespaces::{NamespaceConfig, NamespaceEntry};
pub use scripts::{SUBSCRIPTS, SUPERSCRIPTS};
pub use symbols::{lookup_symbol, MATH_IDIOMS, MATH_SYMBOLS};
