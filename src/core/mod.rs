//! Core cleaning modules
//!
//! - `clean`: wiki markup to plain text, the main entry point
//! - `emphasis`: bold/italic marker removal
//! - `math`: LaTeX formula to Unicode
//! - `scripts`: superscript, subscript and chemical notation

pub mod clean;
pub mod emphasis;
pub mod math;
pub mod scripts;

pub use clean::{clean_value, clean_value_with_options, CleanOptions, Cleaner};
pub use emphasis::strip_emphasis;
pub use math::{render_math, render_math_with_sink};
pub use scripts::{to_chem, to_subscript, to_superscript};
