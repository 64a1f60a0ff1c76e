//! Feature modules built on top of the core cleaner
//!
//! - Template argument cleaning

pub mod template_args;

pub use template_args::clean_template_args;
