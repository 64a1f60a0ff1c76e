//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics and diagnostic sinks
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{
    format_diagnostics, CollectingSink, Diagnostic, DiagnosticLevel, DiagnosticSink, LogSink,
    NoopSink,
};
pub use error::{CleanError, CleanResult};
