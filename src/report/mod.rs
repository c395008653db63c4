//! Reporting utilities: fitted-surface errors and formatted terminal output.

pub mod format;

pub use format::*;
