//! Synthetic input data for the `surf demo` command.

pub mod sample;

pub use sample::*;
