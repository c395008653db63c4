//! `polysurf` library crate.
//!
//! Two-dimensional polynomial surface fitting by linear least squares. The core
//! entry point is [`fit()`] (or [`fit_surface`] with a validated [`SurfaceDegree`]).
//!
//! The binary (`surf`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the fitter stays a pure function with no I/O

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;

pub use domain::{SurfaceDegree, SurfaceFit, Term};
pub use error::FitError;
pub use fit::{design_matrix, fit, fit_surface};
