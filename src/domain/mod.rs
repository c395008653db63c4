//! Domain types used throughout the fitter.
//!
//! This module defines:
//!
//! - the degree specification and basis term enumeration (`SurfaceDegree`, `Term`)
//! - fit outputs (`SurfaceFit`)
//! - binary-facing input/config types (`SurfaceInput`, `FitConfig`)

pub mod types;

pub use types::*;
