//! Input/output helpers for the `surf` binary.
//!
//! - surface JSON read/write (`surface`)
//! - fit result export (`export`)

pub mod export;
pub mod surface;

pub use export::*;
pub use surface::*;
