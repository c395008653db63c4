//! Error type shared by the fitter and the `surf` binary.
//!
//! Every variant maps to a process exit code so `main` can report failures the
//! same way regardless of which layer produced them.

/// Errors produced while validating inputs, fitting, or doing demo file I/O.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// A degree, order, coordinate, or observation is not acceptable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The observation surface does not match the coordinate grid.
    ///
    /// Shapes are `(rows, cols)`, i.e. `(len(ys), len(xs))`.
    #[error("Shape mismatch: expected z of shape {expected:?}, found {found:?}")]
    Shape {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Reading or writing a file in the demo harness failed.
    #[error("{0}")]
    Io(String),
}

impl FitError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            FitError::InvalidArgument(_) | FitError::Io(_) => 2,
            FitError::Shape { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FitError>;
