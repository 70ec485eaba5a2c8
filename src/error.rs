//! Defines the errors shared by models, distance functions and the training loop.

use thiserror::Error;

use crate::distance::DistanceError;

/// A result whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// An error type for all operations on trainees, algorithms and the training loop.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A vector was given whose length differs from the one the receiver was built for.
    #[error("Dimension mismatch: expected a vector of length {expected}, got {actual}.")]
    DimensionMismatch {
        /// The length the receiver was built for.
        expected: usize,
        /// The length that was given.
        actual: usize,
    },
    /// Something was set up in a way that can never work.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    /// A unit of a network returned a different number of outputs than the network has.
    #[error("Unit {unit} has {actual} outputs, but the network has {expected}.")]
    OutputCountMismatch {
        /// Index of the offending unit.
        unit: usize,
        /// The output count shared by the network.
        expected: usize,
        /// The output count of the unit.
        actual: usize,
    },
    /// A memory vector of the wrong length was supplied.
    #[error("Memory of length {actual} given, but {expected} values are required.")]
    MemoryLengthMismatch {
        /// The memory size of the receiver.
        expected: usize,
        /// The length that was given.
        actual: usize,
    },
    /// A distance function rejected its inputs.
    #[error(transparent)]
    Distance(#[from] DistanceError),
    /// Training failed after the given number of completed iterations.
    #[error("Training failed at iteration {iteration}: {source}")]
    Training {
        /// The number of iterations that completed before the failure.
        iteration: usize,
        /// The underlying failure.
        source: Box<Error>,
    },
    /// A custom error message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Returns how many iterations completed before training failed, if this error came out of
    /// the training loop.
    pub fn iterations(&self) -> Option<usize> {
        match self {
            Self::Training { iteration, .. } => Some(*iteration),
            _ => None,
        }
    }

    pub(crate) fn training(iteration: usize, source: Self) -> Self {
        Self::Training {
            iteration,
            source: Box::new(source),
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Self::Custom(err)
    }
}
