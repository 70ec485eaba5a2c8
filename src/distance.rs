//! Distance measurements between two vectors.
//!
//! Every function here has the shape expected by the training loop,
//! `Fn(&[f64], &[f64]) -> Result<f64, DistanceError>`, so any of them can be handed to
//! [`complete`](crate::training::complete) as its error measure.

use thiserror::Error;

/// Errors returned when two vectors cannot be compared.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DistanceError {
    /// The vectors have different lengths.
    #[error("distance: mismatched vector lengths ({0} and {1})")]
    MismatchedLengths(usize, usize),
    /// The vectors are empty so there is nothing to compare.
    #[error("distance: zero length vector")]
    ZeroLength,
}

fn validate(p: &[f64], q: &[f64]) -> Result<(), DistanceError> {
    if p.len() != q.len() {
        return Err(DistanceError::MismatchedLengths(p.len(), q.len()));
    }
    if p.is_empty() {
        return Err(DistanceError::ZeroLength);
    }
    Ok(())
}

fn sum_of_squared_differences(p: &[f64], q: &[f64]) -> f64 {
    p.iter().zip(q).map(|(p, q)| (p - q) * (p - q)).sum()
}

/// Euclidean (straight line) distance.
pub fn euclidean(p: &[f64], q: &[f64]) -> Result<f64, DistanceError> {
    validate(p, q)?;
    Ok(sum_of_squared_differences(p, q).sqrt())
}

/// Manhattan (taxicab) distance.
pub fn manhattan(p: &[f64], q: &[f64]) -> Result<f64, DistanceError> {
    validate(p, q)?;
    Ok(p.iter().zip(q).map(|(p, q)| (p - q).abs()).sum())
}

/// Chebyshev distance: the largest difference along any single dimension.
pub fn chebyshev(p: &[f64], q: &[f64]) -> Result<f64, DistanceError> {
    validate(p, q)?;
    Ok(p.iter()
        .zip(q)
        .map(|(p, q)| (p - q).abs())
        .fold(0.0, f64::max))
}

/// Sum of the squared differences.
pub fn sum_of_squares(p: &[f64], q: &[f64]) -> Result<f64, DistanceError> {
    validate(p, q)?;
    Ok(sum_of_squared_differences(p, q))
}

/// Mean of the squared differences.
pub fn mean_square(p: &[f64], q: &[f64]) -> Result<f64, DistanceError> {
    validate(p, q)?;
    Ok(sum_of_squared_differences(p, q) / p.len() as f64)
}

/// Square root of the mean of the squared differences.
pub fn root_mean_square(p: &[f64], q: &[f64]) -> Result<f64, DistanceError> {
    mean_square(p, q).map(f64::sqrt)
}
