//! Radial basis functions.

use crate::{Error, Result};

/// A Gaussian bell of height `a`, centered on `b`, with standard deviation `c`.
pub fn gaussian(a: f64, b: f64, c: f64) -> impl Fn(f64) -> f64 {
    move |x| a * bell((b - x) * (b - x), c)
}

/// A Gaussian of height `a` over several dimensions, centered on `centers` with one standard
/// deviation per dimension.
pub fn gaussian_vector(
    a: f64,
    centers: Vec<f64>,
    deviations: Vec<f64>,
) -> Result<impl Fn(&[f64]) -> Result<f64>> {
    if centers.len() != deviations.len() {
        return Err(Error::DimensionMismatch {
            expected: centers.len(),
            actual: deviations.len(),
        });
    }
    Ok(move |x: &[f64]| {
        check_dimensions(&centers, x)?;
        Ok(a * centers
            .iter()
            .zip(&deviations)
            .zip(x)
            .map(|((b, c), x)| bell((b - x) * (b - x), *c))
            .product::<f64>())
    })
}

/// A Gaussian of height `a` over several dimensions sharing the standard deviation `c`.
pub fn isotropic_gaussian(a: f64, centers: Vec<f64>, c: f64) -> impl Fn(&[f64]) -> Result<f64> {
    move |x: &[f64]| {
        check_dimensions(&centers, x)?;
        Ok(a * bell(squared_distance(&centers, x), c))
    }
}

/// The Gaussian `exp(-r^2)` of a radius.
pub fn gaussian_radius(r: f64) -> f64 {
    (-(r * r)).exp()
}

/// The Ricker wavelet (Mexican hat) `(1 - r^2) exp(-r^2 / 2)` of a radius.
pub fn ricker_wavelet(r: f64) -> f64 {
    let r2 = r * r;
    (1.0 - r2) * (-r2 / 2.0).exp()
}

/// `exp(-d / (2 c^2))` for a squared distance `d`.
///
/// A zero deviation is the limit of an ever narrower bell: 1 at the center and 0 anywhere else.
pub(crate) fn bell(squared_distance: f64, c: f64) -> f64 {
    let denominator = 2.0 * c * c;
    if denominator == 0.0 {
        if squared_distance == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        (-squared_distance / denominator).exp()
    }
}

pub(crate) fn squared_distance(p: &[f64], q: &[f64]) -> f64 {
    p.iter().zip(q).map(|(p, q)| (p - q) * (p - q)).sum()
}

fn check_dimensions(centers: &[f64], x: &[f64]) -> Result<()> {
    if centers.len() != x.len() {
        return Err(Error::DimensionMismatch {
            expected: centers.len(),
            actual: x.len(),
        });
    }
    Ok(())
}
