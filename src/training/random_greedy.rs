use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{
    training::{Algorithm, Evaluator},
    Error, Result,
};

/// The inclusive range memory values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
        }
    }
}

impl Bounds {
    /// Create bounds, failing unless both ends and the span between them are finite and
    /// `min <= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    fn validate(&self) -> Result<()> {
        if !self.min.is_finite()
            || !self.max.is_finite()
            || !(self.max - self.min).is_finite()
            || self.min > self.max
        {
            return Err(Error::Configuration(format!(
                "invalid bounds [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Random search keeping the best memory it has seen.
///
/// Each step scores the current memory, keeps it if it beats the best error so far, then replaces
/// it with a fresh vector drawn uniformly from the [`Bounds`]. It never descends from a good point.
#[derive(Debug)]
pub struct RandomGreedy<R> {
    current: Vec<f64>,
    best: Option<Vec<f64>>,
    error: f64,
    bounds: Bounds,
    distribution: Uniform<f64>,
    rng: R,
}

impl<R> RandomGreedy<R>
where
    R: Rng,
{
    /// Start searching from `memory` using the default bounds.
    pub fn new(memory: Vec<f64>, rng: R) -> Self {
        let bounds = Bounds::default();
        Self {
            current: memory,
            best: None,
            error: f64::MAX,
            bounds,
            distribution: Uniform::new_inclusive(bounds.min, bounds.max),
            rng,
        }
    }

    /// Start searching from `memory`, drawing new candidates from `bounds`.
    pub fn with_bounds(memory: Vec<f64>, rng: R, bounds: Bounds) -> Result<Self> {
        bounds.validate()?;
        Ok(Self {
            bounds,
            distribution: Uniform::new_inclusive(bounds.min, bounds.max),
            ..Self::new(memory, rng)
        })
    }

    /// The range candidates are drawn from.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The candidate that will be scored by the next step.
    pub fn current(&self) -> &[f64] {
        &self.current
    }
}

impl<R> Algorithm for RandomGreedy<R>
where
    R: Rng,
{
    fn next(&mut self, evaluator: &mut Evaluator<'_>) -> Result<&[f64]> {
        let error = evaluator(&self.current)?;
        let fresh = self
            .distribution
            .sample_iter(&mut self.rng)
            .take(self.current.len())
            .collect();
        let scored = std::mem::replace(&mut self.current, fresh);
        if error < self.error {
            self.error = error;
            self.best = Some(scored);
        }
        Ok(&self.current)
    }

    fn best_memory(&self) -> Option<&[f64]> {
        self.best.as_deref()
    }

    fn best_error(&self) -> f64 {
        self.error
    }
}
