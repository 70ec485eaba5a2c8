use log::warn;

use crate::{
    training::{Algorithm, Evaluator},
    Error, Result,
};

/// Coordinate-wise hill climbing with a fixed set of step sizes.
///
/// For every dimension in turn, the climber tries moving by `velocity` times each of
/// `[-acceleration, -1/acceleration, 0, 1/acceleration, acceleration]`, scores every trial and
/// commits the best one (the earliest on ties) before moving on to the next dimension. Later
/// dimensions are therefore tried against the already updated earlier ones.
///
/// There is no separate best-ever snapshot: [`Algorithm::best_memory`] is the current memory and
/// [`Algorithm::best_error`] the error measured at the end of the last sweep. Because staying put
/// is always one of the trials, a sweep cannot end worse than it started for a deterministic
/// evaluator. A sweep that does end worse is counted in [`HillClimbing::regressions`].
#[derive(Debug, Clone)]
pub struct HillClimbing {
    current: Vec<f64>,
    error: f64,
    velocity: f64,
    movements: [f64; 5],
    regressions: usize,
}

impl HillClimbing {
    /// Start climbing from `memory`.
    ///
    /// Fails if `acceleration` is zero or if either parameter is not finite.
    pub fn new(memory: Vec<f64>, velocity: f64, acceleration: f64) -> Result<Self> {
        if !velocity.is_finite() || !acceleration.is_finite() || acceleration == 0.0 {
            return Err(Error::Configuration(format!(
                "hill climbing needs a finite velocity and a finite, non-zero acceleration, got {} and {}",
                velocity, acceleration
            )));
        }
        Ok(Self {
            current: memory,
            error: f64::MAX,
            velocity,
            movements: [
                -acceleration,
                -1.0 / acceleration,
                0.0,
                1.0 / acceleration,
                acceleration,
            ],
            regressions: 0,
        })
    }

    /// Number of sweeps which ended with a higher error than the sweep before them.
    pub fn regressions(&self) -> usize {
        self.regressions
    }
}

impl Algorithm for HillClimbing {
    fn next(&mut self, evaluator: &mut Evaluator<'_>) -> Result<&[f64]> {
        for i in 0..self.current.len() {
            let start = self.current[i];
            let mut best: Option<(usize, f64)> = None;
            for (m, movement) in self.movements.iter().enumerate() {
                self.current[i] = start + self.velocity * movement;
                let error = match evaluator(&self.current) {
                    Ok(error) => error,
                    Err(err) => {
                        self.current[i] = start;
                        return Err(err);
                    }
                };
                if best.map_or(true, |(_, e)| error < e) {
                    best = Some((m, error));
                }
            }
            let m = best.map_or(0, |(m, _)| m);
            self.current[i] = start + self.velocity * self.movements[m];
        }

        let error = evaluator(&self.current)?;
        if self.error < f64::MAX && error > self.error {
            self.regressions += 1;
            warn!(
                "hill climbing sweep raised the error from {} to {}",
                self.error, error
            );
        }
        self.error = error;
        Ok(&self.current)
    }

    fn best_memory(&self) -> Option<&[f64]> {
        Some(&self.current)
    }

    fn best_error(&self) -> f64 {
        self.error
    }
}
