//! Black-box training.
//!
//! Anything implementing [`Trainee`] can be trained: the training loop reads and writes the
//! trainee's parameters as one flat vector (its memory) and leaves it to an [`Algorithm`] to decide
//! which memory to try next. The loop ends when any of the given [`Stopper`]s fires.

use log::{debug, info};

use crate::{dataset::Sample, distance::DistanceError, Error, Result};

mod hill_climbing;
mod random_greedy;
mod stopper;

pub use hill_climbing::HillClimbing;
pub use random_greedy::{Bounds, RandomGreedy};
pub use stopper::{
    Signal, StopAfterIterations, StopAtDeadline, StopWhenErrorAbove, StopWhenErrorBelow,
    StopWhenSignaled, Stopper,
};

/// Behaviour of something that can be trained.
///
/// The memory of a trainee is the concatenation of all of its trainable parameters in a fixed
/// order. Writing back what was read must be a no-op. Trainees without trainable parameters can
/// rely on the provided methods, which report an empty memory.
pub trait Trainee {
    /// Compute the output for the given input.
    fn calculate(&self, input: &[f64]) -> Result<Vec<f64>>;

    /// Number of values in the memory.
    fn memory_size(&self) -> usize {
        0
    }

    /// Copy out the memory.
    fn memory(&self) -> Vec<f64> {
        Vec::new()
    }

    /// Overwrite the memory. Fails without changing anything if `memory` has the wrong length.
    fn set_memory(&mut self, memory: &[f64]) -> Result<()> {
        if memory.is_empty() {
            Ok(())
        } else {
            Err(Error::MemoryLengthMismatch {
                expected: 0,
                actual: memory.len(),
            })
        }
    }
}

/// Scores a candidate memory, lower is better.
pub type Evaluator<'a> = dyn FnMut(&[f64]) -> Result<f64> + 'a;

/// A search strategy proposing the next memory to try.
pub trait Algorithm {
    /// Run one step of the search using `evaluator` to score candidates and return the memory the
    /// trainee should hold afterwards.
    fn next(&mut self, evaluator: &mut Evaluator<'_>) -> Result<&[f64]>;

    /// The best memory found so far, if any candidate has been scored.
    fn best_memory(&self) -> Option<&[f64]>;

    /// The error of [`Algorithm::best_memory`], `f64::MAX` until something has been scored.
    fn best_error(&self) -> f64;
}

/// Computes the mean distance between the trainee's outputs and the expected outputs.
pub fn evaluate<T, D>(trainee: &T, samples: &[Sample], distance: &D) -> Result<f64>
where
    T: Trainee + ?Sized,
    D: Fn(&[f64], &[f64]) -> std::result::Result<f64, DistanceError>,
{
    if samples.is_empty() {
        return Err(Error::Configuration(
            "cannot evaluate a trainee without samples".to_string(),
        ));
    }
    let mut total = 0.0;
    for sample in samples {
        let actual = trainee.calculate(&sample.input)?;
        total += distance(&actual, &sample.expected)?;
    }
    Ok(total / samples.len() as f64)
}

/// Trains `trainee` on `samples` until one of the `stoppers` fires and returns the number of
/// iterations that were run.
///
/// Every iteration hands an evaluator to the algorithm. The evaluator loads the candidate memory
/// into the trainee, unless the trainee already holds it, and scores it with [`evaluate`]. The
/// memory returned by the algorithm is then written into the trainee and the stoppers are polled
/// with the algorithm's best error.
///
/// Failures coming out of the loop are wrapped in [`Error::Training`] carrying the number of
/// iterations completed so far.
pub fn complete<T, A, D>(
    trainee: &mut T,
    samples: &[Sample],
    algorithm: &mut A,
    distance: D,
    stoppers: &[&dyn Stopper],
) -> Result<usize>
where
    T: Trainee + ?Sized,
    A: Algorithm + ?Sized,
    D: Fn(&[f64], &[f64]) -> std::result::Result<f64, DistanceError>,
{
    if samples.is_empty() {
        return Err(Error::Configuration(
            "cannot train without samples".to_string(),
        ));
    }
    if stoppers.is_empty() {
        return Err(Error::Configuration(
            "training without a stopper would never end".to_string(),
        ));
    }

    // The memory currently held by the trainee.
    let mut loaded = trainee.memory();
    let mut iterations = 0;
    loop {
        let memory = {
            let mut evaluator = |candidate: &[f64]| -> Result<f64> {
                if candidate != loaded.as_slice() {
                    trainee.set_memory(candidate)?;
                    loaded.clear();
                    loaded.extend_from_slice(candidate);
                }
                evaluate(&*trainee, samples, &distance)
            };
            algorithm
                .next(&mut evaluator)
                .map_err(|err| Error::training(iterations, err))?
        };
        trainee
            .set_memory(memory)
            .map_err(|err| Error::training(iterations, err))?;
        loaded.clear();
        loaded.extend_from_slice(memory);

        iterations += 1;
        let error = algorithm.best_error();
        debug!("iteration {}: best error {}", iterations, error);
        if stoppers.iter().any(|s| s.should_stop(iterations, error)) {
            info!(
                "training stopped after {} iterations with error {}",
                iterations, error
            );
            return Ok(iterations);
        }
    }
}
