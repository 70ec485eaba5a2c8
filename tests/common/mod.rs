#![allow(dead_code)]

use std::cell::Cell;

use rbfopt::{
    training::{Algorithm, Evaluator, Trainee},
    Error, Result,
};

/// Echoes its input and counts how often it is used.
#[derive(Debug, Default)]
pub struct CountingTrainee {
    pub memory: Vec<f64>,
    pub calculations: Cell<usize>,
    pub memory_writes: usize,
}

impl CountingTrainee {
    pub fn new(memory: Vec<f64>) -> Self {
        Self {
            memory,
            ..Self::default()
        }
    }
}

impl Trainee for CountingTrainee {
    fn calculate(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.calculations.set(self.calculations.get() + 1);
        Ok(input.to_vec())
    }

    fn memory_size(&self) -> usize {
        self.memory.len()
    }

    fn memory(&self) -> Vec<f64> {
        self.memory.clone()
    }

    fn set_memory(&mut self, memory: &[f64]) -> Result<()> {
        if memory.len() != self.memory.len() {
            return Err(Error::MemoryLengthMismatch {
                expected: self.memory.len(),
                actual: memory.len(),
            });
        }
        self.memory_writes += 1;
        self.memory.copy_from_slice(memory);
        Ok(())
    }
}

/// Scores its memory once per step without ever changing it.
#[derive(Debug)]
pub struct FixedAlgorithm {
    pub memory: Vec<f64>,
    pub error: f64,
    pub steps: usize,
}

impl FixedAlgorithm {
    pub fn new(memory: Vec<f64>) -> Self {
        Self {
            memory,
            error: f64::MAX,
            steps: 0,
        }
    }
}

impl Algorithm for FixedAlgorithm {
    fn next(&mut self, evaluator: &mut Evaluator<'_>) -> Result<&[f64]> {
        self.steps += 1;
        self.error = evaluator(&self.memory)?;
        Ok(&self.memory)
    }

    fn best_memory(&self) -> Option<&[f64]> {
        Some(&self.memory)
    }

    fn best_error(&self) -> f64 {
        self.error
    }
}

/// Reports a scripted sequence of best errors, repeating the last one forever.
#[derive(Debug)]
pub struct ScriptedAlgorithm {
    pub errors: Vec<f64>,
    pub steps: usize,
    memory: Vec<f64>,
}

impl ScriptedAlgorithm {
    pub fn new(errors: Vec<f64>) -> Self {
        Self {
            errors,
            steps: 0,
            memory: Vec::new(),
        }
    }
}

impl Algorithm for ScriptedAlgorithm {
    fn next(&mut self, evaluator: &mut Evaluator<'_>) -> Result<&[f64]> {
        evaluator(&self.memory)?;
        self.steps += 1;
        Ok(&self.memory)
    }

    fn best_memory(&self) -> Option<&[f64]> {
        Some(&self.memory)
    }

    fn best_error(&self) -> f64 {
        match self.steps.checked_sub(1) {
            Some(i) => self.errors[i.min(self.errors.len() - 1)],
            None => f64::MAX,
        }
    }
}

/// Counts the steps taken by the algorithm it wraps.
#[derive(Debug)]
pub struct CountedAlgorithm<A> {
    pub inner: A,
    pub steps: usize,
}

impl<A> CountedAlgorithm<A> {
    pub fn new(inner: A) -> Self {
        Self { inner, steps: 0 }
    }
}

impl<A: Algorithm> Algorithm for CountedAlgorithm<A> {
    fn next(&mut self, evaluator: &mut Evaluator<'_>) -> Result<&[f64]> {
        self.steps += 1;
        self.inner.next(evaluator)
    }

    fn best_memory(&self) -> Option<&[f64]> {
        self.inner.best_memory()
    }

    fn best_error(&self) -> f64 {
        self.inner.best_error()
    }
}
